use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::db::schema::init_schema;
use crate::models::{activity::Activity, goal::Goal, measurement::Measurement, user::User};

/// A private in-memory database without any tables. One connection, kept
/// alive for the pool's lifetime, so every query sees the same database.
pub async fn empty_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

pub async fn memory_pool() -> SqlitePool {
    let pool = empty_pool().await;
    init_schema(&pool).await.unwrap();
    pool
}

pub fn user(name: &str, email: &str) -> User {
    User {
        id: 0,
        name: name.to_string(),
        email: email.to_string(),
    }
}

pub fn activity(description: &str, user_id: i64, started: &str) -> Activity {
    Activity {
        id: 0,
        description: description.to_string(),
        duration: 30.0,
        started: DateTime::parse_from_rfc3339(started).unwrap().with_timezone(&Utc),
        calories: 300,
        user_id,
    }
}

pub fn goal(goal_type: &str, user_id: i64) -> Goal {
    Goal {
        id: 0,
        user_id,
        goal_type: goal_type.to_string(),
        target: 85.0,
        unit: "kg".to_string(),
        start_date: Some("2025-01-01".to_string()),
        end_date: Some("2025-06-01".to_string()),
    }
}

pub fn measurement(measurement_type: &str, value: f64, user_id: i64) -> Measurement {
    Measurement {
        id: 0,
        measurement_type: measurement_type.to_string(),
        value,
        unit: "kg".to_string(),
        recorded_at: "2025-05-25T07:30:00.000Z".to_string(),
        user_id,
    }
}

/// Builds the full application over `pool`, the same way `main` does.
macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .configure(|cfg| crate::routes::Repositories::new($pool.clone()).register(cfg))
                .configure(crate::routes::configure)
                .default_service(actix_web::web::to(crate::routes::not_found)),
        )
        .await
    };
}

pub(crate) use init_app;
