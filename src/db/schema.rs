use log::{info, warn};
use sqlx::sqlite::SqlitePool;

use crate::db::repository::Table;
use crate::models::{activity::Activity, goal::Goal, measurement::Measurement, user::User};

/// Creates any missing tables and columns. Existing columns are never altered.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    ensure_table::<User>(pool).await?;
    ensure_table::<Activity>(pool).await?;
    ensure_table::<Goal>(pool).await?;
    ensure_table::<Measurement>(pool).await?;
    Ok(())
}

async fn ensure_table<T: Table>(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(&T::create_table_sql()).execute(pool).await?;

    let existing: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
        .bind(T::NAME)
        .fetch_all(pool)
        .await?;

    for column in T::COLUMNS {
        if existing.iter().any(|name| name == column.name) {
            continue;
        }
        let sql = format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            T::NAME,
            column.name,
            column.definition
        );
        // SQLite refuses some additions, e.g. NOT NULL without a default.
        match sqlx::query(&sql).execute(pool).await {
            Ok(_) => info!("Added column {}.{}", T::NAME, column.name),
            Err(err) => warn!("Could not add column {}.{}: {}", T::NAME, column.name, err),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::Repository;
    use crate::test_support::{empty_pool, user};

    async fn columns_of(pool: &SqlitePool, table: &str) -> Vec<String> {
        sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
            .bind(table)
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[actix_web::test]
    async fn creates_all_tables() {
        let pool = empty_pool().await;
        init_schema(&pool).await.unwrap();

        assert_eq!(columns_of(&pool, "users").await, ["id", "name", "email"]);
        assert_eq!(
            columns_of(&pool, "goals").await,
            ["id", "user_id", "goal_type", "target", "unit", "start_date", "end_date"]
        );
        assert_eq!(columns_of(&pool, "activities").await.len(), 6);
        assert_eq!(columns_of(&pool, "measurements").await.len(), 6);
    }

    #[actix_web::test]
    async fn is_idempotent_and_keeps_rows() {
        let pool = empty_pool().await;
        init_schema(&pool).await.unwrap();
        let users = Repository::<User>::new(pool.clone());
        users.save(&user("A", "a@x.com")).await.unwrap();

        init_schema(&pool).await.unwrap();
        assert_eq!(users.get_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn adds_missing_columns() {
        let pool = empty_pool().await;
        sqlx::query("CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO users (name) VALUES ('Legacy')")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();

        assert_eq!(columns_of(&pool, "users").await, ["id", "name", "email"]);
        let users = Repository::<User>::new(pool);
        let legacy = users.get_all().await.unwrap();
        assert_eq!(legacy[0].email, "");
    }
}
