pub mod repository;
pub mod schema;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Opens the connection pool, creating the database file when it is missing.
/// Foreign keys are switched on for every connection so child rows cascade.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::Repository;
    use crate::models::user::User;
    use crate::test_support::user;

    #[actix_web::test]
    async fn connect_creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("health_tracker.db");
        let url = format!("sqlite://{}", path.display());

        let pool = connect(&url, 2).await.unwrap();
        schema::init_schema(&pool).await.unwrap();
        assert!(path.exists());

        let users = Repository::<User>::new(pool.clone());
        let saved = users.save(&user("Disk", "disk@x.com")).await.unwrap();
        pool.close().await;

        let reopened = connect(&url, 2).await.unwrap();
        let users = Repository::<User>::new(reopened);
        assert_eq!(users.find_by_id(saved.id).await.unwrap(), Some(saved));
    }
}
