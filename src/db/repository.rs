use log::debug;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::{FromRow, Sqlite};
use std::marker::PhantomData;

use crate::models::user::User;

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A non-id column and the SQL used to declare it.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub definition: &'static str,
}

impl Column {
    pub const fn new(name: &'static str, definition: &'static str) -> Self {
        Column { name, definition }
    }
}

/// Schema and row binding for a record stored in its own table.
///
/// Every table has an `id INTEGER PRIMARY KEY` assigned by the store; `COLUMNS`
/// lists the remaining columns in the order `bind_columns` binds them.
pub trait Table: for<'r> FromRow<'r, SqliteRow> + Clone + Send + Unpin + 'static {
    const NAME: &'static str;
    const COLUMNS: &'static [Column];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn with_id(self, id: i64) -> Self;

    fn create_table_sql() -> String {
        let columns = Self::COLUMNS
            .iter()
            .map(|column| format!("{} {}", column.name, column.definition))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY AUTOINCREMENT, {})",
            Self::NAME,
            columns
        )
    }
}

/// A table whose rows belong to a user.
pub trait ChildTable: Table {
    const PARENT_COLUMN: &'static str;
}

fn select_columns<T: Table>() -> String {
    let mut names = vec!["id"];
    names.extend(T::COLUMNS.iter().map(|column| column.name));
    names.join(", ")
}

fn select_sql<T: Table>(filter: &str) -> String {
    format!(
        "SELECT {} FROM {} {} ORDER BY id",
        select_columns::<T>(),
        T::NAME,
        filter
    )
}

/// CRUD access to one table. Each operation runs in its own transaction,
/// which rolls back if it is dropped before the commit.
pub struct Repository<T> {
    pool: SqlitePool,
    table: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Repository {
            pool: self.pool.clone(),
            table: PhantomData,
        }
    }
}

impl<T: Table> Repository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Repository {
            pool,
            table: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<T>, sqlx::Error> {
        let sql = select_sql::<T>("");
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&mut *tx).await?;
        tx.commit().await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<T>, sqlx::Error> {
        let sql = select_sql::<T>("WHERE id = ?");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Inserts `row` with a store-assigned id and returns the persisted row.
    pub async fn save(&self, row: &T) -> Result<T, sqlx::Error> {
        let names = T::COLUMNS
            .iter()
            .map(|column| column.name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
        let insert = format!("INSERT INTO {} ({}) VALUES ({})", T::NAME, names, placeholders);
        let select = select_sql::<T>("WHERE id = ?");

        let mut tx = self.pool.begin().await?;
        let id = row
            .bind_columns(sqlx::query(&insert))
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        let saved = sqlx::query_as::<_, T>(&select)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        debug!("Inserted row {} into {}", id, T::NAME);
        Ok(saved)
    }

    /// Replaces every non-id column of the row matching `id`.
    pub async fn update_by_id(&self, id: i64, row: &T) -> Result<u64, sqlx::Error> {
        let assignments = T::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column.name))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {} WHERE id = ?", T::NAME, assignments);

        let mut tx = self.pool.begin().await?;
        let affected = row
            .bind_columns(sqlx::query(&sql))
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        debug!("Updated {} row(s) in {} for id {}", affected, T::NAME, id);
        Ok(affected)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE id = ?", T::NAME);
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        debug!("Deleted {} row(s) from {} for id {}", affected, T::NAME, id);
        Ok(affected)
    }
}

impl<T: ChildTable> Repository<T> {
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<T>, sqlx::Error> {
        let sql = select_sql::<T>(&format!("WHERE {} = ?", T::PARENT_COLUMN));
        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(rows)
    }

    pub async fn delete_by_user_id(&self, user_id: i64) -> Result<u64, sqlx::Error> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", T::NAME, T::PARENT_COLUMN);
        let mut tx = self.pool.begin().await?;
        let affected = sqlx::query(&sql)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        debug!("Deleted {} row(s) from {} for user {}", affected, T::NAME, user_id);
        Ok(affected)
    }
}

impl Repository<User> {
    /// First user, by id, whose email matches exactly.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("{} LIMIT 1", select_sql::<User>("WHERE email = ?"));
        let mut tx = self.pool.begin().await?;
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(user)
    }
}
