use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::repository::{ChildTable, Column, SqliteQuery, Table};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default)]
    pub id: i64,
    pub description: String,
    pub duration: f64,
    pub started: DateTime<Utc>,
    pub calories: i32,
    pub user_id: i64,
}

impl Table for Activity {
    const NAME: &'static str = "activities";
    const COLUMNS: &'static [Column] = &[
        Column::new("description", "TEXT NOT NULL DEFAULT ''"),
        Column::new("duration", "REAL NOT NULL DEFAULT 0"),
        Column::new("started", "DATETIME NOT NULL"),
        Column::new("calories", "INTEGER NOT NULL DEFAULT 0"),
        Column::new("user_id", "INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE"),
    ];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.description.as_str())
            .bind(self.duration)
            .bind(self.started)
            .bind(self.calories)
            .bind(self.user_id)
    }

    fn with_id(self, id: i64) -> Self {
        Activity { id, ..self }
    }
}

impl ChildTable for Activity {
    const PARENT_COLUMN: &'static str = "user_id";
}
