use serde::{Deserialize, Serialize};

use crate::db::repository::{ChildTable, Column, SqliteQuery, Table};

/// A target a user is working towards. The dates are kept as the client sent them.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub id: i64,
    pub user_id: i64,
    pub goal_type: String,
    pub target: f64,
    pub unit: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Table for Goal {
    const NAME: &'static str = "goals";
    const COLUMNS: &'static [Column] = &[
        Column::new("user_id", "INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE"),
        Column::new("goal_type", "TEXT NOT NULL DEFAULT ''"),
        Column::new("target", "REAL NOT NULL DEFAULT 0"),
        Column::new("unit", "TEXT NOT NULL DEFAULT ''"),
        Column::new("start_date", "TEXT"),
        Column::new("end_date", "TEXT"),
    ];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.user_id)
            .bind(self.goal_type.as_str())
            .bind(self.target)
            .bind(self.unit.as_str())
            .bind(self.start_date.as_deref())
            .bind(self.end_date.as_deref())
    }

    fn with_id(self, id: i64) -> Self {
        Goal { id, ..self }
    }
}

impl ChildTable for Goal {
    const PARENT_COLUMN: &'static str = "user_id";
}
