use serde::{Deserialize, Serialize};

use crate::db::repository::{ChildTable, Column, SqliteQuery, Table};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    #[serde(default)]
    pub id: i64,
    pub measurement_type: String,
    pub value: f64,
    pub unit: String,
    // Opaque, never parsed as a date.
    pub recorded_at: String,
    pub user_id: i64,
}

impl Table for Measurement {
    const NAME: &'static str = "measurements";
    const COLUMNS: &'static [Column] = &[
        Column::new("measurement_type", "TEXT NOT NULL DEFAULT ''"),
        Column::new("value", "REAL NOT NULL DEFAULT 0"),
        Column::new("unit", "TEXT NOT NULL DEFAULT ''"),
        Column::new("recorded_at", "TEXT NOT NULL DEFAULT ''"),
        Column::new("user_id", "INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE"),
    ];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.measurement_type.as_str())
            .bind(self.value)
            .bind(self.unit.as_str())
            .bind(self.recorded_at.as_str())
            .bind(self.user_id)
    }

    fn with_id(self, id: i64) -> Self {
        Measurement { id, ..self }
    }
}

impl ChildTable for Measurement {
    const PARENT_COLUMN: &'static str = "user_id";
}
