use serde::{Deserialize, Serialize};

use crate::db::repository::{Column, SqliteQuery, Table};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Table for User {
    const NAME: &'static str = "users";
    const COLUMNS: &'static [Column] = &[
        Column::new("name", "TEXT NOT NULL DEFAULT ''"),
        Column::new("email", "TEXT NOT NULL DEFAULT ''"),
    ];

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.as_str()).bind(self.email.as_str())
    }

    fn with_id(self, id: i64) -> Self {
        User { id, ..self }
    }
}
