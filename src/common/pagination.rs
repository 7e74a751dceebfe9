// src/common/pagination.rs
//! Keyset pagination shared by every list endpoint.
//!
//! A page is every row whose primary key is strictly greater than the
//! client's `pointerId`, ascending, capped at `limit`. Keys come from
//! `AUTOINCREMENT` columns so they only ever grow and are never reused;
//! a cursor naming a deleted row is still a valid lower bound.

use serde::Deserialize;
use sqlx::{sqlite::SqliteRow, FromRow, SqlitePool};

use super::error::ApiError;
use super::validation::ValidationResult;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Raw `?pointerId=&limit=` query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub pointer_id: Option<i64>,
    pub limit: Option<i64>,
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub after: Option<i64>,
    pub limit: i64,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            after: None,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageParams {
    pub fn into_cursor(self) -> Result<Cursor, ApiError> {
        let mut result = ValidationResult::new();

        if let Some(pointer_id) = self.pointer_id {
            if pointer_id < 1 {
                result.add_error("pointerId", "must be a positive id");
            }
        }

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            result.add_error("limit", "must be between 1 and 100");
        }

        result.into_result()?;

        Ok(Cursor {
            after: self.pointer_id,
            limit,
        })
    }
}

/// Runs `select` (a `SELECT ... FROM table` with no trailing clauses) as one
/// keyset page over the table's `id` column.
pub async fn fetch_page<T>(db: &SqlitePool, select: &str, cursor: Cursor) -> Result<Vec<T>, ApiError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!("{} WHERE id > ? ORDER BY id ASC LIMIT ?", select);

    let rows = sqlx::query_as::<_, T>(&sql)
        .bind(cursor.after.unwrap_or(0))
        .bind(cursor.limit)
        .fetch_all(db)
        .await?;

    Ok(rows)
}
