//! Entity models persisted by the DAO layer.

pub mod goal;
pub mod user;

pub use goal::{Goal, NewGoal};
pub use user::{NewUser, User};

use crate::errors::AppError;
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rusqlite::types::Type;
use rust_decimal::Decimal;

/// Read a TEXT column holding a decimal amount.
pub(crate) fn read_decimal(row: &Row, col: &str) -> rusqlite::Result<Decimal> {
    let raw: String = row.get(col)?;
    raw.parse::<Decimal>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidAmount(raw)),
        )
    })
}

/// Read a TEXT column holding an RFC 3339 timestamp.
pub(crate) fn read_timestamp(row: &Row, col: &str) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(col)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                Type::Text,
                Box::new(AppError::InvalidDate(raw)),
            )
        })
}
