use super::user::User;
use super::{read_decimal, read_timestamp};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;

/// Something a user wants to reach or buy, with its estimated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i64,                  // ⇔ goals.id (INTEGER, assigned on insert)
    pub title: String,            // ⇔ goals.title
    pub cost: Decimal,            // ⇔ goals.cost (TEXT decimal)
    pub summary: String,          // ⇔ goals.summary
    pub posted_at: DateTime<Utc>, // ⇔ goals.posted_at (TEXT, RFC 3339)
    pub description: String,      // ⇔ goals.description
    pub owner: User,              // ⇔ goals.user_id (FK, joined on read)
}

/// A goal before the database has assigned its id.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub cost: Decimal,
    pub summary: String,
    pub posted_at: DateTime<Utc>,
    pub description: String,
    pub owner: User,
}

impl NewGoal {
    /// Build a draft stamped with the current time as publication date.
    pub fn new(
        title: String,
        cost: Decimal,
        summary: String,
        description: String,
        owner: User,
    ) -> Self {
        Self {
            title,
            cost,
            summary,
            posted_at: Utc::now(),
            description,
            owner,
        }
    }
}

impl Goal {
    /// Map a joined goal row (goal columns plus `owner_`-aliased user columns).
    pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Self> {
        let owner = User::map_row_at(row, "owner_")?;
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            cost: read_decimal(row, "cost")?,
            summary: row.get("summary")?,
            posted_at: read_timestamp(row, "posted_at")?,
            description: row.get("description")?,
            owner,
        })
    }
}
