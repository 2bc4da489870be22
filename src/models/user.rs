use super::read_decimal;
use rusqlite::Row;
use rust_decimal::Decimal;

/// A registered account. Every goal is owned by exactly one user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,               // ⇔ users.id (INTEGER, assigned on insert)
    pub first_name: String,    // ⇔ users.first_name
    pub last_name: String,     // ⇔ users.last_name
    pub username: String,      // ⇔ users.username (TEXT UNIQUE, login name)
    pub password: String,      // ⇔ users.password (TEXT, stored as given)
    pub email: String,         // ⇔ users.email
    pub month_salary: Decimal, // ⇔ users.month_salary (TEXT decimal)
}

/// A user before the database has assigned its id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub month_salary: Decimal,
}

impl User {
    /// Map a row of the `users` table.
    pub(crate) fn map_row(row: &Row) -> rusqlite::Result<Self> {
        Self::map_row_at(row, "")
    }

    /// Map user columns carrying a prefix, as in the joined goal queries
    /// where they are aliased `owner_id`, `owner_first_name`, ...
    pub(crate) fn map_row_at(row: &Row, prefix: &str) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(format!("{prefix}id").as_str())?,
            first_name: row.get(format!("{prefix}first_name").as_str())?,
            last_name: row.get(format!("{prefix}last_name").as_str())?,
            username: row.get(format!("{prefix}username").as_str())?,
            password: row.get(format!("{prefix}password").as_str())?,
            email: row.get(format!("{prefix}email").as_str())?,
            month_salary: read_decimal(row, &format!("{prefix}month_salary"))?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
