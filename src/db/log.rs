use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an audit line into the `log` table.
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// All audit lines, oldest first.
pub fn entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for entry in rows {
        out.push(entry?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    #[test]
    fn records_and_reads_back_in_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        record(&conn, "user.add", "annl", "created user annl").unwrap();
        record(&conn, "goal.add", "Bike", "created goal for user 1").unwrap();

        let all = entries(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].operation, "user.add");
        assert_eq!(all[0].target, "annl");
        assert_eq!(all[1].operation, "goal.add");
    }
}
