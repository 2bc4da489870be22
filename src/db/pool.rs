//! Pooled SQLite connections for the DAO layer.

use crate::errors::AppResult;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type PooledConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Build a connection pool for the database at `path`.
/// Every connection enforces foreign keys and waits briefly instead of
/// failing when another writer holds the database lock.
pub fn build(path: &str, max_connections: u32) -> AppResult<DbPool> {
    let manager = SqliteConnectionManager::file(path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = Pool::builder().max_size(max_connections).build(manager)?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_db(name: &str) -> String {
        let path = env::temp_dir().join(format!("{name}_goalbook_pool.sqlite"));
        let _ = fs::remove_file(&path);
        path.to_string_lossy().to_string()
    }

    #[test]
    fn pool_hands_out_connections_up_to_max() {
        let pool = build(&temp_db("max"), 2).unwrap();
        let a = pool.get().unwrap();
        let b = pool.get().unwrap();
        assert_eq!(pool.state().connections, 2);
        drop(a);
        drop(b);
    }

    #[test]
    fn connections_enforce_foreign_keys() {
        let pool = build(&temp_db("fk"), 1).unwrap();
        let conn = pool.get().unwrap();
        let on: i64 = conn
            .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(on, 1);
    }

    #[test]
    fn returned_connection_is_reusable() {
        let pool = build(&temp_db("reuse"), 1).unwrap();
        {
            let conn = pool.get().unwrap();
            conn.execute_batch("CREATE TABLE t (x INTEGER);").unwrap();
        }
        let conn = pool.get().unwrap();
        conn.execute("INSERT INTO t (x) VALUES (1)", []).unwrap();
    }
}
