use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &Store, db_path: &str) -> AppResult<()> {
    let conn = store.acquire()?;

    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let users: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let goals: i64 = conn.query_row("SELECT COUNT(*) FROM goals", [], |row| row.get(0))?;
    let log_lines: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);
    println!("{}• Goals:{} {}{}{}", CYAN, RESET, GREEN, goals, RESET);
    println!("{}• Log lines:{} {}{}{}", CYAN, RESET, GREEN, log_lines, RESET);

    //
    // 3) TOTAL COST OF ALL GOALS
    //
    let goal_rows = {
        let mut stmt = conn.prepare("SELECT cost FROM goals")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        rows.collect::<Result<Vec<_>, _>>()?
    };
    let total: rust_decimal::Decimal = goal_rows
        .iter()
        .filter_map(|raw| raw.parse::<rust_decimal::Decimal>().ok())
        .sum();

    println!("{}• Total goal cost:{} {}", CYAN, RESET, total);

    println!();
    Ok(())
}
