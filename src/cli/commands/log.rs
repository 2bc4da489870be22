use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, WHITE, YELLOW};

/// ANSI color for an operation name
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "user.add" | "goal.add" => GREEN,
        "user.del" | "goal.del" => RED,
        "user.set" | "goal.set" => YELLOW,
        "init" => CYAN,
        _ => WHITE,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = Store::open(cfg)?;
        let conn = store.acquire()?;
        let entries = log::entries(&conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len())
            .max()
            .unwrap_or(8);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);
            let target = if e.target.is_empty() {
                String::new()
            } else {
                format!(" ({})", e.target)
            };

            println!(
                "{:>id_w$}: {GREY}{:<date_w$}{RESET} | {color}{:<op_w$}{RESET}{} => {}",
                e.id, e.date, e.operation, target, e.message,
            );
        }
    }

    Ok(())
}
