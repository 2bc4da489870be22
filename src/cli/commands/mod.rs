pub mod db;
pub mod goal;
pub mod init;
pub mod log;
pub mod user;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Parse a decimal amount argument like "1850.00".
pub(crate) fn parse_amount(raw: &str) -> AppResult<Decimal> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
