//! Unified application error type.
//! All modules (db, models, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Insert affected no rows while creating a {0}")]
    NothingInserted(&'static str),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown query key: {0}")]
    UnknownQueryKey(String),
}

pub type AppResult<T> = Result<T, AppError>;
