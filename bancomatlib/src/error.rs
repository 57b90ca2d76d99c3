//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BancomatError {
    #[error("invalid amount format: {0:?}")]
    InvalidAmountFormat(String),

    #[error("invalid denomination chain: {0}")]
    InvalidChain(String),

    #[error("amount pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, BancomatError>;
