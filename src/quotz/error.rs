use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotzError {
    #[error("Invalid quote: {0}")]
    Validation(String),

    #[error("Could not parse quotes: {0}")]
    Parse(String),

    #[error("Feed request failed: {0}")]
    Fetch(String),

    #[error("Store error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuotzError>;
