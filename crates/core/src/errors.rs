use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Malformed reservation data: {0}")]
    Malformed(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type BoardResult<T> = Result<T, BoardError>;
