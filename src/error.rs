use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid parameters: {0}")]
    Params(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RankError>;
