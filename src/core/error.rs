use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BeingError>;
