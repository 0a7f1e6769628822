use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecoyError {
    #[error("invalid token length: {0} (must be at least 1)")]
    InvalidLength(usize),

    #[error("character set is empty")]
    EmptyCharset,

    #[error("cannot read {0}: {1}")]
    ReadInput(String, std::io::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecoyError>;
