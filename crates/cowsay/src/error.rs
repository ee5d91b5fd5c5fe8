use thiserror::Error;

#[derive(Debug, Error)]
pub enum CowError {
    #[error("{name}: unterminated block: {marker}")]
    UnterminatedBlock { name: String, marker: String },
    #[error("unknown mode: {0:?}")]
    UnknownMode(char),
    #[error("cow not found: {0}")]
    CowNotFound(String),
    #[error("archive error: {0}")]
    Archive(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CowError>;
