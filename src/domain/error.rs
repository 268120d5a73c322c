// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No bookmark data found in HTML content")]
    NoBookmarkData,

    #[error("Malformed bookmark graph: {0}")]
    MalformedGraph(String),

    #[error("Invalid share URL: {0}")]
    InvalidShareUrl(String),

    #[error("Retrieval failed: {0}")]
    Retrieval(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Invalid render options: {0}")]
    RenderOptions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl DomainError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::MalformedGraph(msg) => {
                DomainError::MalformedGraph(format!("{}: {}", context.into(), msg))
            }
            DomainError::Retrieval(msg) => {
                DomainError::Retrieval(format!("{}: {}", context.into(), msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
