// src/cli/error.rs
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;
use crate::exitcode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            CliError::CommandFailed(msg) => {
                CliError::CommandFailed(format!("{}: {}", context.into(), msg))
            }
            CliError::InvalidInput(msg) => {
                CliError::InvalidInput(format!("{}: {}", context.into(), msg))
            }
            CliError::Application(err) => CliError::Application(err.context(context)),
            CliError::Io(err) => CliError::Io(io::Error::new(
                err.kind(),
                format!("{}: {}", context.into(), err),
            )),
            CliError::Other(msg) => CliError::Other(format!("{}: {}", context.into(), msg)),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(ApplicationError::FetchExhausted { .. }) => exitcode::UNAVAILABLE,
            CliError::Application(ApplicationError::Domain(
                DomainError::NoBookmarkData | DomainError::MalformedGraph(_),
            )) => exitcode::DATAERR,
            CliError::Io(_) => exitcode::IOERR,
            _ => exitcode::USAGE,
        }
    }

    /// Hint printed below the error, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::Application(ApplicationError::FetchExhausted { .. }) => Some(
                "Save the sharing page from your browser and run `arcmark convert <FILE>` instead.",
            ),
            CliError::Application(err) if err.is_no_bookmark_data() => {
                Some("Make sure the input is the full HTML of an Arc sharing page.")
            }
            _ => None,
        }
    }
}

// Direct conversion from DomainError to CliError (via ApplicationError)
impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(err))
    }
}

pub type CliResult<T> = Result<T, CliError>;
