//! Crate-level error type.

use thiserror::Error;

use crate::config::ValidationError;
use crate::net::ListenerError;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("invalid configuration: {}", join(.0))]
    Config(Vec<ValidationError>),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Vec<ValidationError>> for ServeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ServeError::Config(errors)
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
