use newslens_core::{ApiError, ApiErrorKind, StorageError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("login required: run `newslens login <key>` first")]
    LoginRequired,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("session storage: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::LoginRequired => 3,
            Self::Api(error) => match error.kind() {
                ApiErrorKind::ClientValidation => 2,
                ApiErrorKind::AuthInvalid => 3,
                ApiErrorKind::NetworkUnreachable => 6,
                _ => 4,
            },
            Self::Serialization(_) => 5,
            Self::Storage(_) => 10,
        }
    }
}
