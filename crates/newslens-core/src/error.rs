use thiserror::Error;

/// Client-side validation failures. These are raised before any network call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("search query cannot be empty")]
    EmptySearchQuery,
    #[error("API key contains non-ASCII characters; check the login credentials")]
    InvalidCredentialCharacters,
    #[error("article id list cannot be empty")]
    EmptyArticleIds,
    #[error("invalid base url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Coarse classification of [`ApiError`], one entry per user-facing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    AuthInvalid,
    NotFound,
    BadRequest,
    ServerError,
    UnmappedHttpStatus,
    NetworkUnreachable,
    RequestConstructionFailure,
    ClientValidation,
    Decode,
}

/// Normalized error returned by every API call.
///
/// The `Display` output is the message a caller shows to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key invalid or missing")]
    AuthInvalid,

    #[error("resource not found")]
    NotFound,

    #[error("{message}")]
    BadRequest { message: String },

    #[error("server error, please retry later")]
    Server,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("connection failed, check your network")]
    Network,

    #[error("{message}")]
    Request { message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) const DEFAULT_BAD_REQUEST: &'static str = "invalid request parameters";
    pub(crate) const DEFAULT_REQUEST_FAILURE: &'static str = "unknown error";

    pub fn bad_request(message: Option<String>) -> Self {
        Self::BadRequest {
            message: message.unwrap_or_else(|| String::from(Self::DEFAULT_BAD_REQUEST)),
        }
    }

    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.unwrap_or_else(|| format!("request failed (status {status})")),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::Request {
                message: String::from(Self::DEFAULT_REQUEST_FAILURE),
            };
        }
        Self::Request { message }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        match self {
            Self::AuthInvalid => ApiErrorKind::AuthInvalid,
            Self::NotFound => ApiErrorKind::NotFound,
            Self::BadRequest { .. } => ApiErrorKind::BadRequest,
            Self::Server => ApiErrorKind::ServerError,
            Self::Status { .. } => ApiErrorKind::UnmappedHttpStatus,
            Self::Network => ApiErrorKind::NetworkUnreachable,
            Self::Request { .. } => ApiErrorKind::RequestConstructionFailure,
            Self::Validation(_) => ApiErrorKind::ClientValidation,
            Self::Decode(_) => ApiErrorKind::Decode,
        }
    }

    /// HTTP status of the failed exchange, when the server answered.
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::AuthInvalid => Some(401),
            Self::NotFound => Some(404),
            Self::BadRequest { .. } => Some(400),
            Self::Server => Some(500),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Durable credential storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
}
