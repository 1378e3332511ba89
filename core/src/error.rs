use std::fmt;
use thiserror::Error;

/// The error type for blobgrant operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    response: Option<ErrorResponse>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A resource group is required but none was supplied or configured
    MissingResourceGroup,

    /// Caller-supplied options cannot be turned into a usable request
    InvalidArgument,

    /// The grant response carried no async operation URL
    OperationNotFound,

    /// The operation result carried no signed access URL
    SignedUrlNotFound,

    /// Network, TLS, or HTTP-level failure in the underlying transport
    Transport,

    /// Unexpected errors (malformed requests, I/O, etc.)
    Unexpected,
}

/// The HTTP response that triggered an error.
///
/// Carried so callers can tell an expected absence (e.g. disk not found)
/// from a malformed response.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Status code of the triggering response.
    pub status: http::StatusCode,
    /// Raw response body, lossily decoded.
    pub body: String,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            response: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP response that triggered this error
    pub fn with_response(mut self, status: http::StatusCode, body: impl Into<String>) -> Self {
        self.response = Some(ErrorResponse {
            status,
            body: body.into(),
        });
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the HTTP response attached to this error, if any
    pub fn response(&self) -> Option<&ErrorResponse> {
        self.response.as_ref()
    }
}

// Convenience constructors
impl Error {
    /// Create a missing resource group error
    pub fn missing_resource_group(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingResourceGroup, message)
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create an operation not found error
    pub fn operation_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OperationNotFound, message)
    }

    /// Create a signed url not found error
    pub fn signed_url_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SignedUrlNotFound, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingResourceGroup => write!(f, "missing resource group"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::OperationNotFound => write!(f, "operation not found"),
            ErrorKind::SignedUrlNotFound => write!(f, "signed url not found"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
