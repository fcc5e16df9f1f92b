//! Error types for the payment service.
//!
//! The store is the only thing that can fail once a request is read, so the
//! repository layer carries a single kind: the store's own error text, passed
//! through untouched.

/// Repository-level errors (data access failures).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Store(String),
}

impl RepoError {
    /// Wraps any displayable driver error.
    pub fn store(err: impl std::fmt::Display) -> Self {
        RepoError::Store(err.to_string())
    }
}

/// Application-level errors (for HTTP responses).
///
/// Messages are surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Store failure (HTTP 500)
    #[error("{0}")]
    Store(String),
    /// Request body could not be read (HTTP 400)
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Store(msg) => AppError::Store(msg),
        }
    }
}
