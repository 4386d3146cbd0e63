//! Core error taxonomy.
//!
//! # Responsibility
//! - Classify every core failure as either business or technical.
//! - Carry a stable classification code for programmatic dispatch.
//!
//! # Invariants
//! - Business errors are recoverable by changing the request.
//! - Technical errors wrap infrastructure failures and keep their cause
//!   reachable via `Error::source`.
//! - No error is retried or swallowed inside the core.

use crate::repo::country_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoreResult<T> = Result<T, CoreError>;

/// Stable classification code attached to every core error.
///
/// The presentation layer dispatches on this code; the set is open-ended on
/// the technical side (`Internal` today) and closed on the business side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Requested entity does not exist.
    NotFound,
    /// Input failed validation or conflicts with stored state.
    InvalidArgument,
    /// Infrastructure failure, not fixable by changing the request.
    Internal,
}

impl ErrorCode {
    /// Returns the stable wire name of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Internal => "INTERNAL",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified core error. Exactly one of two kinds.
#[derive(Debug)]
pub enum CoreError {
    /// Caused by invalid input or a legitimate domain conflict.
    Business { code: ErrorCode, message: String },
    /// Caused by an infrastructure failure in a collaborator.
    Technical {
        code: ErrorCode,
        message: Option<String>,
        source: Option<Box<dyn Error + Send + Sync + 'static>>,
    },
}

impl CoreError {
    /// Business error for a missing entity.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Business {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Business error for rejected input or a domain conflict.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::Business {
            code: ErrorCode::InvalidArgument,
            message: message.into(),
        }
    }

    /// Technical error wrapping an infrastructure cause.
    pub fn technical(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Technical {
            code: ErrorCode::Internal,
            message: Some(message.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Classification code of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Business { code, .. } | Self::Technical { code, .. } => *code,
        }
    }

    /// Returns whether this error is client-recoverable.
    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }

    /// Human-readable message, when one is present.
    ///
    /// Technical errors may carry only a cause; the presentation layer must
    /// not substitute the cause text for a missing message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Business { message, .. } => Some(message.as_str()),
            Self::Technical { message, .. } => message.as_deref(),
        }
    }
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Business { code, message } => write!(f, "[{code}] {message}"),
            Self::Technical {
                code,
                message,
                source,
            } => match (message, source) {
                (Some(message), _) => write!(f, "[{code}] {message}"),
                (None, Some(source)) => write!(f, "[{code}] {source}"),
                (None, None) => write!(f, "[{code}] technical failure"),
            },
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Business { .. } => None,
            Self::Technical { source, .. } => source
                .as_deref()
                .map(|err| err as &(dyn Error + 'static)),
        }
    }
}

impl From<RepoError> for CoreError {
    fn from(value: RepoError) -> Self {
        Self::Technical {
            code: ErrorCode::Internal,
            message: Some("country storage failed".to_string()),
            source: Some(Box::new(value)),
        }
    }
}
