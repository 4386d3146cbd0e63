//! Error-to-response dispatch for presentation layers.
//!
//! # Responsibility
//! - Translate classified core errors into transport-agnostic responses.
//!
//! # Invariants
//! - Dispatch is keyed by classification code, never by message content.
//! - Technical failure bodies carry the error message only; cause details
//!   never reach a response body.

use crate::error::{CoreError, ErrorCode};

/// Transport-agnostic failure response.
///
/// `status` follows HTTP numbering because every consumer so far speaks it,
/// but nothing here depends on an HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: String,
}

/// Maps a core error to its presentation response.
///
/// Business `NOT_FOUND` becomes 404, business `INVALID_ARGUMENT` becomes 400,
/// both echoing the message. Everything else, including any technical error,
/// becomes a generic 500.
pub fn error_response(error: &CoreError) -> ErrorResponse {
    let (status, body) = match (error.is_business(), error.code()) {
        (true, ErrorCode::NotFound) => (404, error.message().unwrap_or_default().to_string()),
        (true, ErrorCode::InvalidArgument) => {
            (400, error.message().unwrap_or_default().to_string())
        }
        _ => (500, error.message().unwrap_or_default().to_string()),
    };
    ErrorResponse { status, body }
}

#[cfg(test)]
mod tests {
    use super::error_response;
    use crate::error::CoreError;

    #[test]
    fn not_found_maps_to_404_with_message() {
        let response = error_response(&CoreError::not_found(
            "country with short name ZZZ is not existing",
        ));
        assert_eq!(response.status, 404);
        assert_eq!(response.body, "country with short name ZZZ is not existing");
    }

    #[test]
    fn invalid_argument_maps_to_400_with_message() {
        let response = error_response(&CoreError::invalid_argument(
            "country short name must have 3 characters",
        ));
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "country short name must have 3 characters");
    }

    #[test]
    fn technical_maps_to_500_without_cause_details() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "connection refused to db-7");
        let response = error_response(&CoreError::technical("country storage failed", cause));
        assert_eq!(response.status, 500);
        assert_eq!(response.body, "country storage failed");
        assert!(!response.body.contains("db-7"));
    }
}
