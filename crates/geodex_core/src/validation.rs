//! Precondition checks for country input.
//!
//! # Responsibility
//! - Provide pure, order-independent shape checks used before any write or
//!   code-keyed lookup.
//!
//! # Invariants
//! - Checks have no side effects and never touch the repository.
//! - For one call site, presence checks run before length checks so failure
//!   messages are deterministic.

use crate::error::{CoreError, CoreResult};
use crate::model::country::{Country, COUNTRY_CODE_LEN};

/// Fails with `INVALID_ARGUMENT` when `value` is empty or whitespace-only.
///
/// Absence has no dedicated representation at this boundary; a blank string
/// is treated as a missing value.
pub fn require_non_blank(value: &str, message: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid_argument(message));
    }
    Ok(())
}

/// Fails with `INVALID_ARGUMENT` when `value` is not exactly `len` characters.
///
/// Length is counted in characters, not bytes, so multi-byte codes are
/// rejected by count rather than by encoding accidents.
pub fn require_exact_length(value: &str, len: usize, message: &str) -> CoreResult<()> {
    if value.chars().count() != len {
        return Err(CoreError::invalid_argument(message));
    }
    Ok(())
}

/// Validates a country short code: non-blank, then exactly 3 characters.
pub fn validate_code(code: &str) -> CoreResult<()> {
    require_non_blank(code, "country short name must not be null")?;
    require_exact_length(
        code,
        COUNTRY_CODE_LEN,
        "country short name must have 3 characters",
    )
}

/// Validates a full country record before a write.
///
/// Check order is fixed: code presence, code length, name presence.
pub fn validate_country(country: &Country) -> CoreResult<()> {
    validate_code(&country.code)?;
    require_non_blank(&country.name, "country name must not be null")
}

#[cfg(test)]
mod tests {
    use super::{require_exact_length, require_non_blank, validate_code, validate_country};
    use crate::error::ErrorCode;
    use crate::model::country::Country;

    #[test]
    fn require_non_blank_rejects_empty_and_whitespace() {
        assert!(require_non_blank("GER", "must not be null").is_ok());
        let err = require_non_blank("", "must not be null").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(require_non_blank("   ", "must not be null").is_err());
    }

    #[test]
    fn require_exact_length_counts_characters_not_bytes() {
        assert!(require_exact_length("GER", 3, "must have 3 characters").is_ok());
        assert!(require_exact_length("GE", 3, "must have 3 characters").is_err());
        assert!(require_exact_length("GERM", 3, "must have 3 characters").is_err());
        // 3 characters, 6 bytes.
        assert!(require_exact_length("äöü", 3, "must have 3 characters").is_ok());
    }

    #[test]
    fn validate_code_reports_presence_before_length() {
        let err = validate_code("").unwrap_err();
        assert_eq!(
            err.message(),
            Some("country short name must not be null")
        );

        let err = validate_code("ZZ").unwrap_err();
        assert_eq!(
            err.message(),
            Some("country short name must have 3 characters")
        );
    }

    #[test]
    fn validate_country_checks_code_then_name() {
        assert!(validate_country(&Country::new("GER", "Germany")).is_ok());

        let err = validate_country(&Country::new("GER", " ")).unwrap_err();
        assert_eq!(err.message(), Some("country name must not be null"));

        let err = validate_country(&Country::new("", "")).unwrap_err();
        assert_eq!(
            err.message(),
            Some("country short name must not be null")
        );
    }
}
