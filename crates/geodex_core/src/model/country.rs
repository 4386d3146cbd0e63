//! Country entity model.
//!
//! # Responsibility
//! - Define the canonical country record shared by all core layers.
//!
//! # Invariants
//! - `code` is the identity key: exactly 3 characters, compared exact-case.
//! - `code` is immutable once a country is stored.
//! - `name` is a required display name; two submissions of the same code are
//!   considered the same country when their names match case-insensitively.

use serde::{Deserialize, Serialize};

/// Required length of a country short code, in characters.
pub const COUNTRY_CODE_LEN: usize = 3;

/// Canonical country record.
///
/// The short code is the only identity field. There is no surrogate key;
/// reference data carries its natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// 3-character short code, e.g. `"GER"`. Case-sensitive identity.
    pub code: String,
    /// Human-readable display name, e.g. `"Germany"`.
    pub name: String,
}

impl Country {
    /// Creates a country record from a short code and display name.
    ///
    /// Shape validation (length, non-blank) is not performed here; it happens
    /// in `validation` before any write or code-keyed lookup.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Returns whether `other_name` names the same country as this record.
    ///
    /// Name comparison is case-insensitive; resubmitting a stored country
    /// with a differently-cased name is not a conflict.
    pub fn name_matches(&self, other_name: &str) -> bool {
        // Full case folding, not ASCII-only: display names are not ASCII-clean.
        self.name.to_lowercase() == other_name.to_lowercase()
    }
}
