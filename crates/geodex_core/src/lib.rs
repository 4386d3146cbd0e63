//! Core business logic for the geodex country reference-data service.
//! This crate is the single source of truth for country invariants.

pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;
pub mod validation;

pub use error::{CoreError, CoreResult, ErrorCode};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::country::{Country, COUNTRY_CODE_LEN};
pub use presentation::{error_response, ErrorResponse};
pub use repo::country_repo::{CountryRepository, RepoError, RepoResult, SqliteCountryRepository};
pub use repo::memory::InMemoryCountryRepository;
pub use service::country_service::{CountryObserver, CountryService, LogObserver};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
