//! In-memory country repository.
//!
//! # Responsibility
//! - Provide process-local storage for tests, smoke tooling and embedders
//!   that do not need durability.
//!
//! # Invariants
//! - The code-keyed map guarantees at most one entry per short code.
//! - Map operations run under one mutex, so lookup-then-insert races cannot
//!   split between callers holding the same repository.

use crate::model::country::Country;
use crate::repo::country_repo::{CountryRepository, RepoError, RepoResult};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Mutex-guarded map keyed by exact-case short code.
#[derive(Debug, Default)]
pub struct InMemoryCountryRepository {
    countries: Mutex<HashMap<String, Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with the given countries.
    ///
    /// Later entries win on duplicate codes, matching map insert semantics.
    pub fn with_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        let map = countries
            .into_iter()
            .map(|country| (country.code.clone(), country))
            .collect();
        Self {
            countries: Mutex::new(map),
        }
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, HashMap<String, Country>>> {
        self.countries
            .lock()
            .map_err(|_| RepoError::Storage("country map mutex poisoned".to_string()))
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn find_all(&self) -> RepoResult<Vec<Country>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn find_by_code(&self, code: &str) -> RepoResult<Option<Country>> {
        Ok(self.lock()?.get(code).cloned())
    }

    fn insert(&self, country: &Country) -> RepoResult<()> {
        self.lock()?
            .insert(country.code.clone(), country.clone());
        Ok(())
    }
}
