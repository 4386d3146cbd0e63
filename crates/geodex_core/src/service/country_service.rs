//! Country use-case service.
//!
//! # Responsibility
//! - Provide list/get/add entry points for country reference data.
//! - Enforce code uniqueness and idempotent-add semantics.
//! - Delegate persistence to the injected repository.
//!
//! # Invariants
//! - Validation failures are raised before any repository interaction.
//! - Each `add_country` call performs zero or one repository write.
//! - The service holds no mutable state; concurrent use is safe and per-code
//!   atomicity of lookup-then-insert is the repository's contract.

use crate::error::{CoreError, CoreResult};
use crate::model::country::Country;
use crate::repo::country_repo::CountryRepository;
use crate::validation::{validate_code, validate_country};
use log::info;

/// Observation hooks invoked at defined points of country use-cases.
///
/// Observers receive metadata only and never influence control flow; every
/// hook has a no-op default so embedders implement just what they watch.
pub trait CountryObserver {
    /// A full listing is about to be served.
    fn on_list(&self) {}
    /// Storage is about to be queried for `code`.
    fn on_lookup(&self, _code: &str) {}
    /// A new country is about to be persisted.
    fn on_insert(&self, _country: &Country) {}
    /// An add matched an already stored country; no write will happen.
    fn on_duplicate(&self, _code: &str, _existing_name: &str) {}
    /// An add conflicted with a stored country under the same code.
    fn on_conflict(&self, _code: &str, _existing_name: &str) {}
}

/// Default observer emitting structured log events.
pub struct LogObserver;

impl CountryObserver for LogObserver {
    fn on_list(&self) {
        info!("event=country_list module=service status=start");
    }

    fn on_lookup(&self, code: &str) {
        info!("event=country_lookup module=service status=start code={code}");
    }

    fn on_insert(&self, country: &Country) {
        info!(
            "event=country_insert module=service status=start code={} name={}",
            country.code, country.name
        );
    }

    fn on_duplicate(&self, code: &str, existing_name: &str) {
        info!(
            "event=country_duplicate module=service status=noop code={code} existing_name={existing_name}"
        );
    }

    fn on_conflict(&self, code: &str, existing_name: &str) {
        info!(
            "event=country_conflict module=service status=rejected code={code} existing_name={existing_name}"
        );
    }
}

/// Use-case service for country reference data.
///
/// The repository collaborator is injected at construction; the service never
/// reaches for storage any other way.
pub struct CountryService<R: CountryRepository> {
    repo: R,
    observer: Box<dyn CountryObserver + Send + Sync>,
}

impl<R: CountryRepository> CountryService<R> {
    /// Creates a service using the provided repository and log observation.
    pub fn new(repo: R) -> Self {
        Self::with_observer(repo, Box::new(LogObserver))
    }

    /// Creates a service with a custom observer implementation.
    pub fn with_observer(repo: R, observer: Box<dyn CountryObserver + Send + Sync>) -> Self {
        Self { repo, observer }
    }

    /// Returns every stored country.
    ///
    /// No ordering guarantee; codes are unique by repository invariant.
    /// Fails only on technical repository errors.
    pub fn list_countries(&self) -> CoreResult<Vec<Country>> {
        self.observer.on_list();
        Ok(self.repo.find_all()?)
    }

    /// Returns the country stored under `code`.
    ///
    /// # Errors
    /// - `INVALID_ARGUMENT` when `code` is blank or not 3 characters, before
    ///   the repository is touched.
    /// - `NOT_FOUND` when no country is stored under `code`.
    pub fn get_country(&self, code: &str) -> CoreResult<Country> {
        validate_code(code)?;
        self.observer.on_lookup(code);
        match self.repo.find_by_code(code)? {
            Some(country) => Ok(country),
            None => Err(CoreError::not_found(format!(
                "country with short name {code} is not existing"
            ))),
        }
    }

    /// Adds a country unless its code is already taken.
    ///
    /// Resubmitting a stored country with a case-insensitively equal name is
    /// an idempotent no-op; a differing name under the same code is rejected.
    /// Returns the full stored set after the operation so callers observe end
    /// state without a second read.
    ///
    /// # Errors
    /// - `INVALID_ARGUMENT` when code or name fail validation, before the
    ///   repository is touched.
    /// - `INVALID_ARGUMENT` on a name conflict under an existing code; no
    ///   write is performed.
    pub fn add_country(&self, country: &Country) -> CoreResult<Vec<Country>> {
        validate_country(country)?;
        self.observer.on_lookup(&country.code);
        match self.repo.find_by_code(&country.code)? {
            None => {
                self.observer.on_insert(country);
                self.repo.insert(country)?;
            }
            Some(existing) if existing.name_matches(&country.name) => {
                // Already stored; adding again must stay safe to retry.
                self.observer.on_duplicate(&existing.code, &existing.name);
            }
            Some(existing) => {
                self.observer.on_conflict(&existing.code, &existing.name);
                return Err(CoreError::invalid_argument(format!(
                    "a country with the short name {} is already existing: {}. \
                     Cannot create two countries with the same short name",
                    country.code, existing.name
                )));
            }
        }
        Ok(self.repo.find_all()?)
    }
}
