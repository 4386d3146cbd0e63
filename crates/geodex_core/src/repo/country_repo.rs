//! Country repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Define read/insert access to durable country storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `find_all` never returns two countries with the same code.
//! - `insert` is atomic per code; the `countries` primary key enforces this
//!   for the SQLite implementation.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::country::{Country, COUNTRY_CODE_LEN};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COUNTRY_SELECT_SQL: &str = "SELECT code, name FROM countries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Technical failure raised by country storage.
///
/// Every variant is infrastructure-caused from the service's viewpoint; the
/// service wraps these as `INTERNAL` without inspecting them.
#[derive(Debug)]
pub enum RepoError {
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Non-SQL storage backend failure (e.g. poisoned in-memory state).
    Storage(String),
    /// Persisted row violates the entity shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Storage(message) => write!(f, "country storage unavailable: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted country data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Storage(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository contract consumed by the country service.
///
/// # Contract
/// - Stored codes are unique; `find_all` has set semantics with no ordering
///   guarantee.
/// - `insert` must provide at-least per-code atomic compare-and-insert.
///   Implementations without it expose the lookup-then-insert race described
///   on the service.
pub trait CountryRepository {
    /// Returns every stored country.
    fn find_all(&self) -> RepoResult<Vec<Country>>;
    /// Looks up one country by exact-case short code.
    fn find_by_code(&self, code: &str) -> RepoResult<Option<Country>>;
    /// Persists a new country. Fails when storage is unreachable or the code
    /// already exists at the engine level.
    fn insert(&self, country: &Country) -> RepoResult<()>;
}

/// SQLite-backed country repository.
pub struct SqliteCountryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCountryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CountryRepository for SqliteCountryRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Country>> {
        let mut stmt = self.conn.prepare(&format!("{COUNTRY_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut countries = Vec::new();

        while let Some(row) = rows.next()? {
            countries.push(parse_country_row(row)?);
        }

        Ok(countries)
    }

    fn find_by_code(&self, code: &str) -> RepoResult<Option<Country>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COUNTRY_SELECT_SQL} WHERE code = ?1;"))?;
        stmt.query_row(params![code], |row| Ok(parse_country_row(row)))
            .optional()?
            .transpose()
    }

    fn insert(&self, country: &Country) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO countries (code, name) VALUES (?1, ?2);",
            params![country.code.as_str(), country.name.as_str()],
        )?;
        Ok(())
    }
}

fn parse_country_row(row: &Row<'_>) -> RepoResult<Country> {
    let code: String = row.get("code")?;
    let name: String = row.get("name")?;

    if code.chars().count() != COUNTRY_CODE_LEN {
        return Err(RepoError::InvalidData(format!(
            "invalid code `{code}` in countries.code"
        )));
    }

    Ok(Country { code, name })
}
