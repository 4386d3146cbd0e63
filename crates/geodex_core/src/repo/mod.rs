//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract consumed by the country service.
//! - Isolate storage details (SQLite, in-memory map) behind that contract.
//!
//! # Invariants
//! - All stored countries have distinct short codes.
//! - `insert` must be atomic per short code so that two concurrent inserts of
//!   the same new code cannot both succeed with different names. The service
//!   does not lock; it relies on this contract.

pub mod country_repo;
pub mod memory;
