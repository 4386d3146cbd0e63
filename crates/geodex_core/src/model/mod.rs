//! Domain model for country reference data.
//!
//! # Responsibility
//! - Define the canonical entity shape used by core business logic.
//! - Keep entities free of storage and transport concerns.
//!
//! # Invariants
//! - Every country is identified by its 3-character short code.
//! - At most one stored country exists per distinct code value.

pub mod country;
