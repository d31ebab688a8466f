//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod short_link_repository;

pub use short_link_repository::{InsertOutcome, ShortLinkRepository};

#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
