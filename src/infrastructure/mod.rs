//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - Fast lookup cache (Redis, in-memory and no-op implementations)
//! - [`persistence`] - Durable store implementations (PostgreSQL and in-memory)
//! - [`queue`] - Click event queue backends

pub mod cache;
pub mod persistence;
pub mod queue;
