//! Application layer services implementing business logic.
//!
//! Services orchestrate the durable store, the cache and the click queue
//! and expose a clean API to HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::resolution_service::ResolutionService`] - Create, resolve and analytics

pub mod services;
