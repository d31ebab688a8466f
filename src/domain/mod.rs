//! Domain layer containing business entities and logic.
//!
//! Defines the entities, the durable store contract, and the click accounting
//! pipeline independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Durable store trait definitions
//! - [`click_event`] - Click accounting event model
//! - [`click_queue`] - Producer-side queue abstraction
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The resolution service resolves a short_id (cache or durable store)
//! 2. A [`click_event::ClickEvent`] is handed to a [`click_queue::ClickQueue`]
//! 3. [`click_worker::run_click_worker`] applies increments with retry logic
//! 4. Counters are persisted via [`repositories::ShortLinkRepository`]

pub mod click_event;
pub mod click_queue;
pub mod click_worker;
pub mod entities;
pub mod repositories;
