//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted short_id → URL mapping with its click counter
//! - [`NewShortLink`] - Input for creating a ShortLink

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
