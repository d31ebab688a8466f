//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short identifier generation and shape checks
//! - [`url_validator`] - Validation of URLs submitted for shortening

pub mod code_generator;
pub mod url_validator;
