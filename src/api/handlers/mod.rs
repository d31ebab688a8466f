//! HTTP request handlers for API endpoints.

pub mod analytics;
pub mod create;
pub mod health;
pub mod redirect;

pub use analytics::analytics_handler;
pub use create::create_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
