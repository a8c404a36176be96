//! Configuration management for elo-room
//!
//! Rating parameters, environment variable loading, TOML files and
//! validation with defaults.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::{RatingConfig, DEFAULT_K_FACTOR, DEFAULT_RATING};
