//! Elo Room - Elo ratings for named participants
//!
//! This crate tracks participant ratings, estimates win probabilities and
//! applies Elo updates after pairwise match outcomes.

pub mod config;
pub mod error;
pub mod rating;
pub mod roster;
pub mod types;

// Re-export commonly used types
pub use error::{RatingError, RatingResult, Result};
pub use types::*;

// Re-export key components
pub use rating::RatingStore;
pub use roster::Roster;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
