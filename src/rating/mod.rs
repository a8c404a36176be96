//! Elo rating store and arithmetic
//!
//! This module provides the participant rating store and the expected-score
//! and update arithmetic it uses, built on the skillratings crate.

pub mod elo;
pub mod store;

// Re-export commonly used types
pub use store::RatingStore;
