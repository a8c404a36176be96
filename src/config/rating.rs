//! Rating system configuration

use crate::error::RatingError;
use crate::types::Rating;
use serde::{Deserialize, Serialize};

/// Default K-factor applied to every match
pub const DEFAULT_K_FACTOR: i64 = 30;

/// Rating assigned by `register_default`
pub const DEFAULT_RATING: Rating = 1000;

/// Elo parameters for a rating store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Maximum rating change per match
    pub k_factor: i64,
    /// Starting rating for participants registered without one
    pub default_rating: Rating,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            default_rating: DEFAULT_RATING,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.k_factor <= 0 {
            return Err(RatingError::Configuration {
                message: format!("K-factor must be positive, got {}", self.k_factor),
            });
        }

        if self.default_rating < 1 {
            return Err(RatingError::Configuration {
                message: format!(
                    "Default rating must be at least 1, got {}",
                    self.default_rating
                ),
            });
        }

        Ok(())
    }
}
