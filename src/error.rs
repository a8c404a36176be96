//! Error types for the rating engine
//!
//! Store operations return [`RatingError`] directly so callers can match on
//! the failing participant or value. Application code (configuration loading,
//! the command-line front end) uses the anyhow-based [`Result`] alias.

/// Result type alias for application-level code
pub type Result<T> = anyhow::Result<T>;

/// Result type for rating store operations
pub type RatingResult<T> = std::result::Result<T, RatingError>;

/// Errors raised by the rating store
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("Elo must be positive, got {rating}")]
    InvalidRating { rating: i64 },

    #[error("Invalid player {name}")]
    UnknownParticipant { name: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl RatingError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownParticipant {
            name: name.to_string(),
        }
    }
}
