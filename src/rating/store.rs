//! In-memory rating store
//!
//! Holds the participant -> rating mapping and the K-factor, and applies
//! Elo updates for decided matches.

use crate::config::{RatingConfig, DEFAULT_K_FACTOR, DEFAULT_RATING};
use crate::error::{RatingError, RatingResult};
use crate::rating::elo;
use crate::types::{MatchOutcome, ParticipantId, Rating, RatingChange};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Named participants and their current Elo ratings
#[derive(Debug, Clone)]
pub struct RatingStore {
    k_factor: i64,
    default_rating: Rating,
    ratings: HashMap<ParticipantId, Rating>,
}

impl Default for RatingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingStore {
    /// Create an empty store with K-factor 30
    pub fn new() -> Self {
        Self::with_k_factor(DEFAULT_K_FACTOR)
    }

    /// Create an empty store with the given K-factor
    pub fn with_k_factor(k_factor: i64) -> Self {
        Self {
            k_factor,
            default_rating: DEFAULT_RATING,
            ratings: HashMap::new(),
        }
    }

    /// Create an empty store from validated configuration
    pub fn from_config(config: &RatingConfig) -> RatingResult<Self> {
        config.validate()?;

        Ok(Self {
            k_factor: config.k_factor,
            default_rating: config.default_rating,
            ratings: HashMap::new(),
        })
    }

    pub fn k_factor(&self) -> i64 {
        self.k_factor
    }

    pub fn default_rating(&self) -> Rating {
        self.default_rating
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ratings.contains_key(name)
    }

    /// Register a participant, overwriting any existing rating for that name
    pub fn register(&mut self, name: impl Into<ParticipantId>, rating: Rating) -> RatingResult<()> {
        if rating < 1 {
            return Err(RatingError::InvalidRating { rating });
        }

        let name = name.into();
        if let Some(previous) = self.ratings.insert(name.clone(), rating) {
            debug!("Overwrote rating for '{}': {} -> {}", name, previous, rating);
        } else {
            debug!("Registered '{}' at {}", name, rating);
        }

        Ok(())
    }

    /// Register a participant at the store's default rating
    pub fn register_default(&mut self, name: impl Into<ParticipantId>) -> RatingResult<()> {
        self.register(name, self.default_rating)
    }

    /// Current rating for `name`
    pub fn rating(&self, name: &str) -> RatingResult<Rating> {
        self.ratings
            .get(name)
            .copied()
            .ok_or_else(|| RatingError::unknown(name))
    }

    /// Owned snapshot of every participant and rating
    pub fn all(&self) -> HashMap<ParticipantId, Rating> {
        self.ratings.clone()
    }

    /// Participants sorted by rating (descending), ties broken by name
    pub fn standings(&self) -> Vec<(ParticipantId, Rating)> {
        let mut standings: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, rating)| (name.clone(), *rating))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        standings
    }

    /// Probability in (0, 1) that `player_a` beats `player_b`
    pub fn win_probability(&self, player_a: &str, player_b: &str) -> RatingResult<f64> {
        let rating_a = self.rating(player_a)?;
        let rating_b = self.rating(player_b)?;
        Ok(elo::win_probability(rating_a, rating_b))
    }

    /// Win probability as a percentage rounded to two decimal places
    pub fn win_percentage(&self, player_a: &str, player_b: &str) -> RatingResult<f64> {
        self.win_probability(player_a, player_b)
            .map(elo::to_percentage)
    }

    /// Compute the ratings `record_match` would produce, without applying them
    ///
    /// The winner is updated first. The loser's expected score is then taken
    /// against the winner's updated rating, so a chain of matches reproduces
    /// the sequential write order exactly.
    pub fn preview_match(&self, winner: &str, loser: &str) -> RatingResult<MatchOutcome> {
        let winner_old = self.rating(winner)?;
        let loser_old = self.rating(loser)?;

        let p_win = elo::win_probability(winner_old, loser_old);
        let winner_new = elo::adjusted_rating(winner_old, self.k_factor, 1.0, p_win);

        // A self-match sees its own first write.
        let loser_old = if winner == loser { winner_new } else { loser_old };
        let p_lose = elo::win_probability(loser_old, winner_new);
        let loser_new = elo::adjusted_rating(loser_old, self.k_factor, 0.0, p_lose);

        Ok(MatchOutcome {
            winner: RatingChange {
                name: winner.to_string(),
                old_rating: winner_old,
                new_rating: winner_new,
            },
            loser: RatingChange {
                name: loser.to_string(),
                old_rating: loser_old,
                new_rating: loser_new,
            },
        })
    }

    /// Apply the result of `winner` beating `loser`
    ///
    /// Returns the store so calls can be chained. Neither rating changes if
    /// either participant is unknown.
    pub fn record_match(&mut self, winner: &str, loser: &str) -> RatingResult<&mut Self> {
        self.apply_match(winner, loser)?;
        Ok(self)
    }

    /// Apply a match result and return the rating changes it produced
    pub fn apply_match(&mut self, winner: &str, loser: &str) -> RatingResult<MatchOutcome> {
        let outcome = self.preview_match(winner, loser)?;

        self.ratings
            .insert(outcome.winner.name.clone(), outcome.winner.new_rating);
        self.ratings
            .insert(outcome.loser.name.clone(), outcome.loser.new_rating);

        debug!("Recorded match: {}", outcome);
        if outcome.loser.new_rating < 1 {
            warn!(
                "Rating for '{}' dropped below 1 ({})",
                outcome.loser.name, outcome.loser.new_rating
            );
        }

        Ok(outcome)
    }
}
