//! Common types shared by the store, roster replay and CLI

use serde::{Deserialize, Serialize};

/// Participant identifier. Case-sensitive; callers keep it non-empty.
pub type ParticipantId = String;

/// Integer Elo rating
pub type Rating = i64;

/// Rating movement for one side of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingChange {
    pub name: ParticipantId,
    pub old_rating: Rating,
    pub new_rating: Rating,
}

impl RatingChange {
    /// Signed rating difference produced by the match
    pub fn delta(&self) -> Rating {
        self.new_rating - self.old_rating
    }
}

/// Result of a single decided match between two participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: RatingChange,
    pub loser: RatingChange,
}

/// A recorded pairing: `winner` beat `loser`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: ParticipantId,
    pub loser: ParticipantId,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} ({:+}), {} {} -> {} ({:+})",
            self.winner.name,
            self.winner.old_rating,
            self.winner.new_rating,
            self.winner.delta(),
            self.loser.name,
            self.loser.old_rating,
            self.loser.new_rating,
            self.loser.delta(),
        )
    }
}
