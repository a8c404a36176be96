//! Roster files: starting ratings plus an ordered list of decided matches
//!
//! ```toml
//! newcomers = ["Khalid"]
//!
//! [participants]
//! Tyrone = 1200
//! Katarina = 800
//!
//! [[matches]]
//! winner = "Katarina"
//! loser = "Tyrone"
//! ```

use crate::error::{RatingResult, Result};
use crate::rating::RatingStore;
use crate::types::{MatchOutcome, MatchResult, ParticipantId, Rating};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Participants and match results to replay through a rating store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Roster {
    /// Participants with explicit starting ratings
    pub participants: BTreeMap<ParticipantId, Rating>,
    /// Participants registered at the store's default rating
    pub newcomers: Vec<ParticipantId>,
    /// Decided matches, applied in order
    pub matches: Vec<MatchResult>,
}

impl Roster {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse roster file {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let roster: Roster = toml::from_str(contents)?;
        Ok(roster)
    }

    /// Register every participant in `store`
    ///
    /// Newcomers are registered after explicit participants, so a name listed
    /// in both ends up at the default rating.
    pub fn register_all(&self, store: &mut RatingStore) -> RatingResult<()> {
        for (name, rating) in &self.participants {
            store.register(name.clone(), *rating)?;
        }
        for name in &self.newcomers {
            store.register_default(name.clone())?;
        }
        Ok(())
    }

    /// Register every participant, then replay each match in order
    ///
    /// Stops at the first failing match; matches before it stay applied.
    pub fn apply(&self, store: &mut RatingStore) -> RatingResult<Vec<MatchOutcome>> {
        self.register_all(store)?;

        let mut outcomes = Vec::with_capacity(self.matches.len());
        for result in &self.matches {
            outcomes.push(store.apply_match(&result.winner, &result.loser)?);
        }

        info!(
            "Replayed {} matches across {} participants",
            outcomes.len(),
            store.len()
        );
        Ok(outcomes)
    }
}
