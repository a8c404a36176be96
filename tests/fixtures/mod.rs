//! Test fixtures shared by the integration tests

use elo_room::types::Rating;
use elo_room::RatingStore;

/// Players used in the registration tests
pub fn create_test_players() -> Vec<(&'static str, Rating)> {
    vec![
        ("Jasminder", 1000),
        ("Steve", 1100),
        ("Mahmoud", 1200),
        ("Joan", 1300),
        ("白百柏", 1400),
    ]
}

/// Store with every player from `players` registered
pub fn create_test_store(k_factor: i64, players: &[(&str, Rating)]) -> RatingStore {
    let mut store = RatingStore::with_k_factor(k_factor);
    for (name, rating) in players {
        store
            .register(*name, *rating)
            .expect("fixture ratings are positive");
    }
    store
}

/// Roster used by the replay tests
pub const UPSET_ROSTER: &str = r#"
[participants]
Tyrone = 1200
Katarina = 800

[[matches]]
winner = "Katarina"
loser = "Tyrone"

[[matches]]
winner = "Katarina"
loser = "Tyrone"

[[matches]]
winner = "Katarina"
loser = "Tyrone"

[[matches]]
winner = "Katarina"
loser = "Tyrone"
"#;
