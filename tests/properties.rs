//! Property tests for win chances and match updates

use elo_room::RatingStore;
use proptest::prelude::*;

fn pair_store(k_factor: i64, a: i64, b: i64) -> RatingStore {
    let mut store = RatingStore::with_k_factor(k_factor);
    store.register("a", a).unwrap();
    store.register("b", b).unwrap();
    store
}

proptest! {
    #[test]
    fn win_probabilities_are_complementary(a in 1i64..4000, b in 1i64..4000) {
        let store = pair_store(30, a, b);
        let p_ab = store.win_probability("a", "b").unwrap();
        let p_ba = store.win_probability("b", "a").unwrap();

        prop_assert!(p_ab > 0.0 && p_ab < 1.0);
        prop_assert!((p_ab + p_ba - 1.0).abs() < 1e-12);
    }

    #[test]
    fn higher_rating_is_favoured(a in 1i64..4000, gap in 1i64..1000) {
        let store = pair_store(30, a, a + gap);
        prop_assert!(store.win_probability("b", "a").unwrap() > 0.5);
    }

    #[test]
    fn winner_never_loses_points(a in 1i64..3000, b in 1i64..3000, k in 1i64..64) {
        let mut store = pair_store(k, a, b);
        let outcome = store.apply_match("a", "b").unwrap();

        prop_assert!(outcome.winner.delta() >= 0);
        prop_assert!(outcome.loser.delta() <= 0);
        prop_assert!(outcome.winner.delta() <= k);
        prop_assert!(-outcome.loser.delta() <= k);
    }

    #[test]
    fn preview_agrees_with_record(a in 1i64..3000, b in 1i64..3000) {
        let mut store = pair_store(30, a, b);
        let preview = store.preview_match("b", "a").unwrap();
        store.record_match("b", "a").unwrap();

        prop_assert_eq!(store.rating("b").unwrap(), preview.winner.new_rating);
        prop_assert_eq!(store.rating("a").unwrap(), preview.loser.new_rating);
    }
}
