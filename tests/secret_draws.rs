use secret_number_rust::{GameState, MAX_SECRET, MIN_SECRET, SecretRange};
use std::collections::HashSet;

#[test]
fn no_repeats_until_every_secret_was_drawn() {
    for seed in 0..20u64 {
        let mut game = GameState::with_seed(SecretRange::DEFAULT, seed);
        let mut seen = HashSet::new();
        seen.insert(game.secret());
        // nine more draws complete the cycle of ten
        for _ in 0..9 {
            game.reset();
            assert!(
                seen.insert(game.secret()),
                "seed {} repeated {} within a cycle",
                seed,
                game.secret()
            );
        }
        let expected: HashSet<i32> = (MIN_SECRET..=MAX_SECRET).collect();
        assert_eq!(seen, expected);
        assert_eq!(game.used_secrets().len(), 10);

        // the eleventh draw starts a new cycle
        game.reset();
        assert_eq!(game.used_secrets().len(), 1);
        assert!(game.used_secrets().contains(&game.secret()));
    }
}

#[test]
fn secrets_stay_inside_the_inclusive_range() {
    let mut game = GameState::with_seed(SecretRange::DEFAULT, 99);
    for _ in 0..1_000 {
        let v = game.draw_secret();
        assert!(v >= MIN_SECRET && v <= MAX_SECRET);
    }
}

#[test]
fn both_bounds_are_reachable() {
    let mut game = GameState::with_seed(SecretRange::new(1, 2), 5);
    let drawn: HashSet<i32> = (0..4).map(|_| game.draw_secret()).collect();
    assert_eq!(drawn, HashSet::from([1, 2]));
}
