use rand::{Rng, SeedableRng, distributions::Uniform, rngs::StdRng};
use std::collections::HashSet;
use thiserror::Error;

/// Smallest secret the game will draw.
pub const MIN_SECRET: i32 = 1;
/// Largest secret the game will draw.
pub const MAX_SECRET: i32 = 10;

/// Inclusive range secrets are drawn from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretRange {
    min: i32,
    max: i32,
}

impl SecretRange {
    pub const DEFAULT: SecretRange = SecretRange::new(MIN_SECRET, MAX_SECRET);

    pub const fn new(min: i32, max: i32) -> Self {
        assert!(min <= max, "secret range minimum must not exceed its maximum");
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of distinct secrets in the range.
    pub fn len(&self) -> u64 {
        (i64::from(self.max) - i64::from(self.min) + 1) as u64
    }
}

impl Default for SecretRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a raw guess was rejected
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidGuess {
    #[error("guess is not a number: {0:?}")]
    NotANumber(String),
    #[error("guess {value} is outside {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Invalid(#[from] InvalidGuess),
    #[error("the round is over; reset to play again")]
    RoundOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// Result of comparing a valid guess against the secret
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The guess is below the secret.
    TooLow,
    /// The guess is above the secret.
    TooHigh,
    Correct,
}

/// State of a single game: the secret, the secrets already used in the
/// current cycle and the attempt counter.
///
/// Holds no I/O; presentation is driven by [`crate::Session`].
#[derive(Clone, Debug)]
pub struct GameState {
    range: SecretRange,
    secret: i32,
    used: HashSet<i32>,
    attempts: u32,
    phase: Phase,
    rng: StdRng,
}

impl GameState {
    /// New game over the default range, seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(SecretRange::DEFAULT, StdRng::from_entropy())
    }

    /// New game with a deterministic seed (tests, replays).
    pub fn with_seed(range: SecretRange, seed: u64) -> Self {
        Self::with_rng(range, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(range: SecretRange, rng: StdRng) -> Self {
        let mut game = Self {
            range,
            secret: range.min(),
            used: HashSet::new(),
            attempts: 1,
            phase: Phase::Playing,
            rng,
        };
        game.initialize();
        game
    }

    /// Draw a fresh secret and start counting attempts from 1.
    pub fn initialize(&mut self) {
        self.secret = self.draw_secret();
        self.attempts = 1;
        self.phase = Phase::Playing;
    }

    /// Same as [`GameState::initialize`]; the used-set carries over.
    pub fn reset(&mut self) {
        self.initialize();
    }

    /// Draw a secret not used in the current cycle.
    ///
    /// Clears the used-set first once it covers the whole range, so the
    /// rejection loop below always has a free value to find.
    pub fn draw_secret(&mut self) -> i32 {
        if self.used.len() as u64 >= self.range.len() {
            self.used.clear();
        }
        let distr = Uniform::new_inclusive(self.range.min(), self.range.max());
        loop {
            let candidate = self.rng.sample(&distr);
            if self.used.insert(candidate) {
                return candidate;
            }
        }
    }

    /// Parse and range-check raw player input without touching the state.
    pub fn validate(&self, raw: &str) -> Result<i32, InvalidGuess> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i32>()
            .map_err(|_| InvalidGuess::NotANumber(trimmed.to_string()))?;
        if !self.range.contains(value) {
            return Err(InvalidGuess::OutOfRange {
                value,
                min: self.range.min(),
                max: self.range.max(),
            });
        }
        Ok(value)
    }

    /// Compare a guess against the secret. A miss costs one attempt; a hit
    /// ends the round with the attempt count left as it is.
    pub fn submit_guess(&mut self, value: i32) -> Result<Outcome, GameError> {
        if self.phase == Phase::Won {
            return Err(GameError::RoundOver);
        }
        if !self.range.contains(value) {
            return Err(InvalidGuess::OutOfRange {
                value,
                min: self.range.min(),
                max: self.range.max(),
            }
            .into());
        }
        if value == self.secret {
            self.phase = Phase::Won;
            return Ok(Outcome::Correct);
        }
        self.attempts += 1;
        if value < self.secret {
            Ok(Outcome::TooLow)
        } else {
            Ok(Outcome::TooHigh)
        }
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn range(&self) -> SecretRange {
        self.range
    }

    /// Secrets drawn since the used-set was last cleared.
    pub fn used_secrets(&self) -> &HashSet<i32> {
        &self.used
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
