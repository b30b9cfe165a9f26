//! # Number guessing game
//!
//! Each browser session owns one [`GuessSession`]: a secret in `1..=100` drawn
//! when the session first reaches the game, plus a counter of evaluated guesses.
//! The secret never changes afterwards. A correct guess does not end or reset
//! the game; further guesses keep being evaluated against the same secret.
//!
//! ## Evaluation order
//!
//! [`evaluate`] checks equality first, then the inclusive `0..=100` range, then
//! the direction:
//!
//! | Condition | [`Feedback`] | Message |
//! |-----------|--------------|---------|
//! | `guess == secret` | `Correct` | "Correct guess!" |
//! | `guess` outside `0..=100` | `OutOfRange` | "you need to guess between 1 and 100" |
//! | `guess < secret` | `Higher` | "Guess higher!" |
//! | `guess > secret` | `Lower` | "Guess lower!" |
//!
//! Text that does not parse as an `i32` never reaches [`evaluate`]; it yields
//! [`Feedback::InvalidInput`].
//!
//! ## Session persistence
//!
//! [`load_or_start`] and [`play`] read and write the game under
//! [`SESSION_GAME_KEY`] in a [`tower_sessions::Session`].

use std::fmt;
use std::num::ParseIntError;
use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tower_sessions::{session, Session};

/// Key for storing the game state in the session.
pub const SESSION_GAME_KEY: &str = "guessGame";

/// Range the secret is drawn from.
pub const SECRET_RANGE: RangeInclusive<i32> = 1..=100;

/// Guesses outside this range are rejected. Note the lower bound is 0, not 1.
pub const GUESS_RANGE: RangeInclusive<i32> = 0..=100;

/// Outcome of one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// The guess was below the secret.
    Higher,
    /// The guess was above the secret.
    Lower,
    OutOfRange,
    InvalidInput,
}

impl Feedback {
    pub fn message(self) -> &'static str {
        match self {
            Feedback::Correct => "Correct guess!",
            Feedback::Higher => "Guess higher!",
            Feedback::Lower => "Guess lower!",
            Feedback::OutOfRange => "you need to guess between 1 and 100",
            Feedback::InvalidInput => "Please enter a valid integer guess.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Classify `guess` against `secret`.
pub fn evaluate(secret: i32, guess: i32) -> Feedback {
    if guess == secret {
        Feedback::Correct
    } else if !GUESS_RANGE.contains(&guess) {
        Feedback::OutOfRange
    } else if guess < secret {
        Feedback::Higher
    } else {
        Feedback::Lower
    }
}

/// Parse a submitted guess. Surrounding whitespace is ignored.
pub fn parse_guess(raw: &str) -> Result<i32, ParseIntError> {
    raw.trim().parse()
}

/// Game state stored in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessSession {
    secret: i32,
    guesses: u32,
}

impl GuessSession {
    /// Start a game with a secret drawn from the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(rng.gen_range(SECRET_RANGE))
    }

    pub fn with_secret(secret: i32) -> Self {
        debug_assert!(SECRET_RANGE.contains(&secret));
        Self { secret, guesses: 0 }
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Number of guesses that parsed and were evaluated.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Handle the raw `guess` parameter of a request.
    ///
    /// Returns `None` when the parameter is missing or blank; nothing is
    /// evaluated and the counter is untouched.
    pub fn submit(&mut self, raw: Option<&str>) -> Option<Feedback> {
        let raw = raw.filter(|s| !s.trim().is_empty())?;

        match parse_guess(raw) {
            Ok(guess) => {
                self.guesses += 1;
                Some(evaluate(self.secret, guess))
            }
            Err(_) => Some(Feedback::InvalidInput),
        }
    }
}

impl Default for GuessSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What the game page shows after a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub feedback: Option<Feedback>,
    pub guesses: u32,
}

/// Fetch the session's game, creating and storing a new one if absent.
pub async fn load_or_start(session: &Session) -> Result<GuessSession, session::Error> {
    if let Some(game) = session.get::<GuessSession>(SESSION_GAME_KEY).await? {
        return Ok(game);
    }

    let game = GuessSession::new();
    session.insert(SESSION_GAME_KEY, &game).await?;
    tracing::debug!("Started new guessing game");
    Ok(game)
}

/// Apply one request's `guess` parameter to the session's game.
pub async fn play(session: &Session, raw: Option<&str>) -> Result<Round, session::Error> {
    let mut game = load_or_start(session).await?;

    let feedback = game.submit(raw);
    if feedback.is_some() {
        session.insert(SESSION_GAME_KEY, &game).await?;
    }

    Ok(Round {
        feedback,
        guesses: game.guesses(),
    })
}
