//! # Tenpin
//!
//! Ten-pin bowling rules and scoring.
//!
//! Tenpin checks pin counts as they are entered, walks a game through its
//! phases (ten rounds, then any bonus rolls the tenth round earned), and
//! scores the finished game with strike and spare bonuses applied.
//!
//! ## Quick Start
//!
//! ```rust
//! use tenpin::prelude::*;
//!
//! let mut game = Game::new();
//! for _ in 0..MAX_ROUNDS {
//!     game.play_round(Round::from_pins(9, 1)?)?;
//! }
//! game.finish()?;
//! game.play_extra_roll(Roll::new(9)?)?;
//! game.complete()?;
//!
//! assert_eq!(game.calculate_score()?, 190);
//! # Ok::<(), TenpinError>(())
//! ```

mod error;

pub use error::TenpinError;
pub use tenpin_frame::{FrameError, MAX_PINS, Roll, Round};
pub use tenpin_game::{
    FrameScore, Game, GameConfig, GameError, GamePhase, MAX_ROUNDS, SPARE_BONUS_ROLLS,
    STRIKE_BONUS_ROLLS, ScorePolicy, Scorecard,
};

pub mod prelude {
    pub use crate::{
        FrameScore, Game, GameConfig, GamePhase, MAX_PINS, MAX_ROUNDS, Roll, Round, ScorePolicy,
        Scorecard, TenpinError, score_game,
    };
}

/// Plays and scores a whole game in one call.
///
/// `rounds` are `(first, second)` pin counts, one per frame (use `(10, 0)`
/// for a strike). `bonus` holds the pins of whatever bonus rolls the tenth
/// round earned, in order.
///
/// # Errors
/// Any pin count or sequencing error from building and playing the game:
/// a bad roll or round, a wrong number of rounds, or too few or too many
/// bonus rolls.
pub fn score_game(rounds: &[(i32, i32)], bonus: &[i32]) -> Result<u32, TenpinError> {
    let mut game = Game::new();
    for &(first, second) in rounds {
        game.play_round(Round::from_pins(first, second)?)?;
    }
    game.finish()?;
    for &pins in bonus {
        game.play_extra_roll(Roll::new(pins)?)?;
    }
    game.complete()?;

    let score = game.calculate_score()?;
    tracing::debug!(score, "game scored");
    Ok(score)
}
