//! Game sequencing and scoring for Tenpin.
//!
//! A [`Game`] records ten rounds, then whatever bonus rolls the tenth
//! round earned, then scores the whole sequence with one look-ahead walk.
//!
//! # Key types
//!
//! - [`Game`] — owns the rounds and bonus rolls, enforces the phases
//! - [`GamePhase`] — lifecycle state machine
//! - [`GameConfig`] — scoring policy and bonus-roll checks
//! - [`Scorecard`] — frame-by-frame breakdown of a game

mod config;
mod error;
mod game;
mod score;

pub use config::{GameConfig, GamePhase, ScorePolicy};
pub use error::GameError;
pub use game::{Game, MAX_ROUNDS, STRIKE_BONUS_ROLLS, SPARE_BONUS_ROLLS};
pub use score::{FrameScore, Scorecard, calculate_score, scorecard};
