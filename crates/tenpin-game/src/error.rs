//! Error types for the game layer.

use tenpin_frame::FrameError;

use crate::GamePhase;

/// Errors that can occur while playing or scoring a game.
///
/// None of these are transient. The game is left untouched by a failed
/// call, and repeating it will fail again until the caller changes course.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The phase has no room left: ten rounds are already recorded, every
    /// owed bonus roll has been supplied, or the game is complete.
    #[error("game is over for this operation (phase {0})")]
    GameOver(GamePhase),

    /// The operation needs a later phase: fewer than ten rounds recorded,
    /// or bonus rolls still pending.
    #[error("game is not over yet (phase {0})")]
    GameNotOver(GamePhase),

    /// A bonus roll failed a pin-count check.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
