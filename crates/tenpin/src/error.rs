//! Unified error type for Tenpin.

use tenpin_frame::FrameError;
use tenpin_game::GameError;

/// Top-level error that wraps all crate-specific errors.
///
/// Callers of the `tenpin` facade deal with this single type. The
/// `#[from]` attributes let `?` convert frame and game errors directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenpinError {
    /// A roll or round with impossible pin counts.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// An operation out of phase, or a bonus roll over the pin budget.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl TenpinError {
    /// The underlying pin-count error, wherever it was raised.
    pub fn frame_error(&self) -> Option<&FrameError> {
        match self {
            Self::Frame(e) | Self::Game(GameError::Frame(e)) => Some(e),
            Self::Game(_) => None,
        }
    }
}
