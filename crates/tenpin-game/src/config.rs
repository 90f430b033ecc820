//! Game configuration and phase state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameConfig
// ---------------------------------------------------------------------------

/// When a score may be read from a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorePolicy {
    /// Only once the game is `Complete`. Earlier calls fail with
    /// `GameNotOver`.
    #[default]
    OnCompletion,
    /// At any point. Rolls that haven't happened yet count as zero, so a
    /// pending strike or spare only scores its own pins.
    Running,
}

/// Settings for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// When `calculate_score` is allowed.
    pub score_policy: ScorePolicy,

    /// Enforce the pin budget on the two bonus rolls after a tenth-frame
    /// strike: unless the first bonus roll is itself a strike, the pair
    /// must not exceed ten pins.
    pub check_bonus_pins: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_policy: ScorePolicy::OnCompletion,
            check_bonus_pins: true,
        }
    }
}

impl GameConfig {
    /// Config that scores at any time.
    pub fn running() -> Self {
        Self {
            score_policy: ScorePolicy::Running,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// GamePhase
// ---------------------------------------------------------------------------

/// The lifecycle phase of a game.
///
/// Transitions are strictly ordered, no skipping:
///
/// ```text
/// Open → Finished → Complete
/// ```
///
/// - **Open**: rounds are being recorded (0 to 10 of them).
/// - **Finished**: all ten rounds are in. Bonus rolls earned by the tenth
///   round are collected here, one at a time.
/// - **Complete**: every owed bonus roll is in. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Open,
    Finished,
    Complete,
}

impl GamePhase {
    pub fn accepts_rounds(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn accepts_bonus(&self) -> bool {
        matches!(self, Self::Finished)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns the following phase, or `None` from the terminal one.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Open => Some(Self::Finished),
            Self::Finished => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Finished => write!(f, "Finished"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}
