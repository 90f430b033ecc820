//! Roll and round value types.
//!
//! Both types are small `Copy` values with structural equality. They can
//! only be built through validating constructors, so holding a `Round`
//! means its pin counts are already known to be legal.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FrameError;

/// Pins standing at the start of every frame.
pub const MAX_PINS: u8 = 10;

// ---------------------------------------------------------------------------
// Roll
// ---------------------------------------------------------------------------

/// A single delivery: how many pins went down.
///
/// The inner count is private and always within `0..=MAX_PINS`.
/// On the wire a roll is just its pin count (`#[serde(try_from)]` runs the
/// same range check as [`Roll::new`] when deserializing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Roll(u8);

impl Roll {
    /// A gutter ball.
    pub const ZERO: Roll = Roll(0);

    /// All ten pins.
    pub const STRIKE: Roll = Roll(MAX_PINS);

    /// Creates a roll, rejecting counts outside `0..=MAX_PINS`.
    pub fn new(pins: i32) -> Result<Self, FrameError> {
        match u8::try_from(pins) {
            Ok(p) if p <= MAX_PINS => Ok(Self(p)),
            _ => Err(FrameError::InvalidRoll(pins)),
        }
    }

    /// Number of pins knocked down.
    pub const fn pins_hit(self) -> u8 {
        self.0
    }

    pub const fn is_strike(self) -> bool {
        self.0 == MAX_PINS
    }
}

impl TryFrom<i32> for Roll {
    type Error = FrameError;

    fn try_from(pins: i32) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Round
// ---------------------------------------------------------------------------

/// One frame's worth of rolls.
///
/// A strike round is stored as `(10, 0)`. The zero placeholder is never a
/// real delivery, so [`Round::rolls`] yields only the strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RoundRepr")]
pub struct Round {
    first: Roll,
    second: Roll,
}

/// Unchecked wire shape of a [`Round`].
#[derive(Deserialize)]
struct RoundRepr {
    first: Roll,
    second: Roll,
}

impl TryFrom<RoundRepr> for Round {
    type Error = FrameError;

    fn try_from(repr: RoundRepr) -> Result<Self, Self::Error> {
        Self::new(repr.first, repr.second)
    }
}

impl Round {
    /// Ten pins on the first ball.
    pub const STRIKE: Round = Round {
        first: Roll::STRIKE,
        second: Roll::ZERO,
    };

    /// Builds a round from two rolls.
    ///
    /// # Errors
    /// Returns `FrameError::InvalidRound` if the rolls add up to more than
    /// [`MAX_PINS`].
    pub fn new(first: Roll, second: Roll) -> Result<Self, FrameError> {
        if first.pins_hit() + second.pins_hit() > MAX_PINS {
            return Err(FrameError::InvalidRound {
                first: first.pins_hit(),
                second: second.pins_hit(),
            });
        }
        Ok(Self { first, second })
    }

    /// Builds a round from raw pin counts.
    ///
    /// Each count is range-checked as a [`Roll`] first, so `(-1, 0)` fails
    /// with `InvalidRoll` rather than `InvalidRound`.
    pub fn from_pins(first: i32, second: i32) -> Result<Self, FrameError> {
        Self::new(Roll::new(first)?, Roll::new(second)?)
    }

    pub const fn first(&self) -> Roll {
        self.first
    }

    pub const fn second(&self) -> Roll {
        self.second
    }

    /// Total pins knocked down in this round.
    pub const fn sum(&self) -> u8 {
        self.first.pins_hit() + self.second.pins_hit()
    }

    pub const fn is_strike(&self) -> bool {
        self.first.is_strike()
    }

    /// All pins down, but not on the first ball.
    pub const fn is_spare(&self) -> bool {
        self.sum() == MAX_PINS && !self.is_strike()
    }

    /// Pins left standing after both rolls.
    pub const fn is_open(&self) -> bool {
        self.sum() < MAX_PINS
    }

    /// The deliveries actually thrown: one for a strike, two otherwise.
    pub fn rolls(&self) -> impl Iterator<Item = Roll> {
        let second = (!self.is_strike()).then_some(self.second);
        std::iter::once(self.first).chain(second)
    }
}

/// Scoresheet notation: `X`, `7/`, `8-1`, `--`.
impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mark(roll: Roll) -> String {
            match roll.pins_hit() {
                0 => "-".to_string(),
                n => n.to_string(),
            }
        }

        if self.is_strike() {
            write!(f, "X")
        } else if self.is_spare() {
            write!(f, "{}/", mark(self.first))
        } else {
            write!(f, "{}{}", mark(self.first), mark(self.second))
        }
    }
}
