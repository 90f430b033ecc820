//! Error types for the frame layer.
//!
//! Each crate in Tenpin defines its own error enum. A `FrameError` always
//! means a pin count was impossible, never that a game rule was broken.

use crate::MAX_PINS;

/// Errors raised while building a [`Roll`](crate::Roll) or
/// [`Round`](crate::Round).
///
/// Both are plain validation failures: retrying the same call will fail
/// the same way, the caller has to supply different pin counts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// A single roll knocked down fewer than 0 or more than 10 pins.
    #[error("roll of {0} pins is out of range 0..={max}", max = MAX_PINS)]
    InvalidRoll(i32),

    /// The two rolls of a round add up to more pins than stand on the lane.
    #[error("round ({first}, {second}) knocks down more than {max} pins", max = MAX_PINS)]
    InvalidRound { first: u8, second: u8 },
}
