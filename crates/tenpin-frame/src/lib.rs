//! Pin-fall value types for Tenpin.
//!
//! This crate defines the two atoms every game is built from:
//!
//! - **[`Roll`]** — a single delivery, 0 to [`MAX_PINS`] pins.
//! - **[`Round`]** — one frame's rolls (two, or a lone strike).
//! - **Errors** ([`FrameError`]) — what happens when pin counts don't add up.
//!
//! # Architecture
//!
//! The frame layer knows nothing about games, phases, or scoring. It only
//! guarantees that every value it hands out is a legal pin count.
//!
//! ```text
//! Frame (Roll, Round) → Game (phases, bonus rolls, scoring) → Facade
//! ```

mod error;
mod types;

pub use error::FrameError;
pub use types::{MAX_PINS, Roll, Round};
