//! Scoring: one look-ahead walk over the flattened roll sequence.
//!
//! Rounds are flattened into the deliveries actually thrown (a strike is a
//! single roll, anything else is two) and the bonus rolls are appended.
//! A cursor then walks exactly ten frames over that sequence:
//!
//! - strike at the cursor: 10 + the next two rolls, cursor moves 1
//! - otherwise: the two rolls at the cursor, plus the roll after them if
//!   they make a spare, cursor moves 2
//!
//! Any roll past the end of the sequence counts as 0 pins. Because the
//! tenth frame's bonus rolls sit at the end of the same sequence, the
//! tenth frame needs no special case.

use std::fmt;

use serde::{Deserialize, Serialize};
use tenpin_frame::{MAX_PINS, Roll, Round};

use crate::MAX_ROUNDS;

/// Score of one frame on the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// 1-based frame number.
    pub frame: usize,
    pub round: Round,
    /// Pins for this frame including its strike/spare bonus.
    pub score: u32,
    /// Running total up to and including this frame.
    pub cumulative: u32,
    /// The frame is a strike or spare whose bonus rolls haven't been
    /// thrown yet, so `score` may still grow.
    pub pending: bool,
}

/// Frame-by-frame breakdown of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub frames: Vec<FrameScore>,
    pub bonus: Vec<Roll>,
    pub total: u32,
}

/// Result of scoring a single frame of the walk.
struct FrameWalk {
    score: u32,
    pending: bool,
}

fn pins_at(rolls: &[u8], index: usize) -> u32 {
    rolls.get(index).copied().map_or(0, u32::from)
}

fn flatten(rounds: &[Round], bonus: &[Roll]) -> Vec<u8> {
    rounds
        .iter()
        .flat_map(Round::rolls)
        .chain(bonus.iter().copied())
        .map(Roll::pins_hit)
        .collect()
}

fn walk(rolls: &[u8]) -> Vec<FrameWalk> {
    let strike = u32::from(MAX_PINS);
    let mut cursor = 0;
    let mut frames = Vec::with_capacity(MAX_ROUNDS);

    for _ in 0..MAX_ROUNDS {
        let first = pins_at(rolls, cursor);
        let frame = if first == strike {
            let walked = FrameWalk {
                score: strike + pins_at(rolls, cursor + 1) + pins_at(rolls, cursor + 2),
                pending: cursor + 2 >= rolls.len(),
            };
            cursor += 1;
            walked
        } else {
            let base = first + pins_at(rolls, cursor + 1);
            let spare = base == strike;
            let walked = FrameWalk {
                score: if spare { base + pins_at(rolls, cursor + 2) } else { base },
                pending: spare && cursor + 2 >= rolls.len(),
            };
            cursor += 2;
            walked
        };
        frames.push(frame);
    }

    frames
}

/// Total score of the given rounds and bonus rolls.
///
/// Missing rounds and rolls count as zero, so this is also the running
/// score of a game in progress.
pub fn calculate_score(rounds: &[Round], bonus: &[Roll]) -> u32 {
    walk(&flatten(rounds, bonus)).iter().map(|f| f.score).sum()
}

/// Per-frame breakdown for every recorded round.
pub fn scorecard(rounds: &[Round], bonus: &[Roll]) -> Scorecard {
    let walked = walk(&flatten(rounds, bonus));
    let mut cumulative = 0;

    let frames: Vec<FrameScore> = rounds
        .iter()
        .zip(walked)
        .enumerate()
        .map(|(i, (round, w))| {
            cumulative += w.score;
            FrameScore {
                frame: i + 1,
                round: *round,
                score: w.score,
                cumulative,
                pending: w.pending,
            }
        })
        .collect();

    Scorecard {
        frames,
        bonus: bonus.to_vec(),
        total: cumulative,
    }
}

impl Scorecard {
    /// Frames whose score is final.
    pub fn settled(&self) -> impl Iterator<Item = &FrameScore> {
        self.frames.iter().filter(|f| !f.pending)
    }
}

/// One line per frame, then the bonus rolls and the total.
impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            let marker = if frame.pending { "*" } else { "" };
            writeln!(
                f,
                "{:>2}  {:<3} {:>3}{:<1} {:>3}",
                frame.frame,
                frame.round.to_string(),
                frame.score,
                marker,
                frame.cumulative
            )?;
        }
        if !self.bonus.is_empty() {
            let bonus: Vec<String> = self.bonus.iter().map(Roll::to_string).collect();
            writeln!(f, "bonus {}", bonus.join(" "))?;
        }
        write!(f, "total {}", self.total)
    }
}
