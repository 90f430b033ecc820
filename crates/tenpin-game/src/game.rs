//! The game state machine: rounds, then bonus rolls, then a score.
//!
//! Every mutating call checks the current [`GamePhase`] first and fails
//! without touching the game if the call doesn't belong there. A failed
//! call can be followed by a corrected one; the game is never left
//! half-updated.

use tenpin_frame::{Roll, Round};

use crate::{GameConfig, GameError, GamePhase, Scorecard, ScorePolicy, score};

/// Frames in a game.
pub const MAX_ROUNDS: usize = 10;

/// Bonus rolls earned by a strike in the tenth frame.
pub const STRIKE_BONUS_ROLLS: usize = 2;

/// Bonus rolls earned by a spare in the tenth frame.
pub const SPARE_BONUS_ROLLS: usize = 1;

/// A single player's game.
///
/// ```
/// use tenpin_frame::{Roll, Round};
/// use tenpin_game::{Game, GamePhase};
///
/// let mut game = Game::new();
/// for _ in 0..10 {
///     game.play_round(Round::STRIKE)?;
/// }
/// game.finish()?;
/// game.play_extra_roll(Roll::STRIKE)?;
/// game.play_extra_roll(Roll::STRIKE)?;
/// game.complete()?;
///
/// assert_eq!(game.phase(), GamePhase::Complete);
/// assert_eq!(game.calculate_score()?, 300);
/// # Ok::<(), tenpin_game::GameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    rounds: Vec<Round>,
    bonus: Vec<Roll>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates an empty game with the default config.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Open,
            rounds: Vec::with_capacity(MAX_ROUNDS),
            bonus: Vec::with_capacity(STRIKE_BONUS_ROLLS),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn bonus_rolls(&self) -> &[Roll] {
        &self.bonus
    }

    /// Bonus rolls earned by the tenth round: 2 for a strike, 1 for a
    /// spare, 0 otherwise (or while fewer than ten rounds are recorded).
    pub fn bonus_rolls_owed(&self) -> usize {
        if self.rounds.len() < MAX_ROUNDS {
            return 0;
        }
        match self.rounds.last() {
            Some(r) if r.is_strike() => STRIKE_BONUS_ROLLS,
            Some(r) if r.is_spare() => SPARE_BONUS_ROLLS,
            _ => 0,
        }
    }

    pub fn bonus_rolls_remaining(&self) -> usize {
        self.bonus_rolls_owed().saturating_sub(self.bonus.len())
    }

    /// Records the next round.
    ///
    /// # Errors
    /// `GameOver` once ten rounds are recorded or the game has moved past
    /// `Open`.
    pub fn play_round(&mut self, round: Round) -> Result<(), GameError> {
        if !self.phase.accepts_rounds() || self.rounds.len() >= MAX_ROUNDS {
            return Err(self.reject("play_round", GameError::GameOver(self.phase)));
        }

        self.rounds.push(round);
        tracing::debug!(
            frame = self.rounds.len(),
            %round,
            "round recorded"
        );
        Ok(())
    }

    /// Closes the ten recorded rounds and opens the bonus-roll phase.
    ///
    /// # Errors
    /// `GameNotOver` with fewer than ten rounds; `GameOver` if the game is
    /// already past `Open`.
    pub fn finish(&mut self) -> Result<(), GameError> {
        if !self.phase.accepts_rounds() {
            return Err(self.reject("finish", GameError::GameOver(self.phase)));
        }
        if self.rounds.len() < MAX_ROUNDS {
            return Err(self.reject("finish", GameError::GameNotOver(self.phase)));
        }

        self.transition(GamePhase::Finished);
        tracing::info!(
            rounds = self.rounds.len(),
            owed = self.bonus_rolls_owed(),
            "rounds finished"
        );
        Ok(())
    }

    /// Records one bonus roll earned by the tenth round.
    ///
    /// # Errors
    /// - `GameNotOver` while rounds are still being recorded.
    /// - `GameOver` when no bonus roll is owed, all owed rolls are in, or
    ///   the game is complete.
    /// - `Frame(InvalidRound)` when the two bonus rolls after a tenth-frame
    ///   strike exceed ten pins without the first being a strike (only
    ///   with `check_bonus_pins`).
    pub fn play_extra_roll(&mut self, roll: Roll) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Open => {
                return Err(self.reject("play_extra_roll", GameError::GameNotOver(self.phase)));
            }
            GamePhase::Complete => {
                return Err(self.reject("play_extra_roll", GameError::GameOver(self.phase)));
            }
            GamePhase::Finished => {}
        }
        if self.bonus_rolls_remaining() == 0 {
            return Err(self.reject("play_extra_roll", GameError::GameOver(self.phase)));
        }

        if self.config.check_bonus_pins {
            if let Some(&first) = self.bonus.first() {
                if !first.is_strike() {
                    Round::new(first, roll)
                        .map_err(|e| self.reject("play_extra_roll", e.into()))?;
                }
            }
        }

        self.bonus.push(roll);
        tracing::debug!(
            %roll,
            remaining = self.bonus_rolls_remaining(),
            "bonus roll recorded"
        );
        Ok(())
    }

    /// Marks the game complete once every owed bonus roll is in.
    ///
    /// # Errors
    /// `GameNotOver` before `finish` or while bonus rolls are pending;
    /// `GameOver` if already complete.
    pub fn complete(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Open => {
                return Err(self.reject("complete", GameError::GameNotOver(self.phase)));
            }
            GamePhase::Complete => {
                return Err(self.reject("complete", GameError::GameOver(self.phase)));
            }
            GamePhase::Finished => {}
        }
        if self.bonus_rolls_remaining() > 0 {
            return Err(self.reject("complete", GameError::GameNotOver(self.phase)));
        }

        self.transition(GamePhase::Complete);
        tracing::info!(
            score = score::calculate_score(&self.rounds, &self.bonus),
            "game complete"
        );
        Ok(())
    }

    /// Scores the game.
    ///
    /// Under [`ScorePolicy::OnCompletion`] this fails with `GameNotOver`
    /// until the game is `Complete`. Under [`ScorePolicy::Running`] it
    /// always succeeds, counting rolls not yet thrown as zero.
    pub fn calculate_score(&self) -> Result<u32, GameError> {
        if self.config.score_policy == ScorePolicy::OnCompletion && !self.phase.is_complete() {
            return Err(self.reject("calculate_score", GameError::GameNotOver(self.phase)));
        }
        Ok(score::calculate_score(&self.rounds, &self.bonus))
    }

    /// Frame-by-frame breakdown of everything recorded so far.
    ///
    /// Available in every phase regardless of the score policy; strikes
    /// and spares still waiting on their bonus are marked `pending`.
    pub fn scorecard(&self) -> Scorecard {
        score::scorecard(&self.rounds, &self.bonus)
    }

    fn transition(&mut self, target: GamePhase) {
        debug_assert!(self.phase.can_transition_to(target));
        tracing::debug!(from = %self.phase, to = %target, "phase transition");
        self.phase = target;
    }

    fn reject(&self, op: &'static str, err: GameError) -> GameError {
        tracing::debug!(op, phase = %self.phase, error = %err, "operation rejected");
        err
    }
}
