//! Integration tests for game sequencing and scoring.

use proptest::prelude::*;
use tenpin_frame::{Roll, Round};
use tenpin_game::{
    Game, GameConfig, GameError, GamePhase, MAX_ROUNDS, SPARE_BONUS_ROLLS, STRIKE_BONUS_ROLLS,
};

// =========================================================================
// Helpers
// =========================================================================

fn round(first: i32, second: i32) -> Round {
    Round::from_pins(first, second).unwrap()
}

fn roll(pins: i32) -> Roll {
    Roll::new(pins).unwrap()
}

fn play_all(game: &mut Game, r: Round) {
    for _ in 0..MAX_ROUNDS {
        game.play_round(r).unwrap();
    }
}

fn play_all_but_last(game: &mut Game, r: Round) {
    for _ in 0..MAX_ROUNDS - 1 {
        game.play_round(r).unwrap();
    }
}

/// Finishes and completes a game whose tenth round owes no bonus.
fn finish_and_complete(game: &mut Game) -> u32 {
    game.finish().unwrap();
    game.complete().unwrap();
    game.calculate_score().unwrap()
}

// =========================================================================
// Round sequencing
// =========================================================================

#[test]
fn test_eleventh_round_is_game_over() {
    let mut game = Game::new();
    play_all(&mut game, round(0, 0));
    assert_eq!(
        game.play_round(round(0, 0)),
        Err(GameError::GameOver(GamePhase::Open))
    );
    assert_eq!(game.rounds().len(), MAX_ROUNDS);
}

#[test]
fn test_finish_before_ten_rounds_is_not_over() {
    let mut game = Game::new();
    assert_eq!(game.finish(), Err(GameError::GameNotOver(GamePhase::Open)));

    play_all_but_last(&mut game, round(3, 3));
    assert_eq!(game.finish(), Err(GameError::GameNotOver(GamePhase::Open)));
}

#[test]
fn test_phases_advance_in_order() {
    let mut game = Game::new();
    play_all(&mut game, round(1, 2));
    assert_eq!(game.phase(), GamePhase::Open);
    game.finish().unwrap();
    assert_eq!(game.phase(), GamePhase::Finished);
    game.complete().unwrap();
    assert_eq!(game.phase(), GamePhase::Complete);
}

// =========================================================================
// Scoring
// =========================================================================

#[test]
fn test_gutter_game_scores_zero() {
    let mut game = Game::new();
    play_all(&mut game, round(0, 0));
    assert_eq!(finish_and_complete(&mut game), 0);
}

#[test]
fn test_one_pin_each_round_scores_ten() {
    let mut game = Game::new();
    play_all(&mut game, round(1, 0));
    assert_eq!(finish_and_complete(&mut game), 10);
}

#[test]
fn test_spare_then_open_round() {
    let mut game = Game::new();
    game.play_round(round(5, 5)).unwrap();
    game.play_round(round(3, 4)).unwrap();
    for _ in 2..MAX_ROUNDS {
        game.play_round(round(0, 0)).unwrap();
    }
    assert_eq!(finish_and_complete(&mut game), 5 + 5 + 3 + 3 + 4);
}

#[test]
fn test_strike_then_open_round() {
    let mut game = Game::new();
    game.play_round(Round::STRIKE).unwrap();
    game.play_round(round(3, 4)).unwrap();
    for _ in 2..MAX_ROUNDS {
        game.play_round(round(0, 0)).unwrap();
    }
    assert_eq!(finish_and_complete(&mut game), 10 + 3 + 4 + 3 + 4);
}

#[test]
fn test_regular_game() {
    let default = round(3, 3);
    let mut game = Game::new();
    for r in [
        default,
        default,
        default,
        default,
        round(5, 5),
        default,
        Round::STRIKE,
        default,
        default,
        default,
    ] {
        game.play_round(r).unwrap();
    }
    // eight plain rounds, a spare picking up 3, a strike picking up 3+3
    assert_eq!(finish_and_complete(&mut game), 6 * 8 + (10 + 3) + (10 + 6));
}

#[test]
fn test_perfect_game() {
    let mut game = Game::new();
    play_all(&mut game, Round::STRIKE);
    game.finish().unwrap();
    assert_eq!(game.bonus_rolls_owed(), STRIKE_BONUS_ROLLS);
    game.play_extra_roll(Roll::STRIKE).unwrap();
    game.play_extra_roll(Roll::STRIKE).unwrap();
    game.complete().unwrap();
    assert_eq!(game.calculate_score().unwrap(), 300);
}

// =========================================================================
// Bonus rolls
// =========================================================================

#[test]
fn test_tenth_frame_strike_takes_two_bonus_rolls() {
    let mut game = Game::new();
    play_all_but_last(&mut game, round(0, 0));
    game.play_round(Round::STRIKE).unwrap();
    game.finish().unwrap();

    game.play_extra_roll(roll(3)).unwrap();
    game.play_extra_roll(roll(5)).unwrap();
    assert_eq!(
        game.play_extra_roll(roll(1)),
        Err(GameError::GameOver(GamePhase::Finished))
    );

    game.complete().unwrap();
    assert_eq!(game.calculate_score().unwrap(), 10 + 3 + 5);
}

#[test]
fn test_tenth_frame_spare_takes_one_bonus_roll() {
    let mut game = Game::new();
    play_all_but_last(&mut game, round(0, 0));
    game.play_round(round(5, 5)).unwrap();
    game.finish().unwrap();
    assert_eq!(game.bonus_rolls_owed(), SPARE_BONUS_ROLLS);

    assert_eq!(
        game.complete(),
        Err(GameError::GameNotOver(GamePhase::Finished))
    );

    game.play_extra_roll(roll(5)).unwrap();
    assert_eq!(
        game.play_extra_roll(roll(5)),
        Err(GameError::GameOver(GamePhase::Finished))
    );

    game.complete().unwrap();
    assert_eq!(game.calculate_score().unwrap(), 15);
}

#[test]
fn test_open_tenth_frame_owes_no_bonus() {
    let mut game = Game::new();
    play_all(&mut game, round(0, 0));
    game.finish().unwrap();
    assert_eq!(
        game.play_extra_roll(roll(5)),
        Err(GameError::GameOver(GamePhase::Finished))
    );
}

#[test]
fn test_strike_with_pending_bonus_blocks_completion() {
    let mut game = Game::new();
    play_all(&mut game, Round::STRIKE);
    game.finish().unwrap();
    game.play_extra_roll(Roll::STRIKE).unwrap();
    assert_eq!(game.bonus_rolls_remaining(), 1);
    assert!(matches!(game.complete(), Err(GameError::GameNotOver(_))));
}

// =========================================================================
// Scorecard
// =========================================================================

#[test]
fn test_scorecard_marks_pending_bonus_in_finished_phase() {
    let mut game = Game::new();
    play_all_but_last(&mut game, round(2, 2));
    game.play_round(round(6, 4)).unwrap();
    game.finish().unwrap();

    let card = game.scorecard();
    assert_eq!(card.frames.len(), MAX_ROUNDS);
    assert!(card.frames[MAX_ROUNDS - 1].pending);

    game.play_extra_roll(roll(7)).unwrap();
    let card = game.scorecard();
    assert!(!card.frames[MAX_ROUNDS - 1].pending);
    assert_eq!(card.frames[MAX_ROUNDS - 1].score, 17);
    assert_eq!(card.total, 4 * 9 + 17);
}

#[test]
fn test_scorecard_serializes_to_json() {
    let mut game = Game::new();
    play_all(&mut game, round(4, 4));
    game.finish().unwrap();
    game.complete().unwrap();

    let json = serde_json::to_value(game.scorecard()).unwrap();
    assert_eq!(json["total"], 80);
    assert_eq!(json["frames"][0]["round"]["first"], 4);
    assert_eq!(json["frames"][9]["cumulative"], 80);
}

// =========================================================================
// Properties
// =========================================================================

fn any_round() -> impl Strategy<Value = Round> {
    (0i32..=10)
        .prop_flat_map(|first| (Just(first), 0..=(10 - first)))
        .prop_map(|(first, second)| Round::from_pins(first, second).unwrap())
}

proptest! {
    /// Any legal game completes with a score between its raw pin count and 300.
    #[test]
    fn prop_score_bounds(
        rounds in proptest::collection::vec(any_round(), MAX_ROUNDS),
        bonus in proptest::collection::vec(0i32..=10, 2),
    ) {
        let mut game = Game::with_config(GameConfig {
            check_bonus_pins: false,
            ..GameConfig::default()
        });
        for r in &rounds {
            game.play_round(*r).unwrap();
        }
        game.finish().unwrap();
        for pins in bonus.iter().take(game.bonus_rolls_owed()) {
            game.play_extra_roll(Roll::new(*pins).unwrap()).unwrap();
        }
        game.complete().unwrap();

        let score = game.calculate_score().unwrap();
        let raw: u32 = rounds.iter().map(|r| u32::from(r.sum())).sum();
        prop_assert!(score >= raw);
        prop_assert!(score <= 300);
        prop_assert_eq!(score, game.scorecard().total);
    }
}
