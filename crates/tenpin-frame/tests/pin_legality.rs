//! Property and wire-format tests for rolls and rounds.

use proptest::prelude::*;
use tenpin_frame::{FrameError, MAX_PINS, Roll, Round};

// =========================================================================
// Properties
// =========================================================================

proptest! {
    /// A roll exists iff its pin count is within 0..=10.
    #[test]
    fn prop_roll_range(pins in -50i32..50) {
        match Roll::new(pins) {
            Ok(roll) => {
                prop_assert!((0..=10).contains(&pins));
                prop_assert_eq!(i32::from(roll.pins_hit()), pins);
            }
            Err(err) => {
                prop_assert!(!(0..=10).contains(&pins));
                prop_assert_eq!(err, FrameError::InvalidRoll(pins));
            }
        }
    }

    /// A round of two legal rolls fails exactly when it needs more than ten pins.
    #[test]
    fn prop_round_pin_budget(first in 0i32..=10, second in 0i32..=10) {
        let result = Round::from_pins(first, second);
        if first + second > i32::from(MAX_PINS) {
            prop_assert!(
                matches!(result, Err(FrameError::InvalidRound { .. })),
                "expected InvalidRound for ({}, {})",
                first,
                second
            );
        } else {
            let round = result.unwrap();
            prop_assert_eq!(i32::from(round.sum()), first + second);
            prop_assert!(!(round.is_strike() && round.is_spare()));
            prop_assert_eq!(round.is_strike(), first == 10);
            prop_assert_eq!(round.is_spare(), first < 10 && first + second == 10);
        }
    }
}

// =========================================================================
// Wire format
// =========================================================================

#[test]
fn test_roll_serializes_as_bare_number() {
    let json = serde_json::to_string(&Roll::new(7).unwrap()).unwrap();
    assert_eq!(json, "7");
}

#[test]
fn test_roll_deserialization_is_range_checked() {
    let ok: Roll = serde_json::from_str("10").unwrap();
    assert_eq!(ok, Roll::STRIKE);

    assert!(serde_json::from_str::<Roll>("11").is_err());
    assert!(serde_json::from_str::<Roll>("-1").is_err());
}

#[test]
fn test_round_deserialization_is_pin_checked() {
    let round: Round = serde_json::from_str(r#"{"first":6,"second":4}"#).unwrap();
    assert!(round.is_spare());

    let err = serde_json::from_str::<Round>(r#"{"first":6,"second":5}"#).unwrap_err();
    assert!(err.to_string().contains("more than 10 pins"));
}

#[test]
fn test_round_wire_shape() {
    let json = serde_json::to_value(Round::STRIKE).unwrap();
    assert_eq!(json, serde_json::json!({ "first": 10, "second": 0 }));
}
