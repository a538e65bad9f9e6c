//! Dice roller
//!
//! Grammar: `<count>? 'd' <sides> (('+'|'-') <modifier>)?`, matched from the
//! start of the argument. A missing count means one die, a missing modifier
//! means zero. A count of zero is accepted and rolls nothing, leaving only
//! the modifier.

use std::collections::VecDeque;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex_lite::Regex;

use crate::application::errors::CommandError;

/// Roll used when `roll` is given no argument.
pub const DEFAULT_ROLL: &str = "1d20";

/// Upper bound on dice rolled by one command.
pub const MAX_DICE: u32 = 1000;

static DICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]*)d([1-9][0-9]*)([+-][0-9]+)?").expect("dice pattern is valid")
});

/// Source of individual die results.
pub trait DieSource: Send {
    /// One uniform draw in `1..=sides`.
    fn draw(&mut self, sides: u32) -> u32;
}

/// Die source backed by a seeded `StdRng`.
pub struct RandomDice {
    rng: StdRng,
}

impl RandomDice {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDice {
    fn default() -> Self {
        Self::new()
    }
}

impl DieSource for RandomDice {
    fn draw(&mut self, sides: u32) -> u32 {
        self.rng.gen_range(1..=sides)
    }
}

/// Die source that replays fixed results, clamped to the die's range.
/// Falls back to 1 once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    results: VecDeque<u32>,
}

impl ScriptedDice {
    pub fn new(results: impl IntoIterator<Item = u32>) -> Self {
        Self {
            results: results.into_iter().collect(),
        }
    }
}

impl DieSource for ScriptedDice {
    fn draw(&mut self, sides: u32) -> u32 {
        self.results.pop_front().unwrap_or(1).clamp(1, sides)
    }
}

/// A parsed dice expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceRoll {
    pub count: u32,
    pub sides: u32,
    pub modifier: i64,
}

impl DiceRoll {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let invalid = || CommandError::InvalidArgument("Invalid dice string.".to_string());

        let caps = DICE_PATTERN.captures(input).ok_or_else(invalid)?;

        let count = match caps.get(1).map(|m| m.as_str()) {
            Some("") | None => 1,
            Some(digits) => digits.parse::<u32>().map_err(|_| invalid())?,
        };
        let sides = caps
            .get(2)
            .ok_or_else(invalid)?
            .as_str()
            .parse::<u32>()
            .map_err(|_| invalid())?;
        let modifier = match caps.get(3) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| invalid())?,
            None => 0,
        };

        if count > MAX_DICE {
            return Err(CommandError::InvalidArgument(format!(
                "Too many dice, the limit is {}.",
                MAX_DICE
            )));
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Sum `count` draws from `dice` and apply the modifier.
    pub fn roll(&self, dice: &mut dyn DieSource) -> i64 {
        let total: i64 = (0..self.count)
            .map(|_| i64::from(dice.draw(self.sides)))
            .sum();
        total.saturating_add(self.modifier)
    }

    /// Smallest possible result.
    pub fn min(&self) -> i64 {
        i64::from(self.count).saturating_add(self.modifier)
    }

    /// Largest possible result.
    pub fn max(&self) -> i64 {
        (i64::from(self.count) * i64::from(self.sides)).saturating_add(self.modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_expression() {
        assert_eq!(
            DiceRoll::parse("2d6+3"),
            Ok(DiceRoll { count: 2, sides: 6, modifier: 3 })
        );
        assert_eq!(
            DiceRoll::parse("3d8-2"),
            Ok(DiceRoll { count: 3, sides: 8, modifier: -2 })
        );
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(
            DiceRoll::parse("d20"),
            Ok(DiceRoll { count: 1, sides: 20, modifier: 0 })
        );
        assert_eq!(
            DiceRoll::parse(DEFAULT_ROLL),
            Ok(DiceRoll { count: 1, sides: 20, modifier: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_bad_strings() {
        for bad in ["", "abc", "2d0", "2d", "d-4", "x2d6", "2D6"] {
            assert!(DiceRoll::parse(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        assert_eq!(
            DiceRoll::parse("2d6+3 for damage"),
            Ok(DiceRoll { count: 2, sides: 6, modifier: 3 })
        );
        assert_eq!(
            DiceRoll::parse("1d6+"),
            Ok(DiceRoll { count: 1, sides: 6, modifier: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_overflow_and_too_many_dice() {
        assert!(DiceRoll::parse("99999999999d6").is_err());
        assert!(DiceRoll::parse("1d99999999999").is_err());
        assert!(DiceRoll::parse("1001d6").is_err());
        assert!(DiceRoll::parse("1000d6").is_ok());
    }

    #[test]
    fn test_roll_with_scripted_draws() {
        let roll = DiceRoll::parse("2d6+3").unwrap();
        let mut dice = ScriptedDice::new([4, 5]);
        assert_eq!(roll.roll(&mut dice), 12);
    }

    #[test]
    fn test_zero_count_yields_modifier() {
        let roll = DiceRoll::parse("0d6+4").unwrap();
        let mut dice = ScriptedDice::new([6, 6]);
        assert_eq!(roll.roll(&mut dice), 4);
        assert_eq!(roll.min(), 4);
        assert_eq!(roll.max(), 4);
    }

    #[test]
    fn test_one_sided_die_always_one() {
        let roll = DiceRoll::parse("1d1").unwrap();
        let mut dice = RandomDice::seeded(7);
        for _ in 0..100 {
            assert_eq!(roll.roll(&mut dice), 1);
        }
    }

    #[test]
    fn test_random_rolls_stay_in_bounds() {
        let mut dice = RandomDice::seeded(42);
        for expr in ["3d6", "2d10-5", "4d4+7", "d100", "0d8-3"] {
            let roll = DiceRoll::parse(expr).unwrap();
            for _ in 0..200 {
                let result = roll.roll(&mut dice);
                assert!(
                    (roll.min()..=roll.max()).contains(&result),
                    "{} rolled {} outside [{}, {}]",
                    expr,
                    result,
                    roll.min(),
                    roll.max()
                );
            }
        }
    }
}
