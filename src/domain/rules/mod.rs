//! Domain rules - Authorization and dice arithmetic

pub mod dice;
pub mod permissions;

pub use dice::{DiceRoll, DieSource, RandomDice, ScriptedDice};
pub use permissions::{authorize, Action};
