//! Data structures for the mansion
//!
//! Defines the room map, the clue index, the suspect ledger and the rule
//! that ties clues to suspects.

pub mod clues;
pub mod ledger;
pub mod mansion;
pub mod suspects;

pub use clues::*;
pub use ledger::*;
pub use mansion::*;
pub use suspects::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which way to walk out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Key the player presses for this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Left => "Ir para a esquerda",
            Direction::Right => "Ir para a direita",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "esquerda"),
            Direction::Right => write!(f, "direita"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
