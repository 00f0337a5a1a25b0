//! Detective Quest: Mystery Mansion
//!
//! A console mystery game where you walk the rooms of a mansion, collect
//! clues and accuse the culprit once you think you have enough evidence.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The mansion is a binary tree of rooms, walked left/right
//! - **Clues**: Every clue found is filed alphabetically, without duplicates
//! - **Suspects**: Each clue points at a suspect and adds to their evidence
//! - **Accusation**: At least two pieces of evidence are needed to convict
//!
//! # Architecture
//!
//! - `data` - Mansion map, clue index, suspect ledger and classification
//! - `game` - Session state, exploration state machine, verdict
//! - `console` - Prompt reader, themed output and the interactive session

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Invalid game state: {0}")]
    InvalidState(String),
}
