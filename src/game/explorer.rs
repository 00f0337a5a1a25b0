//! Exploration mechanics
//!
//! Walks the mansion one choice at a time. The path from the hall to the
//! current room is kept on an explicit stack, so leaving a room always
//! returns to the room the player came from.

use super::CaseFile;
use crate::data::*;
use serde::{Deserialize, Serialize};

/// What the player asked to do in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Go(Direction),
    Exit,
}

impl Choice {
    pub const EXIT_KEY: char = 's';

    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'e' => Some(Choice::Go(Direction::Left)),
            'd' => Some(Choice::Go(Direction::Right)),
            Self::EXIT_KEY => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// A clue picked up on entering a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery<'m> {
    pub clue: &'m str,
    pub suspect: Suspect,
    /// False when the clue was already in the index
    pub first_time: bool,
    pub bucket: usize,
}

/// Result of one exploration step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'m> {
    Entered {
        room: &'m Room,
        discovery: Option<Discovery<'m>>,
    },
    /// Back in a room after leaving one of its children
    Returned { room: &'m Room },
    /// Nothing in that direction
    Blocked(Direction),
    Finished,
}

/// Exploration state: the path from the hall to the current room
#[derive(Debug, Clone)]
pub struct Explorer<'m> {
    root: &'m Room,
    path: Vec<&'m Room>,
    started: bool,
}

impl<'m> Explorer<'m> {
    pub fn new(mansion: &'m Mansion) -> Self {
        Self {
            root: mansion.root(),
            path: Vec::new(),
            started: false,
        }
    }

    /// Step into the first room
    pub fn start(&mut self, case: &mut CaseFile) -> Step<'m> {
        self.started = true;
        self.enter(self.root, case)
    }

    pub fn current(&self) -> Option<&'m Room> {
        self.path.last().copied()
    }

    /// Number of rooms between the hall and here, the hall counting as zero
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.path.is_empty()
    }

    pub fn choose(&mut self, choice: Choice, case: &mut CaseFile) -> Step<'m> {
        let Some(room) = self.current() else {
            return Step::Finished;
        };

        match choice {
            Choice::Go(direction) => match room.child(direction) {
                Some(next) => self.enter(next, case),
                None => {
                    tracing::debug!(room = %room.name, %direction, "no room that way");
                    Step::Blocked(direction)
                }
            },
            Choice::Exit => {
                self.path.pop();
                match self.current() {
                    Some(parent) => Step::Returned { room: parent },
                    None => {
                        tracing::debug!("left the mansion");
                        Step::Finished
                    }
                }
            }
        }
    }

    fn enter(&mut self, room: &'m Room, case: &mut CaseFile) -> Step<'m> {
        self.path.push(room);
        tracing::debug!(room = %room.name, depth = self.depth(), "entered room");

        let discovery = room.clue().map(|clue| case.record(clue));
        Step::Entered { room, discovery }
    }
}
