//! Reading the player's input
//!
//! Navigation keys are read one non-blank character at a time, so `eed`
//! typed on one line counts as three choices. The accusation is read as
//! a whole line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Pulls keys and lines out of a buffered reader
pub struct Prompt<R> {
    reader: R,
    pending: VecDeque<char>,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next non-blank character, or `None` once the input is exhausted
    pub fn read_key(&mut self) -> io::Result<Option<char>> {
        loop {
            while let Some(c) = self.pending.pop_front() {
                if !c.is_whitespace() {
                    return Ok(Some(c));
                }
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    /// Skips blank input, then returns the rest of the current line
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        loop {
            while self.pending.front().is_some_and(|c| c.is_whitespace()) {
                self.pending.pop_front();
            }
            if !self.pending.is_empty() {
                let line: String = self.pending.drain(..).collect();
                return Ok(Some(line.trim_end().to_string()));
            }
            if !self.fill()? {
                return Ok(None);
            }
        }
    }

    // Bytes that are not UTF-8 decode to U+FFFD, which is just another
    // unknown key or part of an unknown name.
    fn fill(&mut self) -> io::Result<bool> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(false);
        }
        let line = String::from_utf8_lossy(&buf);
        self.pending
            .extend(line.trim_end_matches(['\n', '\r']).chars());
        Ok(true)
    }
}
