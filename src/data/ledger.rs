//! Suspect ledger
//!
//! A fixed-size hash table keyed by clue text. Every clue keeps its own
//! chain of suspect tallies, and colliding clues share a bucket without
//! sharing tallies.

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Bucket count used by the game
pub const DEFAULT_BUCKETS: usize = 10;

/// Evidence count for one suspect under one clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectTally {
    pub suspect: String,
    pub count: u32,
}

/// A clue and the suspects it has been tied to, in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub clue: String,
    pub suspects: Vec<SuspectTally>,
}

impl LedgerEntry {
    fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            suspects: Vec::new(),
        }
    }

    fn record(&mut self, suspect: &str) -> u32 {
        if let Some(tally) = self.suspects.iter_mut().find(|t| t.suspect == suspect) {
            tally.count += 1;
            return tally.count;
        }
        self.suspects.push(SuspectTally {
            suspect: suspect.to_string(),
            count: 1,
        });
        1
    }
}

/// Sum of the key's bytes, modulo the bucket count
pub fn bucket_index(key: &str, buckets: usize) -> usize {
    let sum = key.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    sum % buckets
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectLedger {
    buckets: Vec<Option<Vec<LedgerEntry>>>,
}

impl SuspectLedger {
    pub fn new(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(GameError::InvalidConfig("bucket_count must be positive").into());
        }
        Ok(Self {
            buckets: vec![None; buckets],
        })
    }

    pub fn hash(&self, key: &str) -> usize {
        bucket_index(key, self.buckets.len())
    }

    /// Tie a clue to a suspect. Repeats add to the suspect's count.
    /// Returns the bucket used and the suspect's count for this clue.
    pub fn associate(&mut self, clue: &str, suspect: &str) -> (usize, u32) {
        let index = self.hash(clue);
        let bucket = self.buckets[index].get_or_insert_with(Vec::new);

        let position = match bucket.iter().position(|e| e.clue == clue) {
            Some(position) => position,
            None => {
                bucket.push(LedgerEntry::new(clue));
                bucket.len() - 1
            }
        };
        let count = bucket[position].record(suspect);

        tracing::trace!(clue, suspect, bucket = index, count, "ledger updated");
        (index, count)
    }

    /// First suspect ever tied to this exact clue
    pub fn find_primary_suspect(&self, clue: &str) -> Option<&str> {
        self.entry(clue)?
            .suspects
            .first()
            .map(|t| t.suspect.as_str())
    }

    pub fn entry(&self, clue: &str) -> Option<&LedgerEntry> {
        self.buckets[self.hash(clue)]
            .as_ref()?
            .iter()
            .find(|e| e.clue == clue)
    }

    /// All evidence against a suspect, across every clue
    pub fn total_for(&self, suspect: &str) -> u32 {
        self.entries()
            .flat_map(|e| e.suspects.iter())
            .filter(|t| t.suspect == suspect)
            .map(|t| t.count)
            .sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.buckets.iter().flatten().flatten()
    }

    /// Entries stored in one bucket, oldest first
    pub fn bucket(&self, index: usize) -> &[LedgerEntry] {
        self.buckets
            .get(index)
            .and_then(|b| b.as_deref())
            .unwrap_or(&[])
    }
}

impl Default for SuspectLedger {
    fn default() -> Self {
        Self {
            buckets: vec![None; DEFAULT_BUCKETS],
        }
    }
}
