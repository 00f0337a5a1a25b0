//! Core game logic and state management

pub mod explorer;
pub mod verdict;

pub use explorer::{Choice, Discovery, Explorer, Step};
pub use verdict::{CaseReport, Verdict};

use crate::data::*;
use crate::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tunables for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Buckets in the suspect ledger
    pub bucket_count: usize,
    /// Evidence needed for a conviction
    pub accusation_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKETS,
            accusation_threshold: 2,
        }
    }
}

impl GameConfig {
    /// The bucket count is checked when the ledger is built
    pub fn validate(&self) -> Result<()> {
        if self.accusation_threshold == 0 {
            return Err(GameError::InvalidConfig("accusation_threshold must be positive").into());
        }
        Ok(())
    }
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    Accusing,
    Closed(CaseOutcome),
}

/// How the case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseOutcome {
    Solved,         // Enough evidence against the accused
    Unresolved,     // Accusation without enough evidence
    NoClues,        // Nothing was found, no accusation made
}

/// Everything the detective has gathered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFile {
    pub clues: ClueIndex,
    pub ledger: SuspectLedger,
}

impl CaseFile {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Ok(Self {
            clues: ClueIndex::new(),
            ledger: SuspectLedger::new(config.bucket_count)?,
        })
    }

    /// File a clue and charge it to whoever it points at
    pub fn record<'c>(&mut self, clue: &'c str) -> Discovery<'c> {
        let suspect = Suspect::classify(clue);
        let first_time = self.clues.insert(clue);
        let (bucket, _) = self.ledger.associate(clue, suspect.name());

        tracing::info!(clue, %suspect, bucket, first_time, "clue recorded");
        Discovery {
            clue,
            suspect,
            first_time,
            bucket,
        }
    }
}

/// Game statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub rooms_entered: u32,
    /// Names of the rooms seen at least once
    pub visited: BTreeSet<String>,
    pub clues_recorded: u32,
    pub invalid_choices: u32,
    pub started_at: DateTime<Utc>,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            rooms_entered: 0,
            visited: BTreeSet::new(),
            clues_recorded: 0,
            invalid_choices: 0,
            started_at: Utc::now(),
        }
    }
}

impl GameStats {
    pub fn rooms_visited(&self) -> usize {
        self.visited.len()
    }

    /// Count what a step did
    pub fn track(&mut self, step: &Step<'_>) {
        match step {
            Step::Entered { room, discovery } => {
                self.rooms_entered += 1;
                if !self.visited.contains(&room.name) {
                    self.visited.insert(room.name.clone());
                }
                if discovery.is_some() {
                    self.clues_recorded += 1;
                }
            }
            Step::Blocked(_) => self.invalid_choices += 1,
            Step::Returned { .. } | Step::Finished => {}
        }
    }
}

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    pub id: Id,
    pub config: GameConfig,
    pub phase: GamePhase,
    pub mansion: Mansion,
    pub case: CaseFile,
    pub stats: GameStats,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let case = CaseFile::new(&config)?;
        let game = Self {
            id: Id::new(),
            config,
            phase: GamePhase::Exploring,
            mansion: Mansion::build(),
            case,
            stats: GameStats::default(),
        };

        tracing::info!(session = %game.id, rooms = game.mansion.room_count(), "new investigation");
        Ok(game)
    }

    /// Leave the mansion. Goes to the accusation when there is something
    /// to accuse with, otherwise closes the case.
    pub fn finish_exploration(&mut self) -> GamePhase {
        self.phase = if self.case.clues.is_empty() {
            GamePhase::Closed(CaseOutcome::NoClues)
        } else {
            GamePhase::Accusing
        };
        self.phase
    }

    /// Accuse someone by name
    pub fn accuse(&mut self, accused: &str) -> Result<Verdict> {
        if self.phase != GamePhase::Accusing {
            return Err(GameError::InvalidState(format!("cannot accuse during {:?}", self.phase)).into());
        }
        let verdict = Verdict::decide(accused, &self.case.ledger, self.config.accusation_threshold);
        self.phase = GamePhase::Closed(verdict.outcome());
        Ok(verdict)
    }

    pub fn report(&self, verdict: Option<&Verdict>) -> CaseReport {
        CaseReport::new(&self.case, verdict.cloned(), &self.stats)
    }

    /// One-line summary for the status bar
    pub fn check_status(&self) -> String {
        format!(
            "Salas visitadas: {} de {} | Pistas: {} | Tempo: {}s",
            self.stats.rooms_visited(),
            self.mansion.room_count(),
            self.case.clues.len(),
            (Utc::now() - self.stats.started_at).num_seconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(GameConfig::default().validate().is_ok());
        let no_buckets = GameConfig {
            bucket_count: 0,
            ..GameConfig::default()
        };
        let err = Game::new(no_buckets).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::InvalidConfig("bucket_count must be positive"))
        ));

        let no_threshold = GameConfig {
            accusation_threshold: 0,
            ..GameConfig::default()
        };
        assert!(no_threshold.validate().is_err());
        assert!(Game::new(no_threshold).is_err());
    }

    #[test]
    fn test_record_classifies_and_files() {
        let mut case = CaseFile::default();
        let found = case.record("Marcas de lama e botas sujas");
        assert_eq!(found.suspect, Suspect::Gardener);
        assert_eq!(found.bucket, 9);
        assert!(found.first_time);
        assert!(!case.record("Marcas de lama e botas sujas").first_time);
        assert_eq!(case.ledger.total_for("Jardineiro"), 2);
        assert_eq!(case.clues.len(), 1);
    }

    #[test]
    fn test_no_clues_closes_the_case() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.finish_exploration(), GamePhase::Closed(CaseOutcome::NoClues));
        assert!(game.accuse("Chef").is_err());
    }

    #[test]
    fn test_accusation_closes_the_case() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        game.case.record("Uma faca com manchas de sangue");
        game.case.record("Uma faca com manchas de sangue");
        assert_eq!(game.finish_exploration(), GamePhase::Accusing);

        let verdict = game.accuse("Chef").unwrap();
        assert_eq!(verdict.evidence, 2);
        assert_eq!(game.phase, GamePhase::Closed(CaseOutcome::Solved));
        assert!(game.accuse("Chef").is_err());
    }

    #[test]
    fn test_stats_track_steps() {
        let game = Game::new(GameConfig::default()).unwrap();
        let mut case = game.case.clone();
        let mut stats = GameStats::default();
        let mut explorer = Explorer::new(&game.mansion);

        stats.track(&explorer.start(&mut case));
        stats.track(&explorer.choose(Choice::Go(Direction::Right), &mut case));
        stats.track(&explorer.choose(Choice::Go(Direction::Left), &mut case));
        stats.track(&explorer.choose(Choice::Go(Direction::Left), &mut case));
        stats.track(&explorer.choose(Choice::Exit, &mut case));

        assert_eq!(stats.rooms_entered, 3);
        assert_eq!(stats.clues_recorded, 1);
        assert_eq!(stats.invalid_choices, 1);
        assert!(game.check_status().contains("de 9"));
    }

    #[test]
    fn test_revisits_do_not_inflate_rooms_visited() {
        let mut game = Game::new(GameConfig::default()).unwrap();
        let mut case = game.case.clone();
        let mut stats = GameStats::default();
        let mut explorer = Explorer::new(&game.mansion);

        stats.track(&explorer.start(&mut case));
        for _ in 0..10 {
            stats.track(&explorer.choose(Choice::Go(Direction::Right), &mut case));
            stats.track(&explorer.choose(Choice::Exit, &mut case));
        }

        assert_eq!(stats.rooms_entered, 11);
        assert_eq!(stats.rooms_visited(), 2);
        game.stats = stats;
        assert!(game.check_status().starts_with("Salas visitadas: 2 de 9"));
    }
}
