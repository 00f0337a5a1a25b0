//! The accusation and its outcome

use super::{CaseFile, CaseOutcome, GameStats};
use crate::data::{SuspectLedger, ROSTER};
use serde::{Deserialize, Serialize};

/// The judge's decision on an accusation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub accused: String,
    pub evidence: u32,
    pub threshold: u32,
}

impl Verdict {
    /// Weigh the evidence against `accused`. Names are matched exactly;
    /// a name nobody was tied to simply has no evidence.
    pub fn decide(accused: &str, ledger: &SuspectLedger, threshold: u32) -> Self {
        let accused = accused.trim();
        let verdict = Self {
            accused: accused.to_string(),
            evidence: ledger.total_for(accused),
            threshold,
        };
        tracing::info!(
            accused,
            evidence = verdict.evidence,
            guilty = verdict.is_guilty(),
            "verdict"
        );
        verdict
    }

    pub fn is_guilty(&self) -> bool {
        self.evidence >= self.threshold
    }

    pub fn outcome(&self) -> CaseOutcome {
        if self.is_guilty() {
            CaseOutcome::Solved
        } else {
            CaseOutcome::Unresolved
        }
    }
}

/// Summary of a finished session
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub clues: Vec<String>,
    pub roster: Vec<&'static str>,
    pub verdict: Option<Verdict>,
    pub stats: GameStats,
}

impl CaseReport {
    pub fn new(case: &CaseFile, verdict: Option<Verdict>, stats: &GameStats) -> Self {
        Self {
            clues: case.clues.iter().map(str::to_string).collect(),
            roster: ROSTER.iter().map(|s| s.name()).collect(),
            verdict,
            stats: stats.clone(),
        }
    }

    pub fn outcome(&self) -> CaseOutcome {
        match &self.verdict {
            Some(verdict) => verdict.outcome(),
            None => CaseOutcome::NoClues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(calls: &[(&str, &str)]) -> SuspectLedger {
        let mut ledger = SuspectLedger::default();
        for (clue, suspect) in calls {
            ledger.associate(clue, suspect);
        }
        ledger
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ledger = ledger_with(&[
            ("Cinzas de cigarro no cinzeiro", "Sr. Monteiro"),
            ("Um cigarro apagado no chao", "Sr. Monteiro"),
            ("Uma faca com manchas de sangue", "Chef"),
        ]);

        let guilty = Verdict::decide("Sr. Monteiro", &ledger, 2);
        assert_eq!(guilty.evidence, 2);
        assert!(guilty.is_guilty());
        assert_eq!(guilty.outcome(), CaseOutcome::Solved);

        let weak = Verdict::decide("Chef", &ledger, 2);
        assert_eq!(weak.evidence, 1);
        assert_eq!(weak.outcome(), CaseOutcome::Unresolved);
    }

    #[test]
    fn test_unknown_name_has_no_evidence() {
        let ledger = ledger_with(&[
            ("Uma faca com manchas de sangue", "Chef"),
            ("Uma faca com manchas de sangue", "Chef"),
            ("Uma faca com manchas de sangue", "Chef"),
        ]);
        let verdict = Verdict::decide("Mordomo", &ledger, 2);
        assert_eq!(verdict.evidence, 0);
        assert!(!verdict.is_guilty());
    }

    #[test]
    fn test_accused_name_is_trimmed() {
        let ledger = ledger_with(&[("a", "Chef"), ("b", "Chef")]);
        let verdict = Verdict::decide("  Chef \r", &ledger, 2);
        assert_eq!(verdict.accused, "Chef");
        assert!(verdict.is_guilty());
    }

    #[test]
    fn test_report_lists_clues_alphabetically() {
        let mut case = CaseFile::default();
        case.record("Uma faca com manchas de sangue");
        case.record("Cinzas de cigarro no cinzeiro");
        case.record("Marcas de lama e botas sujas");

        let report = CaseReport::new(&case, None, &GameStats::default());
        assert_eq!(
            report.clues,
            [
                "Cinzas de cigarro no cinzeiro",
                "Marcas de lama e botas sujas",
                "Uma faca com manchas de sangue",
            ]
        );
        assert_eq!(report.roster.len(), 5);
        assert_eq!(report.roster[0], "Sr. Monteiro");
        assert_eq!(report.outcome(), CaseOutcome::NoClues);
    }
}
