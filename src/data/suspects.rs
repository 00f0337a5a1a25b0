//! Suspects and the rule that links a clue to one of them

use serde::{Deserialize, Serialize};

/// Everyone a clue can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suspect {
    Monteiro,
    Oliveira,
    Gardener,
    Librarian,
    Chef,
    Unknown,
}

/// Suspects the player may accuse, in the order they are listed
pub const ROSTER: [Suspect; 5] = [
    Suspect::Monteiro,
    Suspect::Oliveira,
    Suspect::Gardener,
    Suspect::Librarian,
    Suspect::Chef,
];

// Checked top to bottom, first hit wins
const RULES: [(&[&str], Suspect); 5] = [
    (&["cigarro", "cinzas"], Suspect::Monteiro),
    (&["perfume", "lenco"], Suspect::Oliveira),
    (&["lama", "botas"], Suspect::Gardener),
    (&["livro", "papel"], Suspect::Librarian),
    (&["faca", "sangue"], Suspect::Chef),
];

impl Suspect {
    /// Name used in the ledger and typed by the player when accusing
    pub fn name(&self) -> &'static str {
        match self {
            Suspect::Monteiro => "Sr. Monteiro",
            Suspect::Oliveira => "Sra. Oliveira",
            Suspect::Gardener => "Jardineiro",
            Suspect::Librarian => "Bibliotecaria",
            Suspect::Chef => "Chef",
            Suspect::Unknown => "Desconhecido",
        }
    }

    /// Match a clue against the keyword rules. Case-sensitive.
    pub fn classify(clue: &str) -> Self {
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| clue.contains(k)))
            .map(|(_, suspect)| *suspect)
            .unwrap_or(Suspect::Unknown)
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
