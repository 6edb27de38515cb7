use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shakmaty::{Chess, Move, Position, Role, Square};
use thiserror::Error;

use crate::error::QuantumError;

/// Descriptive tag attached to a suggested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    Superposition,
    Entanglement,
    ProbabilisticCollapse,
    QuantumTunneling,
    Coherence,
}

/// Returned by [`explain`] for labels outside [`Concept::ALL`].
pub const FALLBACK_EXPLANATION: &str = "Quantum-inspired strategic thinking";

const CENTER: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

impl Concept {
    pub const ALL: [Concept; 5] = [
        Concept::Superposition,
        Concept::Entanglement,
        Concept::ProbabilisticCollapse,
        Concept::QuantumTunneling,
        Concept::Coherence,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Concept::Superposition => "superposition",
            Concept::Entanglement => "entanglement",
            Concept::ProbabilisticCollapse => "probabilistic_collapse",
            Concept::QuantumTunneling => "quantum_tunneling",
            Concept::Coherence => "coherence",
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Concept::Superposition => "Maintains multiple tactical pathways simultaneously",
            Concept::Entanglement => "Coordinates piece threats in tandem across the board",
            Concept::ProbabilisticCollapse => "Calculated risk that can yield sudden advantage",
            Concept::QuantumTunneling => "Bypasses traditional defensive structures",
            Concept::Coherence => "Maintains strategic harmony across all pieces",
        }
    }

    /// Short, UI-facing summary of the concept itself (as opposed to why
    /// a particular move earned it).
    pub const fn description(self) -> &'static str {
        match self {
            Concept::Superposition => {
                "Multiple possibilities exist simultaneously until a move is made"
            }
            Concept::Entanglement => "Pieces coordinate their influence across the board",
            Concept::ProbabilisticCollapse => "Risk-taking that can lead to sudden advantage",
            Concept::QuantumTunneling => "Finding unexpected paths through defensive structures",
            Concept::Coherence => "Maintaining strategic harmony across all pieces",
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown concept label: {0}")]
pub struct UnknownConcept(pub String);

impl FromStr for Concept {
    type Err = UnknownConcept;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Concept::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownConcept(s.to_owned()))
    }
}

/// Explanation for a raw label, falling back to a generic line for
/// anything unrecognized.
pub fn explain(label: &str) -> &'static str {
    label
        .parse::<Concept>()
        .map(Concept::explanation)
        .unwrap_or(FALLBACK_EXPLANATION)
}

/// Label `m` as played from `pos`. First match wins: capture, check,
/// center destination, major piece, then the default.
///
/// `pos` is left untouched; the check test runs on a clone.
pub fn classify(pos: &Chess, m: Move) -> Result<Concept, QuantumError> {
    if m.is_capture() {
        return Ok(Concept::ProbabilisticCollapse);
    }

    let after = pos.clone().play(m)?;
    if after.is_check() {
        return Ok(Concept::QuantumTunneling);
    }

    if CENTER.contains(&m.to()) {
        return Ok(Concept::Coherence);
    }

    if matches!(m.role(), Role::Queen | Role::Rook) {
        return Ok(Concept::Entanglement);
    }

    Ok(Concept::Superposition)
}
