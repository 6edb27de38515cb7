use log::warn;
use serde::Serialize;
use shakmaty::{Move, uci::UciMove};

use crate::{concepts::Concept, error::QuantumError};

/// Explanation attached to the no-legal-move result.
pub const NO_LEGAL_MOVES: &str = "No legal moves available";

/// A legal move paired with its score.
#[derive(Debug, Clone)]
pub struct MoveCandidate {
    pub mv: Move,
    pub uci: UciMove,
    pub score: f64,
}

/// The move drawn by the selector.
#[derive(Debug, Clone)]
pub struct Selection {
    pub mv: Move,
    pub uci: UciMove,
    /// Softmax probability of this move among all candidates.
    pub probability: f64,
    /// Raw score of this move.
    pub evaluation: f64,
}

/// Final record printed by the CLI.
///
/// Optional fields are omitted from the JSON output when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "move")]
    pub uci: String,
    pub concept: Concept,
    pub probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Suggestion {
    pub fn chosen(selection: &Selection, concept: Concept) -> Self {
        Self {
            error: None,
            uci: selection.uci.to_string(),
            concept,
            probability: selection.probability,
            evaluation: Some(selection.evaluation),
            reason: None,
        }
    }

    /// Result for a position with nothing to play (checkmate or stalemate).
    pub fn no_legal_moves() -> Self {
        Self {
            error: None,
            uci: String::new(),
            concept: Concept::Superposition,
            probability: 0.0,
            evaluation: None,
            reason: Some(NO_LEGAL_MOVES.to_owned()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            uci: String::new(),
            concept: Concept::Superposition,
            probability: 0.0,
            evaluation: None,
            reason: None,
        }
    }

    /// Collapse a pipeline result into a record, turning any error into
    /// [`Suggestion::failure`].
    pub fn from_result(result: Result<Suggestion, QuantumError>) -> Self {
        result.unwrap_or_else(|e| {
            warn!("{e}");
            Self::failure(e.to_string())
        })
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            warn!("failed to serialize suggestion: {e}");
            r#"{"error":"serialization failed","move":"","concept":"superposition","probability":0.0}"#
                .to_owned()
        })
    }

    pub fn is_move(&self) -> bool {
        !self.uci.is_empty()
    }
}
