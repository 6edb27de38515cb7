//! Quantum-flavoured single-move suggestions for chess positions.
//!
//!
//! This crate scores every legal move of a position with a noisy,
//! frequency-domain "perturbation" of the resulting material layout,
//! samples one move from the softmax over those scores, and tags the
//! chosen move with a descriptive [`Concept`]. It is not a search engine:
//! each move is evaluated once, and the output is intentionally
//! non-deterministic unless a seeded generator is supplied.
//!
//! The principal type is [`QuantumEngine`], which exposes FEN-level and
//! position-level suggestion methods as well as the scoring and selection
//! stages individually. Results come back as a [`Suggestion`], ready to be
//! serialized to JSON.
//!
//! The library re‑exports `shakmaty` to make position construction easy.

pub mod concepts;
mod config;
mod engine;
mod error;
mod tensor;
mod transform;
mod types;

/// Main engine type and its selection helpers.
pub use engine::{QuantumEngine, sample_candidate, softmax, suggest_or_failure};

/// Move labels.
pub use concepts::{Concept, classify, explain};

/// Engine configuration.
pub use config::{CONFIG_ENV_VAR, EngineConfig};

/// Error type produced by library operations.
pub use error::QuantumError;

/// Board encoding and the spectral perturbation.
pub use tensor::{NUM_SQUARES, StateVector, encode, piece_weight};
pub use transform::{Perturbation, SquareDistribution};

/// Output data structures.
pub use types::{MoveCandidate, NO_LEGAL_MOVES, Selection, Suggestion};

/// Re-export of `shakmaty` for convenience when building positions.
pub use shakmaty;
