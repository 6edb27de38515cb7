//! Error types for the quantum move suggester.
//!
//! This crate uses `thiserror` to provide a convenient enumeration of
//! errors that may occur while producing a suggestion. The variants wrap
//! underlying errors from chess parsing, move application, random
//! sampling, and configuration loading, giving the caller a single error
//! type to handle.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantumError {
    /// The provided FEN string could not be parsed.
    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),

    /// A parsed position is invalid from the perspective of `shakmaty`.
    #[error("Invalid Chess Position: {0}")]
    InvalidPosition(#[from] shakmaty::PositionError<shakmaty::Chess>),

    /// A move could not be played on the position it was scored against.
    #[error("Illegal move: {0}")]
    IllegalMove(#[from] shakmaty::PlayError<shakmaty::Chess>),

    /// The provided UCI move string is malformed.
    #[error("Invalid UCI move: {0}")]
    InvalidUci(#[from] shakmaty::uci::ParseUciMoveError),

    /// Well-formed UCI that does not name a legal move in the position.
    #[error("Move {0} is not legal in this position")]
    UnplayableUci(String),

    /// The configured noise parameters do not describe a normal distribution.
    #[error("Invalid noise distribution: {0}")]
    Noise(#[from] rand_distr::NormalError),

    /// Move selection weights could not form a categorical distribution.
    #[error("Cannot sample move: {0}")]
    Sampling(#[from] rand::distr::weighted::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
