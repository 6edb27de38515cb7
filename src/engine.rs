use log::{debug, info};
use rand::{Rng, distr::Distribution, distr::weighted::WeightedIndex, rngs::ThreadRng};
use shakmaty::{CastlingMode, Chess, Move, Position, fen::Fen, uci::UciMove};

use crate::{
    concepts,
    config::EngineConfig,
    error::QuantumError,
    tensor::encode,
    transform::Perturbation,
    types::{MoveCandidate, Selection, Suggestion},
};

pub struct QuantumEngine<R = ThreadRng> {
    perturbation: Perturbation,
    rng: R,
}

impl QuantumEngine<ThreadRng> {
    /// Engine drawing from the thread-local generator.
    pub fn new(config: &EngineConfig) -> Result<Self, QuantumError> {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> QuantumEngine<R> {
    /// Engine drawing from a caller-supplied generator, e.g. a seeded one.
    pub fn with_rng(config: &EngineConfig, rng: R) -> Result<Self, QuantumError> {
        Ok(Self {
            perturbation: Perturbation::new(config)?,
            rng,
        })
    }

    /// Parse `fen` and suggest a move for the side to move.
    pub fn suggest(&mut self, fen: &str) -> Result<Suggestion, QuantumError> {
        let fen: Fen = fen.parse()?;
        let pos: Chess = fen.into_position(CastlingMode::Standard)?;
        self.suggest_position(&pos)
    }

    pub fn suggest_position(&mut self, pos: &Chess) -> Result<Suggestion, QuantumError> {
        let Some(selection) = self.select(pos)? else {
            info!("no legal moves");
            return Ok(Suggestion::no_legal_moves());
        };

        let concept = concepts::classify(pos, selection.mv)?;
        info!(
            "chose {} (p={:.4}, eval={:.4}) as {}: {}",
            selection.uci,
            selection.probability,
            selection.evaluation,
            concept,
            concept.explanation()
        );
        Ok(Suggestion::chosen(&selection, concept))
    }

    /// Score every legal move and draw one from the softmax over scores.
    ///
    /// Returns `None` when the side to move has no legal moves.
    pub fn select(&mut self, pos: &Chess) -> Result<Option<Selection>, QuantumError> {
        let candidates = self.candidates(pos)?;
        if candidates.is_empty() {
            return Ok(None);
        }

        let (idx, probability) = sample_candidate(&candidates, &mut self.rng)?;
        let chosen = &candidates[idx];
        Ok(Some(Selection {
            mv: chosen.mv,
            uci: chosen.uci.clone(),
            probability,
            evaluation: chosen.score,
        }))
    }

    /// Score each legal move of `pos`, in legal-move order.
    pub fn candidates(&mut self, pos: &Chess) -> Result<Vec<MoveCandidate>, QuantumError> {
        let legal_moves = pos.legal_moves();
        let mut candidates = Vec::with_capacity(legal_moves.len());

        for m in legal_moves {
            let score = self.score_move(pos, m)?;
            let uci = m.to_uci(CastlingMode::Standard);
            debug!("{uci}: {score:.6}");
            candidates.push(MoveCandidate { mv: m, uci, score });
        }

        Ok(candidates)
    }

    /// Score `m` by playing it on a copy of `pos`, encoding the result,
    /// perturbing the encoding, and summing `|material| * weight` over
    /// all squares.
    pub fn score_move(&mut self, pos: &Chess, m: Move) -> Result<f64, QuantumError> {
        let after = pos.clone().play(m)?;
        let state = encode(after.board());
        let dist = self.perturbation.apply(state.view(), &mut self.rng);
        Ok(state.mapv(f64::abs).dot(&dist))
    }

    /// Like [`score_move`](Self::score_move) with the move given in UCI
    /// notation.
    pub fn score_uci(&mut self, pos: &Chess, uci: &str) -> Result<f64, QuantumError> {
        let uci_move: UciMove = uci.parse()?;
        let m = uci_move
            .to_move(pos)
            .map_err(|_| QuantumError::UnplayableUci(uci.to_owned()))?;
        self.score_move(pos, m)
    }
}

/// Build an engine from `config` and suggest a move for `fen`.
///
/// Never fails: any error along the way becomes the failure record.
pub fn suggest_or_failure(fen: &str, config: &EngineConfig) -> Suggestion {
    Suggestion::from_result(QuantumEngine::new(config).and_then(|mut engine| engine.suggest(fen)))
}

/// Numerically stable softmax: subtract the max before exponentiating.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Draw a candidate index from the softmax over candidate scores.
///
/// Returns the index together with its softmax probability.
pub fn sample_candidate<R: Rng + ?Sized>(
    candidates: &[MoveCandidate],
    rng: &mut R,
) -> Result<(usize, f64), QuantumError> {
    let scores: Vec<f64> = candidates.iter().map(|c| c.score).collect();
    let probabilities = softmax(&scores);
    let dist = WeightedIndex::new(&probabilities)?;
    let idx = dist.sample(rng);
    Ok((idx, probabilities[idx]))
}
