//! Spectral perturbation of a state vector into a square distribution.
//!
//! The pipeline is normalize, forward FFT, Gaussian noise on every
//! spectral component, then squared magnitudes renormalized to sum to one.
//! The FFT mixes per-square material across all indices, so the resulting
//! distribution reflects the overall arrangement rather than any single
//! square.

use std::sync::Arc;

use ndarray::{Array1, ArrayView1};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use rustfft::{Fft, FftPlanner, num_complex::Complex};

use crate::{config::EngineConfig, error::QuantumError, tensor::NUM_SQUARES};

/// Non-negative weights over the 64 squares summing to 1.
pub type SquareDistribution = Array1<f64>;

pub struct Perturbation {
    fft: Arc<dyn Fft<f64>>,
    noise: Normal<f64>,
    epsilon: f64,
}

impl Perturbation {
    pub fn new(config: &EngineConfig) -> Result<Self, QuantumError> {
        config.validate()?;
        let fft = FftPlanner::<f64>::new().plan_fft_forward(NUM_SQUARES);
        Ok(Self {
            fft,
            noise: Normal::new(0.0, config.noise_std_dev)?,
            epsilon: config.norm_epsilon,
        })
    }

    /// Run the full pipeline on `state`, which must hold exactly
    /// [`NUM_SQUARES`] entries (as produced by [`encode`](crate::encode)).
    ///
    /// Every output entry is non-negative, and the entries sum to 1.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        state: ArrayView1<f64>,
        rng: &mut R,
    ) -> SquareDistribution {
        debug_assert_eq!(state.len(), NUM_SQUARES);
        let norm = state.dot(&state).sqrt() + self.epsilon;

        let mut spectrum: Vec<Complex<f64>> =
            state.iter().map(|&v| Complex::new(v / norm, 0.0)).collect();
        self.fft.process(&mut spectrum);

        // Noise is real-valued: it shifts each component along the real axis.
        for c in &mut spectrum {
            c.re += self.noise.sample(rng);
        }

        let power: Array1<f64> = spectrum.iter().map(|c| c.norm_sqr()).collect();
        probabilize(power)
    }
}

/// Scale non-negative weights so they sum to 1.
///
/// A zero or non-finite total collapses to the uniform distribution.
fn probabilize(power: Array1<f64>) -> SquareDistribution {
    let total = power.sum();
    if total > 0.0 && total.is_finite() {
        power / total
    } else {
        let n = power.len().max(1);
        Array1::from_elem(power.len(), 1.0 / n as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use shakmaty::Position;

    fn noiseless() -> Perturbation {
        Perturbation::new(&EngineConfig {
            noise_std_dev: 0.0,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    fn assert_distribution(dist: &SquareDistribution) {
        assert_eq!(dist.len(), NUM_SQUARES);
        assert!(dist.iter().all(|&p| p >= 0.0 && p.is_finite()));
        assert!((dist.sum() - 1.0).abs() < 1e-9, "sum = {}", dist.sum());
    }

    #[test]
    fn zero_vector_yields_distribution() {
        let mut rng = StdRng::seed_from_u64(7);
        let perturbation = Perturbation::new(&EngineConfig::default()).unwrap();
        let dist = perturbation.apply(Array1::zeros(NUM_SQUARES).view(), &mut rng);
        assert_distribution(&dist);
    }

    #[test]
    fn zero_vector_without_noise_is_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = noiseless().apply(Array1::zeros(NUM_SQUARES).view(), &mut rng);
        assert_distribution(&dist);
        for &p in &dist {
            assert!((p - 1.0 / 64.0).abs() < 1e-12);
        }
    }

    #[test]
    fn impulse_spreads_evenly_across_spectrum() {
        // A single non-zero entry has a flat spectrum.
        let mut state = Array1::zeros(NUM_SQUARES);
        state[0] = 9.0;
        let mut rng = StdRng::seed_from_u64(1);
        let dist = noiseless().apply(state.view(), &mut rng);
        assert_distribution(&dist);
        for &p in &dist {
            assert!((p - 1.0 / 64.0).abs() < 1e-9);
        }
    }

    #[test]
    fn constant_vector_concentrates_on_dc() {
        let state = Array1::from_elem(NUM_SQUARES, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        let dist = noiseless().apply(state.view(), &mut rng);
        assert_distribution(&dist);
        assert!((dist[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn noisy_output_is_a_distribution() {
        let perturbation = Perturbation::new(&EngineConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let state: Array1<f64> = (0..NUM_SQUARES)
            .map(|i| if i % 3 == 0 { -(i as f64) } else { i as f64 / 2.0 })
            .collect();
        for _ in 0..20 {
            assert_distribution(&perturbation.apply(state.view(), &mut rng));
        }
    }

    #[test]
    fn encoded_board_yields_distribution() {
        let state = crate::encode(shakmaty::Chess::default().board());
        let mut rng = StdRng::seed_from_u64(9);
        assert_distribution(&noiseless().apply(state.view(), &mut rng));
        let perturbation = Perturbation::new(&EngineConfig::default()).unwrap();
        assert_distribution(&perturbation.apply(state.view(), &mut rng));
    }

    #[test]
    fn same_seed_same_output() {
        let perturbation = Perturbation::new(&EngineConfig::default()).unwrap();
        let mut state = Array1::zeros(NUM_SQUARES);
        state[12] = 1.0;
        state[52] = -1.0;
        let a = perturbation.apply(state.view(), &mut StdRng::seed_from_u64(3));
        let b = perturbation.apply(state.view(), &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_config() {
        let err = Perturbation::new(&EngineConfig {
            noise_std_dev: f64::NAN,
            ..EngineConfig::default()
        });
        assert!(matches!(err, Err(QuantumError::InvalidConfig(_))));
    }
}
