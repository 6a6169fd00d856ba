use crate::State;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, StandardNormal};

/// Source of Wiener increments ΔW for one step of length `dt`.
///
/// The state is passed through so that callers can shape or record the
/// noise; the default source only uses its dimension.
pub trait WienerIncrement {
    fn increment(&mut self, x: &State, dt: f64) -> State;
}

impl<F> WienerIncrement for F
where
    F: FnMut(&State, f64) -> State,
{
    fn increment(&mut self, x: &State, dt: f64) -> State {
        self(x, dt)
    }
}

pub struct NoiseGenerator {
    rng: ChaCha20Rng,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Unseeded generator drawing its key from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn from_path_id(global_seed: u64, path_id: u64) -> Self {
        // Combine seeds deterministically
        let seed = global_seed.wrapping_add(path_id.wrapping_mul(0x9e3779b97f4a7c15));
        Self::new(seed)
    }

    /// `n` independent N(0, 1) draws.
    pub fn standard_normal(&mut self, n: usize) -> State {
        self.generate_dw(n, 1.0)
    }

    pub fn generate_dw(&mut self, n: usize, sqrt_dt: f64) -> State {
        let values: Vec<f64> = (0..n)
            .map(|_| {
                let sample: f64 = StandardNormal.sample(&mut self.rng);
                sample * sqrt_dt
            })
            .collect();
        State::new(values)
    }
}

impl WienerIncrement for NoiseGenerator {
    fn increment(&mut self, x: &State, dt: f64) -> State {
        self.generate_dw(x.dim(), dt.sqrt())
    }
}
