use crate::error::Result;
use crate::noise::NoiseGenerator;
use crate::Time;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_SIZE: f64 = 1.0;
pub const DEFAULT_STEP_COUNT: usize = 100;
pub const DEFAULT_START_TIME: Time = 0.0;

/// Time-stepping and initial-condition options for a solve.
///
/// Every field is optional in serialized form; missing fields take the
/// defaults below.
///
/// | field           | default                                   |
/// |-----------------|-------------------------------------------|
/// | `initial_state` | one N(0, 1) draw of the inferred dimension |
/// | `step_size`     | `1.0`                                     |
/// | `step_count`    | `100`                                     |
/// | `start_time`    | `0.0`                                     |
/// | `seed`          | none (OS entropy)                         |
/// | `check_finite`  | `false`                                   |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    pub initial_state: Option<Vec<f64>>,
    pub step_size: f64,
    pub step_count: usize,
    pub start_time: Time,
    /// Seeds the default Wiener source and the synthesized initial state.
    pub seed: Option<u64>,
    /// Abort with `SolveError::NonFinite` on the first NaN/Inf state.
    pub check_finite: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            initial_state: None,
            step_size: DEFAULT_STEP_SIZE,
            step_count: DEFAULT_STEP_COUNT,
            start_time: DEFAULT_START_TIME,
            seed: None,
            check_finite: false,
        }
    }
}

impl SolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_initial_state(mut self, x0: impl Into<Vec<f64>>) -> Self {
        self.initial_state = Some(x0.into());
        self
    }

    pub fn with_step_size(mut self, dt: f64) -> Self {
        self.step_size = dt;
        self
    }

    pub fn with_step_count(mut self, n: usize) -> Self {
        self.step_count = n;
        self
    }

    pub fn with_start_time(mut self, t0: Time) -> Self {
        self.start_time = t0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_check_finite(mut self, check: bool) -> Self {
        self.check_finite = check;
        self
    }

    pub fn final_time(&self) -> Time {
        self.start_time + self.step_count.saturating_sub(1) as f64 * self.step_size
    }

    pub(crate) fn noise_generator(&self) -> NoiseGenerator {
        match self.seed {
            Some(seed) => NoiseGenerator::new(seed),
            None => NoiseGenerator::from_entropy(),
        }
    }
}
