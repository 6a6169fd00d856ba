use crate::{State, Time};
use nalgebra::DMatrix;

/// Discretized sample path: `times[n]` pairs with row `n` of `states`.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub times: Vec<Time>,
    /// N x d, one row per time point.
    pub states: DMatrix<f64>,
}

impl Path {
    pub(crate) fn new(times: Vec<Time>, states: DMatrix<f64>) -> Self {
        debug_assert_eq!(times.len(), states.nrows());
        Self { times, states }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// State dimension d.
    pub fn dim(&self) -> usize {
        self.states.ncols()
    }

    pub fn row(&self, n: usize) -> State {
        State(self.states.row(n).transpose())
    }

    /// Time series of component `i`.
    pub fn component(&self, i: usize) -> Vec<f64> {
        self.states.column(i).iter().copied().collect()
    }

    /// Successive differences of component `i` (length N - 1).
    pub fn increments(&self, i: usize) -> Vec<f64> {
        let col = self.states.column(i);
        col.iter()
            .zip(col.iter().skip(1))
            .map(|(a, b)| b - a)
            .collect()
    }

    pub fn initial_state(&self) -> Option<State> {
        (!self.is_empty()).then(|| self.row(0))
    }

    pub fn final_state(&self) -> Option<State> {
        (!self.is_empty()).then(|| self.row(self.len() - 1))
    }

    pub fn final_time(&self) -> Option<Time> {
        self.times.last().copied()
    }

    pub fn is_finite(&self) -> bool {
        self.states.iter().all(|v| v.is_finite())
    }

    pub fn into_parts(self) -> (Vec<Time>, DMatrix<f64>) {
        (self.times, self.states)
    }
}
