use crate::{State, Time};

/// Deterministic part α(X,t) of the SDE. Must return a vector with the
/// dimension of `x`.
pub trait Drift: Send + Sync {
    fn mu(&self, t: Time, x: &State) -> State;

    /// State dimension this drift is defined for, if known up front.
    /// Used to size a synthesized initial state.
    fn dimension(&self) -> Option<usize> {
        None
    }
}

impl<F> Drift for F
where
    F: Fn(Time, &State) -> State + Send + Sync,
{
    fn mu(&self, t: Time, x: &State) -> State {
        self(t, x)
    }
}
