use crate::{State, Time};

/// Stochastic coupling β(X,t). Noise is diagonal: component `i` of the
/// returned vector multiplies Wiener component `i`.
pub trait Diffusion: Send + Sync {
    fn sigma(&self, t: Time, x: &State) -> State;
}

impl<F> Diffusion for F
where
    F: Fn(Time, &State) -> State + Send + Sync,
{
    fn sigma(&self, t: Time, x: &State) -> State {
        self(t, x)
    }
}
