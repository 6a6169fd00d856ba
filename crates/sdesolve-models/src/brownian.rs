use sdesolve_core::{Diffusion, Drift, State, Time};

/// Scaled Wiener process: dX_t = 0 dt + σ dW_t, in any dimension.
#[derive(Clone, Debug)]
pub struct BrownianMotion {
    pub sigma: f64,
}

impl BrownianMotion {
    pub fn new(sigma: f64) -> Self {
        Self { sigma }
    }

    /// Standard Brownian motion with σ = 1
    pub fn standard() -> Self {
        Self::new(1.0)
    }

    /// Var[X_t | X_0] = σ²t
    pub fn exact_variance(&self, t: Time) -> f64 {
        self.sigma * self.sigma * t
    }
}

impl Drift for BrownianMotion {
    fn mu(&self, _t: Time, x: &State) -> State {
        State::zeros(x.dim())
    }
}

impl Diffusion for BrownianMotion {
    fn sigma(&self, _t: Time, x: &State) -> State {
        State(x.0.map(|_| self.sigma))
    }
}
