use sdesolve_core::{Diffusion, Drift, State, Time};

/// Geometric Brownian Motion: dX_t = μ X_t dt + σ X_t dW_t
#[derive(Clone, Debug)]
pub struct GeometricBrownianMotion {
    pub mu: f64,
    pub sigma: f64,
}

impl GeometricBrownianMotion {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Path-wise solution X_t = X_0 * exp((μ - σ²/2)t + σ W_t)
    pub fn exact_solution(&self, x0: f64, t: Time, w_t: f64) -> f64 {
        x0 * ((self.mu - 0.5 * self.sigma * self.sigma) * t + self.sigma * w_t).exp()
    }
}

impl Drift for GeometricBrownianMotion {
    fn mu(&self, _t: Time, x: &State) -> State {
        State(self.mu * &x.0)
    }
}

impl Diffusion for GeometricBrownianMotion {
    fn sigma(&self, _t: Time, x: &State) -> State {
        // σ x_i on each component
        State(self.sigma * &x.0)
    }
}
