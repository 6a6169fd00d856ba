use super::helpers::ensure_dim;
use super::SdeIntegrator;
use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::error::Result;
use crate::{State, Time};

/// Strong order 0.5 reference scheme. With zero diffusion it is explicit
/// Euler for the ODE `dX = α(X,t) dt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EulerMaruyama;

impl SdeIntegrator for EulerMaruyama {
    fn step(
        &self,
        step: usize,
        t: Time,
        x: &State,
        dt: f64,
        dw: &State,
        drift: &dyn Drift,
        diffusion: &dyn Diffusion,
    ) -> Result<State> {
        let n = x.dim();
        ensure_dim("wiener increment", dw, n, step)?;
        let mu = drift.mu(t, x);
        ensure_dim("drift", &mu, n, step)?;
        let sigma = diffusion.sigma(t, x);
        ensure_dim("diffusion", &sigma, n, step)?;

        // X_{t+dt} = X_t + μ*dt + σ∘dW
        Ok(State(&x.0 + &mu.0 * dt + sigma.0.component_mul(&dw.0)))
    }

    fn name(&self) -> &'static str {
        "euler_maruyama"
    }
}
