use super::helpers::ensure_dim;
use super::SdeIntegrator;
use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::error::Result;
use crate::{State, Time};

/// Derivative-free strong order 1.0 scheme for Itô SDEs with diagonal noise
/// (Kloeden & Platen, 1992, §11.1).
///
/// With `a = α(Y_n, t_n)`, `b = β(Y_n, t_n)`:
///
/// ```text
/// Ŷ       = Y_n + a·dt + b·√dt
/// Y_{n+1} = Y_n + a·dt + b·ΔW + ½ (β(Ŷ, t_n) − b) (ΔW² − dt) / √dt
/// ```
///
/// The last term replaces the Milstein correction `½ b b' (ΔW² − dt)` by a
/// finite difference of β along the supporting point, so no Jacobian of the
/// diffusion is needed. All vector products are element-wise.
#[derive(Clone, Copy, Debug, Default)]
pub struct StochasticRungeKutta;

impl SdeIntegrator for StochasticRungeKutta {
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
        let sqrt_dt = dt.sqrt();

        let a = drift.mu(t, x);
        ensure_dim("drift", &a, n, step)?;
        let b = diffusion.sigma(t, x);
        ensure_dim("diffusion", &b, n, step)?;

        let euler = &x.0 + &a.0 * dt;
        let support = State(&euler + &b.0 * sqrt_dt);
        // Same t_n as the base point, not t_n + dt.
        let b_support = diffusion.sigma(t, &support);
        ensure_dim("diffusion", &b_support, n, step)?;

        let levy = dw.0.map(|w| (w * w - dt) / sqrt_dt);
        let correction = 0.5 * (&b_support.0 - &b.0).component_mul(&levy);

        Ok(State(euler + b.0.component_mul(&dw.0) + correction))
    }

    fn name(&self) -> &'static str {
        "stochastic_runge_kutta"
    }
}
