pub mod euler_maruyama;
pub mod helpers;
pub mod runge_kutta;

use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::error::Result;
use crate::{State, Time};

pub use euler_maruyama::EulerMaruyama;
pub use runge_kutta::StochasticRungeKutta;

/// One-step map `Y_n -> Y_{n+1}` for a fixed step `dt` and increment `dw`.
///
/// `step` is the index of `Y_n` in the path and is carried into errors.
pub trait SdeIntegrator: Send + Sync {
    #[allow(clippy::too_many_arguments)]
    fn step(
        &self,
        step: usize,
        t: Time,
        x: &State,
        dt: f64,
        dw: &State,
        drift: &dyn Drift,
        diffusion: &dyn Diffusion,
    ) -> Result<State>;

    fn name(&self) -> &'static str;
}
