use crate::config::SolveOptions;
use crate::diffusion::Diffusion;
use crate::drift::Drift;
use crate::error::{Result, SolveError};
use crate::integrators::helpers::ensure_dim;
use crate::integrators::{SdeIntegrator, StochasticRungeKutta};
use crate::noise::WienerIncrement;
use crate::path::Path;
use crate::{State, Time};
use nalgebra::DMatrix;
use tracing::{debug, warn};

/// Integrates `dX = α(X,t) dt + β(X,t) dW` with the strong order 1.0
/// stochastic Runge-Kutta scheme.
///
/// `drift` and `diffusion` are both required; if either is `None` a
/// [`SolveError::Configuration`] is returned and nothing is integrated.
/// Without `wiener`, increments are N(0, dt) draws from a
/// [`NoiseGenerator`](crate::NoiseGenerator) seeded by `options.seed`.
///
/// The returned path has exactly `options.step_count` rows, row 0 is the
/// initial state and `times[n] = t0 + n·dt`.
pub fn integrate(
    drift: Option<&(dyn Drift + '_)>,
    diffusion: Option<&(dyn Diffusion + '_)>,
    options: &SolveOptions,
    wiener: Option<&mut (dyn WienerIncrement + '_)>,
) -> Result<Path> {
    integrate_with(&StochasticRungeKutta, drift, diffusion, options, wiener)
}

/// [`integrate`] with an arbitrary one-step scheme.
pub fn integrate_with(
    scheme: &dyn SdeIntegrator,
    drift: Option<&(dyn Drift + '_)>,
    diffusion: Option<&(dyn Diffusion + '_)>,
    options: &SolveOptions,
    wiener: Option<&mut (dyn WienerIncrement + '_)>,
) -> Result<Path> {
    let (drift, diffusion) = match (drift, diffusion) {
        (Some(drift), Some(diffusion)) => (drift, diffusion),
        (drift, diffusion) => {
            warn!(
                has_drift = drift.is_some(),
                has_diffusion = diffusion.is_some(),
                "SDE not defined"
            );
            return Err(SolveError::Configuration(
                "SDE not defined: drift and diffusion are both required".into(),
            ));
        }
    };

    let n_steps = options.step_count;
    if n_steps == 0 {
        return Err(SolveError::Configuration(
            "step_count must be at least 1".into(),
        ));
    }

    let dt = options.step_size;
    if dt <= 0.0 {
        warn!(dt, "non-positive step size; the path will not be meaningful");
    }

    let mut default_source = options.noise_generator();
    let x0 = match &options.initial_state {
        Some(values) => State::from(values.as_slice()),
        None => {
            let dim = infer_dimension(drift)?;
            default_source.standard_normal(dim)
        }
    };
    let wiener: &mut dyn WienerIncrement = match wiener {
        Some(w) => w,
        None => &mut default_source,
    };

    let dim = x0.dim();
    debug!(
        scheme = scheme.name(),
        dt,
        n_steps,
        t0 = options.start_time,
        dim,
        "integrating SDE"
    );

    let times = time_grid(options.start_time, dt, n_steps);
    let mut states = DMatrix::zeros(n_steps, dim);
    states.set_row(0, &x0.0.transpose());

    let mut y = x0;
    for n in 0..n_steps - 1 {
        let t = times[n];
        let dw = wiener.increment(&y, dt);
        let next = scheme.step(n, t, &y, dt, &dw, drift, diffusion)?;
        ensure_dim("scheme output", &next, dim, n)?;
        if options.check_finite && !next.is_finite() {
            return Err(SolveError::NonFinite {
                step: n + 1,
                time: times[n + 1],
            });
        }
        states.set_row(n + 1, &next.0.transpose());
        y = next;
    }

    Ok(Path::new(times, states))
}

/// `t0 + n·dt` for `n` in `0..n_steps`, by multiplication so that no
/// rounding accumulates along the grid.
pub fn time_grid(t0: Time, dt: f64, n_steps: usize) -> Vec<Time> {
    (0..n_steps).map(|n| t0 + n as f64 * dt).collect()
}

/// Dimension of a synthesized initial state: the drift's declared
/// dimension, or else the length of one probe evaluation at the scalar
/// origin (t = 0, x = [0]).
fn infer_dimension(drift: &dyn Drift) -> Result<usize> {
    let dim = match drift.dimension() {
        Some(dim) => dim,
        None => {
            warn!("no initial state given; probing drift at the origin for the state dimension");
            drift.mu(0.0, &State::zeros(1)).dim()
        }
    };
    if dim == 0 {
        return Err(SolveError::Configuration(
            "cannot infer a non-empty state dimension from drift; pass an initial state".into(),
        ));
    }
    Ok(dim)
}

/// Owning front end over [`integrate_with`].
///
/// ```
/// use sdesolve_core::{Solver, State};
///
/// let path = Solver::new()
///     .drift(|_t: f64, x: &State| State(-&x.0))
///     .diffusion(|_t: f64, x: &State| State::zeros(x.dim()))
///     .initial_state(vec![1.0])
///     .step_size(0.01)
///     .step_count(100)
///     .solve()
///     .unwrap();
/// assert_eq!(path.len(), 100);
/// ```
pub struct Solver<'a> {
    drift: Option<Box<dyn Drift + 'a>>,
    diffusion: Option<Box<dyn Diffusion + 'a>>,
    wiener: Option<Box<dyn WienerIncrement + 'a>>,
    scheme: Box<dyn SdeIntegrator + 'a>,
    options: SolveOptions,
}

impl Default for Solver<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Solver<'a> {
    pub fn new() -> Self {
        Self {
            drift: None,
            diffusion: None,
            wiener: None,
            scheme: Box::new(StochasticRungeKutta),
            options: SolveOptions::default(),
        }
    }

    pub fn drift(mut self, drift: impl Drift + 'a) -> Self {
        self.drift = Some(Box::new(drift));
        self
    }

    pub fn diffusion(mut self, diffusion: impl Diffusion + 'a) -> Self {
        self.diffusion = Some(Box::new(diffusion));
        self
    }

    pub fn wiener(mut self, wiener: impl WienerIncrement + 'a) -> Self {
        self.wiener = Some(Box::new(wiener));
        self
    }

    pub fn scheme(mut self, scheme: impl SdeIntegrator + 'a) -> Self {
        self.scheme = Box::new(scheme);
        self
    }

    pub fn options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn initial_state(mut self, x0: impl Into<Vec<f64>>) -> Self {
        self.options.initial_state = Some(x0.into());
        self
    }

    pub fn step_size(mut self, dt: f64) -> Self {
        self.options.step_size = dt;
        self
    }

    pub fn step_count(mut self, n: usize) -> Self {
        self.options.step_count = n;
        self
    }

    pub fn start_time(mut self, t0: Time) -> Self {
        self.options.start_time = t0;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.options.seed = Some(seed);
        self
    }

    pub fn check_finite(mut self, check: bool) -> Self {
        self.options.check_finite = check;
        self
    }

    pub fn solve_options(&self) -> &SolveOptions {
        &self.options
    }

    /// Runs one integration. May be called repeatedly; a stateful Wiener
    /// source keeps advancing between calls.
    pub fn solve(&mut self) -> Result<Path> {
        integrate_with(
            self.scheme.as_ref(),
            self.drift.as_deref(),
            self.diffusion.as_deref(),
            &self.options,
            self.wiener.as_deref_mut(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_grid() {
        let grid = time_grid(2.0, 0.1, 4);
        assert_eq!(grid, vec![2.0, 2.0 + 0.1, 2.0 + 2.0 * 0.1, 2.0 + 3.0 * 0.1]);
    }

    #[test]
    fn test_infer_dimension_scalar_probe() {
        let drift = |_t: f64, _x: &State| State::new(vec![0.0]);
        assert_eq!(infer_dimension(&drift).unwrap(), 1);
    }

    #[test]
    fn test_infer_dimension_empty_probe_is_error() {
        let drift = |_t: f64, _x: &State| State::zeros(0);
        assert!(matches!(
            infer_dimension(&drift),
            Err(SolveError::Configuration(_))
        ));
    }

    #[test]
    fn test_single_step_path_is_initial_state() {
        let drift = |_t: f64, x: &State| State(x.0.map(|_| 1.0));
        let diffusion = |_t: f64, x: &State| State(x.0.map(|_| 1.0));
        let opts = SolveOptions::new().with_initial_state(vec![4.0]).with_step_count(1);
        let path = integrate(Some(&drift), Some(&diffusion), &opts, None).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.row(0), State::new(vec![4.0]));
        assert_eq!(path.times, vec![0.0]);
    }
}
