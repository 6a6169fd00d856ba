use sdesolve_core::{Diffusion, Drift, State, Time};

/// Lorenz system driven by diagonal noise:
///
/// ```text
/// dX = s (Y - X) dt       + c Y dW₁
/// dY = (r X - Y - X Z) dt +     dW₂
/// dZ = (X Y - b Z) dt     +     dW₃
/// ```
#[derive(Clone, Debug)]
pub struct StochasticLorenz {
    pub s: f64,
    pub r: f64,
    pub b: f64,
    /// Gain `c` of the Y-proportional noise on the X equation.
    pub coupling: f64,
}

impl StochasticLorenz {
    pub fn new(s: f64, r: f64, b: f64, coupling: f64) -> Self {
        Self { s, r, b, coupling }
    }

    /// s = 10, r = 28, b = 8/3 with the given X-noise gain.
    pub fn classic(coupling: f64) -> Self {
        Self::new(10.0, 28.0, 8.0 / 3.0, coupling)
    }
}

impl Default for StochasticLorenz {
    fn default() -> Self {
        Self::classic(0.5)
    }
}

// Components missing from a short state read as zero; the integrator then
// reports the length mismatch.
fn xyz(x: &State) -> (f64, f64, f64) {
    let c = |i: usize| x.get(i).copied().unwrap_or(0.0);
    (c(0), c(1), c(2))
}

impl Drift for StochasticLorenz {
    fn mu(&self, _t: Time, state: &State) -> State {
        let (x, y, z) = xyz(state);
        State::new(vec![
            self.s * (y - x),
            self.r * x - y - x * z,
            x * y - self.b * z,
        ])
    }

    fn dimension(&self) -> Option<usize> {
        Some(3)
    }
}

impl Diffusion for StochasticLorenz {
    fn sigma(&self, _t: Time, state: &State) -> State {
        let (_, y, _) = xyz(state);
        State::new(vec![self.coupling * y, 1.0, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_at_known_point() {
        let lorenz = StochasticLorenz::classic(1.0);
        let x0 = State::new(vec![3.4, -1.3, 28.3]);
        let mu = lorenz.mu(0.0, &x0);
        assert!((mu[0] - 10.0 * (-1.3 - 3.4)).abs() < 1e-12);
        assert!((mu[1] - (28.0 * 3.4 + 1.3 - 3.4 * 28.3)).abs() < 1e-12);
        assert!((mu[2] - (3.4 * -1.3 - 8.0 / 3.0 * 28.3)).abs() < 1e-12);
        assert_eq!(lorenz.sigma(0.0, &x0), State::new(vec![-1.3, 1.0, 1.0]));
    }

    #[test]
    fn test_fixed_points_of_drift() {
        let lorenz = StochasticLorenz::default();
        assert_eq!(lorenz.mu(0.0, &State::zeros(3)), State::zeros(3));
        assert_eq!(lorenz.dimension(), Some(3));
    }
}
