//! Numerical integration of Itô SDEs `dX = α(X,t) dt + β(X,t) dW` with a
//! strong order 1.0 stochastic Runge-Kutta scheme.

pub mod config;
pub mod diffusion;
pub mod drift;
pub mod error;
pub mod integrators;
pub mod noise;
pub mod path;
pub mod solver;
pub mod state;

// Core types
pub use state::{State, Time};
pub use noise::{NoiseGenerator, WienerIncrement};

// SDE traits
pub use drift::Drift;
pub use diffusion::Diffusion;

// Integrators
pub use integrators::{SdeIntegrator, EulerMaruyama, StochasticRungeKutta};

// Solving
pub use config::SolveOptions;
pub use error::{Result, SolveError};
pub use path::Path;
pub use solver::{integrate, integrate_with, Solver};
