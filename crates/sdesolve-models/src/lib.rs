pub mod brownian;
pub mod gbm;
pub mod lorenz;
pub mod ou;

pub use brownian::BrownianMotion;
pub use gbm::GeometricBrownianMotion;
pub use lorenz::StochasticLorenz;
pub use ou::OrnsteinUhlenbeck;
