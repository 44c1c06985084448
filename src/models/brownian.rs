// src/models/brownian.rs
//! Brownian motion with constant drift and diffusion.
//!
//! ```text
//! dX_t = μ dt + σ dW_t,   X_0 = 0
//! ```
//!
//! Mean `μt`, variance `σ²t`.

use super::model::SdeModel;
use crate::params::SimulationParameters;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArithmeticBrownian {
    pub mu: f64,
    pub sigma: f64,
}

impl ArithmeticBrownian {
    pub fn new(mu: f64, sigma: f64) -> Self {
        ArithmeticBrownian { mu, sigma }
    }

    pub fn mean_at(&self, t: f64) -> f64 {
        self.mu * t
    }

    pub fn variance_at(&self, t: f64) -> f64 {
        self.sigma * self.sigma * t
    }
}

impl From<&SimulationParameters> for ArithmeticBrownian {
    fn from(params: &SimulationParameters) -> Self {
        ArithmeticBrownian::new(params.drift, params.diffusion)
    }
}

impl SdeModel for ArithmeticBrownian {
    fn drift(&self, _x: f64, _t: f64) -> f64 {
        self.mu
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }

    fn initial_value(&self) -> f64 {
        0.0
    }
}
