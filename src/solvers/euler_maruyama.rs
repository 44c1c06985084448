// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt Z_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `Z_n ~ N(0, 1)` are independent standard normal draws
//!
//! For constant coefficients the scheme is exact in distribution at every
//! grid point: `X_n ~ N(μ t_n, σ² t_n)`.

use crate::models::model::SdeModel;
use crate::rng::NormalSource;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Increment `a Δt + b √Δt Z` for a given normal draw.
    fn increment<M: SdeModel>(
        model: &M,
        x: f64,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        z: f64,
    ) -> f64 {
        model.drift(x, t) * dt + model.diffusion(x, t) * sqrt_dt * z
    }

    /// Single Euler-Maruyama step
    ///
    /// `sqrt_dt` is passed in so a path loop takes the root once.
    ///
    /// # Algorithm
    ///
    /// 1. Generate normal random draw: Z ~ N(0,1)
    /// 2. Compute drift: a(X_n, t_n) * Δt
    /// 3. Compute diffusion: b(X_n, t_n) * √Δt * Z
    /// 4. Update: X_{n+1} = X_n + drift + diffusion
    pub fn step<M: SdeModel, N: NormalSource + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        sqrt_dt: f64,
        normals: &mut N,
    ) {
        let z = normals.standard_normal();
        *x += Self::increment(model, *x, t, dt, sqrt_dt, z);
    }
}
