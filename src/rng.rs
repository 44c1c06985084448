// src/rng.rs
//! Random Number Generation for Path Sampling
//!
//! # Design
//!
//! The generator only ever needs standard normal draws, so randomness is
//! reached through the small [`NormalSource`] trait instead of a global:
//! 1. **Ambient**: [`ambient()`] wraps the thread-local RNG (fresh path every run)
//! 2. **Seeded**: [`seeded()`] wraps `StdRng` so tests can assert exact sequences
//! 3. **Scripted**: anything implementing the trait, e.g. a fixed list of draws
//!
//! # Box-Muller Transform
//!
//! Converts uniform random variables to normal distributions:
//! ```text
//! Z = √(-2ln(U₁)) * cos(2πU₂)
//! ```
//! where U₁, U₂ ~ Uniform(0,1) and Z ~ N(0,1). `rand` yields uniforms in
//! `[0, 1)`, so a U₁ of exactly zero is redrawn before taking the log.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::PI;

/// Source of independent N(0,1) draws.
pub trait NormalSource {
    fn standard_normal(&mut self) -> f64;
}

impl<N: NormalSource + ?Sized> NormalSource for &mut N {
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}

impl<N: NormalSource + ?Sized> NormalSource for Box<N> {
    fn standard_normal(&mut self) -> f64 {
        (**self).standard_normal()
    }
}

/// Box-Muller normal source over any uniform RNG (cosine branch only).
#[derive(Debug, Clone)]
pub struct BoxMuller<R> {
    rng: R,
}

impl<R: Rng> BoxMuller<R> {
    pub fn new(rng: R) -> Self {
        BoxMuller { rng }
    }

    /// Uniform draw in the open interval (0, 1).
    pub fn open_uniform(&mut self) -> f64 {
        loop {
            let u: f64 = self.rng.gen();
            if u > 0.0 {
                return u;
            }
        }
    }
}

impl<R: Rng> NormalSource for BoxMuller<R> {
    fn standard_normal(&mut self) -> f64 {
        let u1 = self.open_uniform();
        let u2: f64 = self.rng.gen();
        box_muller(u1, u2)
    }
}

/// `√(-2 ln u1) · cos(2π u2)`; `u1` must lie in (0, 1].
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Normal source backed by `rand_distr::StandardNormal` (ziggurat).
#[derive(Debug, Clone)]
pub struct Distr<R> {
    rng: R,
}

impl<R: Rng> Distr<R> {
    pub fn new(rng: R) -> Self {
        Distr { rng }
    }
}

impl<R: Rng> NormalSource for Distr<R> {
    fn standard_normal(&mut self) -> f64 {
        get_normal_draw(&mut self.rng)
    }
}

/// Replays a fixed list of draws, cycling when exhausted. Empty lists yield 0.
#[derive(Debug, Clone)]
pub struct Scripted {
    draws: Vec<f64>,
    next: usize,
}

impl Scripted {
    pub fn new(draws: Vec<f64>) -> Self {
        Scripted { draws, next: 0 }
    }
}

impl NormalSource for Scripted {
    fn standard_normal(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let z = self.draws[self.next % self.draws.len()];
        self.next += 1;
        z
    }
}

/// Thread-local, non-reproducible source used by default.
pub fn ambient() -> BoxMuller<ThreadRng> {
    BoxMuller::new(rand::thread_rng())
}

/// Reproducible source for tests and replays.
pub fn seeded(seed: u64) -> BoxMuller<StdRng> {
    BoxMuller::new(StdRng::seed_from_u64(seed))
}

pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
