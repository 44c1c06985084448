// src/params.rs
//! Simulation parameters for one generated path.
//!
//! The enclosing UI supplies four scalars. They are checked (or coerced to
//! their defaults) here, once, before anything reaches the generator.

use crate::error::{validation::*, PlayError, PlayResult};
use log::warn;
use std::str::FromStr;

/// Drift, diffusion and discretisation of `dX = μ dt + σ dW` on `[0, k]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub drift: f64,           // μ
    pub diffusion: f64,       // σ
    pub step_count: usize,    // n
    pub interval_length: f64, // k
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            drift: 0.0,
            diffusion: 1.0,
            step_count: 1000,
            interval_length: 10.0,
        }
    }
}

impl SimulationParameters {
    pub fn new(drift: f64, diffusion: f64, step_count: usize, interval_length: f64) -> Self {
        SimulationParameters {
            drift,
            diffusion,
            step_count,
            interval_length,
        }
    }

    /// Validate the parameter set
    pub fn validate(&self) -> PlayResult<()> {
        validate_finite("drift", self.drift)?;
        validate_finite("diffusion", self.diffusion)?;
        validate_non_negative("diffusion", self.diffusion)?;
        validate_step_count(self.step_count)?;
        validate_finite("interval_length", self.interval_length)?;
        validate_positive("interval_length", self.interval_length)?;
        Ok(())
    }

    /// Time step `Δt = k / n`.
    pub fn dt(&self) -> f64 {
        self.interval_length / self.step_count as f64
    }

    /// Strict parse of raw form fields. The first failing field is reported.
    pub fn parse_inputs(
        drift: &str,
        diffusion: &str,
        step_count: &str,
        interval_length: &str,
    ) -> PlayResult<Self> {
        let params = SimulationParameters {
            drift: parse_field("drift", drift)?,
            diffusion: parse_field("diffusion", diffusion)?,
            step_count: parse_field("step_count", step_count)?,
            interval_length: parse_field("interval_length", interval_length)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Lenient parse of raw form fields: anything unreadable or out of range
    /// falls back to the default for that field.
    pub fn from_inputs(
        drift: &str,
        diffusion: &str,
        step_count: &str,
        interval_length: &str,
    ) -> Self {
        let defaults = SimulationParameters::default();
        SimulationParameters {
            drift: coerce("drift", drift, defaults.drift, |v| {
                validate_finite("drift", v)
            }),
            diffusion: coerce("diffusion", diffusion, defaults.diffusion, |v| {
                validate_finite("diffusion", v)?;
                validate_non_negative("diffusion", v)
            }),
            step_count: coerce(
                "step_count",
                step_count,
                defaults.step_count,
                validate_step_count,
            ),
            interval_length: coerce(
                "interval_length",
                interval_length,
                defaults.interval_length,
                |v| {
                    validate_finite("interval_length", v)?;
                    validate_positive("interval_length", v)
                },
            ),
        }
    }
}

fn parse_field<T: FromStr>(field: &str, input: &str) -> PlayResult<T> {
    input.trim().parse::<T>().map_err(|_| PlayError::ParseError {
        field: field.to_string(),
        input: input.to_string(),
    })
}

fn coerce<T, F>(field: &str, input: &str, default: T, check: F) -> T
where
    T: FromStr + Copy + std::fmt::Display,
    F: Fn(T) -> PlayResult<()>,
{
    match parse_field::<T>(field, input).and_then(|v| check(v).map(|_| v)) {
        Ok(v) => v,
        Err(e) => {
            warn!("{}; using default {}", e, default);
            default
        }
    }
}
