// src/generator.rs
//! Sample-path generation for `dX = μ dt + σ dW`.
//!
//! # Algorithm
//!
//! 1. `Δt = k / n`
//! 2. Emit `(0, 0)`
//! 3. For `i = 1..=n`: draw `Z ~ N(0,1)`, `X += μΔt + σ√Δt Z`, emit `(iΔt, X)`
//!
//! Times are computed as `i · Δt` rather than accumulated, so the grid is
//! exactly uniform. Values are not bounded or checked.

use crate::error::PlayResult;
use crate::models::brownian::ArithmeticBrownian;
use crate::models::model::SdeModel;
use crate::params::SimulationParameters;
use crate::path::{Path, Sample};
use crate::rng::NormalSource;
use crate::solvers::euler_maruyama::EulerMaruyama;
use log::debug;

/// Generates paths for one validated parameter set.
#[derive(Clone, Copy, Debug)]
pub struct PathGenerator {
    params: SimulationParameters,
    model: ArithmeticBrownian,
}

impl PathGenerator {
    pub fn new(params: SimulationParameters) -> PlayResult<Self> {
        params.validate()?;
        Ok(PathGenerator {
            params,
            model: ArithmeticBrownian::from(&params),
        })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn model(&self) -> &ArithmeticBrownian {
        &self.model
    }

    /// Produce `step_count + 1` samples, consuming one normal draw per step.
    pub fn generate<N: NormalSource + ?Sized>(&self, normals: &mut N) -> Path {
        let n = self.params.step_count;
        let dt = self.params.dt();
        let sqrt_dt = dt.sqrt();

        let mut samples = Vec::with_capacity(n + 1);
        let mut x = self.model.initial_value();
        samples.push(Sample::new(0.0, x));

        for i in 1..=n {
            let t_prev = (i - 1) as f64 * dt;
            EulerMaruyama::step(&self.model, &mut x, t_prev, dt, sqrt_dt, normals);
            samples.push(Sample::new(i as f64 * dt, x));
        }

        let path = Path::from_samples(samples, dt);
        debug!(
            "generated path: steps={} dt={} final={:.4} range=[{:.4}, {:.4}]",
            n,
            dt,
            x,
            path.min_value(),
            path.max_value()
        );
        path
    }
}

/// Validate `params` and generate one path.
pub fn generate<N: NormalSource + ?Sized>(
    params: &SimulationParameters,
    normals: &mut N,
) -> PlayResult<Path> {
    Ok(PathGenerator::new(*params)?.generate(normals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayError;
    use crate::rng::{self, Scripted};

    #[test]
    fn test_structure() {
        let params = SimulationParameters::new(0.1, 1.0, 200, 4.0);
        let path = generate(&params, &mut rng::seeded(3)).unwrap();
        assert_eq!(path.len(), 201);
        assert_eq!(path[0], Sample::ORIGIN);
        let dt = 4.0 / 200.0;
        for (i, s) in path.samples().iter().enumerate() {
            assert_eq!(s.time, i as f64 * dt);
        }
    }

    #[test]
    fn test_exact_values_from_scripted_draws() {
        let params = SimulationParameters::new(1.0, 2.0, 4, 1.0);
        let mut draws = Scripted::new(vec![1.0, -1.0, 0.0, 2.0]);
        let path = generate(&params, &mut draws).unwrap();
        // dt = 0.25, sqrt(dt) = 0.5: increments 1.25, -0.75, 0.25, 2.25
        let expected = [0.0, 1.25, 0.5, 0.75, 3.0];
        for (s, e) in path.samples().iter().zip(expected.iter()) {
            assert!((s.value - e).abs() < 1e-12, "{} != {}", s.value, e);
        }
    }

    #[test]
    fn test_rejects_zero_steps() {
        let params = SimulationParameters::new(0.0, 1.0, 0, 1.0);
        let err = generate(&params, &mut rng::seeded(0)).unwrap_err();
        assert!(matches!(err, PlayError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_single_step() {
        let params = SimulationParameters::new(0.0, 1.0, 1, 2.0);
        let path = generate(&params, &mut Scripted::new(vec![1.0])).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path[1].time, 2.0);
        assert!((path[1].value - 2f64.sqrt()).abs() < 1e-12);
    }
}
