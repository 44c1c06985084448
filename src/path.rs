// src/path.rs
use std::ops::Index;

/// One grid point of a discretised path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    pub const ORIGIN: Sample = Sample { time: 0.0, value: 0.0 };

    pub fn new(time: f64, value: f64) -> Self {
        Sample { time, value }
    }
}

/// An immutable, time-ordered sequence of samples starting at the origin.
///
/// Value bounds are computed once at construction so that per-frame
/// consumers never rescan the whole path.
#[derive(Clone, Debug)]
pub struct Path {
    samples: Vec<Sample>,
    dt: f64,
    min_value: f64,
    max_value: f64,
}

impl Path {
    pub(crate) fn from_samples(samples: Vec<Sample>, dt: f64) -> Self {
        let (min_value, max_value) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
                (lo.min(s.value), hi.max(s.value))
            });
        Path {
            samples,
            dt,
            min_value,
            max_value,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of Euler steps (`len() - 1`).
    pub fn step_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The first `count` samples, clamped to the path length.
    pub fn prefix(&self, count: usize) -> &[Sample] {
        &self.samples[..count.min(self.samples.len())]
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn final_time(&self) -> f64 {
        self.dt * self.step_count() as f64
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// `max(|min|, |max|)` over the whole path.
    pub fn max_abs_value(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.min_value.abs().max(self.max_value.abs())
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }
}

impl Index<usize> for Path {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}
