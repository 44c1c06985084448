// src/render/transform.rs
//! Data-space to canvas-space mapping.
//!
//! Canvas coordinates follow the usual 2D-canvas convention: origin at the
//! top-left corner, `y` growing downward. Time `[0, T]` spans the plot area
//! horizontally and the symmetric value range spans it vertically.

use super::range::AxisRange;
use crate::path::Sample;

/// Default blank border around the plot area, in canvas units.
pub const DEFAULT_MARGIN: f64 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    time_span: f64,
    range: AxisRange,
}

impl ViewTransform {
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        margin: f64,
        time_span: f64,
        range: AxisRange,
    ) -> Self {
        // Keep a non-degenerate plot area even on tiny canvases.
        let margin = margin.min(canvas_width / 4.0).min(canvas_height / 4.0).max(0.0);
        ViewTransform {
            left: margin,
            top: margin,
            width: (canvas_width - 2.0 * margin).max(1.0),
            height: (canvas_height - 2.0 * margin).max(1.0),
            time_span: if time_span > 0.0 { time_span } else { 1.0 },
            range,
        }
    }

    pub fn x(&self, time: f64) -> f64 {
        self.left + time / self.time_span * self.width
    }

    pub fn y(&self, value: f64) -> f64 {
        self.top + (self.range.max() - value) / self.range.span() * self.height
    }

    pub fn to_canvas(&self, sample: &Sample) -> Point {
        Point::new(self.x(sample.time), self.y(sample.value))
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn time_span(&self) -> f64 {
        self.time_span
    }

    pub fn range(&self) -> AxisRange {
        self.range
    }
}

/// "Nice" tick positions (1-2-5 steps) covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target_count: usize) -> (Vec<f64>, f64) {
    let range = max - min;
    if range.abs() < 1e-12 || target_count == 0 || !range.is_finite() {
        return (vec![], 1.0);
    }
    let rough_step = range / target_count as f64;
    let mag = 10.0f64.powf(rough_step.log10().floor());
    let normalized = rough_step / mag;
    let nice_step = if normalized < 1.5 {
        mag
    } else if normalized < 3.5 {
        mag * 2.0
    } else if normalized < 7.5 {
        mag * 5.0
    } else {
        mag * 10.0
    };
    let first = (min / nice_step).ceil() as i64;
    let last = (max / nice_step + 1e-9).floor() as i64;
    let ticks = (first..=last).map(|k| k as f64 * nice_step).collect();
    (ticks, nice_step)
}

/// Format a tick value with as many decimals as the step needs.
pub fn tick_label(v: f64, step: f64) -> String {
    let v = if v.abs() < step * 1e-6 { 0.0 } else { v };
    if step >= 0.95 {
        format!("{:.0}", v)
    } else if step >= 0.095 {
        format!("{:.1}", v)
    } else if step >= 0.0095 {
        format!("{:.2}", v)
    } else {
        format!("{:.3}", v)
    }
}
