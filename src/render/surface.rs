// src/render/surface.rs
//! Minimal 2D drawing target.
//!
//! Hosts implement [`Surface`] over whatever they paint on (a terminal
//! canvas, a pixel buffer, a browser context). [`RecordingSurface`] keeps the
//! calls in memory for tests and headless use.

use super::transform::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Rgb, width: f64) -> Self {
        Stroke { color, width }
    }
}

pub trait Surface {
    /// Drawable extent `(width, height)` in canvas units.
    fn size(&self) -> (f64, f64);

    fn clear(&mut self, color: Rgb);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], stroke);
        }
    }

    fn circle(&mut self, center: Point, radius: f64, color: Rgb);

    fn text(&mut self, at: Point, text: &str, color: Rgb);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Line { from: Point, to: Point, stroke: Stroke },
    Polyline { points: Vec<Point>, stroke: Stroke },
    Circle { center: Point, radius: f64, color: Rgb },
    Text { at: Point, text: String, color: Rgb },
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        RecordingSurface {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.calls.push(DrawCall::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn text(&mut self, at: Point, text: &str, color: Rgb) {
        self.calls.push(DrawCall::Text {
            at,
            text: text.to_string(),
            color,
        });
    }
}
