// src/render/renderer.rs
use super::range::AxisRange;
use super::surface::{Rgb, Stroke, Surface};
use super::transform::{nice_ticks, tick_label, Point, ViewTransform, DEFAULT_MARGIN};
use crate::path::Path;
use crate::playback::controller::PlaybackController;
use crate::playback::ticks::TickSource;
use crate::rng::NormalSource;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Layers: u32 {
        const NONE   = 0;
        const GRID   = 1 << 0;
        const AXES   = 1 << 1;
        const LABELS = 1 << 2;
        const PATH   = 1 << 3;
        const MARKER = 1 << 4;
        const ALL = Self::GRID.bits()
            | Self::AXES.bits()
            | Self::LABELS.bits()
            | Self::PATH.bits()
            | Self::MARKER.bits();
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: Rgb,
    pub grid: Rgb,
    pub axis: Rgb,
    pub label: Rgb,
    pub path: Rgb,
    pub marker: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Rgb(255, 255, 255),
            grid: Rgb(224, 224, 224),
            axis: Rgb(51, 51, 51),
            label: Rgb(102, 102, 102),
            path: Rgb(33, 150, 243),
            marker: Rgb(244, 67, 54),
        }
    }
}

/// Draws grid, axes, the revealed prefix and the current-point marker.
#[derive(Clone, Debug)]
pub struct Renderer {
    pub layers: Layers,
    pub theme: Theme,
    pub margin: f64,
    /// Approximate number of grid divisions per axis.
    pub grid_divisions: usize,
    pub marker_radius: f64,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer {
            layers: Layers::ALL,
            theme: Theme::default(),
            margin: DEFAULT_MARGIN,
            grid_divisions: 8,
            marker_radius: 4.0,
        }
    }
}

impl Renderer {
    pub fn transform_for<S: Surface + ?Sized>(
        &self,
        surface: &S,
        path: &Path,
        range: AxisRange,
    ) -> ViewTransform {
        let (w, h) = surface.size();
        ViewTransform::new(w, h, self.margin, path.final_time(), range)
    }

    /// Paint `path[0..revealed_count)` against the fixed `range`.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        path: &Path,
        revealed_count: usize,
        range: AxisRange,
    ) {
        let tf = self.transform_for(surface, path, range);
        surface.clear(self.theme.background);

        let (time_ticks, time_step) = nice_ticks(0.0, tf.time_span(), self.grid_divisions);
        let (value_ticks, value_step) = nice_ticks(range.min(), range.max(), self.grid_divisions);

        if self.layers.contains(Layers::GRID) {
            let stroke = Stroke::new(self.theme.grid, 1.0);
            for &t in &time_ticks {
                let x = tf.x(t);
                surface.line(Point::new(x, tf.top()), Point::new(x, tf.bottom()), stroke);
            }
            for &v in &value_ticks {
                let y = tf.y(v);
                surface.line(Point::new(tf.left(), y), Point::new(tf.right(), y), stroke);
            }
        }

        if self.layers.contains(Layers::AXES) {
            let stroke = Stroke::new(self.theme.axis, 1.5);
            let y0 = tf.y(0.0);
            surface.line(Point::new(tf.left(), y0), Point::new(tf.right(), y0), stroke);
            surface.line(
                Point::new(tf.left(), tf.top()),
                Point::new(tf.left(), tf.bottom()),
                stroke,
            );
        }

        if self.layers.contains(Layers::LABELS) {
            let color = self.theme.label;
            for &t in &time_ticks {
                surface.text(
                    Point::new(tf.x(t), tf.bottom() + self.margin * 0.5),
                    &tick_label(t, time_step),
                    color,
                );
            }
            for &v in &value_ticks {
                surface.text(
                    Point::new(tf.left() - self.margin * 0.9, tf.y(v)),
                    &tick_label(v, value_step),
                    color,
                );
            }
        }

        let revealed = path.prefix(revealed_count);

        if self.layers.contains(Layers::PATH) && revealed.len() >= 2 {
            let points: Vec<Point> = revealed.iter().map(|s| tf.to_canvas(s)).collect();
            surface.polyline(&points, Stroke::new(self.theme.path, 2.0));
        }

        if self.layers.contains(Layers::MARKER) {
            if let Some(current) = revealed.last() {
                let at = tf.to_canvas(current);
                surface.circle(at, self.marker_radius, self.theme.marker);
                surface.text(
                    Point::new(tf.left() + 6.0, tf.top() - self.margin * 0.5),
                    &format!("t = {:.2}, X = {:.3}", current.time, current.value),
                    self.theme.axis,
                );
            }
        }
    }

    pub fn draw_controller<S, N, T>(&self, surface: &mut S, controller: &PlaybackController<N, T>)
    where
        S: Surface + ?Sized,
        N: NormalSource,
        T: TickSource,
    {
        self.draw(
            surface,
            controller.path(),
            controller.revealed_count(),
            controller.value_range(),
        );
    }
}
