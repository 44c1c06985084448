//! Rendering of the revealed path onto a 2D surface.

pub mod range;
pub mod renderer;
pub mod surface;
pub mod transform;

pub use range::AxisRange;
pub use renderer::{Layers, Renderer, Theme};
pub use surface::{DrawCall, RecordingSurface, Rgb, Stroke, Surface};
pub use transform::{Point, ViewTransform};
