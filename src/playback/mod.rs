//! Incremental reveal of a generated path.

pub mod controller;
pub mod ticks;

pub use controller::{Advance, Phase, PlaybackConfig, PlaybackController, PlaybackState};
pub use ticks::{CallbackQueue, FixedInterval, TickId, TickSource};
