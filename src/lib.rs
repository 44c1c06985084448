//! # brownian-play: Animated Sample Paths of Brownian Motion
//!
//! Generates a discretised sample path of
//! ```text
//! dX_t = μ dt + σ dW_t,   X_0 = 0,   t ∈ [0, k]
//! ```
//! with the Euler-Maruyama scheme, then reveals it one sample per tick for
//! display on a 2D surface with a fixed, auto-scaled value axis.
//!
//! ## Pieces
//!
//! - **Generation**: [`generator::PathGenerator`] turns [`SimulationParameters`] into an immutable [`path::Path`]
//! - **Randomness**: [`rng::NormalSource`] is injected, so tests can use seeded or scripted draws
//! - **Playback**: [`playback::PlaybackController`] (start / pause / reset) driven by a [`playback::TickSource`]
//! - **Rendering**: [`render::Renderer`] paints grid, axes, path and marker on any [`render::Surface`]
//!
//! ## Quick Start
//!
//! ```rust
//! use brownian_play::playback::{FixedInterval, PlaybackController};
//! use brownian_play::{rng, SimulationParameters};
//! use std::time::Instant;
//!
//! let params = SimulationParameters::default();
//! let mut player = PlaybackController::with_sources(
//!     params,
//!     rng::seeded(7),
//!     FixedInterval::every_frame(),
//! )
//! .expect("valid parameters");
//!
//! player.start();
//! for _ in 0..10 {
//!     player.update(Instant::now());
//! }
//! assert_eq!(player.revealed_count(), 11);
//! assert_eq!(player.path().len(), 1001);
//! ```

// Module declarations
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod path;
pub mod playback;
pub mod render;
pub mod rng;
pub mod solvers;
pub mod timing;

// Re-export commonly used types for convenience
pub use error::{PlayError, PlayResult};
pub use generator::PathGenerator;
pub use params::SimulationParameters;
pub use path::{Path, Sample};
