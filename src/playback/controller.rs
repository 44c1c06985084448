// src/playback/controller.rs
//! Playback state machine.
//!
//! # States
//!
//! ```text
//!            start                     revealed == len
//! Stopped ─────────▶ Running ──────────────────────────▶ Finished
//!    ▲                 │ pause                              │
//!    └─────────────────┘                                    │
//!    ▲                      reset / set_params              │
//!    └──────────────────────────────────────────────────────┘
//! ```
//!
//! While running exactly one tick is armed. Each delivered tick reveals one
//! more sample and only then arms the next, so advances are strictly
//! sequential. `pause` and `reset` forget the armed id; a stale id that still
//! reaches [`PlaybackController::on_tick`] changes nothing.

use super::ticks::{FixedInterval, TickId, TickSource};
use crate::error::PlayResult;
use crate::generator::PathGenerator;
use crate::params::SimulationParameters;
use crate::path::{Path, Sample};
use crate::render::range::AxisRange;
use crate::rng::{self, BoxMuller, NormalSource};
use log::{debug, trace};
use rand::rngs::ThreadRng;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Minimum time between advances. Zero advances once per host frame.
    pub tick_interval: Duration,
}

impl PlaybackConfig {
    pub fn from_millis(ms: u64) -> Self {
        PlaybackConfig {
            tick_interval: Duration::from_millis(ms),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            tick_interval: Duration::ZERO,
        }
    }
}

/// Snapshot of the mutable playback fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub revealed_count: usize,
    pub running: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Finished,
}

/// Result of one applied tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    pub revealed_count: usize,
    pub finished: bool,
}

pub struct PlaybackController<N = BoxMuller<ThreadRng>, T = FixedInterval> {
    generator: PathGenerator,
    normals: N,
    ticks: T,
    path: Path,
    range: AxisRange,
    revealed: usize,
    running: bool,
    pending: Option<TickId>,
    last_id: TickId,
}

impl PlaybackController {
    /// Controller over the ambient RNG, paced by `config.tick_interval`.
    pub fn new(params: SimulationParameters, config: &PlaybackConfig) -> PlayResult<Self> {
        PlaybackController::with_sources(
            params,
            rng::ambient(),
            FixedInterval::new(config.tick_interval),
        )
    }
}

impl<N: NormalSource, T: TickSource> PlaybackController<N, T> {
    /// Validate `params`, generate the first path and enter `Stopped`.
    pub fn with_sources(
        params: SimulationParameters,
        mut normals: N,
        ticks: T,
    ) -> PlayResult<Self> {
        let generator = PathGenerator::new(params)?;
        let path = generator.generate(&mut normals);
        let range = AxisRange::for_path(&path);
        Ok(PlaybackController {
            generator,
            normals,
            ticks,
            path,
            range,
            revealed: 1,
            running: false,
            pending: None,
            last_id: TickId::new(0),
        })
    }

    /// Begin or resume revealing. Returns `false` when already running or
    /// when nothing is left to reveal.
    pub fn start(&mut self) -> bool {
        if self.running || self.is_finished() {
            return false;
        }
        self.running = true;
        debug!("playback started at {}/{}", self.revealed, self.path.len());
        self.schedule(None);
        true
    }

    /// Stop revealing and withdraw the armed tick. The revealed count is kept.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.cancel_pending();
        debug!("playback paused at {}/{}", self.revealed, self.path.len());
        true
    }

    /// `start` when stopped, `pause` when running.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Regenerate the path with the current parameters and rewind.
    pub fn reset(&mut self) {
        self.running = false;
        self.cancel_pending();
        self.path = self.generator.generate(&mut self.normals);
        self.range = AxisRange::for_path(&self.path);
        self.revealed = 1;
        debug!("playback reset: {} samples", self.path.len());
    }

    /// Replace the parameters and reset. Invalid parameters leave the
    /// controller untouched.
    pub fn set_params(&mut self, params: SimulationParameters) -> PlayResult<()> {
        self.generator = PathGenerator::new(params)?;
        self.reset();
        Ok(())
    }

    /// Poll the tick source once; call this from the host's frame loop.
    pub fn update(&mut self, now: Instant) -> Option<Advance> {
        let id = self.ticks.poll(now)?;
        self.apply_tick(id, Some(now))
    }

    /// Deliver a tick obtained outside [`update`](Self::update).
    pub fn on_tick(&mut self, id: TickId) -> Option<Advance> {
        self.apply_tick(id, None)
    }

    fn apply_tick(&mut self, id: TickId, now: Option<Instant>) -> Option<Advance> {
        if !self.running || self.pending != Some(id) {
            trace!("ignoring stale tick {:?}", id);
            return None;
        }
        self.pending = None;
        self.revealed += 1;
        trace!("tick {:?}: revealed {}/{}", id, self.revealed, self.path.len());

        let finished = self.revealed >= self.path.len();
        if finished {
            self.running = false;
            debug!("playback finished: {} samples", self.revealed);
        } else {
            self.schedule(now);
        }
        Some(Advance {
            revealed_count: self.revealed,
            finished,
        })
    }

    fn schedule(&mut self, since: Option<Instant>) {
        let id = self.last_id.next();
        self.last_id = id;
        self.pending = Some(id);
        self.ticks.arm(id, since);
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.ticks.disarm();
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Samples revealed so far, `path[0..revealed_count)`.
    pub fn revealed(&self) -> &[Sample] {
        self.path.prefix(self.revealed)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Latest revealed sample.
    pub fn current(&self) -> Sample {
        self.path[self.revealed - 1]
    }

    /// `(revealed, total)`
    pub fn progress(&self) -> (usize, usize) {
        (self.revealed, self.path.len())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.revealed >= self.path.len()
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.is_finished() {
            Phase::Finished
        } else {
            Phase::Stopped
        }
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            revealed_count: self.revealed,
            running: self.running,
        }
    }

    pub fn params(&self) -> &SimulationParameters {
        self.generator.params()
    }

    /// Axis range for the current path, computed once per generation.
    pub fn value_range(&self) -> AxisRange {
        self.range
    }

    /// Tick id currently armed, if any.
    pub fn pending_tick(&self) -> Option<TickId> {
        self.pending
    }

    pub fn ticks(&self) -> &T {
        &self.ticks
    }
}
