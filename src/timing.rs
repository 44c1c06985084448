// src/timing.rs
use std::time::{Duration, Instant};

pub struct Timer {
    start_time: Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = Instant::now();
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
