// src/playback/ticks.rs
//! Tick pacing for playback.
//!
//! A [`TickSource`] holds at most one armed [`TickId`] on behalf of the
//! controller and hands it back from [`TickSource::poll`] once it is due.
//! Ids are never reused, so a tick that was cancelled but still delivered
//! (a host callback that cannot be withdrawn) is recognisably stale.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Token identifying one scheduled advance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(u64);

impl TickId {
    pub const fn new(raw: u64) -> Self {
        TickId(raw)
    }

    pub fn next(&self) -> TickId {
        TickId(self.0.wrapping_add(1))
    }
}

pub trait TickSource {
    /// Schedule `id`. `since` is the instant the request was made, when the
    /// caller knows it; otherwise the source starts counting at its next poll.
    fn arm(&mut self, id: TickId, since: Option<Instant>);

    /// Withdraw the armed tick, if the source is able to.
    fn disarm(&mut self);

    /// Called once per host frame. Returns a tick that is due, if any.
    fn poll(&mut self, now: Instant) -> Option<TickId>;
}

/// Fires the armed tick once `interval` has elapsed. A zero interval fires
/// on the next poll, which paces playback to the host's frame rate.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    interval: Duration,
    pending: Option<(TickId, Option<Instant>)>,
}

impl FixedInterval {
    pub fn new(interval: Duration) -> Self {
        FixedInterval {
            interval,
            pending: None,
        }
    }

    pub fn every_frame() -> Self {
        FixedInterval::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for FixedInterval {
    fn default() -> Self {
        FixedInterval::every_frame()
    }
}

impl TickSource for FixedInterval {
    fn arm(&mut self, id: TickId, since: Option<Instant>) {
        self.pending = Some((id, since.map(|s| s + self.interval)));
    }

    fn disarm(&mut self) {
        self.pending = None;
    }

    fn poll(&mut self, now: Instant) -> Option<TickId> {
        let (id, deadline) = self.pending?;
        let deadline = match deadline {
            Some(d) => d,
            None => {
                let d = now + self.interval;
                self.pending = Some((id, Some(d)));
                d
            }
        };
        if now >= deadline {
            self.pending = None;
            Some(id)
        } else {
            None
        }
    }
}

/// Host-style callback queue: every armed id is delivered on a later poll,
/// one per frame, and `disarm` cannot withdraw an id once queued.
#[derive(Debug, Clone, Default)]
pub struct CallbackQueue {
    queued: VecDeque<TickId>,
}

impl CallbackQueue {
    pub fn new() -> Self {
        CallbackQueue::default()
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

impl TickSource for CallbackQueue {
    fn arm(&mut self, id: TickId, _since: Option<Instant>) {
        self.queued.push_back(id);
    }

    fn disarm(&mut self) {}

    fn poll(&mut self, _now: Instant) -> Option<TickId> {
        self.queued.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_frame_fires_on_next_poll() {
        let mut src = FixedInterval::every_frame();
        let now = Instant::now();
        assert_eq!(src.poll(now), None);
        src.arm(TickId::new(1), None);
        assert_eq!(src.poll(now), Some(TickId::new(1)));
        assert_eq!(src.poll(now), None);
    }

    #[test]
    fn test_interval_waits_for_deadline() {
        let mut src = FixedInterval::new(Duration::from_millis(50));
        let t0 = Instant::now();
        src.arm(TickId::new(7), Some(t0));
        assert_eq!(src.poll(t0 + Duration::from_millis(10)), None);
        assert!(src.is_armed());
        assert_eq!(src.poll(t0 + Duration::from_millis(50)), Some(TickId::new(7)));
        assert!(!src.is_armed());
    }

    #[test]
    fn test_unanchored_interval_counts_from_first_poll() {
        let mut src = FixedInterval::new(Duration::from_millis(20));
        let t0 = Instant::now();
        src.arm(TickId::new(2), None);
        assert_eq!(src.poll(t0), None);
        assert_eq!(src.poll(t0 + Duration::from_millis(19)), None);
        assert_eq!(src.poll(t0 + Duration::from_millis(20)), Some(TickId::new(2)));
    }

    #[test]
    fn test_disarm_cancels() {
        let mut src = FixedInterval::every_frame();
        src.arm(TickId::new(1), None);
        src.disarm();
        assert_eq!(src.poll(Instant::now()), None);
    }

    #[test]
    fn test_callback_queue_keeps_cancelled_ids() {
        let mut q = CallbackQueue::new();
        let now = Instant::now();
        q.arm(TickId::new(1), None);
        q.disarm();
        q.arm(TickId::new(2), None);
        assert_eq!(q.len(), 2);
        assert_eq!(q.poll(now), Some(TickId::new(1)));
        assert_eq!(q.poll(now), Some(TickId::new(2)));
        assert!(q.is_empty());
    }
}
