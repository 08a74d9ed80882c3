//! Scheduled auto-advance ticks

use std::time::{Duration, Instant};

/// Identifies one auto-play run. Ticks from an older run are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutoPlayToken(pub(crate) u64);

/// A pending auto-advance callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub token: AutoPlayToken,
}

/// Something that can run a [`Tick`] after a delay.
///
/// The playback controller only submits ticks; delivering them back to
/// [`Playback::on_tick`](super::Playback::on_tick) is the host loop's job.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick);
}

/// Deadline-ordered tick queue polled by the terminal event loop
#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<(Instant, Tick)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        TimerQueue {
            pending: Vec::new(),
        }
    }

    /// Queue `tick` to fire at `deadline`
    pub fn schedule_at(&mut self, deadline: Instant, tick: Tick) {
        // Keep sorted by deadline; equal deadlines fire in submission order
        let pos = self.pending.partition_point(|(due, _)| *due <= deadline);
        self.pending.insert(pos, (deadline, tick));
    }

    /// Remove and return the earliest tick whose deadline is at or before `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<Tick> {
        match self.pending.first() {
            Some((due, _)) if *due <= now => Some(self.pending.remove(0).1),
            _ => None,
        }
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|(due, _)| *due)
    }

    /// Time until the next deadline, capped at `max`
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_deadline()
            .map_or(max, |due| due.saturating_duration_since(now).min(max))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.schedule_at(Instant::now() + delay, tick);
    }
}
