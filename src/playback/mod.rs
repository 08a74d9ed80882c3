//! Playback controller over a solution's snapshot history
//!
//! [`Playback`] owns the [`Solution`] for the current disk count together with
//! the cursor into it, and replaces both at once on [`Playback::reset`].
//!
//! # Stepping
//!
//! Manual stepping wraps in both directions: stepping forward from the solved
//! snapshot returns to the start, and stepping backward from the start jumps
//! to the solved snapshot.
//!
//! # Auto-play
//!
//! Auto-play never sleeps. [`Playback::auto_play`] submits a [`Tick`] to a
//! [`Scheduler`]; when the host loop fires it, [`Playback::on_tick`] advances
//! one snapshot and submits the next tick. Unlike manual stepping, auto-play
//! halts once the solved snapshot is reached.
//!
//! Each run is tagged with an [`AutoPlayToken`]. [`Playback::stop`] and
//! [`Playback::reset`] forget the running token, so a tick that was already
//! queued is ignored when it fires.

pub mod timer;

pub use timer::{AutoPlayToken, Scheduler, Tick, TimerQueue};

use crate::snapshot::{Snapshot, Solution};
use std::time::Duration;

/// Delay between auto-play steps
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Result of delivering a [`Tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one snapshot and scheduled the next tick
    Advanced,
    /// Reached the solved snapshot; auto-play is now stopped
    Finished,
    /// Stale or cancelled tick; nothing changed
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoPlay {
    Stopped,
    Running {
        token: AutoPlayToken,
        interval: Duration,
    },
}

/// Cursor-based playback of a [`Solution`]
#[derive(Debug)]
pub struct Playback {
    solution: Solution,
    cursor: usize,
    auto_play: AutoPlay,
    next_token: u64,
}

impl Playback {
    /// Generate the solution for `disks` and place the cursor at the start
    pub fn new(disks: u8) -> Self {
        Playback {
            solution: Solution::new(disks),
            cursor: 0,
            auto_play: AutoPlay::Stopped,
            next_token: 0,
        }
    }

    /// Regenerate the solution for `disks`, rewind to the start and halt
    /// auto-play
    pub fn reset(&mut self, disks: u8) {
        let solution = Solution::new(disks);
        debug_assert_eq!(solution.first_invalid(), None);

        self.stop();
        self.solution = solution;
        self.cursor = 0;
        tracing::info!(disks, snapshots = self.solution.len(), "solution regenerated");
    }

    /// Advance one snapshot, wrapping from the solved snapshot to the start
    pub fn step_forward(&mut self) {
        self.cursor = (self.cursor + 1) % self.len();
        tracing::debug!(cursor = self.cursor, "step forward");
    }

    /// Go back one snapshot, wrapping from the start to the solved snapshot
    pub fn step_backward(&mut self) {
        self.cursor = match self.cursor {
            0 => self.solution.last_index(),
            c => c - 1,
        };
        tracing::debug!(cursor = self.cursor, "step backward");
    }

    /// Start auto-play, submitting the first tick to `scheduler`.
    ///
    /// Returns whether auto-play is running afterwards. Already running is
    /// left as is; at the solved snapshot nothing is started.
    pub fn auto_play<S: Scheduler>(&mut self, interval: Duration, scheduler: &mut S) -> bool {
        if self.is_running() {
            return true;
        }
        if self.is_solved() {
            tracing::debug!("auto-play not started: already solved");
            return false;
        }

        let token = AutoPlayToken(self.next_token);
        self.next_token += 1;
        self.auto_play = AutoPlay::Running { token, interval };
        scheduler.schedule(interval, Tick { token });
        tracing::info!(cursor = self.cursor, ?interval, "auto-play started");
        true
    }

    /// Stop auto-play. Idempotent.
    pub fn stop(&mut self) {
        if let AutoPlay::Running { token, .. } = self.auto_play {
            self.auto_play = AutoPlay::Stopped;
            tracing::info!(?token, cursor = self.cursor, "auto-play stopped");
        }
    }

    /// Handle a fired auto-play tick
    pub fn on_tick<S: Scheduler>(&mut self, tick: Tick, scheduler: &mut S) -> TickOutcome {
        let interval = match self.auto_play {
            AutoPlay::Running { token, interval } if token == tick.token => interval,
            _ => {
                tracing::debug!(token = ?tick.token, "ignoring stale tick");
                return TickOutcome::Ignored;
            }
        };

        if !self.is_solved() {
            self.step_forward();
        }

        if self.is_solved() {
            self.auto_play = AutoPlay::Stopped;
            tracing::info!(cursor = self.cursor, "auto-play finished");
            TickOutcome::Finished
        } else {
            scheduler.schedule(interval, tick);
            TickOutcome::Advanced
        }
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> &Snapshot {
        &self.solution.snapshots()[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of snapshots
    pub fn len(&self) -> usize {
        self.solution.len()
    }

    /// Always false; a solution holds at least the starting snapshot
    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn disks(&self) -> u8 {
        self.solution.disks()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.auto_play, AutoPlay::Running { .. })
    }

    /// Cursor is on the last (solved) snapshot
    pub fn is_solved(&self) -> bool {
        self.cursor == self.solution.last_index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorded(Vec<Tick>);

    impl Scheduler for Recorded {
        fn schedule(&mut self, _delay: Duration, tick: Tick) {
            self.0.push(tick);
        }
    }

    #[test]
    fn test_new_starts_at_zero() {
        let playback = Playback::new(3);
        assert_eq!(playback.cursor(), 0);
        assert_eq!(playback.len(), 8);
        assert!(!playback.is_running());
        assert_eq!(playback.current(), &Snapshot::initial(3));
    }

    #[test]
    fn test_step_wraps() {
        let mut playback = Playback::new(2);
        playback.step_backward();
        assert_eq!(playback.cursor(), 3);
        playback.step_forward();
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn test_tick_after_stop_is_ignored() {
        let mut playback = Playback::new(3);
        let mut scheduler = Recorded::default();
        assert!(playback.auto_play(DEFAULT_INTERVAL, &mut scheduler));
        let tick = scheduler.0.pop().unwrap();

        playback.stop();
        playback.stop();
        assert_eq!(playback.on_tick(tick, &mut scheduler), TickOutcome::Ignored);
        assert_eq!(playback.cursor(), 0);
        assert!(scheduler.0.is_empty());
    }

    #[test]
    fn test_auto_play_while_running_keeps_one_chain() {
        let mut playback = Playback::new(3);
        let mut scheduler = Recorded::default();
        assert!(playback.auto_play(DEFAULT_INTERVAL, &mut scheduler));
        assert!(playback.auto_play(DEFAULT_INTERVAL, &mut scheduler));
        assert_eq!(scheduler.0.len(), 1);
    }
}
