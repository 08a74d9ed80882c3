//! # Introduction
//!
//! hanoi-tui computes the optimal solution to the three-peg Tower of Hanoi
//! puzzle and lets you step through it, or play it back on a timer, in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Disk count → Solver → Moves → Projector → Snapshots → Playback → TUI
//! ```
//!
//! 1. [`config`]: validates the disk count (falling back to the maximum)
//!    and parses command-line arguments.
//! 2. [`solver`]: generates the `2^n - 1` optimal moves recursively.
//! 3. [`snapshot`]: folds the moves into `2^n` board snapshots and bundles
//!    them as a [`snapshot::Solution`].
//! 4. [`playback`]: cursor over the solution with wrapping manual steps and
//!    token-cancelled auto-play driven by a [`playback::Scheduler`].
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use hanoi_tui::snapshot::Solution;
//! use hanoi_tui::solver::Peg;
//!
//! let solution = Solution::new(3);
//! assert_eq!(solution.len(), 8);
//! let last = solution.get(solution.last_index()).unwrap();
//! assert_eq!(last.peg(Peg::Right), &[3, 2, 1]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod playback;
pub mod snapshot;
pub mod solver;
pub mod ui;
