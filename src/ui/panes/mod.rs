//! TUI pane rendering modules
//!
//! - [`board`]: pegs and disks for the snapshot at the cursor, with the move counter
//! - [`status`]: status bar with keybindings and playback state
//! - [`dialog`]: disk-count prompt and about popups
//!
//! Each pane exports a `render_*` function that takes the frame, its area and
//! a borrowed render-data struct. Panes hold no state of their own.

pub mod board;
pub mod dialog;
pub mod status;

pub use board::{render_board_pane, BoardRenderData};
pub use dialog::{render_about, render_disk_prompt};
pub use status::{render_status_bar, StatusRenderData};
