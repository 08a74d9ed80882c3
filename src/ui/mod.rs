//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, auto-play timer delivery,
//!   disk-count prompt
//! - **[`panes`]**: stateless render functions for the board, status bar and popups
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Playback`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Playback`]: crate::playback::Playback
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
