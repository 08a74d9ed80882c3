//! Main TUI application state and logic

use crate::config::{DiskCount, MAX_DISKS};
use crate::playback::{Playback, TickOutcome, TimerQueue};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{self, BoardRenderData, StatusRenderData};

/// Longest wait for input before re-checking timers
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Longest disk-count text accepted by the prompt
const MAX_INPUT_LEN: usize = 8;

/// What keyboard input is currently routed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Playback controls
    Normal,
    /// Typing a new disk count
    DiskCount(String),
    /// About popup; any key closes it
    About,
}

/// The main application state
pub struct App {
    /// Solution and cursor for the current disk count
    pub playback: Playback,

    /// Pending auto-play ticks
    pub timers: TimerQueue,

    /// Delay between auto-play steps
    pub interval: Duration,

    pub mode: InputMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(playback: Playback, interval: Duration) -> Self {
        App {
            playback,
            timers: TimerQueue::new(),
            interval,
            mode: InputMode::Normal,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.fire_due_ticks(Instant::now());

            // Wake up in time for the next auto-play tick
            let timeout = self.timers.poll_timeout(Instant::now(), POLL_INTERVAL);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Deliver every auto-play tick due at `now`
    pub fn fire_due_ticks(&mut self, now: Instant) {
        while let Some(tick) = self.timers.pop_due(now) {
            match self.playback.on_tick(tick, &mut self.timers) {
                TickOutcome::Advanced => {
                    self.status_message = "Playing...".to_string();
                }
                TickOutcome::Finished => {
                    self.status_message = format!(
                        "Solved in {} moves",
                        self.playback.solution().moves().len()
                    );
                }
                TickOutcome::Ignored => {}
            }
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let cursor = self.playback.cursor();

        panes::render_board_pane(
            frame,
            main_chunks[0],
            &BoardRenderData {
                snapshot: self.playback.current(),
                disks: self.playback.disks(),
                moves_made: cursor,
            },
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                cursor,
                total: self.playback.len(),
                last_move: self.playback.solution().move_into(cursor),
                is_playing: self.playback.is_running(),
            },
        );

        match &self.mode {
            InputMode::Normal => {}
            InputMode::DiskCount(input) => panes::render_disk_prompt(frame, main_chunks[0], input),
            InputMode::About => panes::render_about(frame, main_chunks[0]),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::DiskCount(_) => self.handle_prompt_key(key),
            InputMode::About => {
                self.mode = InputMode::Normal;
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.playback.step_backward();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.playback.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Char(' ') => {
                if self.playback.is_running() {
                    self.stop();
                } else {
                    self.start();
                }
            }
            KeyCode::Char('s') => self.start(),
            KeyCode::Char('x') => self.stop(),
            KeyCode::Char('r') => {
                let disks = self.playback.disks();
                self.playback.reset(disks);
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('n') => {
                self.mode = InputMode::DiskCount(String::new());
            }
            KeyCode::Char('a') => {
                self.mode = InputMode::About;
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let InputMode::DiskCount(input) = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Char(c) if !c.is_control() => {
                if input.chars().count() < MAX_INPUT_LEN {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.status_message = "Cancelled".to_string();
            }
            KeyCode::Enter => {
                let input = std::mem::take(input);
                self.mode = InputMode::Normal;
                self.apply_disk_count(&input);
            }
            _ => {}
        }
    }

    /// Regenerate for the typed disk count, falling back to the maximum
    fn apply_disk_count(&mut self, input: &str) {
        let count = match DiskCount::parse(input) {
            Ok(count) => {
                self.status_message = format!("{} disks", count.get());
                count
            }
            Err(err) => {
                tracing::warn!(%err, fallback = MAX_DISKS, "invalid disk count");
                self.status_message = format!("{}; using {}", err, MAX_DISKS);
                DiskCount::MAX
            }
        };
        self.playback.reset(count.get());
    }

    fn start(&mut self) {
        if self.playback.auto_play(self.interval, &mut self.timers) {
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Already solved; press r to reset".to_string();
        }
    }

    fn stop(&mut self) {
        self.playback.stop();
        self.status_message = "Paused".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(60)
    }

    #[test]
    fn test_arrow_keys_step_and_wrap() {
        let mut app = App::new(Playback::new(2), Duration::from_millis(500));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.cursor(), 3);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.cursor(), 0);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.playback.cursor(), 1);
    }

    #[test]
    fn test_space_plays_to_the_end() {
        let mut app = App::new(Playback::new(2), Duration::from_millis(1));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.playback.is_running());

        // each fired tick schedules the next one from "now", so drain repeatedly
        for _ in 0..10 {
            app.fire_due_ticks(later());
        }
        assert_eq!(app.playback.cursor(), 3);
        assert!(!app.playback.is_running());
        assert!(app.timers.is_empty());
        assert_eq!(app.status_message, "Solved in 3 moves");
    }

    #[test]
    fn test_stop_cancels_pending_tick() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('x'));
        app.fire_due_ticks(later());
        assert_eq!(app.playback.cursor(), 0);
        assert_eq!(app.status_message, "Paused");
    }

    #[test]
    fn test_start_when_solved() {
        let mut app = App::new(Playback::new(1), Duration::from_millis(500));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.playback.is_running());
        assert!(app.timers.is_empty());
    }

    #[test]
    fn test_disk_prompt_applies_count() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "45");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.mode, InputMode::DiskCount("4".to_string()));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.playback.disks(), 4);
        assert_eq!(app.playback.len(), 16);
        assert_eq!(app.playback.cursor(), 0);
    }

    #[test]
    fn test_disk_prompt_falls_back_to_max() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "lots");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.playback.disks(), MAX_DISKS);
        assert!(app.status_message.contains("using 10"));
    }

    #[test]
    fn test_disk_prompt_escape_keeps_solution() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "5");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.playback.disks(), 3);
    }

    #[test]
    fn test_reset_during_auto_play() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.playback.is_running());
        app.fire_due_ticks(later());
        assert_eq!(app.playback.cursor(), 0);
    }

    #[test]
    fn test_about_and_quit() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, InputMode::About);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, InputMode::Normal);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_initial_board() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        let mut terminal = Terminal::new(TestBackend::new(200, 16)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Tower of Hanoi (3 disks)"));
        assert!(screen.contains("Moves: 0"));
        assert!(screen.contains("Move 0/7"));
        assert!(screen.contains("START"));
    }

    #[test]
    fn test_render_prompt_popup() {
        let mut app = App::new(Playback::new(3), Duration::from_millis(500));
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "7");
        let mut terminal = Terminal::new(TestBackend::new(200, 16)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Number of disks: 7"));
    }
}
