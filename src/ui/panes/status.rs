//! Status bar rendering with keybindings and playback indicators

use crate::solver::Move;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// State shown in the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub cursor: usize,
    /// Total snapshot count
    pub total: usize,
    pub last_move: Option<Move>,
    pub is_playing: bool,
}

impl StatusRenderData<'_> {
    /// `"Move <cursor>/<total moves>"`
    pub fn step_text(&self) -> String {
        format!(" Move {}/{} ", self.cursor, self.total.saturating_sub(1))
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.total
    }
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.bar_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: position, last move and status message
    let mut left_spans = vec![Span::styled(
        data.step_text(),
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(mv) = data.last_move {
        left_spans.push(Span::styled(" | ", sep_style));
        left_spans.push(Span::styled(
            mv.to_string(),
            bar_style.fg(DEFAULT_THEME.secondary),
        ));
    }
    left_spans.push(Span::styled(" | ", sep_style));
    left_spans.push(Span::styled(
        format!(" {} ", data.message),
        bar_style.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" r ", " reset "),
        (" n ", " disks "),
        (" a ", " about "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let indicator = if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if data.is_at_end() {
        Some((" SOLVED ", DEFAULT_THEME.success))
    } else if data.cursor == 0 {
        Some((" START ", DEFAULT_THEME.primary))
    } else {
        None
    };

    if let Some((label, color)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
