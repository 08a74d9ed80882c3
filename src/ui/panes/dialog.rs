//! Popups drawn over the board: disk-count prompt and about box

use crate::config::MAX_DISKS;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// A `width` x `height` rect centred in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.bg))
}

/// Prompt for a new disk count; `input` is the text typed so far
pub fn render_disk_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(40, 5, area);
    let lines = vec![
        Line::from(vec![
            Span::styled("Number of disks: ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                format!("{}▏", input),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("0-{}, Enter to apply, Esc to cancel", MAX_DISKS),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(" Disks ")),
        popup,
    );
}

/// About box
pub fn render_about(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(46, 8, area);
    let lines = vec![
        Line::from(Span::styled(
            "Tower of Hanoi Solver",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Optimal solutions for up to {} disks", MAX_DISKS),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(Span::styled(
            format!("version {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(popup_block(" About "))
            .alignment(Alignment::Center),
        popup,
    );
}
