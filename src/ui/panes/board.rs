//! Board pane: pegs, disks and the move counter

use crate::snapshot::Snapshot;
use crate::solver::{Disk, Peg};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PEG_GLYPH: &str = "┃";

/// What the board pane needs to draw one snapshot
pub struct BoardRenderData<'a> {
    pub snapshot: &'a Snapshot,
    /// Disk count of the whole solution; sets the peg height and disk scale
    pub disks: u8,
    /// Number of moves made so far (the cursor)
    pub moves_made: usize,
}

/// Render the board pane
pub fn render_board_pane(frame: &mut Frame, area: Rect, data: &BoardRenderData) {
    let block = Block::default()
        .title(format!(" Tower of Hanoi ({} disks) ", data.disks))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let mut lines = board_lines(data, inner_width);

    // Sit the board on the bottom edge of the pane
    if lines.len() < inner_height {
        let mut padded = vec![Line::raw(""); inner_height - lines.len()];
        padded.append(&mut lines);
        lines = padded;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Build the board rows, top to bottom, for a pane `width` columns wide.
///
/// Rows: one peg tip, one row per disk slot, then the base with the move
/// counter.
pub fn board_lines(data: &BoardRenderData, width: usize) -> Vec<Line<'static>> {
    let column = width / 3;
    let slots = usize::from(data.disks);
    let mut lines = Vec::with_capacity(slots + 2);

    // Row 0 is the bare peg tip, the last row before the base is level 1
    for row in 0..=slots {
        let level = slots + 1 - row;
        let spans: Vec<Span> = Peg::ALL
            .into_iter()
            .flat_map(|peg| slot_spans(disk_at(data.snapshot, peg, level), column, data.disks))
            .collect();
        lines.push(Line::from(spans));
    }

    let counter = format!("Moves: {}", data.moves_made);
    let base_style = Style::default()
        .bg(DEFAULT_THEME.base)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let (left, right) = centered(counter.chars().count(), width);
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(left), base_style),
        Span::styled(counter, base_style),
        Span::styled(" ".repeat(right), base_style),
    ]));

    lines
}

/// Disk resting at `level` on `peg` (level 1 = on the base), if any
fn disk_at(snapshot: &Snapshot, peg: Peg, level: usize) -> Option<Disk> {
    level
        .checked_sub(1)
        .and_then(|i| snapshot.peg(peg).get(i))
        .copied()
}

/// Spans for one peg column at one row: a disk if present, else the peg
fn slot_spans(disk: Option<Disk>, column: usize, max_disk: u8) -> Vec<Span<'static>> {
    let (content, style) = match disk {
        Some(d) => {
            let w = disk_width(d, max_disk, column);
            (
                format!("{:^w$}", d, w = w),
                Style::default()
                    .bg(DEFAULT_THEME.disk_color(d))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
        }
        None => (
            PEG_GLYPH.to_string(),
            Style::default().fg(DEFAULT_THEME.base),
        ),
    };

    let (left, right) = centered(content.chars().count(), column);
    vec![
        Span::raw(" ".repeat(left)),
        Span::styled(content, style),
        Span::raw(" ".repeat(right)),
    ]
}

/// Width in columns of disk `disk` when the largest disk is `max_disk`.
///
/// Always odd so the disk centres on the peg. Shrinks proportionally when the
/// column is too narrow for the natural `2 * disk + 1`.
pub fn disk_width(disk: Disk, max_disk: u8, column: usize) -> usize {
    let natural = 2 * usize::from(disk) + 1;
    let widest = 2 * usize::from(max_disk.max(1)) + 1;
    let room = column.saturating_sub(2).max(1);
    if widest <= room {
        return natural;
    }
    let scaled = (usize::from(disk) * room) / usize::from(max_disk.max(1));
    let odd = if scaled % 2 == 0 { scaled.saturating_sub(1) } else { scaled };
    odd.max(1)
}

/// Left/right padding that centres `content` columns within `total`
fn centered(content: usize, total: usize) -> (usize, usize) {
    let spare = total.saturating_sub(content);
    let left = spare / 2;
    (left, spare - left)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_disk_width_natural_and_scaled() {
        assert_eq!(disk_width(1, 3, 30), 3);
        assert_eq!(disk_width(3, 3, 30), 7);
        // 10 disks in a 12-column peg area must shrink
        let widths: Vec<usize> = (1..=10).map(|d| disk_width(d, 10, 12)).collect();
        assert!(widths.iter().all(|w| w % 2 == 1 && *w <= 10));
        assert!(widths.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_board_lines_initial() {
        let snapshot = Snapshot::initial(2);
        let data = BoardRenderData {
            snapshot: &snapshot,
            disks: 2,
            moves_made: 0,
        };
        let lines = board_lines(&data, 30);
        // tip, two disk rows, base
        assert_eq!(lines.len(), 4);
        assert_eq!(line_text(&lines[0]).matches(PEG_GLYPH).count(), 3);
        assert!(line_text(&lines[1]).contains('1'));
        assert!(line_text(&lines[2]).contains('2'));
        assert!(line_text(&lines[3]).contains("Moves: 0"));
        assert_eq!(line_text(&lines[3]).chars().count(), 30);
    }

    #[test]
    fn test_board_lines_right_peg() {
        let snapshot = Snapshot::from_pegs(vec![], vec![], vec![2, 1]);
        let data = BoardRenderData {
            snapshot: &snapshot,
            disks: 2,
            moves_made: 3,
        };
        let lines = board_lines(&data, 30);
        let bottom = line_text(&lines[2]);
        // left and middle pegs are bare, the largest disk is in the right column
        assert_eq!(bottom.matches(PEG_GLYPH).count(), 2);
        assert!(bottom.find('2').is_some_and(|i| i >= 20));
        assert!(line_text(&lines[3]).contains("Moves: 3"));
    }
}
