use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Snapshot;

/// Rows reserved above the board.
pub const HUD_HEIGHT: u16 = 1;

const TITLE: &str = "SNAKE";

/// Draws the title and the level/score readout above the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(hud_line(snapshot, usize::from(area.width), theme)),
        area,
    );
}

/// Builds `SNAKE ... LEVEL n  SCORE n`, right-aligning the readout.
///
/// Length and speed are dropped first when the row is too narrow.
fn hud_line(snapshot: &Snapshot, width: usize, theme: &Theme) -> Line<'static> {
    let label = Style::new().fg(theme.hud_label);
    let value = Style::new()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);

    let mut fields = vec![
        ("LEVEL ", snapshot.level.to_string()),
        ("SCORE ", snapshot.score.to_string()),
        ("LEN ", snapshot.snake.len().to_string()),
        ("", format!("{}ms", snapshot.speed_ms)),
    ];

    while fields.len() > 2 && readout_width(&fields) + TITLE.width() + 1 > width {
        fields.pop();
    }

    let padding = width.saturating_sub(TITLE.width() + readout_width(&fields));

    let mut spans = vec![
        Span::styled(
            TITLE,
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding)),
    ];
    for (index, (name, text)) in fields.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(name, label));
        spans.push(Span::styled(text, value));
    }

    Line::from(spans)
}

fn readout_width(fields: &[(&str, String)]) -> usize {
    let separators = 2 * fields.len().saturating_sub(1);
    fields
        .iter()
        .map(|(name, text)| name.width() + text.width())
        .sum::<usize>()
        + separators
}
