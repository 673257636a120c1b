use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::infrastructure::tui::widgets::layout::centered_rect;

/// Key bindings listed in the overlay, in display order.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Space", "Pause / continue the countdown"),
    ("Enter", "Set time (default: start duration)"),
    ("0-9", "Type minutes for the next command"),
    ("s", "Read typed number as seconds"),
    ("+ / \u{2191}", "Add time (default: 1 minute)"),
    ("- / \u{2193}", "Subtract time (default: 1 minute)"),
    ("h / F1", "This help"),
    ("Esc", "Quit"),
];

const OVERLAY_WIDTH: u16 = 52;

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    // Bindings + blank + example line + borders
    let height = KEY_BINDINGS.len() as u16 + 4;
    let popup = centered_rect(OVERLAY_WIDTH, height, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Help ")
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(Line::from(" any key to close ").centered().style(
            Style::default().fg(Color::DarkGray),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    // Guard against too-small terminal
    if inner.height < 2 || inner.width < 10 {
        return;
    }

    let mut lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    format!("{:<8}", key),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {}", desc), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        " e.g. \"15\" Enter sets 15:00, \"90s\" + adds 1:30",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
