use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::truncate_string;
use super::theme;
use crate::state::PendingDelete;

pub fn render_delete_prompt(frame: &mut Frame, pending: &PendingDelete, area: Rect) {
    // Center the overlay, clamped to available area
    let overlay_width = 52u16.min(area.width);
    let overlay_height = 6u16.min(area.height);
    let x = area.x + area.width.saturating_sub(overlay_width) / 2;
    let y = area.y + area.height.saturating_sub(overlay_height) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    let name = truncate_string(&pending.name, overlay_width.saturating_sub(24) as usize);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Delete category ", Style::default().fg(theme::TEXT)),
            Span::styled(format!("\"{}\"", name), Style::default().fg(theme::ACCENT).bold()),
            Span::styled("?", Style::default().fg(theme::TEXT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  y", Style::default().fg(theme::WARNING)),
            Span::styled("/", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled("Enter", Style::default().fg(theme::WARNING)),
            Span::styled(" delete   ", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled("n", Style::default().fg(theme::WARNING)),
            Span::styled("/", Style::default().fg(theme::TEXT_MUTED)),
            Span::styled("Esc", Style::default().fg(theme::WARNING)),
            Span::styled(" keep", Style::default().fg(theme::TEXT_MUTED)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::ERROR))
        .style(Style::default().bg(theme::BG_SURFACE))
        .title(Span::styled(" Confirm delete ", Style::default().fg(theme::ERROR).bold()));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(Clear, overlay_area);
    frame.render_widget(paragraph, overlay_area);
}
