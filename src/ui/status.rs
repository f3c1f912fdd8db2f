use ratatui::{prelude::*, widgets::Paragraph};

use super::{spinner, theme};
use crate::state::State;

pub fn render_status_bar(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);
    let spin = spinner::spinner(state.spinner_frame);

    let mut spans = vec![Span::styled(" ", base_style)];

    // Show all active states as separate badges
    if state.loading {
        spans.push(Span::styled(
            format!(" {} LOADING ", spin),
            Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold(),
        ));
        spans.push(Span::styled(" ", base_style));
    }

    if state.pending_mutations > 0 {
        spans.push(Span::styled(
            format!(" {} SYNCING {} ", spin, state.pending_mutations),
            Style::default().fg(theme::BG_BASE).bg(theme::WARNING).bold(),
        ));
        spans.push(Span::styled(" ", base_style));
    }

    if state.rows_stale {
        spans.push(Span::styled(
            " STALE ",
            Style::default().fg(theme::BG_BASE).bg(theme::ERROR).bold(),
        ));
        spans.push(Span::styled(" ", base_style));
    }

    // If nothing active, show READY
    if !state.loading && state.pending_mutations == 0 && !state.rows_stale {
        spans.push(Span::styled(
            " READY ",
            Style::default().fg(theme::BG_BASE).bg(theme::TEXT_MUTED).bold(),
        ));
        spans.push(Span::styled(" ", base_style));
    }

    // Last failure, dismissed with Esc
    if let Some(error) = &state.last_error {
        spans.push(Span::styled(
            format!(" ✗ {} ", error),
            Style::default().fg(theme::ERROR),
        ));
        spans.push(Span::styled(" ", base_style));
    }

    // Right side info
    let right_info = match &state.last_refresh {
        Some(at) => format!("refreshed {}  {} ", at.format("%H:%M:%S"), state.api_base),
        None => format!("{} ", state.api_base),
    };

    let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_width = right_info.chars().count();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    spans.push(Span::styled(" ".repeat(padding), base_style));
    spans.push(Span::styled(right_info, base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
