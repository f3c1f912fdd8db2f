use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::theme;
use crate::form::FormField;
use crate::state::{Focus, State};

pub fn render_form(frame: &mut Frame, state: &State, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input fields
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),     // Name
            Constraint::Length(16), // Order
        ])
        .split(layout[0]);

    let form_focused = state.focus == Focus::Form;
    let name_focused = form_focused && state.form.field == FormField::Name;
    let order_focused = form_focused && state.form.field == FormField::Order;

    let name_cursor =
        render_field(frame, " Name ", &state.form.name, "Category name...", name_focused, fields[0]);
    let order_cursor =
        render_field(frame, " Order ", &state.form.order, "0", order_focused, fields[1]);

    render_hints(frame, state, layout[1]);

    // Terminal cursor sits in the focused field, hidden under the delete prompt
    if state.pending_delete.is_none() {
        if name_focused {
            frame.set_cursor_position(name_cursor);
        } else if order_focused {
            frame.set_cursor_position(order_cursor);
        }
    }
}

fn render_field(
    frame: &mut Frame,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    area: Rect,
) -> Position {
    let border_color = if focused { theme::BORDER_FOCUS } else { theme::BORDER };
    let title_color = if focused { theme::ACCENT } else { theme::TEXT_MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::BG_INPUT))
        .title(Span::styled(title.to_string(), Style::default().fg(title_color)));

    let content_area = block.inner(area);
    frame.render_widget(block, area);

    let line = if value.is_empty() {
        Line::from(Span::styled(
            format!(" {}", placeholder),
            Style::default().fg(theme::TEXT_MUTED).italic(),
        ))
    } else {
        Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(value.to_string(), Style::default().fg(theme::TEXT)),
        ])
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme::BG_INPUT));
    frame.render_widget(paragraph, content_area);

    let col = (content_area.x + 1 + value.width() as u16)
        .min(content_area.right().saturating_sub(1));
    Position::new(col, content_area.y)
}

fn render_hints(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().bg(theme::BG_BASE).fg(theme::TEXT_MUTED);
    let key_style = Style::default().fg(theme::WARNING);

    let mut spans = vec![Span::styled(" ", base_style)];

    if state.form.is_editing() {
        spans.push(Span::styled(
            " EDITING ",
            Style::default().fg(theme::BG_BASE).bg(theme::ACCENT).bold(),
        ));
        spans.push(Span::styled(" ", base_style));
        spans.push(Span::styled("Enter", key_style));
        spans.push(Span::styled(" save  ", base_style));
        spans.push(Span::styled("Esc", key_style));
        spans.push(Span::styled(" cancel  ", base_style));
    } else {
        spans.push(Span::styled("Enter", key_style));
        spans.push(Span::styled(" add  ", base_style));
    }
    spans.push(Span::styled("Tab", key_style));
    spans.push(Span::styled(" switch field", base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
