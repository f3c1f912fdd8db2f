use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{Align, pad_to_width, truncate_string};
use super::theme;
use crate::constants::{ACTION_COL_WIDTH, ORDER_COL_WIDTH, chars};
use crate::state::{Focus, State};

pub fn render_table(frame: &mut Frame, state: &State, area: Rect) {
    let focused = state.focus == Focus::Rows;
    let border_color = if focused { theme::BORDER_FOCUS } else { theme::BORDER };
    let title_color = if focused { theme::ACCENT } else { theme::TEXT_MUTED };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" Categories ({}) ", state.rows.len()),
            Style::default().fg(title_color),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 4 {
        return;
    }

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header + underline
            Constraint::Min(1),    // Rows
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    // Arrow gutter, two column separators, two fixed columns
    let name_width = (inner.width as usize)
        .saturating_sub(2 + 3 + 3 + ORDER_COL_WIDTH + ACTION_COL_WIDTH)
        .max(4);

    render_header(frame, name_width, layout[0]);
    render_rows(frame, state, name_width, layout[1]);
    render_footer(frame, state, layout[2]);
}

fn column_separator() -> Span<'static> {
    Span::styled(" │ ", Style::default().fg(theme::BORDER))
}

fn render_header(frame: &mut Frame, name_width: usize, area: Rect) {
    let header_style = Style::default().fg(theme::ACCENT).bold();

    let lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(pad_to_width("Name", name_width, Align::Left), header_style),
            column_separator(),
            Span::styled(pad_to_width("Order", ORDER_COL_WIDTH, Align::Right), header_style),
            column_separator(),
            Span::styled(pad_to_width("Action", ACTION_COL_WIDTH, Align::Left), header_style),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(
                    "{}─┼─{}─┼─{}",
                    chars::HORIZONTAL.repeat(name_width),
                    chars::HORIZONTAL.repeat(ORDER_COL_WIDTH),
                    chars::HORIZONTAL.repeat(ACTION_COL_WIDTH),
                ),
                Style::default().fg(theme::BORDER),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rows(frame: &mut Frame, state: &State, name_width: usize, area: Rect) {
    let visible = state.visible_rows();

    if visible.is_empty() {
        let text = if state.loading { "Loading..." } else { "No categories yet" };
        let line = Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(theme::TEXT_MUTED).italic(),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (idx, row) in visible.iter().enumerate() {
        let is_selected = idx == state.cursor;
        let indicator = if is_selected { chars::ARROW_RIGHT } else { " " };

        // Stale rows are dimmed until a reload confirms them
        let name_color = if state.rows_stale {
            theme::TEXT_MUTED
        } else if is_selected {
            theme::ACCENT
        } else {
            theme::TEXT_SECONDARY
        };
        let action_color = if is_selected { theme::TEXT } else { theme::TEXT_MUTED };

        let name = truncate_string(&row.name, name_width);
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", indicator), Style::default().fg(theme::ACCENT)),
            Span::styled(pad_to_width(&name, name_width, Align::Left), Style::default().fg(name_color)),
            column_separator(),
            Span::styled(
                pad_to_width(&row.order.to_string(), ORDER_COL_WIDTH, Align::Right),
                Style::default().fg(theme::ACCENT_DIM),
            ),
            column_separator(),
            Span::styled(
                pad_to_width("e edit  d del", ACTION_COL_WIDTH, Align::Left),
                Style::default().fg(action_color),
            ),
        ]));
    }

    // Keep the selected row on screen
    let offset = (state.cursor + 1).saturating_sub(area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}

fn render_footer(frame: &mut Frame, state: &State, area: Rect) {
    let base_style = Style::default().fg(theme::TEXT_MUTED);
    let key_style = Style::default().fg(theme::WARNING);

    let mut spans = vec![
        Span::styled(" ", base_style),
        Span::styled("↑↓", key_style),
        Span::styled(" move  ", base_style),
        Span::styled("←→", key_style),
        Span::styled(" page  ", base_style),
        Span::styled("e", key_style),
        Span::styled(" edit  ", base_style),
        Span::styled("d", key_style),
        Span::styled(" delete  ", base_style),
        Span::styled("p", key_style),
        Span::styled(" size  ", base_style),
        Span::styled("r", key_style),
        Span::styled(" reload", base_style),
    ];

    let right_info = format!(
        "page {}/{}  size {}  {} rows ",
        state.page + 1,
        state.page_count(),
        state.page_size,
        state.rows.len(),
    );

    let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_width = right_info.chars().count();
    let padding = (area.width as usize).saturating_sub(left_width + right_width);

    spans.push(Span::styled(" ".repeat(padding), base_style));
    spans.push(Span::styled(right_info, base_style));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
