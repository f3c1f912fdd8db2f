mod confirm;
mod form;
mod helpers;
mod spinner;
mod status;
mod table;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::state::State;

pub fn render(frame: &mut Frame, state: &State) {
    let area = frame.area();

    // Fill base background
    frame.render_widget(Block::default().style(Style::default().bg(theme::BG_BASE)), area);

    // Main layout: form + table + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Category form
            Constraint::Min(1),    // Category table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    form::render_form(frame, state, main_layout[0]);
    table::render_table(frame, state, main_layout[1]);
    status::render_status_bar(frame, state, main_layout[2]);

    // The delete prompt floats above everything else
    if let Some(pending) = &state.pending_delete {
        confirm::render_delete_prompt(frame, pending, area);
    }
}
