use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;
use crate::state::{Focus, State};

/// Translate a terminal event into an action. Returns None to quit.
pub fn handle_event(event: &Event, state: &State) -> Option<Action> {
    match event {
        Event::Key(key) => {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            // Global Ctrl shortcuts (always handled first)
            if ctrl && key.code == KeyCode::Char('q') {
                return None; // Quit
            }

            // The delete prompt handles its own keys while open
            if state.pending_delete.is_some() {
                return Some(handle_confirm_event(key));
            }

            // Tab moves focus between the form and the table
            match key.code {
                KeyCode::Tab => return Some(Action::FocusNext),
                KeyCode::BackTab => return Some(Action::FocusPrev), // Shift+Tab on some terminals
                _ => {}
            }

            let action = match state.focus {
                Focus::Form => handle_form_key(key, state, ctrl),
                Focus::Rows => handle_rows_key(key, state),
            };
            Some(action)
        }
        Event::Paste(text) => {
            if state.focus == Focus::Form && state.pending_delete.is_none() {
                Some(Action::FormPaste(text.clone()))
            } else {
                Some(Action::None)
            }
        }
        _ => Some(Action::None),
    }
}

/// Handle key events while the delete confirmation is open
fn handle_confirm_event(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::DismissConfirm,
        // Any other key is ignored while the prompt is open
        _ => Action::None,
    }
}

fn handle_form_key(key: &KeyEvent, state: &State, ctrl: bool) -> Action {
    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc if state.form.is_editing() => Action::CancelEdit,
        KeyCode::Esc if state.last_error.is_some() => Action::DismissNotice,
        KeyCode::Backspace => Action::FormBackspace,
        KeyCode::Char(c) if !ctrl => Action::FormChar(c),
        _ => Action::None,
    }
}

fn handle_rows_key(key: &KeyEvent, state: &State) -> Action {
    match key.code {
        KeyCode::Up => Action::CursorUp,
        KeyCode::Down => Action::CursorDown,
        KeyCode::Left => Action::PrevPage,
        KeyCode::Right => Action::NextPage,
        KeyCode::Enter | KeyCode::Char('e') => Action::EditSelected,
        KeyCode::Delete | KeyCode::Char('d') => Action::DeleteSelected,
        KeyCode::Char('p') => Action::CyclePageSize,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Esc if state.last_error.is_some() => Action::DismissNotice,
        _ => Action::None,
    }
}
