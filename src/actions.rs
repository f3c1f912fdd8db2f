use sa_store::types::CategoryPayload;

use crate::constants::PAGE_SIZES;
use crate::form::FormField;
use crate::state::{Focus, PendingDelete, State};

/// User intents produced by key handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    FormChar(char),
    FormBackspace,
    FormPaste(String),
    FocusNext,
    FocusPrev,
    Submit,
    CancelEdit,
    CursorUp,
    CursorDown,
    PrevPage,
    NextPage,
    CyclePageSize,
    EditSelected,
    DeleteSelected,
    ConfirmDelete,
    DismissConfirm,
    Reload,
    DismissNotice,
}

/// Side effects the app loop must perform after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    Nothing,
    FetchList,
    Create(CategoryPayload),
    Update { id: String, payload: CategoryPayload },
    Delete(String),
}

pub fn apply_action(state: &mut State, action: Action) -> ActionResult {
    match action {
        Action::None => ActionResult::Nothing,

        Action::FormChar(c) => {
            state.form.type_char(c);
            ActionResult::Nothing
        }
        Action::FormBackspace => {
            state.form.backspace();
            ActionResult::Nothing
        }
        Action::FormPaste(text) => {
            state.form.paste(&text);
            ActionResult::Nothing
        }
        Action::FocusNext => {
            focus_next(state);
            ActionResult::Nothing
        }
        Action::FocusPrev => {
            focus_prev(state);
            ActionResult::Nothing
        }

        Action::Submit => submit(state),
        Action::CancelEdit => {
            state.form.clear();
            ActionResult::Nothing
        }

        Action::CursorUp => {
            if state.cursor > 0 {
                state.cursor -= 1;
            }
            ActionResult::Nothing
        }
        Action::CursorDown => {
            let visible = state.visible_rows().len();
            if visible > 0 && state.cursor < visible - 1 {
                state.cursor += 1;
            }
            ActionResult::Nothing
        }
        Action::PrevPage => {
            if state.page > 0 {
                state.page -= 1;
                state.clamp_view();
            }
            ActionResult::Nothing
        }
        Action::NextPage => {
            if state.page + 1 < state.page_count() {
                state.page += 1;
                state.clamp_view();
            }
            ActionResult::Nothing
        }
        Action::CyclePageSize => {
            let idx = PAGE_SIZES.iter().position(|&s| s == state.page_size).unwrap_or(0);
            state.page_size = PAGE_SIZES[(idx + 1) % PAGE_SIZES.len()];
            state.clamp_view();
            ActionResult::Nothing
        }

        Action::EditSelected => {
            let target = state.selected_row().map(|r| (r.id.clone(), r.name.clone(), r.order));
            if let Some((id, name, order)) = target {
                // Pre-fill from the displayed values, not a fresh fetch
                state.form.begin_edit(&id, &name, order);
                state.focus = Focus::Form;
            }
            ActionResult::Nothing
        }
        Action::DeleteSelected => {
            let target = state.selected_row().map(|r| (r.id.clone(), r.name.clone()));
            if let Some((id, name)) = target {
                state.pending_delete = Some(PendingDelete { id, name });
            }
            ActionResult::Nothing
        }
        Action::ConfirmDelete => match state.pending_delete.take() {
            Some(pending) => ActionResult::Delete(pending.id),
            None => ActionResult::Nothing,
        },
        Action::DismissConfirm => {
            state.pending_delete = None;
            ActionResult::Nothing
        }

        Action::Reload => ActionResult::FetchList,
        Action::DismissNotice => {
            state.last_error = None;
            ActionResult::Nothing
        }
    }
}

/// An empty trimmed name silently blocks the submission; nothing changes.
/// Otherwise the held edit id decides between create and update.
fn submit(state: &mut State) -> ActionResult {
    let Some(payload) = state.form.payload() else {
        return ActionResult::Nothing;
    };
    match state.form.editing.clone() {
        Some(id) => ActionResult::Update { id, payload },
        None => ActionResult::Create(payload),
    }
}

fn focus_next(state: &mut State) {
    match state.focus {
        Focus::Form => match state.form.field {
            FormField::Name => state.form.field = FormField::Order,
            FormField::Order => state.focus = Focus::Rows,
        },
        Focus::Rows => {
            state.focus = Focus::Form;
            state.form.field = FormField::Name;
        }
    }
}

fn focus_prev(state: &mut State) {
    match state.focus {
        Focus::Form => match state.form.field {
            FormField::Name => state.focus = Focus::Rows,
            FormField::Order => state.form.field = FormField::Name,
        },
        Focus::Rows => {
            state.focus = Focus::Form;
            state.form.field = FormField::Order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CategoryRow;

    fn state_with_rows() -> State {
        let mut state = State::new("http://localhost:3000/api".to_string());
        state.rows = vec![
            CategoryRow { id: "1".to_string(), name: "A".to_string(), order: 1 },
            CategoryRow { id: "2".to_string(), name: "B".to_string(), order: 2 },
        ];
        state
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            apply_action(state, Action::FormChar(c));
        }
    }

    #[test]
    fn submit_with_empty_name_is_a_no_op() {
        let mut state = state_with_rows();
        assert_eq!(apply_action(&mut state, Action::Submit), ActionResult::Nothing);

        type_text(&mut state, "   ");
        assert_eq!(apply_action(&mut state, Action::Submit), ActionResult::Nothing);
        // Form and session untouched
        assert_eq!(state.form.name, "   ");
        assert!(state.form.editing.is_none());
    }

    #[test]
    fn submit_without_session_creates() {
        let mut state = state_with_rows();
        type_text(&mut state, " Shoes ");
        apply_action(&mut state, Action::FocusNext);
        type_text(&mut state, "3");

        let result = apply_action(&mut state, Action::Submit);
        let ActionResult::Create(payload) = result else {
            panic!("expected a create, got {:?}", result);
        };
        assert_eq!(payload.name, "Shoes");
        assert_eq!(payload.order, 3);
    }

    #[test]
    fn update_uses_id_captured_when_edit_began() {
        let mut state = state_with_rows();
        state.focus = Focus::Rows;
        apply_action(&mut state, Action::CursorDown);
        apply_action(&mut state, Action::EditSelected);
        assert_eq!(state.focus, Focus::Form);

        // Rewrite both fields after entering edit mode
        type_text(&mut state, " Prime");
        apply_action(&mut state, Action::FocusNext);
        apply_action(&mut state, Action::FormBackspace);
        type_text(&mut state, "9");

        let result = apply_action(&mut state, Action::Submit);
        let ActionResult::Update { id, payload } = result else {
            panic!("expected an update, got {:?}", result);
        };
        assert_eq!(id, "2");
        assert_eq!(payload.name, "B Prime");
        assert_eq!(payload.order, 9);
    }

    #[test]
    fn edit_prefills_from_displayed_row() {
        let mut state = state_with_rows();
        state.focus = Focus::Rows;
        apply_action(&mut state, Action::CursorDown);
        apply_action(&mut state, Action::EditSelected);

        assert_eq!(state.form.name, "B");
        assert_eq!(state.form.order, "2");
        assert_eq!(state.form.editing.as_deref(), Some("2"));
    }

    #[test]
    fn cancel_clears_form_and_session_without_request() {
        let mut state = state_with_rows();
        state.focus = Focus::Rows;
        apply_action(&mut state, Action::EditSelected);
        assert!(state.form.is_editing());

        let result = apply_action(&mut state, Action::CancelEdit);
        assert_eq!(result, ActionResult::Nothing);
        assert!(state.form.name.is_empty());
        assert!(state.form.order.is_empty());
        assert!(state.form.editing.is_none());
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let mut state = state_with_rows();
        state.focus = Focus::Rows;
        apply_action(&mut state, Action::DeleteSelected);
        assert_eq!(state.pending_delete.as_ref().map(|p| p.name.as_str()), Some("A"));

        let result = apply_action(&mut state, Action::DismissConfirm);
        assert_eq!(result, ActionResult::Nothing);
        assert!(state.pending_delete.is_none());
        assert_eq!(state.rows.len(), 2);
    }

    #[test]
    fn confirmed_delete_targets_the_prompted_row() {
        let mut state = state_with_rows();
        state.focus = Focus::Rows;
        apply_action(&mut state, Action::CursorDown);
        apply_action(&mut state, Action::DeleteSelected);

        let result = apply_action(&mut state, Action::ConfirmDelete);
        assert_eq!(result, ActionResult::Delete("2".to_string()));
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn confirm_without_pending_delete_is_inert() {
        let mut state = state_with_rows();
        assert_eq!(apply_action(&mut state, Action::ConfirmDelete), ActionResult::Nothing);
    }

    #[test]
    fn cursor_stays_within_the_page() {
        let mut state = state_with_rows();
        apply_action(&mut state, Action::CursorUp);
        assert_eq!(state.cursor, 0);
        apply_action(&mut state, Action::CursorDown);
        apply_action(&mut state, Action::CursorDown);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn page_flips_clamp_to_page_count() {
        let mut state = State::new("http://localhost:3000/api".to_string());
        state.rows = (0..30)
            .map(|i| CategoryRow { id: i.to_string(), name: i.to_string(), order: i })
            .collect();
        state.page_size = 10;

        apply_action(&mut state, Action::PrevPage);
        assert_eq!(state.page, 0);
        apply_action(&mut state, Action::NextPage);
        apply_action(&mut state, Action::NextPage);
        apply_action(&mut state, Action::NextPage);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn page_size_cycles_through_the_options() {
        let mut state = state_with_rows();
        assert_eq!(state.page_size, 100);
        apply_action(&mut state, Action::CyclePageSize);
        assert_eq!(state.page_size, 10);
        apply_action(&mut state, Action::CyclePageSize);
        assert_eq!(state.page_size, 25);
        apply_action(&mut state, Action::CyclePageSize);
        assert_eq!(state.page_size, 50);
        apply_action(&mut state, Action::CyclePageSize);
        assert_eq!(state.page_size, 100);
    }

    #[test]
    fn focus_cycles_name_order_rows() {
        let mut state = state_with_rows();
        assert_eq!(state.focus, Focus::Form);
        assert_eq!(state.form.field, FormField::Name);

        apply_action(&mut state, Action::FocusNext);
        assert_eq!(state.form.field, FormField::Order);
        apply_action(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Rows);
        apply_action(&mut state, Action::FocusNext);
        assert_eq!(state.focus, Focus::Form);
        assert_eq!(state.form.field, FormField::Name);

        apply_action(&mut state, Action::FocusPrev);
        assert_eq!(state.focus, Focus::Rows);
    }
}
