use chrono::{DateTime, Local};

use sa_store::types::Category;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::form::CategoryForm;

/// One table row, mapped from a wire record.
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub order: i64,
}

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    Rows,
}

/// A delete waiting for the user to confirm or decline.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub id: String,
    pub name: String,
}

/// All UI state. The row list is a cache of the store, fully replaced on
/// every successful reload.
pub struct State {
    pub rows: Vec<CategoryRow>,
    /// A list request is in flight
    pub loading: bool,
    /// The rows survived a failed reload and may not match the store
    pub rows_stale: bool,
    /// Create/update/delete requests in flight
    pub pending_mutations: usize,
    pub form: CategoryForm,
    pub focus: Focus,
    pub pending_delete: Option<PendingDelete>,
    pub last_error: Option<String>,
    /// Cursor within the visible page
    pub cursor: usize,
    pub page: usize,
    pub page_size: usize,
    pub api_base: String,
    pub last_refresh: Option<DateTime<Local>>,
    pub spinner_frame: u64,
    pub dirty: bool,
}

impl State {
    pub fn new(api_base: String) -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            rows_stale: false,
            pending_mutations: 0,
            form: CategoryForm::new(),
            focus: Focus::Form,
            pending_delete: None,
            last_error: None,
            cursor: 0,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            api_base,
            last_refresh: None,
            spinner_frame: 0,
            dirty: true,
        }
    }

    pub fn page_count(&self) -> usize {
        if self.rows.is_empty() { 1 } else { self.rows.len().div_ceil(self.page_size) }
    }

    /// The slice of rows on the current page.
    pub fn visible_rows(&self) -> &[CategoryRow] {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.rows.len());
        if start >= end { &[] } else { &self.rows[start..end] }
    }

    pub fn selected_row(&self) -> Option<&CategoryRow> {
        self.visible_rows().get(self.cursor)
    }

    /// Keep page and cursor valid after the row set or page size changed.
    pub fn clamp_view(&mut self) {
        let max_page = self.page_count() - 1;
        if self.page > max_page {
            self.page = max_page;
        }
        let visible = self.visible_rows().len();
        if self.cursor >= visible {
            self.cursor = visible.saturating_sub(1);
        }
    }

    /// Replace the row cache with a fresh load.
    pub fn set_rows(&mut self, rows: Vec<CategoryRow>) {
        self.rows = rows;
        self.clamp_view();
    }

    pub fn set_error(&mut self, text: String) {
        self.last_error = Some(text);
    }

    /// Any request in flight.
    pub fn busy(&self) -> bool {
        self.loading || self.pending_mutations > 0
    }
}

/// Map wire records into display rows. A missing order means 0.
pub fn map_rows(records: Vec<Category>) -> Vec<CategoryRow> {
    records
        .into_iter()
        .map(|c| CategoryRow { id: c.id, name: c.name, order: c.order.unwrap_or(0) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> CategoryRow {
        CategoryRow { id: id.to_string(), name: format!("cat {}", id), order: 0 }
    }

    fn state_with(count: usize) -> State {
        let mut state = State::new("http://localhost:3000/api".to_string());
        state.rows = (0..count).map(|i| row(&i.to_string())).collect();
        state
    }

    #[test]
    fn map_rows_defaults_missing_order_to_zero() {
        let records = vec![
            Category { id: "a1".to_string(), name: "Shoes".to_string(), order: Some(3) },
            Category { id: "b2".to_string(), name: "Hats".to_string(), order: None },
        ];
        let rows = map_rows(records);
        assert_eq!(rows[0].order, 3);
        assert_eq!(rows[1].order, 0);
        assert_eq!(rows[1].id, "b2");
    }

    #[test]
    fn page_count_rounds_up() {
        let mut state = state_with(250);
        state.page_size = 100;
        assert_eq!(state.page_count(), 3);
        state.page_size = 25;
        assert_eq!(state.page_count(), 10);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let state = state_with(0);
        assert_eq!(state.page_count(), 1);
        assert!(state.visible_rows().is_empty());
        assert!(state.selected_row().is_none());
    }

    #[test]
    fn visible_rows_slices_the_current_page() {
        let mut state = state_with(250);
        state.page_size = 100;
        state.page = 2;
        let visible = state.visible_rows();
        assert_eq!(visible.len(), 50);
        assert_eq!(visible[0].id, "200");
    }

    #[test]
    fn clamp_view_pulls_page_and_cursor_back() {
        let mut state = state_with(250);
        state.page_size = 100;
        state.page = 2;
        state.cursor = 30;
        state.set_rows((0..120).map(|i| row(&i.to_string())).collect());
        assert_eq!(state.page, 1);
        assert_eq!(state.cursor, 19);
    }
}
