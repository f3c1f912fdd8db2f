use sa_store::types::CategoryPayload;

/// Which input the form cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Order,
}

/// The create/edit form. `editing` holds the id of the row being edited;
/// `None` means submission creates a new category.
#[derive(Debug, Clone)]
pub struct CategoryForm {
    pub name: String,
    pub order: String,
    pub field: FormField,
    pub editing: Option<String>,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self { name: String::new(), order: String::new(), field: FormField::Name, editing: None }
    }

    /// Type into the focused field. The order field only accepts digits and
    /// a leading minus.
    pub fn type_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Order => {
                if c.is_ascii_digit() || (c == '-' && self.order.is_empty()) {
                    self.order.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Order => {
                self.order.pop();
            }
        }
    }

    /// Insert pasted text into the focused field, dropping control characters.
    /// The order field keeps its digit filter.
    pub fn paste(&mut self, text: &str) {
        for c in text.chars() {
            if !c.is_control() {
                self.type_char(c);
            }
        }
    }

    /// Pre-fill from a displayed row and remember its id for the update.
    /// Starting an edit while another is in progress overwrites the fields.
    pub fn begin_edit(&mut self, id: &str, name: &str, order: i64) {
        self.editing = Some(id.to_string());
        self.name = name.to_string();
        self.order = order.to_string();
        self.field = FormField::Name;
    }

    /// Drop all input and leave edit mode. No request is involved.
    pub fn clear(&mut self) {
        self.name.clear();
        self.order.clear();
        self.editing = None;
        self.field = FormField::Name;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Build the request body, or None while the trimmed name is empty.
    pub fn payload(&self) -> Option<CategoryPayload> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(CategoryPayload { name: name.to_string(), order: coerce_order(&self.order) })
    }
}

/// "3" parses to 3; empty, a bare minus, or junk coerces to 0.
fn coerce_order(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}
