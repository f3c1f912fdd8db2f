use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Column alignment for table cells
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Truncate a string to a display width, appending an ellipsis when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + cw + 1 > max_width {
            result.push('…');
            break;
        }
        result.push(c);
        width += cw;
    }
    result
}

/// Pad a string to a target display width using spaces, respecting alignment.
pub fn pad_to_width(text: &str, target: usize, align: Align) -> String {
    let deficit = target.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(deficit)),
        Align::Right => format!("{}{}", " ".repeat(deficit), text),
    }
}
