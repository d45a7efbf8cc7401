//! Reusable widget rendering functions.
//!
//! Pure functions that produce ratatui text from data.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::interaction::TextEntry;

/// Render a text entry as a line, drawing the cursor as a reversed cell.
pub fn entry_line(entry: &TextEntry, cursor_visible: bool, style: Style) -> Line<'static> {
    let (before, after) = entry.split_at_cursor();
    let mut rest = after.chars();
    let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let cursor_style = if cursor_visible {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    };
    Line::from(vec![
        Span::styled(before.to_string(), style),
        Span::styled(under_cursor, cursor_style),
        Span::styled(rest.as_str().to_string(), style),
    ])
}
