use serde::Serialize;

use super::types::Row;

/// Shown in place of any positional field the server left empty.
/// Applied at the presentation boundary only; the row itself is never
/// rewritten.
pub const PLACEHOLDER: &str = "N/A";

/// Display-ready facts derived from one board row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub hour: String,
    pub subject: String,
    pub room: String,
    pub teacher: String,
    /// Info text with markup stripped.
    pub info: String,
    pub cancelled: bool,
}

/// Derives the presentation view of a row: positional cells with the
/// [`PLACEHOLDER`] fallback, markup-free info text, and the
/// cancellation flag.
pub fn present_row(row: &Row) -> RowView {
    RowView {
        hour: cell_or_placeholder(row, 0),
        subject: cell_or_placeholder(row, 1),
        room: cell_or_placeholder(row, 2),
        teacher: cell_or_placeholder(row, 3),
        info: fallback(strip_tags(row.cell(4))),
        cancelled: row.is_cancelled(),
    }
}

/// Removes markup tags (any `<`..`>` delimited substring) from `text`.
/// Empty input yields an empty string.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            _ => out.push(ch),
        }
    }

    out
}

fn cell_or_placeholder(row: &Row, index: usize) -> String {
    fallback(row.cell(index).to_string())
}

fn fallback(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}
