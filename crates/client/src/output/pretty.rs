//! Pretty output formatting.

use subboard_core::monitor::{group_by_class, present_row, AbsentElement, MonitorPayload, Row};

/// Format one board row for display.
pub fn format_row(row: &Row) -> String {
    let view = present_row(row);
    let mut output = format!(
        "  {} | {} | {} | {}",
        view.hour, view.subject, view.room, view.teacher
    );
    if view.cancelled {
        output.push_str(" [CANCELLED]");
    }
    output.push_str(&format!("\n    Info: {}", view.info));
    output
}

/// Format the board rows grouped by class.
pub fn format_board(payload: &MonitorPayload) -> String {
    if payload.rows.is_empty() {
        return "No substitutions found.".to_string();
    }

    let mut output = format!("SUBSTITUTIONS ({})\n", payload.rows.len());
    output.push_str(&"-".repeat(40));
    for (group, rows) in group_by_class(&payload.rows) {
        output.push_str(&format!("\n{}", group));
        for row in rows {
            output.push_str(&format!("\n{}", format_row(row)));
        }
        output.push('\n');
    }
    output
}

/// Format an absent element for display.
pub fn format_absent_element(element: &AbsentElement) -> String {
    match element.first_absence_kind() {
        Some(kind) => format!("  {} ({})", element.element_name, kind),
        None => format!("  {}", element.element_name),
    }
}

/// Format the absent elements section.
pub fn format_absent_elements(elements: &[AbsentElement]) -> String {
    if elements.is_empty() {
        return "No absences reported.".to_string();
    }

    let mut output = format!("ABSENT ({})\n", elements.len());
    output.push_str(&"-".repeat(40));
    for element in elements {
        output.push_str(&format!("\n{}", format_absent_element(element)));
    }
    output
}

/// Format the whole payload: grouped board, absences, update stamp.
pub fn format_payload(payload: &MonitorPayload) -> String {
    let mut output = format_board(payload);
    output.push_str(&format!("\n{}", format_absent_elements(&payload.absent_elements)));
    if !payload.last_update.is_empty() {
        output.push_str(&format!("\nLast update: {}", payload.last_update));
    }
    output
}
