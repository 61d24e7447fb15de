use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Style tag the monitor service places on the subject cell of a
/// cancelled lesson. The literal comes from the upstream wire format
/// and must be matched exactly.
pub const CANCEL_STYLE: &str = "cancelStyle";

/// Identifies which school's monitor board to query.
///
/// Always supplied by the caller; the core never hardcodes a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolIdentity {
    pub school_name: String,
    /// Name of the monitor display format configured on the server.
    pub format_name: String,
    /// Department scoping IDs; may be empty.
    pub department_ids: Vec<i64>,
}

impl SchoolIdentity {
    /// Creates an identity with no department scoping.
    pub fn new(school_name: impl Into<String>, format_name: impl Into<String>) -> Self {
        Self {
            school_name: school_name.into(),
            format_name: format_name.into(),
            department_ids: Vec::new(),
        }
    }

    /// Sets the department IDs for this identity.
    pub fn with_department_ids(mut self, department_ids: Vec<i64>) -> Self {
        self.department_ids = department_ids;
        self
    }

    /// Validates the identity before it is used to build a request.
    pub fn validate(&self) -> Result<(), super::IdentityError> {
        if self.school_name.trim().is_empty() {
            return Err(super::IdentityError::EmptySchoolName);
        }
        if self.format_name.trim().is_empty() {
            return Err(super::IdentityError::EmptyFormatName);
        }
        Ok(())
    }
}

/// Per-call query options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Base date for the query; `None` means "today" at build time.
    pub target_date: Option<NaiveDate>,
    /// Day offset applied to the base date (may be negative).
    pub date_offset: i64,
    pub number_of_days: u32,
    /// Class/course groups to keep; `None` or empty means no filtering.
    pub filter_groups: Option<Vec<String>>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            target_date: None,
            date_offset: 0,
            number_of_days: 1,
            filter_groups: None,
        }
    }
}

impl QueryOptions {
    /// Sets an explicit base date instead of "today".
    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Sets the day offset.
    pub fn with_date_offset(mut self, offset: i64) -> Self {
        self.date_offset = offset;
        self
    }

    /// Sets the number of days to request.
    pub fn with_number_of_days(mut self, days: u32) -> Self {
        self.number_of_days = days;
        self
    }

    /// Sets the group filter.
    pub fn with_filter_groups(mut self, groups: Vec<String>) -> Self {
        self.filter_groups = Some(groups);
        self
    }
}

/// One line of the substitution board.
///
/// `data` is positional: hour, subject, room, teacher, info text.
/// Cells the display format omits arrive empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    /// Class/course group this row belongs to; empty when the server
    /// did not attribute the row to a group.
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub data: Vec<String>,
    /// Style tags per cell index, keyed by the index as a string.
    #[serde(default)]
    pub cell_classes: HashMap<String, Vec<String>>,
}

impl Row {
    /// Returns the cell at `index`, or an empty string if the row is
    /// shorter than that.
    pub fn cell(&self, index: usize) -> &str {
        self.data.get(index).map(String::as_str).unwrap_or_default()
    }

    /// Whether the lesson is cancelled. The service signals this with
    /// the [`CANCEL_STYLE`] tag on the subject cell (index "1"), not
    /// with a dedicated field.
    pub fn is_cancelled(&self) -> bool {
        self.cell_classes
            .get("1")
            .is_some_and(|tags| tags.iter().any(|tag| tag == CANCEL_STYLE))
    }
}

/// A single reported absence of an element.
///
/// Fields beyond the type are kept verbatim for embedding consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Absence {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An element (typically a teacher) reported absent for the queried
/// period, independent of any single class's rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsentElement {
    #[serde(default)]
    pub element_name: String,
    #[serde(default)]
    pub absences: Vec<Absence>,
}

impl AbsentElement {
    /// The type of the first reported absence, if any. Only this one
    /// is surfaced on the board.
    pub fn first_absence_kind(&self) -> Option<&str> {
        self.absences.first().map(|absence| absence.kind.as_str())
    }
}

/// The decoded substitution board for the queried period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorPayload {
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Never group-filtered; absences are not scoped to a class.
    #[serde(default)]
    pub absent_elements: Vec<AbsentElement>,
    #[serde(default)]
    pub last_update: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(group: &str, data: &[&str]) -> Row {
        Row {
            group: group.to_string(),
            data: data.iter().map(|s| s.to_string()).collect(),
            cell_classes: HashMap::new(),
        }
    }

    #[test]
    fn test_identity_builder() {
        let identity = SchoolIdentity::new("Test School", "Monitor").with_department_ids(vec![1]);

        assert_eq!(identity.school_name, "Test School");
        assert_eq!(identity.format_name, "Monitor");
        assert_eq!(identity.department_ids, vec![1]);
        assert!(identity.validate().is_ok());
    }

    #[test]
    fn test_identity_validation_rejects_blank_fields() {
        use crate::monitor::IdentityError;

        let identity = SchoolIdentity::new("", "Monitor");
        assert_eq!(identity.validate(), Err(IdentityError::EmptySchoolName));

        let identity = SchoolIdentity::new("Test School", "   ");
        assert_eq!(identity.validate(), Err(IdentityError::EmptyFormatName));
    }

    #[test]
    fn test_query_options_defaults() {
        let options = QueryOptions::default();

        assert_eq!(options.target_date, None);
        assert_eq!(options.date_offset, 0);
        assert_eq!(options.number_of_days, 1);
        assert_eq!(options.filter_groups, None);
    }

    #[test]
    fn test_row_cell_falls_back_to_empty() {
        let row = make_row("11a", &["1", "Math"]);

        assert_eq!(row.cell(0), "1");
        assert_eq!(row.cell(1), "Math");
        assert_eq!(row.cell(4), "");
    }

    #[test]
    fn test_is_cancelled_matches_subject_cell_tag() {
        let mut row = make_row("11a", &["1", "Math"]);
        row.cell_classes
            .insert("1".to_string(), vec![CANCEL_STYLE.to_string()]);
        assert!(row.is_cancelled());

        // Tag on a different cell does not count.
        let mut row = make_row("11a", &["1", "Math"]);
        row.cell_classes
            .insert("2".to_string(), vec![CANCEL_STYLE.to_string()]);
        assert!(!row.is_cancelled());

        // No cell classes at all.
        let row = make_row("11a", &["1", "Math"]);
        assert!(!row.is_cancelled());
    }

    #[test]
    fn test_row_deserializes_sparse_json() {
        let row: Row = serde_json::from_str(r#"{"data":["5","Math"]}"#).unwrap();

        assert_eq!(row.group, "");
        assert_eq!(row.data.len(), 2);
        assert!(row.cell_classes.is_empty());
    }

    #[test]
    fn test_absent_element_first_kind() {
        let element: AbsentElement = serde_json::from_str(
            r#"{"elementName":"Smith","absences":[{"type":"TEACHER","from":800},{"type":"OTHER"}]}"#,
        )
        .unwrap();

        assert_eq!(element.first_absence_kind(), Some("TEACHER"));
        // Extra fields survive the round trip for embedding consumers.
        assert_eq!(
            element.absences[0].extra.get("from"),
            Some(&serde_json::json!(800))
        );

        let empty = AbsentElement::default();
        assert_eq!(empty.first_absence_kind(), None);
    }
}
