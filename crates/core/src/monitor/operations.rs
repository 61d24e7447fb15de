use super::types::Row;

/// Narrows `rows` to those whose group is one of `filter_groups`.
///
/// An absent or empty filter means "show everything" and returns the
/// rows unchanged; the branch is explicit so an empty filter can never
/// silently drop the whole board. Matching is exact string equality,
/// relative order is preserved. Absent elements never pass through
/// here; they are copied through unfiltered at the payload level.
pub fn filter_rows(rows: Vec<Row>, filter_groups: Option<&[String]>) -> Vec<Row> {
    match filter_groups {
        None => rows,
        Some(groups) if groups.is_empty() => rows,
        Some(groups) => rows
            .into_iter()
            .filter(|row| groups.iter().any(|group| *group == row.group))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(group: &str, hour: &str) -> Row {
        Row {
            group: group.to_string(),
            data: vec![hour.to_string()],
            ..Row::default()
        }
    }

    fn make_rows() -> Vec<Row> {
        vec![
            make_row("11a", "1"),
            make_row("9b", "2"),
            make_row("11a", "3"),
            make_row("", "4"),
        ]
    }

    #[test]
    fn test_no_filter_is_identity() {
        let rows = make_rows();
        let empty: Vec<String> = Vec::new();

        assert_eq!(filter_rows(rows.clone(), None), rows);
        assert_eq!(filter_rows(rows.clone(), Some(&empty)), rows);
    }

    #[test]
    fn test_filter_keeps_only_members_in_order() {
        let groups = vec!["11a".to_string()];
        let filtered = filter_rows(make_rows(), Some(&groups));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|row| row.group == "11a"));
        assert_eq!(filtered[0].data[0], "1");
        assert_eq!(filtered[1].data[0], "3");
    }

    #[test]
    fn test_filter_accepts_multiple_groups() {
        let groups = vec!["11a".to_string(), "9b".to_string()];
        let filtered = filter_rows(make_rows(), Some(&groups));

        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_matches_exactly_without_case_folding() {
        let groups = vec!["11A".to_string()];
        let filtered = filter_rows(make_rows(), Some(&groups));

        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_drops_ungrouped_rows_unless_listed() {
        let groups = vec!["9b".to_string()];
        let filtered = filter_rows(make_rows(), Some(&groups));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].group, "9b");
    }
}
