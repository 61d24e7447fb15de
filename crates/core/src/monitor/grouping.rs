use std::collections::BTreeMap;

use super::types::Row;

/// Bucket name for rows the server did not attribute to any group.
/// Participates in the lexicographic bucket ordering by its literal
/// text.
pub const UNKNOWN_GROUP: &str = "(unknown)";

/// Partitions rows by group name for display.
///
/// Buckets come back in ascending lexicographic order of the group
/// name; within a bucket the original row order is preserved. Rows
/// with an empty group land in the [`UNKNOWN_GROUP`] bucket rather
/// than being dropped.
pub fn group_by_class(rows: &[Row]) -> Vec<(String, Vec<&Row>)> {
    let mut buckets: BTreeMap<String, Vec<&Row>> = BTreeMap::new();

    for row in rows {
        let name = if row.group.is_empty() {
            UNKNOWN_GROUP.to_string()
        } else {
            row.group.clone()
        };
        buckets.entry(name).or_default().push(row);
    }

    buckets.into_iter().collect()
}
