//! Client-side name filtering over the response list.
//!
//! Pure and synchronous; the view recomputes this on every input change.

use crate::ResponseRecord;

/// Filter records by case-insensitive substring match on the submitter
/// name or the companion name.
///
/// An empty term returns every record. Absent name fields never match and
/// never error. Order of the input list is preserved.
#[must_use]
pub fn filter_responses<'a>(records: &'a [ResponseRecord], term: &str) -> Vec<&'a ResponseRecord> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();

    records
        .iter()
        .filter(|record| {
            field_contains(record.name.as_deref(), &needle)
                || field_contains(record.companion.as_deref(), &needle)
        })
        .collect()
}

fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}
