//! Free-text filtering of the loaded charts.

use crate::index::ChartEntry;

/// What: Select the charts matching a free-text query.
///
/// Inputs:
/// - `charts`: Entries in display order.
/// - `query`: Raw search text; surrounding whitespace is ignored.
///
/// Output:
/// - References to the matching entries, in input order.
///
/// Details:
/// - An empty or whitespace-only query matches everything.
/// - Case-insensitive substring match on the name, the description when
///   present, or any keyword.
/// - No ranking is applied.
#[must_use]
pub fn filter_charts<'a>(charts: &'a [ChartEntry], query: &str) -> Vec<&'a ChartEntry> {
    let query = query.trim();
    if query.is_empty() {
        return charts.iter().collect();
    }
    let needle = query.to_lowercase();
    charts.iter().filter(|c| matches_query(c, &needle)).collect()
}

/// Whether `chart` contains the already-lowercased `needle`.
fn matches_query(chart: &ChartEntry, needle: &str) -> bool {
    chart.name.to_lowercase().contains(needle)
        || chart
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || chart
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}
