//! Session state of the catalogue page.
//!
//! The loaded charts are an immutable snapshot. Searching never edits it; a new
//! snapshot replaces the old one wholesale.

use std::rc::Rc;

use crate::index::ChartEntry;
use crate::logic::filter_charts;

/// What: Charts known to the current page session.
///
/// Inputs:
/// - Built once from the flattened index after a successful load.
///
/// Output:
/// - Read by the search controller to compute filtered views.
///
/// Details:
/// - Cloning is cheap; the entries live behind an `Rc`.
/// - The default state is empty, which is what the page holds before a load
///   succeeds or after it fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartsState {
    /// All charts in index order.
    charts: Rc<[ChartEntry]>,
}

impl ChartsState {
    /// Freeze `charts` into a new snapshot.
    #[must_use]
    pub fn new(charts: Vec<ChartEntry>) -> Self {
        Self {
            charts: charts.into(),
        }
    }

    /// All charts in index order.
    #[must_use]
    pub fn charts(&self) -> &[ChartEntry] {
        &self.charts
    }

    /// Number of charts in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// Whether the snapshot holds no charts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Charts matching `query`, see [`filter_charts`].
    #[must_use]
    pub fn filtered(&self, query: &str) -> Vec<&ChartEntry> {
        filter_charts(&self.charts, query)
    }
}
