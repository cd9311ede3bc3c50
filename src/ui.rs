//! Rendering contract for the catalogue grid.
//!
//! Everything that decides *what* the grid shows lives here as plain data;
//! a [`ChartsView`] implementation only copies it into the page.

pub mod card;
pub mod modal;

pub use card::{CardView, truncate_description, version_label};
pub use modal::{InstallInstructions, InstallStep};

use crate::config::SiteConfig;
use crate::index::ChartEntry;

/// Message shown when a search matches nothing.
pub const NO_RESULTS_TEXT: &str = "No charts found matching your search.";
/// Prefix of the message shown when the index cannot be loaded.
pub const LOAD_ERROR_PREFIX: &str = "Error loading charts: ";

/// What: Surface the catalogue controller draws on.
///
/// Inputs:
/// - Called by [`crate::events::ChartsPage`] in response to load and search events.
///
/// Output:
/// - Side effects on the page only.
///
/// Details:
/// - `show_cards`, `show_no_results`, and `show_error` replace the grid contents.
/// - `hide_loading` must be harmless when the indicator is already gone.
/// - Implementations absorb their own platform errors; the controller never
///   sees them.
pub trait ChartsView {
    /// Add the loading indicator to the grid.
    fn show_loading(&self);
    /// Remove the loading indicator if it is still present.
    fn hide_loading(&self);
    /// Replace the grid with an error message.
    fn show_error(&self, message: &str);
    /// Replace the grid with the empty-state message.
    fn show_no_results(&self, message: &str);
    /// Replace the grid with one card per view model, in order.
    fn show_cards(&self, cards: &[CardView]);
    /// Current text of the search box; empty when there is none.
    fn search_text(&self) -> String;
    /// Overwrite the search box text.
    fn set_search_text(&self, text: &str);
}

/// What: Draw a filtered chart list, or the empty state when nothing matched.
///
/// Inputs:
/// - `view`: Render surface.
/// - `charts`: Filtered charts in display order.
/// - `config`: Site settings (fallback icon, install commands).
///
/// Output:
/// - Calls exactly one of `show_no_results` or `show_cards`.
pub fn render_charts<V>(view: &V, charts: &[&ChartEntry], config: &SiteConfig)
where
    V: ChartsView + ?Sized,
{
    if charts.is_empty() {
        view.show_no_results(NO_RESULTS_TEXT);
        return;
    }
    let cards: Vec<CardView> = charts
        .iter()
        .map(|chart| CardView::new(chart, config))
        .collect();
    view.show_cards(&cards);
}

/// Text shown in the grid when loading failed with `error`.
#[must_use]
pub fn load_error_message(error: &dyn std::fmt::Display) -> String {
    format!("{LOAD_ERROR_PREFIX}{error}")
}
