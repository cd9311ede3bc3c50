//! Event handling layer for the catalogue and the site-wide search box.
//!
//! - [`ChartsPage`]: loads the index, then reacts to search input on the
//!   catalogue page and keeps the `q` parameter in sync.
//! - [`SearchRedirector`]: on every other page, turns a search into a
//!   navigation to the catalogue.
//! - [`PageRole`]: picks which of the two a page gets.
//!
//! The controllers talk to the browser only through [`Navigator`] and
//! [`crate::ui::ChartsView`], so their behaviour is testable natively.

use crate::logic::PageLocation;

mod charts;
mod redirect;

pub use charts::ChartsPage;
pub use redirect::SearchRedirector;

/// What: Which search behaviour a page gets.
///
/// Details:
/// - A page hosting `.charts-grid` is the catalogue whatever its URL,
///   including extensionless paths such as `/charts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRole {
    /// The page hosts the catalogue grid.
    Catalogue,
    /// Searches navigate to the catalogue.
    Redirect,
    /// The catalogue URL without a grid; nothing is bound.
    Passive,
}

impl PageRole {
    /// What: Decide the role from the page contents and location.
    ///
    /// Inputs:
    /// - `has_grid`: Whether the document contains `.charts-grid`.
    /// - `location`: Current location.
    /// - `charts_page`: Configured catalogue page name.
    ///
    /// Output:
    /// - [`PageRole::Catalogue`] with a grid, [`PageRole::Passive`] on the
    ///   catalogue URL without one, [`PageRole::Redirect`] otherwise.
    #[must_use]
    pub fn detect(has_grid: bool, location: &PageLocation, charts_page: &str) -> Self {
        if has_grid {
            Self::Catalogue
        } else if location.is_page(charts_page) {
            Self::Passive
        } else {
            Self::Redirect
        }
    }
}

/// What: Access to the address bar.
///
/// Details:
/// - `replace_url` must not reload the page or add a history entry.
/// - `navigate` leaves the page.
pub trait Navigator {
    /// Current path, query string, and fragment.
    fn location(&self) -> PageLocation;
    /// Swap the current history entry's URL for `url`.
    fn replace_url(&self, url: &str);
    /// Load `url` (relative to the current page).
    fn navigate(&self, url: &str);
}
