use tracing::info;

use crate::config::SiteConfig;
use crate::logic::redirect_target;

use super::Navigator;

/// What: Site-wide search box behaviour outside the catalogue page.
///
/// Inputs:
/// - `config`: Supplies the catalogue page name.
/// - `navigator`: Used to inspect the current path and to navigate.
///
/// Output:
/// - Navigates to `charts.html?q=<text>` on a non-blank search.
///
/// Details:
/// - Inactive on the catalogue page itself, which handles its own searches.
pub struct SearchRedirector<N: Navigator> {
    /// Catalogue page file name.
    charts_page: String,
    /// Address bar.
    navigator: N,
}

impl<N: Navigator> SearchRedirector<N> {
    /// Create a redirector for the configured catalogue page.
    pub fn new(config: &SiteConfig, navigator: N) -> Self {
        Self {
            charts_page: config.charts_page.clone(),
            navigator,
        }
    }

    /// Whether the current page is somewhere other than the catalogue.
    pub fn is_active(&self) -> bool {
        !self.navigator.location().is_page(&self.charts_page)
    }

    /// What: Handle a search submitted from the search box.
    ///
    /// Inputs:
    /// - `text`: Raw search box text.
    ///
    /// Output:
    /// - `Some(target)` when navigation happened, `None` when the text was blank
    ///   or the current page is the catalogue.
    pub fn submit(&self, text: &str) -> Option<String> {
        if !self.is_active() {
            return None;
        }
        let target = redirect_target(&self.charts_page, text)?;
        info!(target = %target, "redirecting search to catalogue");
        self.navigator.navigate(&target);
        Some(target)
    }
}
