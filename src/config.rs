//! Site-level settings for the chart catalogue.
//!
//! Defaults reproduce the constants the HelmHub site ships with. A page can
//! override any of them with an inline JSON block, see [`SiteConfig::from_json`].

use serde::Deserialize;

/// Location of the published Helm repository index.
pub const DEFAULT_INDEX_URL: &str = "https://helmhub-io.github.io/charts/index.yaml";
/// Icon used when a chart has none or its icon fails to load.
pub const DEFAULT_FALLBACK_ICON: &str = "assets/logo/helm-white.png";
/// File name of the page that hosts the catalogue grid.
pub const DEFAULT_CHARTS_PAGE: &str = "charts.html";
/// Repository alias used in the install instructions.
pub const DEFAULT_REPO_ALIAS: &str = "helmhub";
/// Repository URL used in the install instructions.
pub const DEFAULT_REPO_URL: &str = "https://helmhub-io.github.io/charts";
/// Quiet period before live search fires, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// What: Settings shared by the catalogue page and the search redirector.
///
/// Inputs:
/// - Built from [`Default`] or parsed from a page-provided JSON block.
///
/// Output:
/// - Read by the loader, renderer, install modal, and search controllers.
///
/// Details:
/// - Every field is optional in JSON; missing keys fall back to the defaults.
/// - Keys are camelCase to match the rest of the site's markup conventions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Absolute URL of the repository `index.yaml`.
    pub index_url: String,
    /// Relative path of the default chart icon.
    pub fallback_icon: String,
    /// File name of the catalogue page (redirect target and "am I home" check).
    pub charts_page: String,
    /// Alias shown in `helm repo add` and `helm install`.
    pub repo_alias: String,
    /// Repository URL shown in `helm repo add`.
    pub repo_url: String,
    /// Debounce window for live search.
    pub debounce_ms: u64,
    /// Default tracing filter directive.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            fallback_icon: DEFAULT_FALLBACK_ICON.to_string(),
            charts_page: DEFAULT_CHARTS_PAGE.to_string(),
            repo_alias: DEFAULT_REPO_ALIAS.to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// What: Parse a configuration override block.
    ///
    /// Inputs:
    /// - `text`: JSON object text, typically the contents of
    ///   `<script type="application/json" id="helmhub-config">`.
    ///
    /// Output:
    /// - `Ok(SiteConfig)` with unspecified keys defaulted; `Err` with the
    ///   `serde_json` message when the text is not a valid object.
    ///
    /// # Errors
    /// - Returns `Err` when `text` is not valid JSON or a key has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("invalid site config: {e}"))
    }

    /// What: Resolve the page's optional override block.
    ///
    /// Inputs:
    /// - `text`: Block contents, or `None` when the page carries no block.
    ///
    /// Output:
    /// - Parsed configuration, or [`SiteConfig::default`] when the block is
    ///   absent or blank.
    ///
    /// # Errors
    /// - Returns `Err` when a non-blank block is malformed; callers fall back to
    ///   the defaults after reporting it.
    pub fn from_page_block(text: Option<&str>) -> Result<Self, String> {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            Some(text) => Self::from_json(text),
            None => Ok(Self::default()),
        }
    }

    /// Debounce window as a [`std::time::Duration`].
    #[must_use]
    pub const fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
