//! Card view model: what one catalogue card shows.

use crate::config::SiteConfig;
use crate::index::ChartEntry;

use super::modal::InstallInstructions;

/// Maximum description length shown on a card, in characters.
pub const DESCRIPTION_LIMIT: usize = 100;
/// Placeholder used when a chart has no description.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// What: Everything one catalogue card displays.
///
/// Inputs:
/// - Built from a [`ChartEntry`] and the site settings.
///
/// Output:
/// - Copied into the page by a [`super::ChartsView`].
///
/// Details:
/// - `fallback_icon` is what the image switches to if `icon` fails to load.
/// - `install` backs the card's install button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    /// Chart name (title and image alt text).
    pub name: String,
    /// Icon URL to try first.
    pub icon: String,
    /// Icon used when `icon` fails to load.
    pub fallback_icon: String,
    /// `v<version> (App v<appVersion>)`.
    pub version_label: String,
    /// Description capped at [`DESCRIPTION_LIMIT`] characters.
    pub description: String,
    /// External home link, if the chart has one.
    pub home: Option<String>,
    /// Install dialog contents.
    pub install: InstallInstructions,
}

impl CardView {
    /// Build the card for `chart`.
    #[must_use]
    pub fn new(chart: &ChartEntry, config: &SiteConfig) -> Self {
        Self {
            name: chart.name.clone(),
            icon: chart.icon.clone(),
            fallback_icon: config.fallback_icon.clone(),
            version_label: version_label(&chart.version, &chart.app_version),
            description: chart
                .description
                .as_deref()
                .map_or_else(|| DEFAULT_DESCRIPTION.to_string(), truncate_description),
            home: chart.home.clone(),
            install: InstallInstructions::new(&chart.name, config),
        }
    }
}

/// What: Version line for a card.
///
/// Inputs:
/// - `version`: Chart version.
/// - `app_version`: Application version; may be empty.
///
/// Output:
/// - `v1.0 (App v1.2)`, or `v1.0` when `app_version` is empty.
#[must_use]
pub fn version_label(version: &str, app_version: &str) -> String {
    if app_version.is_empty() {
        format!("v{version}")
    } else {
        format!("v{version} (App v{app_version})")
    }
}

/// What: Cap a description for card display.
///
/// Inputs:
/// - `description`: Full description text.
///
/// Output:
/// - Unchanged when at most [`DESCRIPTION_LIMIT`] characters; otherwise the
///   first [`DESCRIPTION_LIMIT`] characters followed by `...`.
///
/// Details:
/// - Counts Unicode scalar values so a multi-byte character is never split.
#[must_use]
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Descriptions longer than the limit are cut and suffixed.
    ///
    /// - Input: 100, 101, and 250 character strings, plus multi-byte text
    /// - Output: Unchanged at 100; 103 characters ending in `...` beyond it
    fn truncation_bounds() {
        let exact = "a".repeat(100);
        assert_eq!(truncate_description(&exact), exact);

        for len in [101, 250] {
            let out = truncate_description(&"b".repeat(len));
            assert_eq!(out.chars().count(), 103);
            assert!(out.ends_with("..."));
        }

        let wide = "é".repeat(150);
        let out = truncate_description(&wide);
        assert_eq!(out.chars().count(), 103);
        assert!(out.starts_with(&"é".repeat(100)));
    }

    #[test]
    /// What: Version labels include the app version only when known.
    ///
    /// - Input: `("1.0", "1.2")`, `("2.3.4", "")`
    /// - Output: `v1.0 (App v1.2)`, `v2.3.4`
    fn version_labels() {
        assert_eq!(version_label("1.0", "1.2"), "v1.0 (App v1.2)");
        assert_eq!(version_label("2.3.4", ""), "v2.3.4");
    }

    #[test]
    /// What: Card view defaults the description and carries the fallback icon.
    ///
    /// - Input: Chart without description or home
    /// - Output: Placeholder description, no home link, install commands for the chart
    fn card_defaults() {
        let chart = ChartEntry {
            name: "redis".into(),
            version: "18.0.0".into(),
            app_version: "7.2".into(),
            description: None,
            icon: "https://example.com/redis.png".into(),
            home: None,
            sources: Vec::new(),
            keywords: Vec::new(),
        };
        let config = SiteConfig::default();
        let card = CardView::new(&chart, &config);
        assert_eq!(card.description, DEFAULT_DESCRIPTION);
        assert_eq!(card.version_label, "v18.0.0 (App v7.2)");
        assert_eq!(card.fallback_icon, config.fallback_icon);
        assert_eq!(card.home, None);
        assert_eq!(card.install.chart, "redis");
    }
}
