//! Contents of the install-instructions dialog.

use crate::config::SiteConfig;

/// Literal placeholder shown in place of a concrete chart version.
pub const VERSION_PLACEHOLDER: &str = "<latest_version>";

/// One numbered step of the install dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallStep {
    /// Caption above the command, e.g. `1. Add the repo:`.
    pub label: String,
    /// Shell command to copy.
    pub command: String,
}

/// What: Contents of the install dialog for one chart.
///
/// Inputs:
/// - Chart name and the repository alias/URL from [`SiteConfig`].
///
/// Output:
/// - Title plus two steps: add the repository, install the chart.
///
/// Details:
/// - The version is left as [`VERSION_PLACEHOLDER`]; the dialog does not look
///   up the latest version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallInstructions {
    /// Chart the dialog is about.
    pub chart: String,
    /// Dialog heading.
    pub title: String,
    /// Steps in display order.
    pub steps: Vec<InstallStep>,
}

impl InstallInstructions {
    /// Build the dialog contents for `chart`.
    #[must_use]
    pub fn new(chart: &str, config: &SiteConfig) -> Self {
        let alias = &config.repo_alias;
        Self {
            chart: chart.to_string(),
            title: format!("Install {chart}"),
            steps: vec![
                InstallStep {
                    label: "1. Add the repo:".to_string(),
                    command: format!("helm repo add {alias} {}", config.repo_url),
                },
                InstallStep {
                    label: "2. Install the chart:".to_string(),
                    command: format!(
                        "helm install my-{chart} {alias}/{chart} --version {VERSION_PLACEHOLDER}"
                    ),
                },
            ],
        }
    }
}
