//! Helm repository index model and flattening into catalogue entries.
//!
//! The upstream `index.yaml` maps each chart name to its published versions,
//! newest first. The catalogue only ever shows the first record of each list;
//! no version comparison is performed.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

mod error;
mod parse;

pub use error::IndexError;

/// What: One published version of a chart as listed in the repository index.
///
/// Inputs:
/// - Deserialized from an element of an `entries.<name>` sequence.
///
/// Output:
/// - Source record for [`ChartEntry`] construction.
///
/// Details:
/// - Keys not modelled here (`urls`, `digest`, `created`, ...) are ignored.
/// - `version` and `appVersion` accept bare numbers as well as strings.
/// - Optional fields never fail the record: numbers are stringified and values
///   of the wrong shape (maps, nested lists) are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Chart version.
    #[serde(deserialize_with = "scalar_string")]
    pub version: String,
    /// Version of the packaged application; empty when the index omits it.
    #[serde(default, deserialize_with = "scalar_string")]
    pub app_version: String,
    /// One-line chart description.
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    /// Project home page.
    #[serde(default, deserialize_with = "lenient_string")]
    pub home: Option<String>,
    /// Source repository URLs.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub sources: Option<Vec<String>>,
    /// Search keywords.
    #[serde(default, deserialize_with = "lenient_strings")]
    pub keywords: Option<Vec<String>>,
}

/// A YAML/JSON scalar that can stand in for a string.
///
/// Unquoted YAML versions such as `1.0` arrive as floats.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    /// Quoted or plain text.
    Text(String),
    /// Integer such as `7`.
    Int(i64),
    /// Float such as `1.0`.
    Float(f64),
    /// `true` / `false`.
    Bool(bool),
}

impl Scalar {
    /// Text form of the scalar.
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:?}"),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// A scalar, or anything else (skipped without error).
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    /// Usable value.
    Scalar(Scalar),
    /// Mapping, sequence, or anything else.
    Other(IgnoredAny),
}

impl Loose {
    /// Text form, or `None` for non-scalars.
    fn into_string(self) -> Option<String> {
        match self {
            Self::Scalar(s) => Some(s.into_string()),
            Self::Other(_) => None,
        }
    }
}

/// A list of loose values, or anything else (treated as absent).
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    /// A sequence.
    Many(Vec<Loose>),
    /// Not a sequence.
    Other(IgnoredAny),
}

/// Accept a scalar (string, integer, float, null) as a string.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map_or_else(String::new, Scalar::into_string))
}

/// Optional text field: scalars become strings, other shapes become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Loose>::deserialize(deserializer)?.and_then(Loose::into_string))
}

/// Optional list field: scalar items are kept as strings, others dropped.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseList>::deserialize(deserializer)? {
        Some(LooseList::Many(items)) => Some(items.into_iter().filter_map(Loose::into_string).collect()),
        Some(LooseList::Other(_)) | None => None,
    })
}

/// What: Ordered chart name to version list mapping.
///
/// Inputs:
/// - Built by [`IndexDocument::parse`] or [`IndexDocument::from_entries`].
///
/// Output:
/// - Flattened into the catalogue via [`IndexDocument::latest_entries`].
///
/// Details:
/// - Preserves the order in which charts appear in the source document.
/// - Version lists are assumed newest-first, as Helm writes them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexDocument {
    /// `(chart name, versions newest-first)` pairs in document order.
    entries: Vec<(String, Vec<VersionRecord>)>,
}

/// What: Latest-version summary of a chart, as shown on one catalogue card.
///
/// Inputs:
/// - Derived from the first [`VersionRecord`] of a chart.
///
/// Output:
/// - Consumed by the filter and the card view model.
///
/// Details:
/// - `icon` is always populated; the fallback icon replaces a missing or empty URL.
/// - `keywords` and `sources` are empty when the index omits them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartEntry {
    /// Chart name (the key in `entries`).
    pub name: String,
    /// Latest chart version.
    pub version: String,
    /// Application version of the latest chart; may be empty.
    pub app_version: String,
    /// Description, if the index provides a non-empty one.
    pub description: Option<String>,
    /// Icon URL or the fallback icon path.
    pub icon: String,
    /// Home page URL, if any.
    pub home: Option<String>,
    /// Source repository URLs.
    pub sources: Vec<String>,
    /// Search keywords.
    pub keywords: Vec<String>,
}

impl ChartEntry {
    /// What: Build the card entry for `name` from its latest version record.
    ///
    /// Inputs:
    /// - `name`: Chart name.
    /// - `latest`: First record of the chart's version list.
    /// - `fallback_icon`: Path used when `latest.icon` is missing or blank.
    ///
    /// Output:
    /// - Owned [`ChartEntry`].
    ///
    /// Details:
    /// - Blank strings for `description`, `icon`, and `home` count as missing.
    #[must_use]
    pub fn from_latest(name: &str, latest: &VersionRecord, fallback_icon: &str) -> Self {
        Self {
            name: name.to_string(),
            version: latest.version.clone(),
            app_version: latest.app_version.clone(),
            description: non_blank(latest.description.as_deref()),
            icon: non_blank(latest.icon.as_deref()).unwrap_or_else(|| fallback_icon.to_string()),
            home: non_blank(latest.home.as_deref()),
            sources: latest.sources.clone().unwrap_or_default(),
            keywords: latest.keywords.clone().unwrap_or_default(),
        }
    }
}

/// Return an owned copy of `value` unless it is missing or whitespace-only.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

impl IndexDocument {
    /// What: Build a document from already-decoded entries.
    ///
    /// Inputs:
    /// - `entries`: `(name, versions)` pairs in the desired card order.
    ///
    /// Output:
    /// - New [`IndexDocument`].
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<VersionRecord>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Number of charts in the document, including ones without versions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document lists no charts at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, versions)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[VersionRecord])> {
        self.entries
            .iter()
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }

    /// What: Flatten the document into one entry per chart.
    ///
    /// Inputs:
    /// - `fallback_icon`: Icon path for charts without an icon.
    ///
    /// Output:
    /// - Entries in document order, each built from the chart's first record.
    ///
    /// Details:
    /// - The first record is taken as the latest; versions are not compared.
    /// - Charts with an empty version list are skipped and logged at `warn`.
    #[must_use]
    pub fn latest_entries(&self, fallback_icon: &str) -> Vec<ChartEntry> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (name, versions) in &self.entries {
            let Some(latest) = versions.first() else {
                tracing::warn!(chart = %name, "chart has no published versions; skipping");
                continue;
            };
            out.push(ChartEntry::from_latest(name, latest, fallback_icon));
        }
        out
    }
}
