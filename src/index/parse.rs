//! Decoding of `index.yaml` text into an [`IndexDocument`].

use serde_norway::{Mapping, Value};

use super::{IndexDocument, IndexError, VersionRecord};

impl IndexDocument {
    /// What: Parse repository index text.
    ///
    /// Inputs:
    /// - `text`: YAML (or JSON) body of the repository index.
    ///
    /// Output:
    /// - `Ok(IndexDocument)` with charts in document order; `Err(IndexError::Parse)`
    ///   when the text is not an index.
    ///
    /// Details:
    /// - Reads the `entries` mapping of a Helm envelope
    ///   (`apiVersion`/`entries`/`generated`).
    /// - Without an `entries` mapping the top level itself is read as
    ///   `name -> [versions]`.
    /// - Non-string chart names and charts whose versions cannot be decoded
    ///   are skipped with a warning.
    ///
    /// # Errors
    /// - Returns `Err` when the text is not YAML or the top level is not a mapping.
    pub fn parse(text: &str) -> Result<Self, IndexError> {
        let doc: Value = serde_norway::from_str(text)?;
        let Some(top) = doc.as_mapping() else {
            return Err(IndexError::Parse(
                "expected a mapping at the top level".to_string(),
            ));
        };
        let entries = match top.get("entries") {
            Some(Value::Mapping(entries)) => entries,
            _ => top,
        };
        let doc = Self::from_entries(decode_entries(entries));
        tracing::debug!(charts = doc.len(), "parsed charts index");
        Ok(doc)
    }
}

/// Decode every `name -> [versions]` pair of the entries mapping.
///
/// Charts whose versions cannot be decoded are skipped with a warning.
fn decode_entries(entries: &Mapping) -> Vec<(String, Vec<VersionRecord>)> {
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let Some(name) = key.as_str() else {
            tracing::warn!(key = ?key, "skipping chart with non-string name");
            continue;
        };
        let versions: Vec<VersionRecord> = match value {
            Value::Null => Vec::new(),
            other => match serde_norway::from_value(other.clone()) {
                Ok(versions) => versions,
                Err(err) => {
                    tracing::warn!(chart = %name, error = %err, "skipping chart with unreadable versions");
                    continue;
                }
            },
        };
        out.push((name.to_string(), versions));
    }
    out
}
