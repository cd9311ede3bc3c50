//! Retrieval of the repository index and conversion into catalogue entries.

use std::future::Future;

use tracing::{info, warn};

use crate::index::{ChartEntry, IndexDocument, IndexError};

/// What: Anything that can produce the raw text of a repository index.
///
/// Inputs:
/// - Implementors decide where the text comes from (HTTP, memory, ...).
///
/// Output:
/// - `fetch_index` resolves to the body text or an [`IndexError`].
///
/// Details:
/// - Futures are not required to be `Send`; the page runs on a single thread.
pub trait IndexSource {
    /// Fetch the index body once.
    fn fetch_index(&self) -> impl Future<Output = Result<String, IndexError>>;
}

/// What: Index source backed by a single unauthenticated HTTP GET.
///
/// Details:
/// - Uses the browser `fetch` API on wasm and hyper natively, via `reqwest`.
/// - Non-2xx responses are reported as [`IndexError::Status`].
#[derive(Clone, Debug)]
pub struct HttpIndexSource {
    /// Shared HTTP client.
    client: reqwest::Client,
    /// Absolute index URL.
    url: String,
}

impl HttpIndexSource {
    /// Build a source for `url` with a default client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Build a source that reuses an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Index URL this source requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl IndexSource for HttpIndexSource {
    async fn fetch_index(&self) -> Result<String, IndexError> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            "fetched charts index"
        );
        if !status.is_success() {
            let preview: String = body.chars().take(300).collect();
            warn!(
                status = status.as_u16(),
                preview = preview,
                "charts index returned non-success status"
            );
            return Err(IndexError::Status(status.as_u16()));
        }
        Ok(body)
    }
}

/// What: Fetch, parse, and flatten the repository index.
///
/// Inputs:
/// - `source`: Where the index text comes from.
/// - `fallback_icon`: Icon path for charts without one.
///
/// Output:
/// - `Ok(Vec<ChartEntry>)` with one entry per chart in document order.
///
/// # Errors
/// - Returns the source's error when the fetch fails.
/// - Returns `IndexError::Parse` when the body is not an index document.
pub async fn load_charts<S>(source: &S, fallback_icon: &str) -> Result<Vec<ChartEntry>, IndexError>
where
    S: IndexSource,
{
    let text = source.fetch_index().await?;
    let doc = IndexDocument::parse(&text)?;
    let charts = doc.latest_entries(fallback_icon);
    info!(charts = charts.len(), "charts index loaded");
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    /// In-memory source returning a fixed outcome.
    struct Fixed(Result<String, IndexError>);

    impl IndexSource for Fixed {
        async fn fetch_index(&self) -> Result<String, IndexError> {
            self.0.clone()
        }
    }

    #[test]
    /// What: A successful body is parsed and flattened.
    ///
    /// - Input: Bare JSON mapping with one chart
    /// - Output: One entry with the fallback icon
    fn load_charts_flattens_body() {
        let source = Fixed(Ok(
            r#"{"nginx": [{"version": "1.0", "appVersion": "1.2", "description": "web server"}]}"#
                .to_string(),
        ));
        let charts = block_on(load_charts(&source, "fallback.png")).expect("loads");
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].icon, "fallback.png");
    }

    #[test]
    /// What: Source and parse failures propagate unchanged.
    ///
    /// - Input: HTTP 500 source; source returning a YAML list
    /// - Output: `Status(500)`; `Parse(_)`
    fn load_charts_propagates_errors() {
        let failed = Fixed(Err(IndexError::Status(500)));
        assert_eq!(
            block_on(load_charts(&failed, "x")),
            Err(IndexError::Status(500))
        );
        let garbage = Fixed(Ok("- 1\n- 2\n".to_string()));
        assert!(matches!(
            block_on(load_charts(&garbage, "x")),
            Err(IndexError::Parse(_))
        ));
    }

    #[test]
    /// What: The HTTP source keeps the URL it was built with.
    ///
    /// - Input: Default index URL
    /// - Output: `url()` echoes it
    fn http_source_keeps_url() {
        let source = HttpIndexSource::new(crate::config::DEFAULT_INDEX_URL);
        assert_eq!(source.url(), crate::config::DEFAULT_INDEX_URL);
    }
}
