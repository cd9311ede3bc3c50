//! URL query-string helpers for the `q` search parameter.
//!
//! Kept free of browser APIs so the same rules apply to the history rewrite,
//! the initial page load, and the redirect from other pages.

use std::fmt::Write;

use url::form_urlencoded;

/// Name of the query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "q";

/// What: The parts of the current location that search code reads and rewrites.
///
/// Details:
/// - `search` includes its leading `?` when non-empty, as `location.search` does.
/// - `hash` includes its leading `#` when non-empty, as `location.hash` does.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Path component, e.g. `/charts.html`.
    pub pathname: String,
    /// Query string including `?`, or empty.
    pub search: String,
    /// Fragment including `#`, or empty.
    pub hash: String,
}

impl PageLocation {
    /// Build a location from its three components.
    #[must_use]
    pub fn new(pathname: &str, search: &str, hash: &str) -> Self {
        Self {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Whether the path names `page` (e.g. `charts.html`).
    #[must_use]
    pub fn is_page(&self, page: &str) -> bool {
        self.pathname.ends_with(page)
    }
}

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Encoded string; unreserved characters are kept and spaces become `%20`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}

/// Query string without its leading `?`.
fn strip_question(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

/// What: Read the first value of `key` from a query string.
///
/// Inputs:
/// - `search`: Query string, with or without the leading `?`.
/// - `key`: Parameter name.
///
/// Output:
/// - `Some(decoded value)` for the first occurrence, `None` when absent.
///
/// Details:
/// - Decoding follows `application/x-www-form-urlencoded`: `+` is a space and
///   malformed escapes are kept literally.
/// - A key without `=` yields `Some("")`.
#[must_use]
pub fn query_param(search: &str, key: &str) -> Option<String> {
    form_urlencoded::parse(strip_question(search).as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// What: Rewrite one parameter of a query string.
///
/// Inputs:
/// - `search`: Current query string, with or without `?`.
/// - `key`: Parameter to set or remove.
/// - `value`: New value, or `None` to remove every occurrence.
///
/// Output:
/// - New query string with a leading `?`, or empty when no parameters remain.
///
/// Details:
/// - Behaves like `URLSearchParams.set`/`delete`: other parameters keep their
///   order, the first occurrence of `key` is replaced in place, duplicates are
///   dropped, and a missing key is appended.
/// - The result is re-serialized in form encoding, so spaces become `+`.
#[must_use]
pub fn set_query_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());
    let mut replaced = false;
    for (k, v) in form_urlencoded::parse(strip_question(search).as_bytes()) {
        if k != key {
            out.append_pair(&k, &v);
            continue;
        }
        if let Some(v) = value
            && !replaced
        {
            out.append_pair(key, v);
            replaced = true;
        }
    }
    if let Some(v) = value
        && !replaced
    {
        out.append_pair(key, v);
    }
    let query = out.finish();
    if query.is_empty() {
        query
    } else {
        format!("?{query}")
    }
}

/// What: Current search text carried by the location, if any.
///
/// Inputs:
/// - `location`: Page location.
///
/// Output:
/// - Trimmed `q` value, or `None` when absent or blank.
#[must_use]
pub fn search_query(location: &PageLocation) -> Option<String> {
    query_param(&location.search, SEARCH_PARAM)
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

/// What: Same-document URL reflecting the active search text.
///
/// Inputs:
/// - `location`: Current page location.
/// - `query`: Active search text; blank removes the parameter.
///
/// Output:
/// - `pathname?search#hash` suitable for `history.replaceState`.
#[must_use]
pub fn with_search_param(location: &PageLocation, query: &str) -> String {
    let query = query.trim();
    let value = (!query.is_empty()).then_some(query);
    let search = set_query_param(&location.search, SEARCH_PARAM, value);
    format!("{}{search}{}", location.pathname, location.hash)
}

/// What: Relative URL of the catalogue page pre-filtered by `text`.
///
/// Inputs:
/// - `charts_page`: Catalogue page file name, e.g. `charts.html`.
/// - `text`: Raw search box text.
///
/// Output:
/// - `Some("charts.html?q=...")`, or `None` when `text` is blank.
#[must_use]
pub fn redirect_target(charts_page: &str, text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!(
        "{charts_page}?{SEARCH_PARAM}={}",
        percent_encode(text)
    ))
}
