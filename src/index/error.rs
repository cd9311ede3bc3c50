use std::fmt;

/// What: The single "index unavailable" failure of the catalogue loader.
///
/// Inputs: Produced by index sources and the document parser.
///
/// Output: Implements `Display`/`Error`; the `Display` text is shown to the
/// visitor inside the catalogue grid.
///
/// Details:
/// - Variants record why the index could not be used; callers treat them alike.
/// - Never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The request could not be completed (DNS, CORS, connection reset, ...).
    Network(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a usable index document.
    Parse(String),
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Failed to fetch charts index: {msg}"),
            Self::Status(code) => write!(f, "Failed to fetch charts index (HTTP {code})"),
            Self::Parse(msg) => write!(f, "Invalid charts index: {msg}"),
        }
    }
}

impl std::error::Error for IndexError {}

impl From<reqwest::Error> for IndexError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(status) if !status.is_success() => Self::Status(status.as_u16()),
            _ => Self::Network(value.to_string()),
        }
    }
}

impl From<serde_norway::Error> for IndexError {
    fn from(value: serde_norway::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
