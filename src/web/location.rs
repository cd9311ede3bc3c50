use wasm_bindgen::JsValue;

use crate::events::Navigator;
use crate::logic::PageLocation;

/// [`Navigator`] over `window.location` and `window.history`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn location(&self) -> PageLocation {
        let Some(window) = web_sys::window() else {
            return PageLocation::default();
        };
        let location = window.location();
        PageLocation {
            pathname: location.pathname().unwrap_or_default(),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn replace_url(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let result = window
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(url)));
        if let Err(err) = result {
            tracing::warn!(url = url, error = ?err, "history.replaceState failed");
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            tracing::warn!(url = url, error = ?err, "navigation failed");
        }
    }
}
