//! Browser entry point: wires the catalogue page and the search redirector to
//! the DOM once the document is ready.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent};

use crate::config::SiteConfig;
use crate::events::{ChartsPage, Navigator, PageRole, SearchRedirector};
use crate::logging;
use crate::sources::HttpIndexSource;

mod dom;
mod listener;
mod location;
mod modal;
mod timer;

pub use dom::DomChartsView;
pub use listener::Listener;
pub use location::BrowserNavigator;
pub use timer::BrowserScheduler;

/// Catalogue controller as wired in the browser.
pub type BrowserChartsPage = ChartsPage<DomChartsView, BrowserNavigator, BrowserScheduler>;

/// Id of the optional inline JSON block overriding [`SiteConfig`].
const CONFIG_ELEMENT_ID: &str = "helmhub-config";

/// Module start function: install panic/log hooks and mount on page-ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = site_config(&document);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once_into_js(move || mount(&doc, &config));
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            tracing::error!(error = ?err, "failed to wait for DOMContentLoaded");
        }
    } else {
        mount(&document, &config);
    }
}

/// Read the page's config block and start logging at its level.
fn site_config(document: &Document) -> SiteConfig {
    let block = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let parsed = SiteConfig::from_page_block(block.as_deref());
    let config = parsed.clone().unwrap_or_default();
    logging::init(&config.log_level);
    if let Err(err) = parsed {
        tracing::warn!(error = %err, "ignoring site config override");
    }
    config
}

/// Mount the catalogue or the redirector, whichever this page calls for.
fn mount(document: &Document, config: &SiteConfig) {
    let grid = document.query_selector(".charts-grid").unwrap_or_else(|err| {
        tracing::error!(error = ?err, "failed to look up the charts grid");
        None
    });
    let role = PageRole::detect(
        grid.is_some(),
        &BrowserNavigator.location(),
        &config.charts_page,
    );
    tracing::debug!(role = ?role, "mounting search components");
    let result = match (role, grid) {
        (PageRole::Catalogue, Some(grid)) => mount_charts_page(document, grid, config.clone()),
        (PageRole::Redirect, _) => mount_redirector(document, config),
        _ => Ok(()),
    };
    if let Err(err) = result {
        tracing::error!(role = ?role, error = ?err, "failed to mount search components");
    }
}

/// `.search-input`, when present and really an `<input>`.
fn search_input(document: &Document) -> Result<Option<HtmlInputElement>, JsValue> {
    Ok(document
        .query_selector(".search-input")?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()))
}

/// Whether `event` is an Enter key press outside IME composition.
fn is_enter(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|key| key.key() == "Enter" && !key.is_composing())
}

/// What: Start the catalogue in `grid`.
///
/// Details:
/// - Search controls are bound after the load attempt finishes.
fn mount_charts_page(document: &Document, grid: Element, config: SiteConfig) -> Result<(), JsValue> {
    let input = search_input(document)?;
    let button = document.query_selector(".search-btn")?;
    let view = DomChartsView::new(document.clone(), grid, input.clone())?;
    let source = HttpIndexSource::new(config.index_url.clone());
    tracing::info!(url = source.url(), "loading charts index");
    let page = Rc::new(ChartsPage::new(
        config,
        view,
        BrowserNavigator,
        BrowserScheduler,
    ));

    spawn_local(async move {
        page.load(&source).await;
        if let Err(err) = bind_search_controls(&page, input.as_ref(), button.as_ref()) {
            tracing::error!(error = ?err, "failed to bind search controls");
        }
    });
    Ok(())
}

/// Attach click, Enter, and debounced input handlers for the catalogue search.
fn bind_search_controls(
    page: &Rc<BrowserChartsPage>,
    input: Option<&HtmlInputElement>,
    button: Option<&Element>,
) -> Result<(), JsValue> {
    if let Some(button) = button {
        let page = Rc::clone(page);
        Listener::new(button, "click", move |_| page.search_now())?.forget();
    }
    if let Some(input) = input {
        let typing = Rc::clone(page);
        Listener::new(input, "input", move |_| typing.schedule_search())?.forget();
        let enter = Rc::clone(page);
        Listener::new(input, "keydown", move |event| {
            if is_enter(&event) {
                enter.search_now();
            }
        })?
        .forget();
    }
    Ok(())
}

/// Redirect searches to the catalogue from a page without the grid.
fn mount_redirector(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let redirector = Rc::new(SearchRedirector::new(config, BrowserNavigator));
    let input = search_input(document)?;

    if let Some(button) = document.query_selector(".search-btn")? {
        let redirector = Rc::clone(&redirector);
        let input = input.clone();
        Listener::new(&button, "click", move |_| {
            let text = input.as_ref().map(HtmlInputElement::value).unwrap_or_default();
            redirector.submit(&text);
        })?
        .forget();
    }
    if let Some(input) = input {
        let field = input.clone();
        Listener::new(&input, "keydown", move |event| {
            if is_enter(&event) {
                redirector.submit(&field.value());
            }
        })?
        .forget();
    }
    Ok(())
}
