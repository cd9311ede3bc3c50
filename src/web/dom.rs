//! DOM implementation of [`ChartsView`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement, Node};

use super::listener::Listener;
use super::modal::{self, OpenModal};
use crate::ui::{CardView, ChartsView};

/// Markup of the spinner shown while the index loads.
const SPINNER_HTML: &str = r#"<i class="fas fa-spinner fa-spin fa-3x"></i>"#;

/// What: Create an element with an optional class attribute.
///
/// # Errors
/// - Returns the DOM exception when `tag` is not a valid element name.
pub fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// What: The catalogue grid, its loading indicator, and the search box.
///
/// Details:
/// - Handlers created for a render (install buttons, icon fallbacks) are owned
///   here and detached when the next render replaces the cards.
/// - DOM failures are logged and otherwise ignored.
pub struct DomChartsView {
    /// Page document.
    document: Document,
    /// `.charts-grid` container.
    grid: Element,
    /// `.search-input`, if the page has one.
    input: Option<HtmlInputElement>,
    /// `div.loading` indicator, created once.
    spinner: Element,
    /// Handlers bound to the cards currently in the grid.
    card_listeners: RefCell<Vec<Listener>>,
    /// Install dialog currently open, shared with install-button handlers.
    modal: Rc<RefCell<Option<OpenModal>>>,
}

impl DomChartsView {
    /// What: Wrap the page elements.
    ///
    /// # Errors
    /// - Returns the DOM exception when the spinner element cannot be created.
    pub fn new(
        document: Document,
        grid: Element,
        input: Option<HtmlInputElement>,
    ) -> Result<Self, JsValue> {
        let spinner = element(&document, "div", "loading")?;
        spinner.set_inner_html(SPINNER_HTML);
        Ok(Self {
            document,
            grid,
            input,
            spinner,
            card_listeners: RefCell::new(Vec::new()),
            modal: Rc::new(RefCell::new(None)),
        })
    }

    /// Empty the grid and detach handlers of the cards it held.
    fn clear(&self) {
        self.grid.set_inner_html("");
        self.card_listeners.borrow_mut().clear();
    }

    /// Replace the grid with a single paragraph.
    fn show_message(&self, class: &str, text: &str) -> Result<(), JsValue> {
        self.clear();
        let p = element(&self.document, "p", class)?;
        p.set_text_content(Some(text));
        self.grid.append_child(&p)?;
        Ok(())
    }

    /// Build and append every card.
    fn append_cards(&self, cards: &[CardView]) -> Result<(), JsValue> {
        self.clear();
        for card in cards {
            let el = self.build_card(card)?;
            self.grid.append_child(&el)?;
        }
        Ok(())
    }

    /// Build one `div.chart-card`, registering its handlers.
    fn build_card(&self, card: &CardView) -> Result<Element, JsValue> {
        let doc = &self.document;
        let root = element(doc, "div", "chart-card")?;

        let icon_box = element(doc, "div", "chart-icon-container")?;
        let img = element(doc, "img", "")?;
        img.set_attribute("src", &card.icon)?;
        img.set_attribute("alt", &card.name)?;
        img.set_attribute("loading", "lazy")?;
        let fallback = {
            let target = img.clone();
            let fallback_icon = card.fallback_icon.clone();
            Listener::new(&img, "error", move |_| {
                if target.get_attribute("src").as_deref() != Some(fallback_icon.as_str()) {
                    let _ = target.set_attribute("src", &fallback_icon);
                }
            })?
        };
        self.card_listeners.borrow_mut().push(fallback);
        icon_box.append_child(&img)?;
        root.append_child(&icon_box)?;

        let title = element(doc, "h3", "")?;
        title.set_text_content(Some(&card.name));
        root.append_child(&title)?;

        let version = element(doc, "p", "chart-version")?;
        version.set_text_content(Some(&card.version_label));
        root.append_child(&version)?;

        let desc = element(doc, "p", "chart-desc")?;
        desc.set_text_content(Some(&card.description));
        root.append_child(&desc)?;

        let links = element(doc, "div", "chart-links")?;
        let install = element(doc, "button", "btn-small")?;
        install.set_attribute("type", "button")?;
        install.set_text_content(Some("Install"));
        let on_install = {
            let document = self.document.clone();
            let instructions = card.install.clone();
            let slot = Rc::clone(&self.modal);
            Listener::new(&install, "click", move |_| {
                if let Err(err) = modal::open(&document, &instructions, &slot) {
                    tracing::warn!(chart = %instructions.chart, error = ?err, "failed to open install dialog");
                }
            })?
        };
        self.card_listeners.borrow_mut().push(on_install);
        links.append_child(&install)?;

        if let Some(home) = &card.home {
            let link = element(doc, "a", "btn-small github")?;
            link.set_attribute("href", home)?;
            link.set_attribute("target", "_blank")?;
            link.set_attribute("rel", "noopener noreferrer")?;
            link.set_attribute("title", "Project home")?;
            let icon = element(doc, "i", "fa-solid fa-external-link")?;
            link.append_child(&icon)?;
            links.append_child(&link)?;
        }
        root.append_child(&links)?;
        Ok(root)
    }
}

/// Log a failed DOM update.
fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(error = ?err, "failed to {what}");
    }
}

impl ChartsView for DomChartsView {
    fn show_loading(&self) {
        report("show loading indicator", self.grid.append_child(&self.spinner).map(drop));
    }

    fn hide_loading(&self) {
        let spinner: &Node = &self.spinner;
        if self.grid.contains(Some(spinner)) {
            report("hide loading indicator", self.grid.remove_child(&self.spinner).map(drop));
        }
    }

    fn show_error(&self, message: &str) {
        report("show error", self.show_message("error", message));
    }

    fn show_no_results(&self, message: &str) {
        report("show empty state", self.show_message("no-results", message));
    }

    fn show_cards(&self, cards: &[CardView]) {
        report("render charts", self.append_cards(cards));
    }

    fn search_text(&self) -> String {
        self.input.as_ref().map(HtmlInputElement::value).unwrap_or_default()
    }

    fn set_search_text(&self, text: &str) {
        if let Some(input) = &self.input {
            input.set_value(text);
        }
    }
}
