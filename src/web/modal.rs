//! Install-instructions overlay.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::dom::element;
use super::listener::Listener;
use crate::ui::InstallInstructions;

/// The overlay currently attached to the page and its handlers.
pub struct OpenModal {
    /// `div.modal-overlay` root.
    overlay: Element,
    /// Background and close-button handlers.
    _listeners: [Listener; 2],
}

/// What: Show the install dialog for one chart.
///
/// Inputs:
/// - `document`: Page document.
/// - `instructions`: Dialog contents.
/// - `slot`: Holder of the previously opened dialog.
///
/// Output:
/// - `Ok(())` once the overlay is attached to `<body>`.
///
/// Details:
/// - Clicking the overlay background or the close button removes the overlay;
///   clicks inside the dialog body do not.
/// - A previous dialog still in the page is removed and its handlers dropped.
///
/// # Errors
/// - Returns the DOM exception when element creation or insertion fails.
pub fn open(
    document: &Document,
    instructions: &InstallInstructions,
    slot: &RefCell<Option<OpenModal>>,
) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        tracing::warn!("document has no body; cannot show install dialog");
        return Ok(());
    };

    let overlay = element(document, "div", "modal-overlay")?;
    let content = element(document, "div", "modal-content")?;
    let close = element(document, "button", "close-modal")?;
    close.set_text_content(Some("\u{d7}"));
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    content.append_child(&close)?;

    let heading = element(document, "h2", "")?;
    heading.set_text_content(Some(&instructions.title));
    content.append_child(&heading)?;

    let steps = element(document, "div", "install-steps")?;
    for step in &instructions.steps {
        let label = element(document, "p", "")?;
        label.set_text_content(Some(&step.label));
        let pre = element(document, "pre", "")?;
        let code = element(document, "code", "")?;
        code.set_text_content(Some(&step.command));
        pre.append_child(&code)?;
        steps.append_child(&label)?;
        steps.append_child(&pre)?;
    }
    content.append_child(&steps)?;
    overlay.append_child(&content)?;

    let background = {
        let root = overlay.clone();
        Listener::new(&overlay, "click", move |event| {
            let on_background = event
                .target()
                .is_some_and(|target| JsValue::from(target) == JsValue::from(root.clone()));
            if on_background {
                root.remove();
            }
        })?
    };
    let close_button = {
        let root = overlay.clone();
        Listener::new(&close, "click", move |_| root.remove())?
    };

    if let Some(previous) = slot.replace(None) {
        previous.overlay.remove();
    }
    body.append_child(&overlay)?;
    tracing::debug!(chart = %instructions.chart, "install dialog opened");
    slot.replace(Some(OpenModal {
        overlay,
        _listeners: [background, close_button],
    }));
    Ok(())
}
