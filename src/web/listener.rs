use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// What: DOM event listener that unregisters itself when dropped.
///
/// Details:
/// - Dropping detaches the handler before the Rust closure is freed, so a late
///   event (e.g. an image error on a detached card) never reaches freed memory.
/// - [`Listener::forget`] keeps the handler for the lifetime of the page.
pub struct Listener {
    /// Element or window the handler is attached to.
    target: EventTarget,
    /// Event type, e.g. `"click"`.
    kind: &'static str,
    /// Rust side of the handler; `None` once forgotten.
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    /// What: Attach `handler` to `kind` events on `target`.
    ///
    /// # Errors
    /// - Returns the DOM exception when registration fails.
    pub fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure: Some(closure),
        })
    }

    /// Keep the handler attached for as long as the page lives.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(closure) = &self.closure {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.kind, closure.as_ref().unchecked_ref());
        }
    }
}
