use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::logic::Scheduler;

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Pending `setTimeout` call and the closure it will invoke.
pub struct TimeoutHandle {
    /// Browser timer id; `None` when scheduling failed.
    id: Option<i32>,
    /// Kept alive until the timer is cancelled or replaced.
    _callback: Closure<dyn FnMut()>,
}

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimeoutHandle {
        let callback: Closure<dyn FnMut()> = Closure::once(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let id = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.as_ref().unchecked_ref(),
                    millis,
                )
                .map_err(|err| tracing::warn!(error = ?err, "setTimeout failed"))
                .ok()
        });
        TimeoutHandle {
            id,
            _callback: callback,
        }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        if let (Some(id), Some(window)) = (handle.id, web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    }
}
