//! Cancellable one-shot timer used to debounce live search.

use std::time::Duration;

/// What: Platform timer capable of running a task once after a delay.
///
/// Inputs:
/// - `schedule` receives the delay and the task to run.
///
/// Output:
/// - A handle that `cancel` accepts to prevent a pending run.
///
/// Details:
/// - Tasks are not `Send`; implementations run them on the calling thread.
/// - Cancelling a handle whose task already ran must be harmless.
pub trait Scheduler {
    /// Token identifying one scheduled task.
    type Handle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Prevent the task behind `handle` from running, if it has not yet.
    fn cancel(&self, handle: Self::Handle);
}

/// What: Debouncer holding at most one pending task.
///
/// Inputs:
/// - Built around a [`Scheduler`] implementation.
///
/// Output:
/// - Runs only the most recently scheduled callback once its delay elapses
///   without another call to [`Debouncer::schedule`].
///
/// Details:
/// - Each `schedule` call cancels the previous pending task first.
pub struct Debouncer<S: Scheduler> {
    /// Underlying timer.
    scheduler: S,
    /// Handle of the task most recently scheduled.
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    /// Wrap `scheduler`; nothing is pending initially.
    pub const fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// What: Replace any pending task with `callback`, due after `delay`.
    ///
    /// Inputs:
    /// - `callback`: Work to run once the quiet period ends.
    /// - `delay`: Quiet period measured from this call.
    pub fn schedule<F>(&mut self, callback: F, delay: Duration)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(delay, Box::new(callback)));
    }

    /// Drop the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}
