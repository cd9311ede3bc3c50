use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error};

use crate::config::SiteConfig;
use crate::logic::{Debouncer, Scheduler, search_query, with_search_param};
use crate::sources::{IndexSource, load_charts};
use crate::state::ChartsState;
use crate::ui::{ChartsView, load_error_message, render_charts};

use super::Navigator;

/// Hides the loading indicator when dropped, whatever path the load took.
struct LoadingGuard<'a, V: ChartsView> {
    /// View showing the indicator.
    view: &'a V,
}

impl<'a, V: ChartsView> LoadingGuard<'a, V> {
    /// Show the indicator and arm the guard.
    fn show(view: &'a V) -> Self {
        view.show_loading();
        Self { view }
    }
}

impl<V: ChartsView> Drop for LoadingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.hide_loading();
    }
}

/// What: Controller of the catalogue page.
///
/// Inputs:
/// - `view`: Grid and search box.
/// - `navigator`: Address bar access for the `q` parameter.
/// - `scheduler`: Timer backing the live-search debounce.
///
/// Output:
/// - Drives `view` through loading, error, and search states.
///
/// Details:
/// - Holds the session's [`ChartsState`]; a load replaces it, searches only read it.
/// - Live input is debounced by `config.debounce_ms`; click/Enter search at once.
pub struct ChartsPage<V, N, S>
where
    V: ChartsView,
    N: Navigator,
    S: Scheduler,
{
    /// Site settings.
    config: SiteConfig,
    /// Render surface.
    view: V,
    /// Address bar.
    navigator: N,
    /// Charts loaded for this session.
    state: RefCell<ChartsState>,
    /// Pending live search, if any.
    debouncer: RefCell<Debouncer<S>>,
}

impl<V, N, S> ChartsPage<V, N, S>
where
    V: ChartsView,
    N: Navigator,
    S: Scheduler,
{
    /// Create a controller with an empty session state.
    pub fn new(config: SiteConfig, view: V, navigator: N, scheduler: S) -> Self {
        Self {
            config,
            view,
            navigator,
            state: RefCell::new(ChartsState::default()),
            debouncer: RefCell::new(Debouncer::new(scheduler)),
        }
    }

    /// Render surface this controller draws on.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the charts loaded so far.
    pub fn state(&self) -> ChartsState {
        self.state.borrow().clone()
    }

    /// What: Load the index and render the initial grid.
    ///
    /// Inputs:
    /// - `source`: Where the index comes from.
    ///
    /// Output:
    /// - On success, the session state is replaced and the grid shows all charts,
    ///   or those matching a `q` parameter (which is also copied into the search box).
    /// - On failure, the grid shows the error text and the error is logged.
    ///
    /// Details:
    /// - The loading indicator is shown first and removed on every exit path.
    pub async fn load<I: IndexSource>(&self, source: &I) {
        let _loading = LoadingGuard::show(&self.view);
        match load_charts(source, &self.config.fallback_icon).await {
            Ok(charts) => {
                self.state.replace(ChartsState::new(charts));
                let initial = search_query(&self.navigator.location());
                if let Some(query) = &initial {
                    self.view.set_search_text(query);
                }
                self.render(initial.as_deref().unwrap_or_default());
            }
            Err(err) => {
                error!(error = %err, "error loading charts");
                self.view.show_error(&load_error_message(&err));
            }
        }
    }

    /// What: Search immediately with the current search box text.
    ///
    /// Details:
    /// - Used for the search button and the Enter key.
    /// - Cancels a pending debounced search so it does not fire afterwards.
    pub fn search_now(&self) {
        self.debouncer.borrow_mut().cancel();
        self.run_search();
    }

    /// Filter, render, and sync the `q` parameter from the search box.
    fn run_search(&self) {
        let text = self.view.search_text();
        let query = text.trim();
        self.render(query);
        let url = with_search_param(&self.navigator.location(), query);
        self.navigator.replace_url(&url);
    }

    /// Draw the charts matching `query`.
    fn render(&self, query: &str) {
        let state = self.state();
        let matches = state.filtered(query);
        debug!(
            query = query,
            matches = matches.len(),
            total = state.len(),
            "rendering charts"
        );
        render_charts(&self.view, &matches, &self.config);
    }
}

impl<V, N, S> ChartsPage<V, N, S>
where
    V: ChartsView + 'static,
    N: Navigator + 'static,
    S: Scheduler + 'static,
{
    /// What: Search once typing pauses for the configured quiet period.
    ///
    /// Details:
    /// - Each call restarts the quiet period.
    /// - The search box is read when the timer fires, not when it is armed.
    /// - The pending task holds a weak reference; a dropped page never searches.
    pub fn schedule_search(self: &Rc<Self>) {
        let page = Rc::downgrade(self);
        self.debouncer.borrow_mut().schedule(
            move || {
                if let Some(page) = page.upgrade() {
                    page.run_search();
                }
            },
            self.config.debounce(),
        );
    }
}
