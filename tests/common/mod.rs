//! Native stand-ins for the browser: a recording view, an in-memory address
//! bar, a virtual clock, and a canned index source.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use helmhub_charts::IndexError;
use helmhub_charts::events::Navigator;
use helmhub_charts::logic::{PageLocation, Scheduler};
use helmhub_charts::sources::IndexSource;
use helmhub_charts::ui::{CardView, ChartsView};

/// Index with two charts in publication order.
pub const TWO_CHARTS: &str = r#"
apiVersion: v1
entries:
  nginx:
    - version: "1.0"
      appVersion: "1.2"
      description: A web server
      keywords: [web, http]
      home: https://nginx.org
    - version: "0.9"
      appVersion: "1.1"
  redis:
    - version: "2.0"
      appVersion: "7.2"
      description: In-memory cache
      icon: https://example.com/redis.png
      keywords: [cache]
"#;

/// What the grid currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Grid {
    /// Nothing rendered yet.
    Empty,
    /// Chart cards in order.
    Cards(Vec<CardView>),
    /// Empty-state message.
    NoResults(String),
    /// Load error message.
    Error(String),
}

/// View that records calls the way the DOM grid would reflect them.
pub struct RecordingView {
    pub loading: Cell<bool>,
    pub grid: RefCell<Grid>,
    pub search: RefCell<String>,
    pub calls: RefCell<Vec<&'static str>>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            loading: Cell::new(false),
            grid: RefCell::new(Grid::Empty),
            search: RefCell::new(String::new()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl RecordingView {
    /// Names of the cards on screen, or empty when no cards are shown.
    pub fn card_names(&self) -> Vec<String> {
        match &*self.grid.borrow() {
            Grid::Cards(cards) => cards.iter().map(|c| c.name.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// How many times `call` happened.
    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    /// Simulate the user typing into the search box.
    pub fn type_text(&self, text: &str) {
        *self.search.borrow_mut() = text.to_string();
    }

    /// Replacing the grid contents also drops the spinner inside it.
    fn replace(&self, call: &'static str, grid: Grid) {
        self.calls.borrow_mut().push(call);
        self.loading.set(false);
        *self.grid.borrow_mut() = grid;
    }
}

impl ChartsView for RecordingView {
    fn show_loading(&self) {
        self.calls.borrow_mut().push("show_loading");
        self.loading.set(true);
    }

    fn hide_loading(&self) {
        self.calls.borrow_mut().push("hide_loading");
        self.loading.set(false);
    }

    fn show_error(&self, message: &str) {
        self.replace("show_error", Grid::Error(message.to_string()));
    }

    fn show_no_results(&self, message: &str) {
        self.replace("show_no_results", Grid::NoResults(message.to_string()));
    }

    fn show_cards(&self, cards: &[CardView]) {
        self.replace("show_cards", Grid::Cards(cards.to_vec()));
    }

    fn search_text(&self) -> String {
        self.search.borrow().clone()
    }

    fn set_search_text(&self, text: &str) {
        self.calls.borrow_mut().push("set_search_text");
        *self.search.borrow_mut() = text.to_string();
    }
}

/// Address bar kept in memory; clones share state.
#[derive(Clone, Default)]
pub struct FakeNavigator {
    pub location: Rc<RefCell<PageLocation>>,
    pub replaced: Rc<RefCell<Vec<String>>>,
    pub navigated: Rc<RefCell<Vec<String>>>,
}

impl FakeNavigator {
    /// Navigator positioned at `pathname` + `search`.
    pub fn at(pathname: &str, search: &str) -> Self {
        let nav = Self::default();
        *nav.location.borrow_mut() = PageLocation::new(pathname, search, "");
        nav
    }

    /// Most recent URL passed to `replace_url`.
    pub fn last_replaced(&self) -> Option<String> {
        self.replaced.borrow().last().cloned()
    }
}

/// Split a same-document URL into its location parts.
fn split_url(url: &str) -> PageLocation {
    let (rest, hash) = url
        .find('#')
        .map_or((url, ""), |i| (&url[..i], &url[i..]));
    let (path, search) = rest
        .find('?')
        .map_or((rest, ""), |i| (&rest[..i], &rest[i..]));
    PageLocation::new(path, search, hash)
}

impl Navigator for FakeNavigator {
    fn location(&self) -> PageLocation {
        self.location.borrow().clone()
    }

    fn replace_url(&self, url: &str) {
        self.replaced.borrow_mut().push(url.to_string());
        *self.location.borrow_mut() = split_url(url);
    }

    fn navigate(&self, url: &str) {
        self.navigated.borrow_mut().push(url.to_string());
    }
}

/// Virtual clock: tasks run only when the test advances time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    next_id: Rc<Cell<u64>>,
    tasks: Rc<RefCell<Vec<(u64, Duration, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    /// Move the clock forward and run every task now due.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        let now = self.now.get();
        let due = {
            let mut tasks = self.tasks.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) =
                tasks.drain(..).partition(|(_, at, _)| *at <= now);
            *tasks = rest;
            due
        };
        for (_, _, task) in due {
            task();
        }
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.tasks
            .borrow_mut()
            .push((id, self.now.get() + delay, task));
        id
    }

    fn cancel(&self, handle: u64) {
        self.tasks.borrow_mut().retain(|(id, _, _)| *id != handle);
    }
}

/// Source answering every fetch with the same outcome.
pub struct FixedSource(pub Result<String, IndexError>);

impl FixedSource {
    /// Source serving `text`.
    pub fn ok(text: &str) -> Self {
        Self(Ok(text.to_string()))
    }
}

impl IndexSource for FixedSource {
    async fn fetch_index(&self) -> Result<String, IndexError> {
        self.0.clone()
    }
}

/// Shorthand for milliseconds.
pub const fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
