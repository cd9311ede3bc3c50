//! Catalogue page behaviour: loading, filtering, live search, and URL sync.

mod common;

use std::rc::Rc;

use common::{FakeNavigator, FixedSource, Grid, ManualScheduler, RecordingView, TWO_CHARTS, ms};
use futures::executor::block_on;
use helmhub_charts::config::DEFAULT_FALLBACK_ICON;
use helmhub_charts::events::ChartsPage;
use helmhub_charts::ui::NO_RESULTS_TEXT;
use helmhub_charts::ui::card::DEFAULT_DESCRIPTION;
use helmhub_charts::{IndexError, SiteConfig};

type TestPage = ChartsPage<RecordingView, FakeNavigator, ManualScheduler>;

fn page_at(search: &str) -> (Rc<TestPage>, FakeNavigator, ManualScheduler) {
    let nav = FakeNavigator::at("/charts.html", search);
    let clock = ManualScheduler::default();
    let page = Rc::new(ChartsPage::new(
        SiteConfig::default(),
        RecordingView::default(),
        nav.clone(),
        clock.clone(),
    ));
    (page, nav, clock)
}

fn loaded_page(search: &str) -> (Rc<TestPage>, FakeNavigator, ManualScheduler) {
    let (page, nav, clock) = page_at(search);
    block_on(page.load(&FixedSource::ok(TWO_CHARTS)));
    (page, nav, clock)
}

#[test]
/// What: A single chart without an icon renders with the default icon.
///
/// - Input: `{"nginx": [{"version": "1.0", "appVersion": "1.2"}]}`
/// - Output: One card labelled `v1.0 (App v1.2)` using the fallback icon
fn load_renders_chart_with_default_icon() {
    let (page, _, _) = page_at("");
    let source = FixedSource::ok(r#"{"nginx": [{"version": "1.0", "appVersion": "1.2"}]}"#);
    block_on(page.load(&source));

    let view = page.view();
    let grid = view.grid.borrow();
    let Grid::Cards(cards) = &*grid else {
        panic!("expected cards, got {grid:?}");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "nginx");
    assert_eq!(cards[0].version_label, "v1.0 (App v1.2)");
    assert_eq!(cards[0].icon, DEFAULT_FALLBACK_ICON);
    assert_eq!(cards[0].description, DEFAULT_DESCRIPTION);
    assert_eq!(cards[0].home, None);
    assert_eq!(page.state().len(), 1);
    assert!(!view.loading.get());
}

#[test]
/// What: Loading shows the indicator first and clears it at the end.
///
/// - Input: Successful load of two charts
/// - Output: Calls start with `show_loading` and end with `hide_loading`
fn load_brackets_with_loading_indicator() {
    let (page, _, _) = loaded_page("");
    let calls = page.view().calls.borrow().clone();
    assert_eq!(calls.first(), Some(&"show_loading"));
    assert_eq!(calls.last(), Some(&"hide_loading"));
    assert_eq!(page.view().card_names(), ["nginx", "redis"]);
}

#[test]
/// What: Only the first version of each chart is shown.
///
/// - Input: nginx with versions 1.0 then 0.9
/// - Output: The nginx card shows 1.0 and its keywords/home come from that record
fn load_uses_first_listed_version() {
    let (page, _, _) = loaded_page("");
    let state = page.state();
    let nginx = &state.charts()[0];
    assert_eq!(nginx.version, "1.0");
    assert_eq!(nginx.home.as_deref(), Some("https://nginx.org"));
    assert_eq!(nginx.keywords, ["web", "http"]);
}

#[test]
/// What: HTTP failures replace the grid with the error text.
///
/// - Input: Source failing with status 500
/// - Output: Error message with the prefix and status; the indicator is
///   hidden as the last step; no charts
fn http_error_is_shown_in_grid() {
    let (page, _, _) = page_at("");
    block_on(page.load(&FixedSource(Err(IndexError::Status(500)))));

    let view = page.view();
    match &*view.grid.borrow() {
        Grid::Error(message) => {
            assert!(message.starts_with("Error loading charts: "), "{message}");
            assert!(message.contains("500"), "{message}");
        }
        other => panic!("expected error, got {other:?}"),
    }
    assert!(!view.loading.get());
    let calls = view.calls.borrow().clone();
    assert_eq!(calls.first(), Some(&"show_loading"));
    assert_eq!(calls.last(), Some(&"hide_loading"));
    assert_eq!(view.count("hide_loading"), 1);
    assert!(page.state().is_empty());
}

#[test]
/// What: Network and parse failures take the same path as HTTP failures.
///
/// - Input: A rejected fetch, then a body that is not an index
/// - Output: An error message each time, then the indicator hidden
fn network_and_parse_errors_are_shown() {
    let (page, _, _) = page_at("");
    block_on(page.load(&FixedSource(Err(IndexError::Network(
        "connection refused".to_string(),
    )))));
    assert!(matches!(&*page.view().grid.borrow(), Grid::Error(m) if m.contains("connection refused")));
    assert!(!page.view().loading.get());
    assert_eq!(page.view().calls.borrow().last(), Some(&"hide_loading"));
    assert_eq!(page.view().count("hide_loading"), 1);

    block_on(page.load(&FixedSource::ok("- just\n- a list\n")));
    assert!(matches!(&*page.view().grid.borrow(), Grid::Error(_)));
    assert!(!page.view().loading.get());
    assert_eq!(page.view().calls.borrow().last(), Some(&"hide_loading"));
    assert_eq!(page.view().count("hide_loading"), 2);
}

#[test]
/// What: A `q` parameter pre-fills the box and filters the first render.
///
/// - Input: Location `?q=cache`
/// - Output: Search box `cache`; only redis shown; URL left untouched
fn initial_query_parameter_filters_grid() {
    let (page, nav, _) = loaded_page("?q=cache");
    assert_eq!(*page.view().search.borrow(), "cache");
    assert_eq!(page.view().card_names(), ["redis"]);
    assert!(nav.replaced.borrow().is_empty());
}

#[test]
/// What: A `q` matching nothing shows the empty state straight away.
///
/// - Input: Location `?q=db`
/// - Output: No-results message
fn initial_query_without_matches_shows_empty_state() {
    let (page, _, _) = loaded_page("?q=db");
    assert_eq!(
        *page.view().grid.borrow(),
        Grid::NoResults(NO_RESULTS_TEXT.to_string())
    );
}

#[test]
/// What: Immediate search filters and rewrites the `q` parameter.
///
/// - Input: `web`, then `db`, then blank
/// - Output: nginx only with `?q=web`; empty state with `?q=db`; all charts and no `q`
fn search_now_filters_and_syncs_url() {
    let (page, nav, _) = loaded_page("");

    page.view().type_text("web");
    page.search_now();
    assert_eq!(page.view().card_names(), ["nginx"]);
    assert_eq!(nav.last_replaced().as_deref(), Some("/charts.html?q=web"));

    page.view().type_text("db");
    page.search_now();
    assert_eq!(
        *page.view().grid.borrow(),
        Grid::NoResults(NO_RESULTS_TEXT.to_string())
    );
    assert_eq!(nav.last_replaced().as_deref(), Some("/charts.html?q=db"));

    page.view().type_text("   ");
    page.search_now();
    assert_eq!(page.view().card_names(), ["nginx", "redis"]);
    assert_eq!(nav.last_replaced().as_deref(), Some("/charts.html"));
}

#[test]
/// What: Other query parameters and the fragment survive the rewrite.
///
/// - Input: Location `?lang=en#top`, search `Redis`
/// - Output: `/charts.html?lang=en&q=Redis#top`
fn url_sync_keeps_other_parameters() {
    let (page, nav, _) = page_at("?lang=en");
    nav.location.borrow_mut().hash = "#top".to_string();
    block_on(page.load(&FixedSource::ok(TWO_CHARTS)));

    page.view().type_text("Redis");
    page.search_now();
    assert_eq!(page.view().card_names(), ["redis"]);
    assert_eq!(
        nav.last_replaced().as_deref(),
        Some("/charts.html?lang=en&q=Redis#top")
    );
}

#[test]
/// What: Typing bursts search once, after the quiet period.
///
/// - Input: `w`, `we`, `web` 100ms apart, then 300ms of quiet
/// - Output: No render during the burst; one render for `web` afterwards
fn typing_is_debounced() {
    let (page, nav, clock) = loaded_page("");
    let renders_after_load = page.view().count("show_cards");

    for text in ["w", "we", "web"] {
        page.view().type_text(text);
        page.schedule_search();
        clock.advance(ms(100));
    }
    assert_eq!(page.view().count("show_cards"), renders_after_load);
    assert!(nav.replaced.borrow().is_empty());

    clock.advance(ms(200));
    assert_eq!(page.view().count("show_cards"), renders_after_load + 1);
    assert_eq!(page.view().card_names(), ["nginx"]);
    assert_eq!(*nav.replaced.borrow(), ["/charts.html?q=web"]);
    assert_eq!(clock.pending(), 0);
}

#[test]
/// What: The debounced search reads the box when it fires.
///
/// - Input: Schedule with `x`, change the box to `cache` before the timer
/// - Output: The search runs for `cache`
fn debounced_search_reads_latest_text() {
    let (page, nav, clock) = loaded_page("");
    page.view().type_text("x");
    page.schedule_search();
    page.view().type_text("cache");
    clock.advance(ms(300));
    assert_eq!(page.view().card_names(), ["redis"]);
    assert_eq!(nav.last_replaced().as_deref(), Some("/charts.html?q=cache"));
}

#[test]
/// What: Pressing Enter or the button cancels the pending live search.
///
/// - Input: Schedule, then search immediately, then let the timer elapse
/// - Output: Exactly one extra render and one URL rewrite
fn search_now_cancels_pending_search() {
    let (page, nav, clock) = loaded_page("");
    let before = page.view().count("show_cards");

    page.view().type_text("web");
    page.schedule_search();
    page.search_now();
    clock.advance(ms(1_000));

    assert_eq!(page.view().count("show_cards"), before + 1);
    assert_eq!(nav.replaced.borrow().len(), 1);
    assert_eq!(clock.pending(), 0);
}

#[test]
/// What: A configured debounce window is honoured.
///
/// - Input: `debounceMs` of 50
/// - Output: Search runs after 50ms
fn custom_debounce_window() {
    let nav = FakeNavigator::at("/charts.html", "");
    let clock = ManualScheduler::default();
    let config = SiteConfig {
        debounce_ms: 50,
        ..SiteConfig::default()
    };
    let page = Rc::new(ChartsPage::new(
        config,
        RecordingView::default(),
        nav.clone(),
        clock.clone(),
    ));
    block_on(page.load(&FixedSource::ok(TWO_CHARTS)));

    page.view().type_text("redis");
    page.schedule_search();
    clock.advance(ms(49));
    assert!(nav.replaced.borrow().is_empty());
    clock.advance(ms(1));
    assert_eq!(nav.last_replaced().as_deref(), Some("/charts.html?q=redis"));
}

#[test]
/// What: A page dropped before its timer fires never searches.
///
/// - Input: Schedule a search, drop the page, advance the clock
/// - Output: No URL rewrite and no panic
fn dropped_page_does_not_search() {
    let (page, nav, clock) = loaded_page("");
    page.view().type_text("web");
    page.schedule_search();
    drop(page);
    clock.advance(ms(300));
    assert!(nav.replaced.borrow().is_empty());
}
