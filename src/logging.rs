//! Tracing subscriber setup.
//!
//! In the browser every formatted event goes to the developer console at the
//! matching level through `tracing-web`. Native builds (tests, tooling) write
//! to stderr.

use tracing_subscriber::EnvFilter;

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `default_level`: Filter directive used when no override is available
///   (e.g. `"info"` or `"helmhub_charts=debug"`).
///
/// Output:
/// - No return value; subsequent `tracing` macros are routed to the console.
///
/// Details:
/// - Safe to call more than once; only the first call installs a subscriber.
/// - Timestamps are omitted on wasm because `SystemTime` is unavailable there.
/// - Natively `RUST_LOG` takes precedence over `default_level`.
pub fn init(default_level: &str) {
    let filter = env_filter(default_level);

    #[cfg(target_arch = "wasm32")]
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new())
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level = default_level, "logging initialized");
    }
}

/// Build the event filter, preferring `RUST_LOG` outside the browser.
fn env_filter(default_level: &str) -> EnvFilter {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"))
}
