//! HelmHub chart catalogue: loads the Helm repository index, renders a
//! searchable grid of chart cards, and redirects site-wide searches to it.
//!
//! The crate is platform-neutral except for [`web`], which binds the
//! controllers to the browser DOM when compiled for `wasm32`.

pub mod config;
pub mod events;
pub mod index;
pub mod logging;
pub mod logic;
pub mod sources;
pub mod state;
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SiteConfig;
pub use index::{ChartEntry, IndexDocument, IndexError, VersionRecord};
