//! Core non-UI logic split into modular submodules.

pub mod debounce;
pub mod filter;
pub mod query;

pub use debounce::{Debouncer, Scheduler};
pub use filter::filter_charts;
pub use query::{PageLocation, redirect_target, search_query, with_search_param};
