//! fleetctx-search
//!
//! In-memory relevance search across drivers, trucks, trailers and loads.
//! See `index` for the entry point and `scoring` for the ranking rules.

pub mod fields;
pub mod index;
pub mod observer;
pub mod scoring;

pub use index::{search_kind, EntitySearch, SearchResult};
pub use observer::TracingObserver;
