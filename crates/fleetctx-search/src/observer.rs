use tracing::error;

use fleetctx_core::error::Error;
use fleetctx_core::traits::SearchObserver;

/// Default observer: reports absorbed failures as `tracing` error events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_failed(&self, query: &str, error: &Error) {
        error!(query, %error, "search failed, returning no results");
    }
}
