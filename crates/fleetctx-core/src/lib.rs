//! fleetctx-core
//!
//! Domain types, configuration and the organizational scope resolver shared by
//! the search index and the command-line tools.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod scope;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use scope::{OrgTree, ScopeFilter};
pub use snapshot::{FleetSnapshot, FleetView};
