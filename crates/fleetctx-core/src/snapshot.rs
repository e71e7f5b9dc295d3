//! Point-in-time copy of the fleet data and borrowed views over it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::scope::{OrgTree, ScopeFilter};
use crate::types::{Driver, Load, Organization, Trailer, Truck};

/// Everything the dashboard holds in memory at once, as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSnapshot {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub trucks: Vec<Truck>,
    #[serde(default)]
    pub trailers: Vec<Trailer>,
    #[serde(default)]
    pub loads: Vec<Load>,
}

impl FleetSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn org_tree(&self) -> OrgTree {
        OrgTree::new(self.organizations.clone())
    }

    pub fn view(&self) -> FleetView<'_> {
        FleetView::from_slices(&self.drivers, &self.trucks, &self.trailers, &self.loads)
    }

    /// Entities visible under `filter`, each collection in its original order.
    pub fn scoped(&self, filter: &ScopeFilter) -> FleetView<'_> {
        FleetView {
            drivers: filter.apply(&self.drivers),
            trucks: filter.apply(&self.trucks),
            trailers: filter.apply(&self.trailers),
            loads: filter.apply(&self.loads),
        }
    }
}

/// Borrowed entity collections handed to the search index.
#[derive(Debug, Clone, Default)]
pub struct FleetView<'a> {
    pub drivers: Vec<&'a Driver>,
    pub trucks: Vec<&'a Truck>,
    pub trailers: Vec<&'a Trailer>,
    pub loads: Vec<&'a Load>,
}

impl<'a> FleetView<'a> {
    pub fn from_slices(
        drivers: &'a [Driver],
        trucks: &'a [Truck],
        trailers: &'a [Trailer],
        loads: &'a [Load],
    ) -> Self {
        Self {
            drivers: drivers.iter().collect(),
            trucks: trucks.iter().collect(),
            trailers: trailers.iter().collect(),
            loads: loads.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.drivers.len() + self.trucks.len() + self.trailers.len() + self.loads.len()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}
