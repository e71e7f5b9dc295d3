use serde::Serialize;
use tracing::debug;

use fleetctx_core::config::SearchSettings;
use fleetctx_core::error::Result;
use fleetctx_core::traits::SearchObserver;
use fleetctx_core::types::{Driver, EntityKind, EntityRef, Load, Trailer, Truck};
use fleetctx_core::FleetView;

use crate::fields::{display, path, searchable_fields, validate};
use crate::observer::TracingObserver;
use crate::scoring::score_entity;

/// One navigable match. `entity` borrows the record it was built from and is
/// only meant for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub path: String,
    #[serde(skip)]
    pub entity: EntityRef<'a>,
    pub score: u32,
}

/// Matches every entity of one kind against `query`, in input order.
pub fn search_kind<'a, I>(query: &str, entities: I) -> Result<Vec<SearchResult<'a>>>
where
    I: IntoIterator<Item = EntityRef<'a>>,
{
    let mut results = Vec::new();
    for entity in entities {
        validate(entity)?;
        let fields = searchable_fields(entity);
        let score = score_entity(query, fields.iter().map(|f| f.as_deref()));
        if score == 0 {
            continue;
        }
        let text = display(entity);
        results.push(SearchResult {
            id: entity.id().to_string(),
            kind: entity.kind(),
            title: text.title,
            subtitle: text.subtitle,
            description: text.description,
            path: path(entity),
            entity,
            score,
        });
    }
    Ok(results)
}

/// Ranked search over drivers, trucks, trailers and loads.
///
/// Holds no state between calls; failures are reported to the observer and
/// turn into an empty result.
pub struct EntitySearch {
    settings: SearchSettings,
    observer: Box<dyn SearchObserver>,
}

impl Default for EntitySearch {
    fn default() -> Self { Self::new(SearchSettings::default()) }
}

impl EntitySearch {
    pub fn new(settings: SearchSettings) -> Self {
        Self::with_observer(settings, Box::new(TracingObserver))
    }

    pub fn with_observer(settings: SearchSettings, observer: Box<dyn SearchObserver>) -> Self {
        Self { settings, observer }
    }

    pub fn settings(&self) -> SearchSettings { self.settings }

    pub fn search<'a>(&self, query: &str, view: &FleetView<'a>) -> Vec<SearchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        match self.try_search(query, view) {
            Ok(results) => {
                debug!(query, hits = results.len(), "search complete");
                results
            }
            Err(e) => {
                self.observer.search_failed(query, &e);
                Vec::new()
            }
        }
    }

    pub fn search_collections<'a>(
        &self,
        query: &str,
        drivers: &'a [Driver],
        trucks: &'a [Truck],
        trailers: &'a [Trailer],
        loads: &'a [Load],
    ) -> Vec<SearchResult<'a>> {
        self.search(query, &FleetView::from_slices(drivers, trucks, trailers, loads))
    }

    fn try_search<'a>(&self, query: &str, view: &FleetView<'a>) -> Result<Vec<SearchResult<'a>>> {
        let mut all = search_kind(query, view.drivers.iter().map(|&d| EntityRef::from(d)))?;
        all.extend(search_kind(query, view.trucks.iter().map(|&t| EntityRef::from(t)))?);
        all.extend(search_kind(query, view.trailers.iter().map(|&t| EntityRef::from(t)))?);
        all.extend(search_kind(query, view.loads.iter().map(|&l| EntityRef::from(l)))?);
        // stable: ties keep kind order, then collection order
        all.sort_by(|a, b| b.score.cmp(&a.score));
        all.truncate(self.settings.max_results);
        Ok(all)
    }
}
