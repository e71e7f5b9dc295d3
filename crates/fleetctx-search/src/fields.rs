//! Searchable fields and display rules per entity kind.

use std::borrow::Cow;

use fleetctx_core::error::{Error, Result};
use fleetctx_core::types::EntityRef;

/// Values eligible for matching, in a fixed order per kind. `None` marks a
/// field the record does not carry.
pub fn searchable_fields<'a>(entity: EntityRef<'a>) -> Vec<Option<Cow<'a, str>>> {
    let b = |s: &'a str| Some(Cow::Borrowed(s));
    let opt = |s: Option<&'a str>| s.map(Cow::Borrowed);
    match entity {
        EntityRef::Driver(d) => vec![
            b(&d.id),
            b(&d.first_name),
            b(&d.last_name),
            Some(Cow::Owned(d.full_name())),
            opt(d.email.as_deref()),
            opt(d.phone_number.as_deref()),
            opt(d.license_number.as_deref()),
        ],
        EntityRef::Truck(t) => vec![
            b(&t.id),
            b(&t.make),
            b(&t.model),
            b(&t.license_plate),
            b(&t.vin),
            opt(t.assigned_driver_id.as_deref()),
        ],
        EntityRef::Trailer(t) => vec![
            b(&t.id),
            b(t.trailer_type.as_str()),
            opt(t.license_plate.as_deref()),
            opt(t.vin.as_deref()),
        ],
        EntityRef::Load(l) => vec![
            b(&l.id),
            opt(l.load_number.as_deref()),
            opt(l.bol_number.as_deref()),
            opt(l.shipper.as_deref()),
            opt(l.receiver.as_deref()),
            opt(l.origin.as_deref()),
            opt(l.destination.as_deref()),
            opt(l.pickup_city()),
            opt(l.delivery_city()),
            opt(l.assigned_driver_id.as_deref()),
            opt(l.assigned_truck_id.as_deref()),
        ],
    }
}

/// Human-facing text for a search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

pub fn display(entity: EntityRef<'_>) -> Display {
    match entity {
        EntityRef::Driver(d) => {
            let mut parts = vec![d.status.as_str().to_string()];
            parts.extend(d.email.iter().cloned());
            parts.extend(d.phone_number.iter().cloned());
            Display {
                title: d.full_name(),
                subtitle: format!("Driver ID: {}", d.id),
                description: parts.join(" • "),
            }
        }
        EntityRef::Truck(t) => {
            let driver = non_empty(t.assigned_driver_id.as_deref())
                .map_or_else(|| "Unassigned".to_string(), |id| format!("Driver ID: {}", id));
            Display {
                title: format!("{} {}", t.make, t.model),
                subtitle: format!("Truck ID: {}", t.id),
                description: format!("{} • License: {} • {}", t.status.as_str(), t.license_plate, driver),
            }
        }
        EntityRef::Trailer(t) => {
            let license = non_empty(t.license_plate.as_deref())
                .map_or_else(|| "No License".to_string(), |p| format!("License: {}", p));
            Display {
                title: format!("{} Trailer", t.trailer_type.as_str()),
                subtitle: format!("Trailer ID: {}", t.id),
                description: format!("{} • {}", t.status.as_str(), license),
            }
        }
        EntityRef::Load(l) => {
            let from = non_empty(l.pickup_city()).or(non_empty(l.origin.as_deref())).unwrap_or("Unknown");
            let to = non_empty(l.delivery_city()).or(non_empty(l.destination.as_deref())).unwrap_or("Unknown");
            Display {
                title: format!("Load {}", non_empty(l.load_number.as_deref()).unwrap_or(&l.id)),
                subtitle: format!("{} → {}", from, to),
                description: format!(
                    "{} • {} • BOL: {}",
                    l.status.as_str(),
                    non_empty(l.shipper.as_deref()).unwrap_or("No Shipper"),
                    non_empty(l.bol_number.as_deref()).unwrap_or("N/A"),
                ),
            }
        }
    }
}

/// Blank values fall through to the next fallback, like an unset field.
fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Navigation target, `/{kind-plural}/{id}`.
pub fn path(entity: EntityRef<'_>) -> String {
    format!("/{}/{}", entity.kind().plural(), entity.id())
}

/// Rejects records that cannot be turned into a result.
pub fn validate(entity: EntityRef<'_>) -> Result<()> {
    if entity.id().trim().is_empty() {
        return Err(Error::MalformedEntity { kind: entity.kind(), reason: "missing id".to_string() });
    }
    Ok(())
}
