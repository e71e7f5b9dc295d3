//! Domain types shared by the scope resolver and the search index.

use serde::{Deserialize, Serialize};

pub type OrgId = String;
pub type EntityId = String;

/// Level of a node in the organization hierarchy.
///
/// Ordering follows the hierarchy: `Company < Division < Department < Terminal`,
/// i.e. a smaller value sits higher in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationType {
    Company,
    Division,
    Department,
    Terminal,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 4] = [
        OrganizationType::Company,
        OrganizationType::Division,
        OrganizationType::Department,
        OrganizationType::Terminal,
    ];

    /// Zero-based depth, `Company` is 0.
    pub fn depth(self) -> usize {
        match self {
            OrganizationType::Company => 0,
            OrganizationType::Division => 1,
            OrganizationType::Department => 2,
            OrganizationType::Terminal => 3,
        }
    }

    pub fn parent_type(self) -> Option<OrganizationType> {
        self.depth().checked_sub(1).map(|d| Self::ALL[d])
    }

    pub fn child_type(self) -> Option<OrganizationType> {
        Self::ALL.get(self.depth() + 1).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationType::Company => "company",
            OrganizationType::Division => "division",
            OrganizationType::Department => "department",
            OrganizationType::Terminal => "terminal",
        }
    }
}

fn default_true() -> bool {
    true
}

/// A node of the organization tree. Root nodes have no `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: OrgId,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(rename = "type")]
    pub kind: OrganizationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<OrgId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Which part of the hierarchy owns an entity. Any level may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<OrgId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<OrgId>,
}

impl OrgContext {
    pub fn level(&self, kind: OrganizationType) -> Option<&str> {
        match kind {
            OrganizationType::Company => self.company_id.as_deref(),
            OrganizationType::Division => self.division_id.as_deref(),
            OrganizationType::Department => self.department_id.as_deref(),
            OrganizationType::Terminal => self.terminal_id.as_deref(),
        }
    }
}

/// Data visibility level derived from the current organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionScope {
    Own,
    Terminal,
    Department,
    Division,
    Company,
    System,
}

impl From<OrganizationType> for PermissionScope {
    fn from(kind: OrganizationType) -> Self {
        match kind {
            OrganizationType::Company => PermissionScope::Company,
            OrganizationType::Division => PermissionScope::Division,
            OrganizationType::Department => PermissionScope::Department,
            OrganizationType::Terminal => PermissionScope::Terminal,
        }
    }
}

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? } default $default:ident => $default_wire:literal) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
            #[serde(rename = $default_wire, other)]
            #[default]
            $default,
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::$default => $default_wire,
                }
            }
        }
    };
}

wire_enum!(DriverStatus {
    Active => "active",
    Inactive => "inactive",
    OnLeave => "on_leave",
    Terminated => "terminated",
    InTraining => "in_training",
} default Unknown => "unknown");

wire_enum!(TruckStatus {
    Available => "available",
    Assigned => "assigned",
    Maintenance => "maintenance",
    OutOfService => "out_of_service",
} default Unknown => "unknown");

wire_enum!(TrailerStatus {
    AtTerminal => "at-terminal",
    InTransit => "in-transit",
    OutOfService => "out-of-service",
    Dedicated => "dedicated",
} default Unknown => "unknown");

wire_enum!(TrailerType {
    DryVan => "dry-van",
    Flatbed => "flatbed",
    Refrigerated => "refrigerated",
    Hopper => "hopper",
    Tanker => "tanker",
    Lowboy => "lowboy",
    StepDeck => "step-deck",
    Container => "container",
} default Other => "other");

wire_enum!(LoadStatus {
    Pending => "pending",
    Assigned => "assigned",
    PickedUp => "picked-up",
    InTransit => "in-transit",
    Delivering => "delivering",
    Delivered => "delivered",
    Cancelled => "cancelled",
} default Unknown => "unknown");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_truck_id: Option<EntityId>,
    #[serde(default)]
    pub status: DriverStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_context: Option<OrgContext>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    pub id: EntityId,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<EntityId>,
    #[serde(default)]
    pub status: TruckStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_context: Option<OrgContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trailer {
    pub id: EntityId,
    #[serde(rename = "type", default)]
    pub trailer_type: TrailerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_truck_id: Option<EntityId>,
    #[serde(default)]
    pub status: TrailerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_context: Option<OrgContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bol_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_driver_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_truck_id: Option<EntityId>,
    #[serde(default)]
    pub status: LoadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizational_context: Option<OrgContext>,
}

impl Load {
    pub fn pickup_city(&self) -> Option<&str> {
        self.pickup_location.as_ref().map(|l| l.city.as_str())
    }

    pub fn delivery_city(&self) -> Option<&str> {
        self.delivery_location.as_ref().map(|l| l.city.as_str())
    }
}

/// The four searchable entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Driver,
    Truck,
    Trailer,
    Load,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Driver => "driver",
            EntityKind::Truck => "truck",
            EntityKind::Trailer => "trailer",
            EntityKind::Load => "load",
        }
    }

    /// Collection name used in navigation paths, e.g. `drivers`.
    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Driver => "drivers",
            EntityKind::Truck => "trucks",
            EntityKind::Trailer => "trailers",
            EntityKind::Load => "loads",
        }
    }
}

/// A borrowed entity of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
    Driver(&'a Driver),
    Truck(&'a Truck),
    Trailer(&'a Trailer),
    Load(&'a Load),
}

impl<'a> EntityRef<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Driver(_) => EntityKind::Driver,
            EntityRef::Truck(_) => EntityKind::Truck,
            EntityRef::Trailer(_) => EntityKind::Trailer,
            EntityRef::Load(_) => EntityKind::Load,
        }
    }

    pub fn id(&self) -> &'a str {
        match *self {
            EntityRef::Driver(d) => &d.id,
            EntityRef::Truck(t) => &t.id,
            EntityRef::Trailer(t) => &t.id,
            EntityRef::Load(l) => &l.id,
        }
    }
}

impl<'a> From<&'a Driver> for EntityRef<'a> {
    fn from(d: &'a Driver) -> Self {
        EntityRef::Driver(d)
    }
}

impl<'a> From<&'a Truck> for EntityRef<'a> {
    fn from(t: &'a Truck) -> Self {
        EntityRef::Truck(t)
    }
}

impl<'a> From<&'a Trailer> for EntityRef<'a> {
    fn from(t: &'a Trailer) -> Self {
        EntityRef::Trailer(t)
    }
}

impl<'a> From<&'a Load> for EntityRef<'a> {
    fn from(l: &'a Load) -> Self {
        EntityRef::Load(l)
    }
}
