//! Record model
//!
//! Four record kinds are stored, each as its own collection. Every kind has
//! three shapes: the stored record (with its id), a draft used to create it,
//! and a patch used to update some of its fields.

pub mod appliance;
pub mod dates;
pub mod finite;
pub mod maintenance;
pub mod property;
pub mod vendor;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use appliance::{Appliance, AppliancePatch, Condition, NewAppliance, APPLIANCE_TYPES};
pub use maintenance::{
    MaintenanceTask, MaintenanceTaskPatch, NewMaintenanceTask, Priority, TaskStatus,
};
pub use property::{NewProperty, Property, PropertyPatch, PropertySummary, PROPERTY_TYPES};
pub use vendor::{NewVendor, Vendor, VendorPatch};

/// Identifier of a record within its collection
pub type RecordId = u32;

/// Storage slot a collection is persisted under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKey {
    #[serde(rename = "rental_properties")]
    Properties,
    #[serde(rename = "rental_appliances")]
    Appliances,
    #[serde(rename = "rental_vendors")]
    Vendors,
    #[serde(rename = "rental_maintenance")]
    Maintenance,
}

impl CollectionKey {
    /// Every collection, in cascade order
    pub const ALL: [Self; 4] = [
        Self::Properties,
        Self::Appliances,
        Self::Vendors,
        Self::Maintenance,
    ];

    /// The substrate key for this collection
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Properties => "rental_properties",
            Self::Appliances => "rental_appliances",
            Self::Vendors => "rental_vendors",
            Self::Maintenance => "rental_maintenance",
        }
    }
}

impl std::fmt::Display for CollectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record kind persisted as one collection
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Slot the collection lives under
    const COLLECTION: CollectionKey;
    /// Display name of the kind ("Property", "Appliance", ...)
    const KIND: &'static str;

    /// Every field except the id
    type Draft;
    /// Partial update; `None` keeps the stored value
    type Patch;

    /// Identifier within the collection
    fn id(&self) -> RecordId;

    /// Build the full record once an id has been assigned
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Merge a patch into this record
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// A record kind that belongs to a property
pub trait PropertyScoped: Record {
    /// The owning property's id
    fn property_id(&self) -> RecordId;
}

/// Error parsing one of the enumerated field values from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {field} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Overwrite each listed field of `$target` whose patch value is `Some`.
macro_rules! merge_fields {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )+
    };
}

pub(crate) use merge_fields;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_keys_match_stored_slots() {
        let keys: Vec<&str> = CollectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "rental_properties",
                "rental_appliances",
                "rental_vendors",
                "rental_maintenance"
            ]
        );
    }

    #[test]
    fn collection_key_serializes_as_slot_name() {
        let json = serde_json::to_string(&CollectionKey::Maintenance).unwrap();
        assert_eq!(json, "\"rental_maintenance\"");
    }
}
