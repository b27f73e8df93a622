//! Appliances installed at a property

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{merge_fields, CollectionKey, ParseEnumError, PropertyScoped, Record, RecordId};

/// Appliance types offered when adding an appliance. Any text is accepted.
pub const APPLIANCE_TYPES: &[&str] = &[
    "Refrigerator",
    "Dishwasher",
    "Oven/Range",
    "Microwave",
    "Washer",
    "Dryer",
    "HVAC System",
    "Water Heater",
    "Garbage Disposal",
    "Air Conditioner",
    "Ceiling Fan",
    "Smoke Detector",
    "Other",
];

/// Physical condition of an appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
    #[serde(rename = "Needs Replacement")]
    NeedsReplacement,
}

impl Condition {
    /// Stored label
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::NeedsReplacement => "Needs Replacement",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = ParseEnumError;

    /// Accepts the stored label case-insensitively, and `needs-replacement`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "excellent" => Ok(Self::Excellent),
            "good" => Ok(Self::Good),
            "fair" => Ok(Self::Fair),
            "poor" => Ok(Self::Poor),
            "needs replacement" | "needs-replacement" => Ok(Self::NeedsReplacement),
            _ => Err(ParseEnumError {
                field: "condition",
                value: s.to_string(),
                expected: "excellent, good, fair, poor, needs-replacement",
            }),
        }
    }
}

/// An appliance recorded against a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    pub id: RecordId,
    /// Owning property
    pub property_id: RecordId,
    /// Appliance type (see [`APPLIANCE_TYPES`])
    #[serde(rename = "type")]
    pub appliance_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    /// Where in the property it is installed
    pub location: String,
    #[serde(default, with = "super::dates")]
    pub purchase_date: Option<NaiveDate>,
    /// Warranty expiry
    #[serde(default, with = "super::dates")]
    pub warranty: Option<NaiveDate>,
    pub condition: Condition,
    #[serde(default)]
    pub notes: String,
}

/// Fields for a new appliance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewAppliance {
    pub property_id: RecordId,
    pub appliance_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    pub purchase_date: Option<NaiveDate>,
    pub warranty: Option<NaiveDate>,
    pub condition: Condition,
    pub notes: String,
}

impl NewAppliance {
    /// Create a draft for a property with the given type
    #[must_use]
    pub fn new(property_id: RecordId, appliance_type: impl Into<String>) -> Self {
        Self {
            property_id,
            appliance_type: appliance_type.into(),
            ..Self::default()
        }
    }
}

/// Partial update of an appliance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliancePatch {
    pub property_id: Option<RecordId>,
    pub appliance_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub warranty: Option<Option<NaiveDate>>,
    pub condition: Option<Condition>,
    pub notes: Option<String>,
}

impl Appliance {
    /// Whether the warranty runs out within `[today, today + days]`
    #[must_use]
    pub fn warranty_expires_within(&self, today: NaiveDate, days: u32) -> bool {
        let Some(expiry) = self.warranty else {
            return false;
        };
        let horizon = today
            .checked_add_signed(chrono::Duration::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        expiry >= today && expiry <= horizon
    }
}

impl Record for Appliance {
    const COLLECTION: CollectionKey = CollectionKey::Appliances;
    const KIND: &'static str = "Appliance";

    type Draft = NewAppliance;
    type Patch = AppliancePatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewAppliance) -> Self {
        Self {
            id,
            property_id: draft.property_id,
            appliance_type: draft.appliance_type,
            brand: draft.brand,
            model: draft.model,
            serial_number: draft.serial_number,
            location: draft.location,
            purchase_date: draft.purchase_date,
            warranty: draft.warranty,
            condition: draft.condition,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: AppliancePatch) {
        merge_fields!(self, patch;
            property_id, appliance_type, brand, model, serial_number,
            location, purchase_date, warranty, condition, notes,
        );
    }
}

impl PropertyScoped for Appliance {
    fn property_id(&self) -> RecordId {
        self.property_id
    }
}
