//! Rental properties

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{merge_fields, CollectionKey, Record, RecordId};

/// Property types offered when adding a property. Any text is accepted.
pub const PROPERTY_TYPES: &[&str] = &[
    "Single Family Home",
    "Duplex",
    "Triplex",
    "Fourplex",
    "Condo",
    "Townhouse",
    "Apartment",
];

/// A rental property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier within the properties collection
    pub id: RecordId,
    /// Display name
    pub name: String,
    /// Street address
    pub address: String,
    /// Property type (see [`PROPERTY_TYPES`])
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    #[serde(serialize_with = "super::finite::serialize")]
    pub bathrooms: f32,
    /// Floor area in square feet
    pub sqft: u32,
    /// Monthly rent
    #[serde(serialize_with = "super::finite::serialize")]
    pub rent: f64,
    /// Current tenant, empty when vacant
    pub tenant: String,
    #[serde(default, with = "super::dates")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(serialize_with = "super::finite::serialize")]
    pub purchase_price: f64,
    #[serde(default)]
    pub notes: String,
}

/// Fields for a new property
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: f32,
    pub sqft: u32,
    pub rent: f64,
    pub tenant: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_price: f64,
    pub notes: String,
}

impl NewProperty {
    /// Create a draft with a name and address, other fields blank
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Self::default()
        }
    }
}

impl Default for NewProperty {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            property_type: PROPERTY_TYPES[0].to_string(),
            bedrooms: 0,
            bathrooms: 0.0,
            sqft: 0,
            rent: 0.0,
            tenant: String::new(),
            purchase_date: None,
            purchase_price: 0.0,
            notes: String::new(),
        }
    }
}

/// Partial update of a property
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f32>,
    pub sqft: Option<u32>,
    pub rent: Option<f64>,
    pub tenant: Option<String>,
    /// `Some(None)` clears the date
    pub purchase_date: Option<Option<NaiveDate>>,
    pub purchase_price: Option<f64>,
    pub notes: Option<String>,
}

impl Record for Property {
    const COLLECTION: CollectionKey = CollectionKey::Properties;
    const KIND: &'static str = "Property";

    type Draft = NewProperty;
    type Patch = PropertyPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewProperty) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            property_type: draft.property_type,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            sqft: draft.sqft,
            rent: draft.rent,
            tenant: draft.tenant,
            purchase_date: draft.purchase_date,
            purchase_price: draft.purchase_price,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: PropertyPatch) {
        merge_fields!(self, patch;
            name, address, property_type, bedrooms, bathrooms, sqft,
            rent, tenant, purchase_date, purchase_price, notes,
        );
    }
}

/// A property together with the number of appliances recorded for it
///
/// The count is derived when listing and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    #[serde(flatten)]
    pub property: Property,
    pub appliance_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oak_street() -> Property {
        Property::from_draft(
            1,
            NewProperty {
                property_type: "Single Family Home".to_string(),
                bedrooms: 3,
                bathrooms: 2.0,
                sqft: 1200,
                rent: 1500.0,
                tenant: "John Smith".to_string(),
                ..NewProperty::new("Oak Street Rental", "123 Oak Street")
            },
        )
    }

    #[test]
    fn serde_camel_case_keys() {
        let json = serde_json::to_value(oak_street()).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("purchaseDate").is_some());
        assert!(json.get("purchasePrice").is_some());
        assert!(json.get("property_type").is_none());
        assert!(json.get("purchase_price").is_none());
        assert!(json.get("applianceCount").is_none());
    }

    #[test]
    fn reads_record_with_blank_purchase_date() {
        let raw = r#"{
            "id": 4, "name": "Elm", "address": "4 Elm St", "type": "Condo",
            "bedrooms": 1, "bathrooms": 1.5, "sqft": 700, "rent": 950,
            "tenant": "", "purchaseDate": "", "purchasePrice": 0, "notes": ""
        }"#;
        let property: Property = serde_json::from_str(raw).unwrap();
        assert_eq!(property.id, 4);
        assert!(property.purchase_date.is_none());
        assert!((property.bathrooms - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn stored_appliance_count_is_ignored() {
        let raw = r#"{
            "id": 1, "name": "Oak", "address": "1 Oak", "type": "Duplex",
            "bedrooms": 2, "bathrooms": 1, "sqft": 900, "rent": 1200,
            "tenant": "Available", "purchaseDate": "2020-06-01",
            "purchasePrice": 150000, "notes": "", "applianceCount": 8
        }"#;
        let property: Property = serde_json::from_str(raw).unwrap();
        assert_eq!(property.name, "Oak");
        assert_eq!(property.purchase_date, NaiveDate::from_ymd_opt(2020, 6, 1));
    }

    #[test]
    fn patch_keeps_omitted_fields() {
        let mut property = oak_street();
        property.apply_patch(PropertyPatch {
            rent: Some(1650.0),
            tenant: Some("Available".to_string()),
            ..PropertyPatch::default()
        });
        assert!((property.rent - 1650.0).abs() < f64::EPSILON);
        assert_eq!(property.tenant, "Available");
        assert_eq!(property.name, "Oak Street Rental");
        assert_eq!(property.bedrooms, 3);
    }

    #[test]
    fn patch_can_clear_purchase_date() {
        let mut property = oak_street();
        property.purchase_date = NaiveDate::from_ymd_opt(2019, 3, 2);
        property.apply_patch(PropertyPatch {
            purchase_date: Some(None),
            ..PropertyPatch::default()
        });
        assert!(property.purchase_date.is_none());
    }

    #[test]
    fn summary_flattens_property_fields() {
        let summary = PropertySummary {
            property: oak_street(),
            appliance_count: 6,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "Oak Street Rental");
        assert_eq!(json["applianceCount"], 6);
    }

    #[test]
    fn default_draft_uses_first_property_type() {
        assert_eq!(NewProperty::default().property_type, "Single Family Home");
    }
}
