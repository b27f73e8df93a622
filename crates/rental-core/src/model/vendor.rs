//! Service vendors

use serde::{Deserialize, Serialize};

use super::{merge_fields, CollectionKey, Record, RecordId};

/// A contractor or supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: RecordId,
    pub name: String,
    /// Trade, e.g. "Plumbing"
    pub category: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Fields for a new vendor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVendor {
    pub name: String,
    pub category: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub notes: String,
}

impl NewVendor {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }
}

/// Partial update of a vendor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Record for Vendor {
    const COLLECTION: CollectionKey = CollectionKey::Vendors;
    const KIND: &'static str = "Vendor";

    type Draft = NewVendor;
    type Patch = VendorPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewVendor) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: VendorPatch) {
        merge_fields!(self, patch; name, category, phone, email, address, notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let vendor = Vendor::from_draft(
            3,
            NewVendor {
                phone: "555-0100".to_string(),
                email: "ops@acmeplumbing.test".to_string(),
                ..NewVendor::new("Acme Plumbing", "Plumbing")
            },
        );
        let json = serde_json::to_string(&vendor).unwrap();
        let restored: Vendor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, vendor);
    }

    #[test]
    fn missing_notes_defaults_to_empty() {
        let raw = r#"{"id":1,"name":"Sparky","category":"Electrical",
            "phone":"","email":"","address":""}"#;
        let vendor: Vendor = serde_json::from_str(raw).unwrap();
        assert!(vendor.notes.is_empty());
    }
}
