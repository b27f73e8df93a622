//! Sample data for trying the CLI out

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rental_core::model::{
    Appliance, Condition, MaintenanceTask, NewAppliance, NewProperty, Property, Vendor,
};
use rental_core::storage::{KeyValueStore, RecordStore};

/// `rental seed`: fill an empty store with three properties and the first
/// property's appliances
pub fn execute<S: KeyValueStore>(store: &RecordStore<S>) -> Result<()> {
    let populated = !store.list::<Property>().is_empty()
        || !store.list::<Appliance>().is_empty()
        || !store.list::<Vendor>().is_empty()
        || !store.list::<MaintenanceTask>().is_empty();
    if populated {
        bail!("Store already has records; seed only fills an empty store");
    }

    let properties: Vec<Property> = sample_properties()
        .into_iter()
        .map(|draft| store.create(draft))
        .collect();

    let mut appliance_count = 0;
    if let Some(first) = properties.first() {
        for draft in sample_appliances(first.id) {
            store.create::<Appliance>(draft);
            appliance_count += 1;
        }
    }

    println!(
        "Seeded {} properties and {appliance_count} appliances.",
        properties.len()
    );
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn sample_properties() -> Vec<NewProperty> {
    vec![
        NewProperty {
            property_type: "Single Family Home".to_string(),
            bedrooms: 3,
            bathrooms: 2.0,
            sqft: 1200,
            rent: 1500.0,
            tenant: "John Smith".to_string(),
            ..NewProperty::new("Oak Street Rental", "123 Oak Street, Springfield, IL 62701")
        },
        NewProperty {
            property_type: "Duplex".to_string(),
            bedrooms: 4,
            bathrooms: 3.0,
            sqft: 1800,
            rent: 2200.0,
            tenant: "Sarah Johnson".to_string(),
            ..NewProperty::new("Maple Avenue Duplex", "456 Maple Ave, Springfield, IL 62702")
        },
        NewProperty {
            property_type: "Condo".to_string(),
            bedrooms: 2,
            bathrooms: 1.0,
            sqft: 900,
            rent: 1200.0,
            tenant: "Available".to_string(),
            ..NewProperty::new(
                "Downtown Condo",
                "789 City Plaza, Unit 12B, Springfield, IL 62703",
            )
        },
    ]
}

fn sample_appliances(property_id: u32) -> Vec<NewAppliance> {
    vec![
        NewAppliance {
            brand: "Whirlpool".to_string(),
            model: "WRF555SDHV".to_string(),
            serial_number: "WP2023001234".to_string(),
            location: "Kitchen".to_string(),
            purchase_date: date(2023, 1, 15),
            warranty: date(2025, 1, 15),
            condition: Condition::Excellent,
            notes: "Stainless steel, French door style".to_string(),
            ..NewAppliance::new(property_id, "Refrigerator")
        },
        NewAppliance {
            brand: "KitchenAid".to_string(),
            model: "KDTM404ESS".to_string(),
            serial_number: "KA2023005678".to_string(),
            location: "Kitchen".to_string(),
            purchase_date: date(2023, 1, 20),
            warranty: date(2024, 1, 20),
            condition: Condition::Good,
            notes: "Built-in, stainless steel".to_string(),
            ..NewAppliance::new(property_id, "Dishwasher")
        },
        NewAppliance {
            brand: "Samsung".to_string(),
            model: "WF45R6100AP".to_string(),
            serial_number: "SM2022009876".to_string(),
            location: "Laundry Room".to_string(),
            purchase_date: date(2022, 8, 10),
            warranty: date(2023, 8, 10),
            condition: Condition::Fair,
            notes: "Front-loading, needs belt replacement soon".to_string(),
            ..NewAppliance::new(property_id, "Washer")
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::storage::MemoryStore;

    #[test]
    fn seeds_empty_store() {
        let store = RecordStore::new(MemoryStore::new());
        execute(&store).unwrap();

        let summaries = store.list_properties();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].property.name, "Oak Street Rental");
        assert_eq!(summaries[0].appliance_count, 3);
        assert_eq!(summaries[2].appliance_count, 0);
    }

    #[test]
    fn refuses_populated_store() {
        let store = RecordStore::new(MemoryStore::new());
        store.create::<Vendor>(rental_core::model::NewVendor::new("Acme", "Plumbing"));

        let err = execute(&store).unwrap_err();
        assert!(err.to_string().contains("already has records"));
        assert!(store.list::<Property>().is_empty());
    }
}
