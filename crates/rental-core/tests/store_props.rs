//! Property tests for id assignment and cascading delete

use proptest::prelude::*;
use rental_core::model::{
    Appliance, MaintenanceTask, NewAppliance, NewMaintenanceTask, NewProperty, NewVendor,
    Property, Vendor,
};
use rental_core::storage::{MemoryStore, RecordStore};

proptest! {
    #[test]
    fn sequential_creates_yield_one_to_n(count in 1usize..40) {
        let store = RecordStore::new(MemoryStore::new());

        let ids: Vec<u32> = (0..count)
            .map(|i| store.create::<Vendor>(NewVendor::new(format!("v{i}"), "General")).id)
            .collect();

        let expected: Vec<u32> = (1..=u32::try_from(count).unwrap()).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn new_id_exceeds_every_surviving_id(
        count in 1usize..20,
        deletions in prop::collection::vec(1u32..20, 0..10),
    ) {
        let store = RecordStore::new(MemoryStore::new());
        for i in 0..count {
            store.create::<Vendor>(NewVendor::new(format!("v{i}"), "General"));
        }
        for id in deletions {
            store.delete::<Vendor>(id);
        }

        let max_before = store.list::<Vendor>().iter().map(|v| v.id).max().unwrap_or(0);
        let created: Vendor = store.create(NewVendor::new("new", "General"));
        prop_assert_eq!(created.id, max_before + 1);
    }

    #[test]
    fn cascade_leaves_no_dependents(
        owners in prop::collection::vec(1u32..=4, 0..12),
        target in 1u32..=4,
    ) {
        let store = RecordStore::new(MemoryStore::new());
        for i in 0..4 {
            store.create::<Property>(NewProperty::new(format!("p{i}"), "addr"));
        }
        for &owner in &owners {
            store.create::<Appliance>(NewAppliance::new(owner, "Washer"));
            store.create::<MaintenanceTask>(NewMaintenanceTask::new(owner, "Inspect"));
        }

        let expected = owners.iter().filter(|&&o| o == target).count();
        let report = store.delete_property(target);

        prop_assert!(report.property_removed);
        prop_assert_eq!(report.appliances_removed, expected);
        prop_assert_eq!(report.tasks_removed, expected);
        prop_assert!(store.list_for_property::<Appliance>(target).is_empty());
        prop_assert!(store.list_for_property::<MaintenanceTask>(target).is_empty());
        prop_assert_eq!(store.list::<Appliance>().len(), owners.len() - expected);
        prop_assert_eq!(store.statistics().property_count, 3);
    }
}
