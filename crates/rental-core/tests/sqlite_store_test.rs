//! Record store over the SQLite substrate

use rental_core::model::{
    Appliance, CollectionKey, MaintenanceTask, NewAppliance, NewMaintenanceTask, NewProperty,
    NewVendor, Property, Vendor,
};
use rental_core::storage::{Database, KeyValueStore, RecordStore, SqliteStore};
use tempfile::TempDir;

#[test]
fn test_in_memory_database_store() {
    let db = Database::in_memory().unwrap();
    let store = RecordStore::new(SqliteStore::new(db.connection()));

    let property: Property = store.create(NewProperty::new("Oak St", "123 Oak St"));
    store.create::<Appliance>(NewAppliance::new(property.id, "Dishwasher"));
    store.create::<MaintenanceTask>(NewMaintenanceTask::new(property.id, "Clean filter"));

    let summaries = store.list_properties();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].appliance_count, 1);

    let report = store.delete_property(property.id);
    assert!(report.persisted);
    assert_eq!(report.appliances_removed, 1);
    assert_eq!(report.tasks_removed, 1);
    assert_eq!(store.statistics().property_count, 0);
    assert!(store.issues().is_empty());
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("rental.db");

    {
        let db = Database::open(&db_path).unwrap();
        let store = RecordStore::new(SqliteStore::new(db.connection()));
        store.create::<Vendor>(NewVendor::new("Acme Plumbing", "Plumbing"));
        store.create::<Vendor>(NewVendor::new("Sparky", "Electrical"));
    }

    let db = Database::open(&db_path).unwrap();
    let store = RecordStore::new(SqliteStore::new(db.connection()));

    let vendors = store.list::<Vendor>();
    assert_eq!(vendors.len(), 2);
    assert_eq!(vendors[1].name, "Sparky");

    let next: Vendor = store.create(NewVendor::new("Green Thumb", "Landscaping"));
    assert_eq!(next.id, 3);
}

#[test]
fn test_each_collection_has_its_own_key() {
    let db = Database::in_memory().unwrap();
    let store = RecordStore::new(SqliteStore::new(db.connection()));

    store.create::<Property>(NewProperty::new("Oak St", "123 Oak St"));
    store.create::<Vendor>(NewVendor::new("Acme", "Plumbing"));

    let keys = store.substrate().keys().unwrap();
    assert_eq!(
        keys,
        vec![
            CollectionKey::Properties.as_str().to_string(),
            CollectionKey::Vendors.as_str().to_string(),
        ]
    );
}

#[test]
fn test_corrupt_row_is_recovered() {
    let db = Database::in_memory().unwrap();
    let substrate = SqliteStore::new(db.connection());
    substrate
        .write(CollectionKey::Maintenance.as_str(), "not json at all")
        .unwrap();

    let store = RecordStore::new(substrate);
    assert!(store.list::<MaintenanceTask>().is_empty());
    assert_eq!(store.issues().len(), 1);

    // Creating overwrites the damaged collection
    let task: MaintenanceTask = store.create(NewMaintenanceTask::new(1, "Fix gutter"));
    assert_eq!(task.id, 1);
    assert_eq!(store.list::<MaintenanceTask>(), vec![task]);
}
