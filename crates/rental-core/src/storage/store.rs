//! Record store: typed collections over a key-value substrate
//!
//! Each collection is read in full, changed in memory, and written back in
//! full under its own key. Nothing here returns an error. A read that fails
//! yields an empty collection, and a write that fails is dropped. Both are
//! logged and recorded in the issue journal (see [`RecordStore::issues`]).

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::codec::{self, CodecError};
use super::issues::{IssueKind, StoreIssue};
use super::substrate::KeyValueStore;
use crate::model::{
    Appliance, CollectionKey, MaintenanceTask, Property, PropertyScoped, PropertySummary, Record,
    RecordId, Vendor,
};
use crate::stats::{self, Statistics};

/// What deleting a property removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeReport {
    pub property_removed: bool,
    pub appliances_removed: usize,
    pub tasks_removed: usize,
    /// Every changed collection reached the substrate
    pub persisted: bool,
}

#[derive(Debug, Clone, Copy)]
struct Removal {
    removed: usize,
    persisted: bool,
}

/// CRUD access to the four rental collections
pub struct RecordStore<S> {
    substrate: S,
    issues: RefCell<Vec<StoreIssue>>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Create a store over `substrate`
    pub fn new(substrate: S) -> Self {
        Self {
            substrate,
            issues: RefCell::new(Vec::new()),
        }
    }

    /// The underlying substrate
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    /// Every record of kind `R`, in stored order
    pub fn list<R: Record>(&self) -> Vec<R> {
        self.load()
    }

    /// Records of kind `R` that satisfy `predicate`
    pub fn list_where<R: Record>(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.load::<R>()
            .into_iter()
            .filter(|record| predicate(record))
            .collect()
    }

    /// Records of kind `R` that belong to `property_id`
    pub fn list_for_property<R: PropertyScoped>(&self, property_id: RecordId) -> Vec<R> {
        self.list_where(|record: &R| record.property_id() == property_id)
    }

    /// Every property with its appliance count
    pub fn list_properties(&self) -> Vec<PropertySummary> {
        let properties = self.load::<Property>();

        let mut counts: HashMap<RecordId, usize> = HashMap::new();
        for appliance in self.load::<Appliance>() {
            *counts.entry(appliance.property_id).or_default() += 1;
        }

        properties
            .into_iter()
            .map(|property| {
                let appliance_count = counts.get(&property.id).copied().unwrap_or(0);
                PropertySummary {
                    property,
                    appliance_count,
                }
            })
            .collect()
    }

    /// The record of kind `R` with `id`
    pub fn get<R: Record>(&self, id: RecordId) -> Option<R> {
        self.load::<R>().into_iter().find(|record| record.id() == id)
    }

    /// Append a new record with the next free id and return it
    ///
    /// The record is returned even if it could not be persisted; the
    /// failure shows up in [`Self::issues`]. If every id is taken the
    /// record comes back with id 0 and nothing is written.
    pub fn create<R: Record>(&self, draft: R::Draft) -> R {
        let mut records = self.load::<R>();
        let Some(id) = next_id(&records) else {
            warn!(
                target: "rental",
                event = "id_space_exhausted",
                key = %R::COLLECTION,
                records = records.len()
            );
            self.record_issue(
                R::COLLECTION,
                IssueKind::IdsExhausted,
                format!("every id up to {} is in use", RecordId::MAX),
            );
            return R::from_draft(0, draft);
        };
        let record = R::from_draft(id, draft);
        records.push(record.clone());

        if self.persist(&records) {
            debug!(
                target: "rental",
                event = "record_created",
                key = %R::COLLECTION,
                id
            );
        }

        record
    }

    /// Merge `patch` into the record with `id`
    ///
    /// Returns whether a record matched. An unknown id changes nothing.
    pub fn update<R: Record>(&self, id: RecordId, patch: R::Patch) -> bool {
        let mut records = self.load::<R>();
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            debug!(
                target: "rental",
                event = "record_missing",
                key = %R::COLLECTION,
                id
            );
            return false;
        };
        record.apply_patch(patch);

        if self.persist(&records) {
            debug!(
                target: "rental",
                event = "record_updated",
                key = %R::COLLECTION,
                id
            );
        }

        true
    }

    /// Remove the record with `id`
    ///
    /// Deleting a property also removes its appliances and tasks (see
    /// [`Self::delete_property`]). Returns whether a record matched.
    pub fn delete<R: Record>(&self, id: RecordId) -> bool {
        if R::COLLECTION == CollectionKey::Properties {
            return self.delete_property(id).property_removed;
        }

        let removal = self.retain::<R>(|record| record.id() != id);
        if removal.removed > 0 {
            debug!(
                target: "rental",
                event = "record_deleted",
                key = %R::COLLECTION,
                id
            );
        }

        removal.removed > 0
    }

    /// Remove a property and every appliance and task that references it
    ///
    /// Runs three independent read-modify-write cycles: properties, then
    /// appliances, then tasks. A failed step does not stop the later ones
    /// and nothing is rolled back. Dependents are purged even when the
    /// property itself is already gone, which also clears orphans.
    pub fn delete_property(&self, id: RecordId) -> CascadeReport {
        let property = self.retain::<Property>(|p| p.id != id);
        let appliances = self.retain::<Appliance>(|a| a.property_id != id);
        let tasks = self.retain::<MaintenanceTask>(|t| t.property_id != id);

        let report = CascadeReport {
            property_removed: property.removed > 0,
            appliances_removed: appliances.removed,
            tasks_removed: tasks.removed,
            persisted: property.persisted && appliances.persisted && tasks.persisted,
        };

        if report.property_removed {
            debug!(
                target: "rental",
                event = "record_deleted",
                key = %CollectionKey::Properties,
                id
            );
        }
        if report.appliances_removed + report.tasks_removed > 0 {
            debug!(
                target: "rental",
                event = "cascade_purged",
                property_id = id,
                appliances = report.appliances_removed,
                tasks = report.tasks_removed
            );
        }
        if !report.persisted {
            warn!(
                target: "rental",
                event = "cascade_incomplete",
                property_id = id,
                property_persisted = property.persisted,
                appliances_persisted = appliances.persisted,
                tasks_persisted = tasks.persisted
            );
        }

        report
    }

    /// Dashboard counters
    pub fn statistics(&self) -> Statistics {
        Statistics::from_collections(
            &self.load::<Property>(),
            &self.load::<Appliance>(),
            &self.load::<Vendor>(),
            &self.load::<MaintenanceTask>(),
        )
    }

    /// Open tasks whose due date is before `today`, earliest first
    pub fn overdue_tasks(&self, today: NaiveDate) -> Vec<MaintenanceTask> {
        stats::overdue_tasks(self.load(), today)
    }

    /// Appliances whose warranty ends within `days` of `today`, soonest first
    pub fn expiring_warranties(&self, today: NaiveDate, days: u32) -> Vec<Appliance> {
        stats::expiring_warranties(self.load(), today, days)
    }

    /// Failures recovered from so far
    pub fn issues(&self) -> Vec<StoreIssue> {
        self.issues.borrow().clone()
    }

    /// Drain the issue journal
    pub fn take_issues(&self) -> Vec<StoreIssue> {
        std::mem::take(&mut *self.issues.borrow_mut())
    }

    fn load<R: Record>(&self) -> Vec<R> {
        let key = R::COLLECTION;

        let raw = match self.substrate.read(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(
                    target: "rental",
                    event = "collection_read_failed",
                    key = %key,
                    error = %e
                );
                self.record_issue(key, IssueKind::ReadFailed, e.to_string());
                return Vec::new();
            }
        };

        match codec::decode(&raw) {
            Ok(records) => records,
            Err(e) => {
                let kind = match e {
                    CodecError::UnsupportedVersion { .. } => IssueKind::UnsupportedVersion,
                    CodecError::Malformed(_)
                    | CodecError::Unencodable(_)
                    | CodecError::Layout(_) => IssueKind::Corrupt,
                };
                warn!(
                    target: "rental",
                    event = "collection_corrupt",
                    key = %key,
                    error = %e
                );
                self.record_issue(key, kind, e.to_string());
                Vec::new()
            }
        }
    }

    fn persist<R: Record>(&self, records: &[R]) -> bool {
        let key = R::COLLECTION;

        let encoded = match codec::encode(records) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(
                    target: "rental",
                    event = "collection_encode_failed",
                    key = %key,
                    error = %e
                );
                self.record_issue(key, IssueKind::EncodeFailed, e.to_string());
                return false;
            }
        };

        if let Err(e) = self.substrate.write(key.as_str(), &encoded) {
            warn!(
                target: "rental",
                event = "collection_write_failed",
                key = %key,
                records = records.len(),
                error = %e
            );
            self.record_issue(key, IssueKind::WriteFailed, e.to_string());
            return false;
        }

        true
    }

    /// Keep the records matching `keep`; writes only if something was removed
    fn retain<R: Record>(&self, keep: impl Fn(&R) -> bool) -> Removal {
        let mut records = self.load::<R>();
        let before = records.len();
        records.retain(|record| keep(record));

        let removed = before - records.len();
        if removed == 0 {
            return Removal {
                removed,
                persisted: true,
            };
        }

        Removal {
            removed,
            persisted: self.persist(&records),
        }
    }

    fn record_issue(&self, key: CollectionKey, kind: IssueKind, detail: String) {
        self.issues
            .borrow_mut()
            .push(StoreIssue { key, kind, detail });
    }
}

/// One past the largest id in use, or 1 for an empty collection
///
/// Once the largest id is `RecordId::MAX` the lowest unused id is taken
/// instead. `None` only when no id is free.
fn next_id<R: Record>(records: &[R]) -> Option<RecordId> {
    let max = records.iter().map(Record::id).max().unwrap_or(0);
    max.checked_add(1).or_else(|| lowest_free_id(records))
}

fn lowest_free_id<R: Record>(records: &[R]) -> Option<RecordId> {
    let used: HashSet<RecordId> = records.iter().map(Record::id).collect();
    (1..=RecordId::MAX).find(|id| !used.contains(id))
}
