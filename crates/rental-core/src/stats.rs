//! Aggregate statistics over the collections

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Appliance, MaintenanceTask, Property, TaskStatus, Vendor};

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub property_count: usize,
    pub appliance_count: usize,
    pub vendor_count: usize,
    /// Tasks with status `pending` (not `in-progress`)
    pub pending_task_count: usize,
}

impl Statistics {
    /// Count the given collections
    #[must_use]
    pub fn from_collections(
        properties: &[Property],
        appliances: &[Appliance],
        vendors: &[Vendor],
        tasks: &[MaintenanceTask],
    ) -> Self {
        Self {
            property_count: properties.len(),
            appliance_count: appliances.len(),
            vendor_count: vendors.len(),
            pending_task_count: tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Pending)
                .count(),
        }
    }
}

/// Open tasks due before `today`, earliest due date first
#[must_use]
pub fn overdue_tasks(tasks: Vec<MaintenanceTask>, today: NaiveDate) -> Vec<MaintenanceTask> {
    let mut overdue: Vec<_> = tasks.into_iter().filter(|t| t.is_overdue(today)).collect();
    overdue.sort_by_key(|t| (t.due_date, t.id));
    overdue
}

/// Appliances whose warranty ends in `[today, today + days]`, soonest first
#[must_use]
pub fn expiring_warranties(
    appliances: Vec<Appliance>,
    today: NaiveDate,
    days: u32,
) -> Vec<Appliance> {
    let mut expiring: Vec<_> = appliances
        .into_iter()
        .filter(|a| a.warranty_expires_within(today, days))
        .collect();
    expiring.sort_by_key(|a| (a.warranty, a.id));
    expiring
}
