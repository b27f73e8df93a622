//! Maintenance tasks

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{merge_fields, CollectionKey, ParseEnumError, PropertyScoped, Record, RecordId};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError {
                field: "priority",
                value: s.to_string(),
                expected: "low, medium, high",
            }),
        }
    }
}

/// Task progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseEnumError {
                field: "status",
                value: s.to_string(),
                expected: "pending, in-progress, completed",
            }),
        }
    }
}

/// A maintenance job for a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    pub id: RecordId,
    /// Property the work is for
    pub property_id: RecordId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default, with = "super::dates")]
    pub due_date: Option<NaiveDate>,
    /// Vendor name, if someone has been booked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vendor: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::finite::serialize_option"
    )]
    pub cost: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

impl MaintenanceTask {
    /// Open and past its due date
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due_date.is_some_and(|due| due < today)
    }
}

/// Fields for a new task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewMaintenanceTask {
    pub property_id: RecordId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub assigned_vendor: Option<String>,
    pub cost: Option<f64>,
    pub notes: String,
}

impl NewMaintenanceTask {
    #[must_use]
    pub fn new(property_id: RecordId, title: impl Into<String>) -> Self {
        Self {
            property_id,
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update of a task
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceTaskPatch {
    pub property_id: Option<RecordId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
    /// `Some(None)` unassigns the vendor
    pub assigned_vendor: Option<Option<String>>,
    pub cost: Option<Option<f64>>,
    pub notes: Option<String>,
}

impl Record for MaintenanceTask {
    const COLLECTION: CollectionKey = CollectionKey::Maintenance;
    const KIND: &'static str = "Task";

    type Draft = NewMaintenanceTask;
    type Patch = MaintenanceTaskPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewMaintenanceTask) -> Self {
        Self {
            id,
            property_id: draft.property_id,
            title: draft.title,
            description: draft.description,
            priority: draft.priority,
            status: draft.status,
            due_date: draft.due_date,
            assigned_vendor: draft.assigned_vendor,
            cost: draft.cost,
            notes: draft.notes,
        }
    }

    fn apply_patch(&mut self, patch: MaintenanceTaskPatch) {
        merge_fields!(self, patch;
            property_id, title, description, priority, status,
            due_date, assigned_vendor, cost, notes,
        );
    }
}

impl PropertyScoped for MaintenanceTask {
    fn property_id(&self) -> RecordId {
        self.property_id
    }
}
