//! Maintenance task CLI commands
//!
//! Handles: rental task list/add/edit/delete

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rental_core::model::{
    MaintenanceTask, MaintenanceTaskPatch, NewMaintenanceTask, Priority, RecordId, TaskStatus,
};
use rental_core::storage::{KeyValueStore, RecordStore};

use super::{finite_f64, not_found, print_json, require_property, show_date};

/// Maintenance task commands
#[derive(Subcommand)]
pub enum TaskCommands {
    /// List maintenance tasks
    List {
        /// Only tasks of this property
        #[arg(long, value_name = "ID")]
        property: Option<RecordId>,
        /// Only tasks with this status (pending, in-progress, completed)
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a task to a property
    Add(TaskAddArgs),
    /// Change fields of a task
    Edit {
        /// Task ID
        id: RecordId,
        #[command(flatten)]
        fields: TaskEditArgs,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: RecordId,
    },
}

/// Arguments for `rental task add`
#[derive(Args)]
pub struct TaskAddArgs {
    /// Short title
    pub title: String,

    /// Owning property
    #[arg(long, value_name = "ID")]
    pub property: RecordId,

    #[arg(long, default_value = "")]
    pub description: String,

    /// low, medium, or high
    #[arg(long, default_value_t = Priority::Medium)]
    pub priority: Priority,

    /// pending, in-progress, or completed
    #[arg(long, default_value_t = TaskStatus::Pending)]
    pub status: TaskStatus,

    /// Due date (YYYY-MM-DD)
    #[arg(long = "due", value_name = "DATE")]
    pub due_date: Option<NaiveDate>,

    /// Vendor doing the work
    #[arg(long = "vendor", value_name = "NAME")]
    pub assigned_vendor: Option<String>,

    /// Cost of the work
    #[arg(long, value_parser = finite_f64)]
    pub cost: Option<f64>,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rental task edit`; omitted fields are kept
#[derive(Args)]
pub struct TaskEditArgs {
    /// Move to another property
    #[arg(long, value_name = "ID")]
    pub property: Option<RecordId>,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub priority: Option<Priority>,

    #[arg(long)]
    pub status: Option<TaskStatus>,

    /// Due date; pass without a value to clear
    #[arg(long = "due", value_name = "DATE")]
    pub due_date: Option<Option<NaiveDate>>,

    /// Assigned vendor; pass without a value to clear
    #[arg(long = "vendor", value_name = "NAME")]
    pub assigned_vendor: Option<Option<String>>,

    /// Cost; pass without a value to clear
    #[arg(long, value_parser = finite_f64)]
    pub cost: Option<Option<f64>>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl From<TaskEditArgs> for MaintenanceTaskPatch {
    fn from(args: TaskEditArgs) -> Self {
        Self {
            property_id: args.property,
            title: args.title,
            description: args.description,
            priority: args.priority,
            status: args.status,
            due_date: args.due_date,
            assigned_vendor: args.assigned_vendor,
            cost: args.cost,
            notes: args.notes,
        }
    }
}

/// Execute task command
pub fn execute<S: KeyValueStore>(store: &RecordStore<S>, cmd: TaskCommands) -> Result<()> {
    match cmd {
        TaskCommands::List {
            property,
            status,
            json,
        } => execute_list(store, property, status, json),
        TaskCommands::Add(args) => execute_add(store, args),
        TaskCommands::Edit { id, fields } => execute_edit(store, id, fields),
        TaskCommands::Delete { id } => {
            if !store.delete::<MaintenanceTask>(id) {
                return Err(not_found::<MaintenanceTask>(id));
            }
            println!("Deleted task: {id}");
            Ok(())
        }
    }
}

fn execute_list<S: KeyValueStore>(
    store: &RecordStore<S>,
    property: Option<RecordId>,
    status: Option<TaskStatus>,
    json: bool,
) -> Result<()> {
    let tasks = store.list_where(|t: &MaintenanceTask| {
        property.map_or(true, |id| t.property_id == id) && status.map_or(true, |s| t.status == s)
    });

    if json {
        return print_json(&tasks);
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("Tasks:");
    print_tasks(&tasks);
    Ok(())
}

/// One line per task
pub fn print_tasks(tasks: &[MaintenanceTask]) {
    for t in tasks {
        let vendor = t
            .assigned_vendor
            .as_deref()
            .map(|v| format!(", vendor: {v}"))
            .unwrap_or_default();
        println!(
            "  {} - {} [{}, {}] - property {}, due {}{}",
            t.id,
            t.title,
            t.priority,
            t.status,
            t.property_id,
            show_date(t.due_date),
            vendor
        );
    }
}

fn execute_add<S: KeyValueStore>(store: &RecordStore<S>, args: TaskAddArgs) -> Result<()> {
    require_property(store, args.property)?;

    let task: MaintenanceTask = store.create(NewMaintenanceTask {
        property_id: args.property,
        title: args.title,
        description: args.description,
        priority: args.priority,
        status: args.status,
        due_date: args.due_date,
        assigned_vendor: args.assigned_vendor,
        cost: args.cost,
        notes: args.notes,
    });

    if args.json {
        return print_json(&task);
    }
    println!(
        "Added task: {} (ID: {}) to property {}",
        task.title, task.id, task.property_id
    );
    Ok(())
}

fn execute_edit<S: KeyValueStore>(
    store: &RecordStore<S>,
    id: RecordId,
    fields: TaskEditArgs,
) -> Result<()> {
    if let Some(property) = fields.property {
        require_property(store, property)?;
    }

    if !store.update::<MaintenanceTask>(id, fields.into()) {
        return Err(not_found::<MaintenanceTask>(id));
    }
    println!("Updated task: {id}");
    Ok(())
}
