//! Appliance CLI commands
//!
//! Handles: rental appliance list/add/edit/delete

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rental_core::model::{Appliance, AppliancePatch, Condition, NewAppliance, RecordId};
use rental_core::storage::{KeyValueStore, RecordStore};

use super::{not_found, print_json, require_property, show_date, show_text};

/// Appliance commands
#[derive(Subcommand)]
pub enum ApplianceCommands {
    /// List appliances
    List {
        /// Only appliances of this property
        #[arg(long, value_name = "ID")]
        property: Option<RecordId>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add an appliance to a property
    Add(ApplianceAddArgs),
    /// Change fields of an appliance
    Edit {
        /// Appliance ID
        id: RecordId,
        #[command(flatten)]
        fields: ApplianceEditArgs,
    },
    /// Delete an appliance
    Delete {
        /// Appliance ID
        id: RecordId,
    },
}

/// Arguments for `rental appliance add`
#[derive(Args)]
pub struct ApplianceAddArgs {
    /// Appliance type, e.g. Refrigerator
    #[arg(value_name = "TYPE")]
    pub appliance_type: String,

    /// Owning property
    #[arg(long, value_name = "ID")]
    pub property: RecordId,

    #[arg(long, default_value = "")]
    pub brand: String,

    #[arg(long, default_value = "")]
    pub model: String,

    #[arg(long, default_value = "")]
    pub serial_number: String,

    /// Room or area
    #[arg(long, default_value = "")]
    pub location: String,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub purchase_date: Option<NaiveDate>,

    /// Warranty end date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub warranty: Option<NaiveDate>,

    /// Excellent, Good, Fair, Poor, or "Needs Replacement"
    #[arg(long, default_value_t = Condition::Good)]
    pub condition: Condition,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rental appliance edit`; omitted fields are kept
#[derive(Args)]
pub struct ApplianceEditArgs {
    /// Move to another property
    #[arg(long, value_name = "ID")]
    pub property: Option<RecordId>,

    #[arg(long = "type", value_name = "TYPE")]
    pub appliance_type: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub serial_number: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Purchase date; pass without a value to clear
    #[arg(long, value_name = "DATE")]
    pub purchase_date: Option<Option<NaiveDate>>,

    /// Warranty end date; pass without a value to clear
    #[arg(long, value_name = "DATE")]
    pub warranty: Option<Option<NaiveDate>>,

    #[arg(long)]
    pub condition: Option<Condition>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl From<ApplianceEditArgs> for AppliancePatch {
    fn from(args: ApplianceEditArgs) -> Self {
        Self {
            property_id: args.property,
            appliance_type: args.appliance_type,
            brand: args.brand,
            model: args.model,
            serial_number: args.serial_number,
            location: args.location,
            purchase_date: args.purchase_date,
            warranty: args.warranty,
            condition: args.condition,
            notes: args.notes,
        }
    }
}

/// Execute appliance command
pub fn execute<S: KeyValueStore>(store: &RecordStore<S>, cmd: ApplianceCommands) -> Result<()> {
    match cmd {
        ApplianceCommands::List { property, json } => execute_list(store, property, json),
        ApplianceCommands::Add(args) => execute_add(store, args),
        ApplianceCommands::Edit { id, fields } => execute_edit(store, id, fields),
        ApplianceCommands::Delete { id } => execute_delete(store, id),
    }
}

fn execute_list<S: KeyValueStore>(
    store: &RecordStore<S>,
    property: Option<RecordId>,
    json: bool,
) -> Result<()> {
    let appliances = match property {
        Some(id) => store.list_for_property::<Appliance>(id),
        None => store.list::<Appliance>(),
    };

    if json {
        return print_json(&appliances);
    }

    if appliances.is_empty() {
        println!("No appliances found.");
        return Ok(());
    }

    println!("Appliances:");
    for a in &appliances {
        println!(
            "  {} - {} {} ({}) - property {}, {}, warranty until {}",
            a.id,
            show_text(&a.brand),
            a.appliance_type,
            show_text(&a.location),
            a.property_id,
            a.condition,
            show_date(a.warranty)
        );
    }
    Ok(())
}

fn execute_add<S: KeyValueStore>(store: &RecordStore<S>, args: ApplianceAddArgs) -> Result<()> {
    require_property(store, args.property)?;

    let draft = NewAppliance {
        property_id: args.property,
        appliance_type: args.appliance_type,
        brand: args.brand,
        model: args.model,
        serial_number: args.serial_number,
        location: args.location,
        purchase_date: args.purchase_date,
        warranty: args.warranty,
        condition: args.condition,
        notes: args.notes,
    };
    let appliance: Appliance = store.create(draft);

    if args.json {
        return print_json(&appliance);
    }
    println!(
        "Added appliance: {} (ID: {}) to property {}",
        appliance.appliance_type, appliance.id, appliance.property_id
    );
    Ok(())
}

fn execute_edit<S: KeyValueStore>(
    store: &RecordStore<S>,
    id: RecordId,
    fields: ApplianceEditArgs,
) -> Result<()> {
    if let Some(property) = fields.property {
        require_property(store, property)?;
    }

    if !store.update::<Appliance>(id, fields.into()) {
        return Err(not_found::<Appliance>(id));
    }
    println!("Updated appliance: {id}");
    Ok(())
}

fn execute_delete<S: KeyValueStore>(store: &RecordStore<S>, id: RecordId) -> Result<()> {
    if !store.delete::<Appliance>(id) {
        return Err(not_found::<Appliance>(id));
    }
    println!("Deleted appliance: {id}");
    Ok(())
}
