//! Property CLI commands
//!
//! Handles: rental property list/show/add/edit/delete

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use rental_core::model::{
    Appliance, MaintenanceTask, NewProperty, Property, PropertyPatch, RecordId, TaskStatus,
    PROPERTY_TYPES,
};
use rental_core::storage::{KeyValueStore, RecordStore};

use super::{confirm, finite_f32, finite_f64, print_json, require, show_date, show_text};

/// Property commands
#[derive(Subcommand)]
pub enum PropertyCommands {
    /// List all properties with their appliance counts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one property
    Show {
        /// Property ID
        id: RecordId,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a property
    Add(PropertyAddArgs),
    /// Change fields of a property
    Edit {
        /// Property ID
        id: RecordId,
        #[command(flatten)]
        fields: PropertyEditArgs,
    },
    /// Delete a property with its appliances and tasks
    Delete {
        /// Property ID
        id: RecordId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for `rental property add`
#[derive(Args)]
pub struct PropertyAddArgs {
    /// Display name
    pub name: String,

    /// Street address
    #[arg(long)]
    pub address: String,

    /// Property type
    #[arg(long = "type", value_name = "TYPE", default_value = PROPERTY_TYPES[0])]
    pub property_type: String,

    #[arg(long, default_value_t = 0)]
    pub bedrooms: u32,

    #[arg(long, default_value_t = 0.0, value_parser = finite_f32)]
    pub bathrooms: f32,

    /// Floor area in square feet
    #[arg(long, default_value_t = 0)]
    pub sqft: u32,

    /// Monthly rent
    #[arg(long, default_value_t = 0.0, value_parser = finite_f64)]
    pub rent: f64,

    /// Current tenant
    #[arg(long, default_value = "")]
    pub tenant: String,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub purchase_date: Option<NaiveDate>,

    #[arg(long, default_value_t = 0.0, value_parser = finite_f64)]
    pub purchase_price: f64,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PropertyAddArgs {
    fn into_draft(self) -> NewProperty {
        NewProperty {
            name: self.name,
            address: self.address,
            property_type: self.property_type,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            sqft: self.sqft,
            rent: self.rent,
            tenant: self.tenant,
            purchase_date: self.purchase_date,
            purchase_price: self.purchase_price,
            notes: self.notes,
        }
    }
}

/// Arguments for `rental property edit`; omitted fields are kept
#[derive(Args)]
pub struct PropertyEditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<String>,

    #[arg(long)]
    pub bedrooms: Option<u32>,

    #[arg(long, value_parser = finite_f32)]
    pub bathrooms: Option<f32>,

    #[arg(long)]
    pub sqft: Option<u32>,

    #[arg(long, value_parser = finite_f64)]
    pub rent: Option<f64>,

    #[arg(long)]
    pub tenant: Option<String>,

    /// Purchase date; pass without a value to clear
    #[arg(long, value_name = "DATE")]
    pub purchase_date: Option<Option<NaiveDate>>,

    #[arg(long, value_parser = finite_f64)]
    pub purchase_price: Option<f64>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl From<PropertyEditArgs> for PropertyPatch {
    fn from(args: PropertyEditArgs) -> Self {
        Self {
            name: args.name,
            address: args.address,
            property_type: args.property_type,
            bedrooms: args.bedrooms,
            bathrooms: args.bathrooms,
            sqft: args.sqft,
            rent: args.rent,
            tenant: args.tenant,
            purchase_date: args.purchase_date,
            purchase_price: args.purchase_price,
            notes: args.notes,
        }
    }
}

/// Execute property command
pub fn execute<S: KeyValueStore>(store: &RecordStore<S>, cmd: PropertyCommands) -> Result<()> {
    match cmd {
        PropertyCommands::List { json } => execute_list(store, json),
        PropertyCommands::Show { id, json } => execute_show(store, id, json),
        PropertyCommands::Add(args) => execute_add(store, args),
        PropertyCommands::Edit { id, fields } => execute_edit(store, id, fields),
        PropertyCommands::Delete { id, force } => execute_delete(store, id, force),
    }
}

fn execute_list<S: KeyValueStore>(store: &RecordStore<S>, json: bool) -> Result<()> {
    let summaries = store.list_properties();

    if json {
        return print_json(&summaries);
    }

    if summaries.is_empty() {
        println!("No properties found.");
        return Ok(());
    }

    println!("Properties:");
    for s in &summaries {
        let p = &s.property;
        println!(
            "  {} - {} ({}) - {}, tenant: {}, {} appliances",
            p.id,
            p.name,
            p.address,
            p.property_type,
            show_text(&p.tenant),
            s.appliance_count
        );
    }
    Ok(())
}

fn execute_show<S: KeyValueStore>(store: &RecordStore<S>, id: RecordId, json: bool) -> Result<()> {
    let property = require::<Property, S>(store, id)?;

    if json {
        return print_json(&property);
    }

    let appliances = store.list_for_property::<Appliance>(id).len();
    let open_tasks = store
        .list_for_property::<MaintenanceTask>(id)
        .iter()
        .filter(|t| t.status != TaskStatus::Completed)
        .count();

    println!("Property: {}", property.name);
    println!("ID: {}", property.id);
    println!("Address: {}", property.address);
    println!("Type: {}", property.property_type);
    println!(
        "Layout: {} bed / {} bath, {} sqft",
        property.bedrooms, property.bathrooms, property.sqft
    );
    println!("Rent: {:.2}", property.rent);
    println!("Tenant: {}", show_text(&property.tenant));
    println!("Purchased: {}", show_date(property.purchase_date));
    println!("Purchase price: {:.2}", property.purchase_price);
    if !property.notes.is_empty() {
        println!("Notes: {}", property.notes);
    }
    println!("\nAppliances: {appliances}");
    println!("Open tasks: {open_tasks}");
    Ok(())
}

fn execute_add<S: KeyValueStore>(store: &RecordStore<S>, args: PropertyAddArgs) -> Result<()> {
    let json = args.json;
    let property: Property = store.create(args.into_draft());

    if json {
        return print_json(&property);
    }
    println!("Added property: {} (ID: {})", property.name, property.id);
    Ok(())
}

fn execute_edit<S: KeyValueStore>(
    store: &RecordStore<S>,
    id: RecordId,
    fields: PropertyEditArgs,
) -> Result<()> {
    if !store.update::<Property>(id, fields.into()) {
        return Err(super::not_found::<Property>(id));
    }
    println!("Updated property: {id}");
    Ok(())
}

fn execute_delete<S: KeyValueStore>(
    store: &RecordStore<S>,
    id: RecordId,
    force: bool,
) -> Result<()> {
    let property = require::<Property, S>(store, id)?;

    if !force {
        let prompt = format!(
            "Delete property '{}' (ID: {}) with its appliances and tasks?",
            property.name, property.id
        );
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let report = store.delete_property(id);
    println!(
        "Deleted property: {} ({} appliances, {} tasks removed)",
        property.name, report.appliances_removed, report.tasks_removed
    );
    if !report.persisted {
        anyhow::bail!("Delete of property {id} was only partly saved");
    }
    Ok(())
}
