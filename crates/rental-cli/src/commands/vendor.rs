//! Vendor CLI commands
//!
//! Handles: rental vendor list/add/edit/delete

use anyhow::Result;
use clap::{Args, Subcommand};
use rental_core::model::{NewVendor, RecordId, Vendor, VendorPatch};
use rental_core::storage::{KeyValueStore, RecordStore};

use super::{not_found, print_json, show_text};

/// Vendor commands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// List all vendors
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a vendor
    Add(VendorAddArgs),
    /// Change fields of a vendor
    Edit {
        /// Vendor ID
        id: RecordId,
        #[command(flatten)]
        fields: VendorEditArgs,
    },
    /// Delete a vendor
    Delete {
        /// Vendor ID
        id: RecordId,
    },
}

/// Arguments for `rental vendor add`
#[derive(Args)]
pub struct VendorAddArgs {
    /// Business name
    pub name: String,

    /// Trade, e.g. Plumbing
    #[arg(long, default_value = "General")]
    pub category: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rental vendor edit`; omitted fields are kept
#[derive(Args)]
pub struct VendorEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<VendorEditArgs> for VendorPatch {
    fn from(args: VendorEditArgs) -> Self {
        Self {
            name: args.name,
            category: args.category,
            phone: args.phone,
            email: args.email,
            address: args.address,
            notes: args.notes,
        }
    }
}

/// Execute vendor command
pub fn execute<S: KeyValueStore>(store: &RecordStore<S>, cmd: VendorCommands) -> Result<()> {
    match cmd {
        VendorCommands::List { json } => {
            let vendors = store.list::<Vendor>();
            if json {
                return print_json(&vendors);
            }
            if vendors.is_empty() {
                println!("No vendors found.");
                return Ok(());
            }
            println!("Vendors:");
            for v in &vendors {
                println!(
                    "  {} - {} ({}) - {}",
                    v.id,
                    v.name,
                    v.category,
                    show_text(&v.phone)
                );
            }
        }
        VendorCommands::Add(args) => {
            let vendor: Vendor = store.create(NewVendor {
                name: args.name,
                category: args.category,
                phone: args.phone,
                email: args.email,
                address: args.address,
                notes: args.notes,
            });
            if args.json {
                return print_json(&vendor);
            }
            println!("Added vendor: {} (ID: {})", vendor.name, vendor.id);
        }
        VendorCommands::Edit { id, fields } => {
            if !store.update::<Vendor>(id, fields.into()) {
                return Err(not_found::<Vendor>(id));
            }
            println!("Updated vendor: {id}");
        }
        VendorCommands::Delete { id } => {
            if !store.delete::<Vendor>(id) {
                return Err(not_found::<Vendor>(id));
            }
            println!("Deleted vendor: {id}");
        }
    }

    Ok(())
}
