//! Read-only summaries: stats, overdue tasks, expiring warranties

use anyhow::Result;
use chrono::NaiveDate;
use rental_core::storage::{KeyValueStore, RecordStore};

use super::task::print_tasks;
use super::{print_json, show_date, show_text};

/// `rental stats`
pub fn stats<S: KeyValueStore>(store: &RecordStore<S>, json: bool) -> Result<()> {
    let stats = store.statistics();

    if json {
        return print_json(&stats);
    }

    println!("Rental Records");
    println!("==============\n");
    println!("Properties: {}", stats.property_count);
    println!("Appliances: {}", stats.appliance_count);
    println!("Vendors: {}", stats.vendor_count);
    println!("Pending tasks: {}", stats.pending_task_count);
    Ok(())
}

/// `rental overdue`
pub fn overdue<S: KeyValueStore>(
    store: &RecordStore<S>,
    today: NaiveDate,
    json: bool,
) -> Result<()> {
    let tasks = store.overdue_tasks(today);

    if json {
        return print_json(&tasks);
    }

    if tasks.is_empty() {
        println!("No overdue tasks.");
        return Ok(());
    }

    println!("Overdue tasks as of {today}:");
    print_tasks(&tasks);
    Ok(())
}

/// `rental warranties`
pub fn warranties<S: KeyValueStore>(
    store: &RecordStore<S>,
    today: NaiveDate,
    within: u32,
    json: bool,
) -> Result<()> {
    let appliances = store.expiring_warranties(today, within);

    if json {
        return print_json(&appliances);
    }

    if appliances.is_empty() {
        println!("No warranties expire in the next {within} days.");
        return Ok(());
    }

    println!("Warranties expiring within {within} days:");
    for a in &appliances {
        println!(
            "  {} - {} {} (property {}) - expires {}",
            a.id,
            show_text(&a.brand),
            a.appliance_type,
            a.property_id,
            show_date(a.warranty)
        );
    }
    Ok(())
}
