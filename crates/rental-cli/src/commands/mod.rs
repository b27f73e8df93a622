//! CLI command handlers
//!
//! Each record kind has its own module; `report` covers the read-only
//! summaries and `seed` the sample data.

pub mod appliance;
pub mod property;
pub mod report;
pub mod seed;
pub mod task;
pub mod vendor;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use rental_core::model::{Property, Record, RecordId};
use rental_core::storage::{KeyValueStore, RecordStore};
use serde::Serialize;
use std::io::{self, Write};

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error for an id that matched no record of kind `R`
pub fn not_found<R: Record>(id: RecordId) -> anyhow::Error {
    anyhow!("{} not found: {id}", R::KIND)
}

/// Fetch a record or fail with "<Kind> not found"
pub fn require<R: Record, S: KeyValueStore>(store: &RecordStore<S>, id: RecordId) -> Result<R> {
    store.get::<R>(id).ok_or_else(|| not_found::<R>(id))
}

/// Make sure a property exists before attaching records to it
pub fn require_property<S: KeyValueStore>(store: &RecordStore<S>, id: RecordId) -> Result<()> {
    require::<Property, S>(store, id).map(|_| ())
}

/// Ask a yes/no question on stdin; anything but "y" is no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Parse a number, refusing NaN and infinity
pub fn finite_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

/// [`finite_f64`] for single-precision fields
pub fn finite_f32(s: &str) -> Result<f32, String> {
    let value: f32 = s.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}

/// Date for display, "-" when unset
pub fn show_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Text for display, "-" when blank
pub fn show_text(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind() {
        let err = not_found::<Property>(9);
        assert_eq!(err.to_string(), "Property not found: 9");
    }

    #[test]
    fn finite_parsers_refuse_nan_and_infinity() {
        assert_eq!(finite_f64("1500.5"), Ok(1500.5));
        assert_eq!(finite_f32(" 2 "), Ok(2.0));
        for raw in ["NaN", "inf", "-infinity"] {
            assert!(finite_f64(raw).is_err(), "{raw} should be refused");
            assert!(finite_f32(raw).is_err(), "{raw} should be refused");
        }
        assert!(finite_f64("lots").is_err());
    }

    #[test]
    fn blanks_render_as_dash() {
        assert_eq!(show_date(None), "-");
        assert_eq!(show_date(NaiveDate::from_ymd_opt(2025, 1, 15)), "2025-01-15");
        assert_eq!(show_text(""), "-");
        assert_eq!(show_text("Kitchen"), "Kitchen");
    }
}
