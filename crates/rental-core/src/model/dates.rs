//! Serde adapter for optional calendar dates
//!
//! Dates are stored as `YYYY-MM-DD`. A blank form field was stored as an
//! empty string, so `""` and `null` both read back as `None`, and `None` is
//! written as `""`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.collect_str(&d.format(FORMAT)),
        None => serializer.serialize_str(""),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, FORMAT)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "super")]
        date: Option<NaiveDate>,
    }

    #[test]
    fn empty_string_reads_as_none() {
        let holder: Holder = serde_json::from_str(r#"{"date": ""}"#).unwrap();
        assert!(holder.date.is_none());
    }

    #[test]
    fn missing_and_null_read_as_none() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        let null: Holder = serde_json::from_str(r#"{"date": null}"#).unwrap();
        assert!(missing.date.is_none());
        assert!(null.date.is_none());
    }

    #[test]
    fn none_is_written_as_empty_string() {
        let json = serde_json::to_string(&Holder { date: None }).unwrap();
        assert_eq!(json, r#"{"date":""}"#);
    }

    #[test]
    fn iso_date_is_kept() {
        let holder: Holder = serde_json::from_str(r#"{"date": "2023-01-15"}"#).unwrap();
        assert_eq!(holder.date, NaiveDate::from_ymd_opt(2023, 1, 15));
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"date":"2023-01-15"}"#);
    }

    #[test]
    fn garbage_date_is_rejected() {
        let result: Result<Holder, _> = serde_json::from_str(r#"{"date": "next tuesday"}"#);
        assert!(result.is_err());
    }
}
