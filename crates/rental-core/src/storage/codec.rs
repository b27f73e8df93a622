//! Collection encoding
//!
//! A collection is stored as `{"schemaVersion": N, "records": [...]}`.
//! Data written before the envelope existed is a bare JSON array and is
//! read as version 0. Envelopes newer than [`SCHEMA_VERSION`] are refused
//! rather than guessed at.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Version written by [`encode`]
pub const SCHEMA_VERSION: u64 = 1;

const VERSION_FIELD: &str = "schemaVersion";
const RECORDS_FIELD: &str = "records";

/// Collection decoding errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed collection: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Collection cannot be encoded: {0}")]
    Unencodable(serde_json::Error),

    #[error("Unexpected collection layout: {0}")]
    Layout(String),

    #[error("Collection schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u64 },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, R> {
    schema_version: u64,
    records: &'a [R],
}

/// Encode a whole collection at the current schema version
///
/// # Errors
/// Returns an error if a record cannot be serialized, e.g. because a
/// numeric field is NaN or infinite
pub fn encode<R: Serialize>(records: &[R]) -> Result<String, CodecError> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        records,
    };
    serde_json::to_string(&envelope).map_err(CodecError::Unencodable)
}

/// Decode a stored collection, upgrading older layouts
///
/// # Errors
/// Returns an error if the text is not a collection this version can read
pub fn decode<R: DeserializeOwned>(raw: &str) -> Result<Vec<R>, CodecError> {
    let (version, records) = match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => (0, Value::Array(records)),
        Value::Object(mut map) => {
            let version = map
                .get(VERSION_FIELD)
                .and_then(Value::as_u64)
                .ok_or_else(|| CodecError::Layout(format!("missing '{VERSION_FIELD}'")))?;
            let records = map
                .remove(RECORDS_FIELD)
                .ok_or_else(|| CodecError::Layout(format!("missing '{RECORDS_FIELD}'")))?;
            (version, records)
        }
        other => {
            return Err(CodecError::Layout(format!(
                "expected an array or an envelope object, found {}",
                kind_of(&other)
            )))
        }
    };

    if version > SCHEMA_VERSION {
        return Err(CodecError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    let records = upgrade(version, records);
    Ok(serde_json::from_value(records)?)
}

/// Bring raw records from `from` up to [`SCHEMA_VERSION`]
fn upgrade(from: u64, mut records: Value) -> Value {
    for version in from..SCHEMA_VERSION {
        records = upgrade_step(version, records);
    }
    records
}

/// Rewrite records of `version` into `version + 1`
fn upgrade_step(version: u64, records: Value) -> Value {
    debug_assert!(version < SCHEMA_VERSION);
    // 0 -> 1 only wrapped the array in an envelope
    records
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
