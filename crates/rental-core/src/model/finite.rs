//! Serde guard for numeric fields
//!
//! JSON has no encoding for NaN or infinity; serde_json would write `null`,
//! which the field cannot read back. Encoding such a value fails instead,
//! so the write is dropped rather than stored unreadable.

use serde::{Serialize, Serializer};

fn check<E: serde::ser::Error>(value: f64) -> Result<(), E> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(E::custom(format!("non-finite number {value} cannot be stored")))
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Copy + Into<f64> + Serialize,
    S: Serializer,
{
    check::<S::Error>((*value).into())?;
    value.serialize(serializer)
}

pub fn serialize_option<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Copy + Into<f64> + Serialize,
    S: Serializer,
{
    match value {
        Some(v) => {
            check::<S::Error>((*v).into())?;
            serializer.serialize_some(v)
        }
        None => serializer.serialize_none(),
    }
}
