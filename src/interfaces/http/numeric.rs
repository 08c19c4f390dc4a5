//! Serialization boundary for model metadata.
//!
//! Artifact metadata is free-form JSON; responses only ever carry plain
//! `f64` values.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Converts a metadata map into `name -> f64`.
///
/// Numbers map directly, booleans become 0/1 and numeric strings are parsed.
/// Anything else (null, arrays, objects, free text) is dropped.
pub fn to_portable_map(map: &BTreeMap<String, Value>) -> BTreeMap<String, f64> {
    map.iter()
        .filter_map(|(key, value)| match to_portable_number(value) {
            Some(n) => Some((key.clone(), n)),
            None => {
                debug!("Dropping non-numeric metadata entry '{}': {}", key, value);
                None
            }
        })
        .collect()
}

pub fn to_portable_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    n.is_finite().then_some(n)
}
