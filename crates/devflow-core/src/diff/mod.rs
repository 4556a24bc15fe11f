//! Change-diff engine
//!
//! Computes the field-level differences between two snapshots of the same
//! logical entity, represented as JSON object maps. Policy:
//!
//! - arrays are atomic: a single element change re-emits the whole array
//! - nested objects are recursed into, but a non-empty nested diff surfaces
//!   as one change at the parent key carrying the full old/new objects
//! - everything else compares by value equality
//! - a key absent on one side is treated as JSON null there, so null and
//!   absent compare equal
//!
//! All functions are pure and never fail. Output order is deterministic:
//! the old object's keys in map order, then keys present only in the new
//! object.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::entities::FieldChange;

/// Fields excluded from comparison by default: identity and timestamp
/// columns always differ between snapshots and carry no audit value.
pub const DEFAULT_IGNORED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// Diff two object snapshots into an ordered set of field changes
///
/// Returns an empty vector when the objects are equivalent under the ignore
/// set. `diff_objects(a, a, ignored)` is always empty.
pub fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    ignored: &[&str],
) -> Vec<FieldChange> {
    let mut changes = Vec::new();

    for key in union_keys(old, new) {
        if ignored.contains(&key) {
            continue;
        }

        let old_value = old.get(key).unwrap_or(&Value::Null);
        let new_value = new.get(key).unwrap_or(&Value::Null);

        match (old_value, new_value) {
            // Arrays compare atomically; emit both full arrays when unequal.
            (Value::Array(a), Value::Array(b)) => {
                if a != b {
                    changes.push(field_change(key, old, old_value, new_value));
                }
            }
            // Nested objects recurse; a non-empty nested diff is a signal,
            // not a detailed delta, so the parent change carries both full
            // objects.
            (Value::Object(a), Value::Object(b)) => {
                if !diff_objects(a, b, ignored).is_empty() {
                    changes.push(field_change(key, old, old_value, new_value));
                }
            }
            // Scalars, nulls, and mixed types compare by value.
            (a, b) => {
                if a != b {
                    changes.push(field_change(key, old, old_value, new_value));
                }
            }
        }
    }

    changes
}

/// Enumerate the initial fields of a newly created object
///
/// Emits one change per non-ignored, non-null key with only `new_value`
/// populated. Used for `create` operations where there is no prior state.
pub fn creation_changes(new: &Map<String, Value>, ignored: &[&str]) -> Vec<FieldChange> {
    new.iter()
        .filter(|(key, value)| !ignored.contains(&key.as_str()) && !value.is_null())
        .map(|(key, value)| FieldChange::creation(key, value.clone()))
        .collect()
}

/// Serialize two records of the same shape and diff them
///
/// Records that do not serialize to JSON objects produce no changes.
pub fn diff_records<T: Serialize>(old: &T, new: &T, ignored: &[&str]) -> Vec<FieldChange> {
    match (object_of(old), object_of(new)) {
        (Some(a), Some(b)) => diff_objects(&a, &b, ignored),
        _ => Vec::new(),
    }
}

fn object_of<T: Serialize>(record: &T) -> Option<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Union of keys: old-map order first, then keys only the new map has
fn union_keys<'a>(old: &'a Map<String, Value>, new: &'a Map<String, Value>) -> Vec<&'a str> {
    let mut keys: Vec<&str> = old.keys().map(String::as_str).collect();
    keys.extend(
        new.keys()
            .filter(|key| !old.contains_key(*key))
            .map(String::as_str),
    );
    keys
}

/// Build a change, leaving `old_value` unset when the key never existed on
/// the old side (mirrors creation semantics for added optional fields)
fn field_change(
    key: &str,
    old: &Map<String, Value>,
    old_value: &Value,
    new_value: &Value,
) -> FieldChange {
    if old.contains_key(key) {
        FieldChange::new(key, old_value.clone(), new_value.clone())
    } else {
        FieldChange::creation(key, new_value.clone())
    }
}
