// src/merge.rs
//! Deep merge of a per-language CV source over the base-language source.
//!
//! Objects merge key-wise, lists merge by matching `id` field, and any other
//! override value wins outright. List entries that exist only in the
//! override are not appended; overrides refine the base, they do not extend
//! it.

use serde_json::Value;

pub fn deep_merge(base: Value, override_value: Value) -> Value {
    match (base, override_value) {
        (Value::Object(mut base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.remove(&key) {
                    Some(existing) => {
                        base_map.insert(key, deep_merge(existing, value));
                    }
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
            Value::Object(base_map)
        }
        (Value::Array(base_list), Value::Array(override_list)) => {
            Value::Array(merge_lists_by_id(base_list, override_list))
        }
        (_, value) => value,
    }
}

fn entry_id(value: &Value) -> Option<&str> {
    value
        .as_object()
        .and_then(|object| object.get("id"))
        .and_then(|id| id.as_str())
}

/// Merge two lists by matching `id`. Entries without an `id` pass through
/// unchanged.
pub fn merge_lists_by_id(base: Vec<Value>, overrides: Vec<Value>) -> Vec<Value> {
    base.into_iter()
        .map(|item| {
            let Some(id) = entry_id(&item).map(str::to_string) else {
                return item;
            };
            match overrides.iter().find(|o| entry_id(o) == Some(id.as_str())) {
                Some(override_item) => deep_merge(item, override_item.clone()),
                None => item,
            }
        })
        .collect()
}
