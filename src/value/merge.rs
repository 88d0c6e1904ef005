//! Recursive merging of JSON values.

use serde_json::Value;

/// Merge `source` into a copy of `target` and return the result. Neither
/// input is modified.
///
/// Merging is structural:
/// - two objects merge key by key, recursing where both sides carry the
///   key and keeping keys only one side has;
/// - two arrays merge index by index, and a longer target keeps its tail
///   while a longer source appends;
/// - anything else (scalars, `null`, or a kind mismatch) takes the source
///   side wholesale.
///
/// ## Example
///
/// ```
/// use emitter_rust::deep_merge;
/// use serde_json::json;
///
/// let defaults = json!({ "volume": 5, "theme": { "dark": false, "font": "mono" } });
/// let overrides = json!({ "theme": { "dark": true } });
///
/// let settings = deep_merge(&defaults, &overrides);
/// assert_eq!(
///     settings,
///     json!({ "volume": 5, "theme": { "dark": true, "font": "mono" } })
/// );
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let mut merged = target.clone();
    merge_into(&mut merged, source);
    merged
}

/// Merge only the top level: keys from `source` overwrite or extend
/// `target` without recursing, so a nested object from the source replaces
/// the target's wholesale. Non-object inputs take the source.
pub fn shallow_merge(target: &Value, source: &Value) -> Value {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            let mut merged = target_map.clone();
            for (key, value) in source_map {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        _ => source.clone(),
    }
}

/// In-place form of [`deep_merge`]: merge `source` into `target`.
pub fn merge_into(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(key) {
                    Some(target_value) => merge_into(target_value, source_value),
                    None => {
                        target_map.insert(key.clone(), source_value.clone());
                    }
                }
            }
        }
        (Value::Array(target_items), Value::Array(source_items)) => {
            for (index, source_item) in source_items.iter().enumerate() {
                match target_items.get_mut(index) {
                    Some(target_item) => merge_into(target_item, source_item),
                    None => target_items.push(source_item.clone()),
                }
            }
        }
        (target, source) => *target = source.clone(),
    }
}
