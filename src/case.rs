//! Key case conversion at the API edge: clients send and receive camelCase, columns are snake_case.

use serde_json::{Map, Value};

/// `"user_id"` -> `"userId"`, `"created_at"` -> `"createdAt"`.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !out.is_empty();
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `"userId"` -> `"user_id"`, `"authorID"` -> `"author_id"`. Already snake_case input is unchanged.
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if i > 0 && (prev_lower || (prev_upper && next_lower)) && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn rename_keys(obj: &mut Map<String, Value>, f: fn(&str) -> String) {
    let keys: Vec<String> = obj.keys().cloned().collect();
    for k in keys {
        let renamed = f(&k);
        if renamed != k {
            if let Some(v) = obj.remove(&k) {
                obj.insert(renamed, v);
            }
        }
    }
}

/// Convert all keys of a JSON object from snake_case to camelCase (in place).
pub fn object_keys_to_camel_case(obj: &mut Map<String, Value>) {
    rename_keys(obj, to_camel_case);
}

/// Convert all keys of a JSON object from camelCase to snake_case (in place).
pub fn object_keys_to_snake_case(obj: &mut Map<String, Value>) {
    rename_keys(obj, to_snake_case);
}

/// Recursively apply camelCase to all object keys in a Value (objects and arrays of objects).
pub fn value_keys_to_camel_case_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            object_keys_to_camel_case(map);
            for (_, v) in map.iter_mut() {
                value_keys_to_camel_case_recursive(v);
            }
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                value_keys_to_camel_case_recursive(v);
            }
        }
        _ => {}
    }
}
