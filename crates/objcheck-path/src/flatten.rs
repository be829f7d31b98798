use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::Value;

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Every node of a document keyed by its dotted path, in traversal order.
///
/// The root is stored under `""`. Containers are stored after their
/// children, so a pattern can address either a composite or a leaf.
pub type FlatPaths<'a> = IndexMap<String, &'a Value>;

/// Flatten `data` into a [`FlatPaths`] mapping.
///
/// Arrays and objects with at least one element are descended into; array
/// indices become decimal segments. Everything else (including empty
/// containers, strings and `null`) is a terminal entry.
///
/// Two nodes can produce the same path when an object key itself contains
/// a separator (`{"a.b": 1, "a": {"b": 2}}`). The later node wins the value
/// and the earlier one keeps the position.
pub fn flatten(data: &Value) -> FlatPaths<'_> {
    let mut flat = FlatPaths::new();
    let mut path = String::new();
    walk(data, &mut path, &mut flat);
    flat
}

fn walk<'a>(value: &'a Value, path: &mut String, flat: &mut FlatPaths<'a>) {
    let mark = path.len();
    match value {
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let _ = write!(path, "{SEPARATOR}{index}");
                walk(item, path, flat);
                path.truncate(mark);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                path.push(SEPARATOR);
                path.push_str(key);
                walk(item, path, flat);
                path.truncate(mark);
            }
        }
        _ => {}
    }

    // The accumulator always starts with a separator below the root.
    let key = path.get(1..).unwrap_or_default().to_string();
    flat.insert(key, value);
}
