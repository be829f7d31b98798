use objcheck_path::{flatten, match_path, FlatPaths};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ];

    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,4}", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn node_count(value: &Value) -> usize {
    1 + match value {
        Value::Array(items) => items.iter().map(node_count).sum(),
        Value::Object(map) => map.values().map(node_count).sum(),
        _ => 0,
    }
}

fn pointer_for(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("/{}", key.replace('.', "/"))
    }
}

proptest! {
    #[test]
    fn every_node_gets_exactly_one_entry(data in arb_json()) {
        let flat: FlatPaths<'_> = flatten(&data);
        prop_assert_eq!(flat.len(), node_count(&data));
    }

    #[test]
    fn every_entry_points_back_into_the_document(data in arb_json()) {
        let flat = flatten(&data);
        for (key, value) in &flat {
            prop_assert_eq!(data.pointer(&pointer_for(key)), Some(*value));
        }
    }

    #[test]
    fn root_wildcard_selects_direct_children(data in arb_json()) {
        let expected = match &data {
            Value::Array(items) => items.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        };
        let matches = match_path("*", &data).unwrap();
        prop_assert_eq!(matches.len(), expected);
    }
}
