//! Record fixtures.
//!
//! Each builder returns the smallest record that passes every rule for its
//! document kind, so tests can break exactly one thing at a time.

use serde_json::{json, Map, Value};

/// A weapon with every required field.
#[must_use]
pub fn valid_weapon(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Test Weapon",
        "type": "ranged",
        "rarity": "common",
        "cooldown": 1,
        "damage": 5,
        "range": 10,
        "projectile_speed": 20,
    })
}

/// An item with every required field.
#[must_use]
pub fn valid_item(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Test Item",
        "rarity": "common",
        "desc": "Does nothing in particular.",
    })
}

/// An enemy with every required field.
#[must_use]
pub fn valid_enemy(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Test Enemy",
        "role": "chaser",
        "hp": 10,
        "speed": 1.5,
        "damage": 2,
    })
}

/// A character with every required field, wielding `weapon`.
#[must_use]
pub fn valid_character(id: &str, weapon: &str) -> Value {
    json!({
        "id": id,
        "name": "Test Hero",
        "portrait": format!("{id}.png"),
        "weapon": weapon,
        "rule": "r1",
        "ultimate": "u1",
    })
}

/// Return `record` with `key` set to `value`.
///
/// # Panics
///
/// Panics if `record` is not a JSON object.
#[must_use]
pub fn with_field(mut record: Value, key: &str, value: Value) -> Value {
    record
        .as_object_mut()
        .expect("fixture record must be an object")
        .insert(key.to_string(), value);
    record
}

/// Return `record` with `key` removed.
///
/// # Panics
///
/// Panics if `record` is not a JSON object.
#[must_use]
pub fn without_field(mut record: Value, key: &str) -> Value {
    record
        .as_object_mut()
        .expect("fixture record must be an object")
        .remove(key);
    record
}

/// Wrap records in a document under `list_key`.
#[must_use]
pub fn document(list_key: &str, records: Vec<Value>) -> Value {
    let mut root = Map::new();
    root.insert(list_key.to_string(), Value::Array(records));
    Value::Object(root)
}

/// Strategies for property tests.
pub mod strategies {
    use proptest::prelude::*;

    /// A list of short ids drawn from a small alphabet, so repeats are common.
    pub fn id_lists() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-d]{1,2}", 0..24)
    }
}
