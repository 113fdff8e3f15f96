//! snake_case / camelCase key transcoding
//!
//! The backend speaks snake_case, clients speak camelCase. Outgoing query keys
//! go through [`camel_to_snake`], incoming response bodies go through
//! [`snake_to_camel_deep`].

use serde_json::{Map, Value};

/// Convert a camelCase name to snake_case.
///
/// Only ASCII `A`-`Z` are recognised as word boundaries.
pub fn camel_to_snake(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            snake.push('_');
            snake.push(c.to_ascii_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Convert a snake_case name to camelCase.
///
/// Runs of underscores collapse, and a trailing underscore is dropped.
pub fn snake_to_camel(name: &str) -> String {
    let mut camel = String::with_capacity(name.len());
    let mut next_upper = false;
    for c in name.chars() {
        if c == '_' {
            next_upper = true;
        } else if next_upper {
            camel.extend(c.to_uppercase());
            next_upper = false;
        } else {
            camel.push(c);
        }
    }
    camel
}

/// Recursively rename object keys from snake_case to camelCase.
///
/// Keys keep their arrival order; when two keys map to the same camelCase
/// name the later one's value wins. Arrays and scalars are returned as-is, so
/// objects nested inside arrays keep their wire keys. `null` stays `null`
/// rather than becoming an empty object, which keeps `Option` fields decodable.
pub fn snake_to_camel_deep(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut result = Map::with_capacity(map.len());
            for (key, value) in map {
                result.insert(snake_to_camel(&key), snake_to_camel_deep(value));
            }
            Value::Object(result)
        }
        other => other,
    }
}
