//! Token tree flattening
//!
//! Walks a nested token tree and produces one flat table per group that has
//! direct variables. Keys are visited in ascending lexicographic order at
//! every level, and parent tables precede the tables of their subgroups, so
//! identical input trees always flatten to identical table sequences.

use serde_json::{Map, Value};

/// Keys starting with this sigil carry schema metadata and are never
/// traversed or listed.
pub const METADATA_SIGIL: char = '$';

const VALUE_KEY: &str = "$value";
const TYPE_KEY: &str = "$type";
const ALIAS_KEY: &str = "$alias";

/// A flattened token group: a heading title plus (name, value) rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    /// Group names from the root joined with `" / "`; empty at the root.
    pub title: String,
    /// Direct variables of the group, in ascending key order.
    pub rows: Vec<(String, String)>,
}

/// Resolve a token entry to its display string.
///
/// A non-object entry resolves to its scalar form. An object resolves to
/// its non-empty `$value`; failing that, to `Alias: <target>` when an
/// `$alias` reference is present; failing that, to the empty string. This
/// never fails.
pub fn resolve_value(entry: &Value) -> String {
    let Some(map) = entry.as_object() else {
        return scalar_to_string(entry);
    };
    match map.get(VALUE_KEY) {
        Some(Value::String(s)) if s.is_empty() => alias_or_empty(map),
        None => alias_or_empty(map),
        Some(value) => scalar_to_string(value),
    }
}

fn alias_or_empty(map: &Map<String, Value>) -> String {
    match map.get(ALIAS_KEY) {
        Some(alias) => format!("Alias: {}", scalar_to_string(alias)),
        None => String::new(),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a token node into tables, pre-order.
///
/// Every key at a level is classified with two independent tests: it is a
/// variable when its value is an object carrying `$value` or `$type`, and a
/// group when its value is an object with at least one non-metadata key. A
/// key satisfying both appears as a row in its level's table *and* is
/// recursed into; downstream consumers rely on that, so it is kept even
/// though the overlap is rare.
///
/// A non-object node simply produces no tables.
pub fn flatten(node: &Value, path: &[String]) -> Vec<TokenTable> {
    let Some(map) = node.as_object() else {
        return Vec::new();
    };

    let mut entries: Vec<(&String, &Value)> = map
        .iter()
        .filter(|(key, _)| !key.starts_with(METADATA_SIGIL))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut variables: Vec<(&String, &Value)> = Vec::new();
    let mut subgroups: Vec<(&String, &Value)> = Vec::new();
    for (key, value) in entries {
        let Some(child) = value.as_object() else {
            continue;
        };
        if child.contains_key(VALUE_KEY) || child.contains_key(TYPE_KEY) {
            variables.push((key, value));
        }
        if child.keys().any(|k| !k.starts_with(METADATA_SIGIL)) {
            subgroups.push((key, value));
        }
    }

    let mut tables = Vec::new();
    if !variables.is_empty() {
        tables.push(TokenTable {
            title: path.join(" / "),
            rows: variables
                .iter()
                .map(|(name, value)| ((*name).clone(), resolve_value(value)))
                .collect(),
        });
    }

    for (name, value) in subgroups {
        let mut child_path = path.to_vec();
        child_path.push(name.clone());
        tables.extend(flatten(value, &child_path));
    }

    tables
}
