// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Path access into schemaless resource documents

use crate::error::{FlinkJobError, Result};
use serde_json::{Map, Value};

/// Look up the string at `path`.
///
/// Returns `Ok(None)` when any segment is absent or a parent is null. Fails
/// when a parent is not an object or the leaf is present but not a string.
pub fn nested_str<'a>(doc: &'a Value, path: &[&str]) -> Result<Option<&'a str>> {
    let mut current = doc;

    for (depth, key) in path.iter().enumerate() {
        match current {
            Value::Object(map) => match map.get(*key) {
                Some(value) => current = value,
                None => return Ok(None),
            },
            Value::Null => return Ok(None),
            other => return Err(malformed(&path[..depth], "object", other)),
        }
    }

    match current {
        Value::String(s) => Ok(Some(s.as_str())),
        other => Err(malformed(path, "string", other)),
    }
}

/// Like [`nested_str`], with absent values read as an empty string
pub fn nested_string(doc: &Value, path: &[&str]) -> Result<String> {
    Ok(nested_str(doc, path)?.unwrap_or_default().to_string())
}

/// Overwrite the string at `path`.
///
/// Every parent of the leaf must already exist as an object; nothing is created.
pub fn set_nested_string(doc: &mut Value, path: &[&str], value: &str) -> Result<()> {
    let Some((leaf, parents)) = path.split_last() else {
        return Err(FlinkJobError::MissingField {
            path: String::new(),
        });
    };

    let mut current = as_object_mut(doc, &[])?;
    for (depth, key) in parents.iter().enumerate() {
        let next = current
            .get_mut(*key)
            .ok_or_else(|| FlinkJobError::MissingField {
                path: join(&path[..=depth]),
            })?;
        current = as_object_mut(next, &path[..=depth])?;
    }

    current.insert(leaf.to_string(), Value::String(value.to_string()));
    Ok(())
}

fn as_object_mut<'a>(value: &'a mut Value, path: &[&str]) -> Result<&'a mut Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(FlinkJobError::MissingField { path: join(path) }),
        other => Err(malformed(path, "object", other)),
    }
}

fn malformed(path: &[&str], expected: &'static str, found: &Value) -> FlinkJobError {
    FlinkJobError::MalformedField {
        path: join(path),
        expected,
        found: type_name(found),
    }
}

fn join(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
