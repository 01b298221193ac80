use std::collections::BTreeMap;

use serde_json::Value;

/// Successful response body, reduced to what the renderer needs.
///
/// The backend keys the body by relation category id; values are either a
/// path-like string or an array of items. `name` and `automations` are
/// top-level extras with their own rendering rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LookupPayload {
    pub resolved_name: Option<String>,
    pub automations: Vec<String>,
    pub categories: BTreeMap<String, CategoryValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryValue {
    Text(String),
    Items(Vec<String>),
}

impl LookupPayload {
    pub fn from_value(value: &Value) -> Self {
        let mut payload = Self::default();
        let Some(object) = value.as_object() else {
            return payload;
        };
        for (key, entry) in object {
            match key.as_str() {
                "name" => {
                    if let Some(name) = entry.as_str() {
                        if !name.is_empty() {
                            payload.resolved_name = Some(name.to_string());
                        }
                    }
                }
                "automations" => {
                    if let Some(items) = entry.as_array() {
                        payload.automations = items.iter().map(display_name).collect();
                    }
                }
                _ => match entry {
                    Value::String(text) => {
                        payload
                            .categories
                            .insert(key.clone(), CategoryValue::Text(text.clone()));
                    }
                    Value::Array(items) => {
                        payload.categories.insert(
                            key.clone(),
                            CategoryValue::Items(items.iter().map(display_name).collect()),
                        );
                    }
                    Value::Null => {}
                    other => {
                        payload
                            .categories
                            .insert(key.clone(), CategoryValue::Text(other.to_string()));
                    }
                },
            }
        }
        payload
    }
}

/// An item's `Name` attribute when it has one, the item itself otherwise.
/// The fallback covers items the backend already sends as plain strings.
fn display_name(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Object(fields) => match fields.get("Name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => item.to_string(),
        },
        other => other.to_string(),
    }
}
