//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and todos.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use todoapi_core::serde::{format_timestamp, parse_timestamp};
use todoapi_core::storage::RepositoryError;
use todoapi_core::todo::{Todo, TodoChanges};

use crate::response::store_number_to_json;

// ============================================================================
// Attribute names
// ============================================================================

pub const ATTR_ID: &str = "id";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_COMPLETED: &str = "completed";
pub const ATTR_CREATED_AT: &str = "created_at";
pub const ATTR_UPDATED_AT: &str = "updated_at";

const MODEL_ATTRIBUTES: [&str; 6] = [
    ATTR_ID,
    ATTR_TITLE,
    ATTR_DESCRIPTION,
    ATTR_COMPLETED,
    ATTR_CREATED_AT,
    ATTR_UPDATED_AT,
];

// ============================================================================
// Todo conversions
// ============================================================================

/// Build the key map for a todo.
pub fn todo_key(id: &str) -> HashMap<String, AttributeValue> {
    HashMap::from([(ATTR_ID.to_string(), AttributeValue::S(id.to_string()))])
}

/// Convert a Todo to DynamoDB item.
pub fn todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = todo
        .extra
        .iter()
        .filter(|(key, _)| !MODEL_ATTRIBUTES.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(todo.id.clone()));
    item.insert(ATTR_TITLE.to_string(), AttributeValue::S(todo.title.clone()));
    item.insert(
        ATTR_DESCRIPTION.to_string(),
        AttributeValue::S(todo.description.clone()),
    );
    item.insert(
        ATTR_COMPLETED.to_string(),
        AttributeValue::Bool(todo.completed),
    );
    if let Some(created_at) = &todo.created_at {
        item.insert(
            ATTR_CREATED_AT.to_string(),
            AttributeValue::S(format_timestamp(created_at)),
        );
    }
    if let Some(updated_at) = &todo.updated_at {
        item.insert(
            ATTR_UPDATED_AT.to_string(),
            AttributeValue::S(format_timestamp(updated_at)),
        );
    }

    item
}

/// Convert a DynamoDB item to Todo.
///
/// Attributes outside the model are kept in `extra`.
pub fn item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, RepositoryError> {
    let extra: BTreeMap<String, Value> = item
        .iter()
        .filter(|(key, _)| !MODEL_ATTRIBUTES.contains(&key.as_str()))
        .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
        .collect::<Result<_, RepositoryError>>()?;

    Ok(Todo {
        id: get_string(item, ATTR_ID)?,
        title: get_optional_string(item, ATTR_TITLE)?.unwrap_or_default(),
        description: get_optional_string(item, ATTR_DESCRIPTION)?.unwrap_or_default(),
        completed: get_optional_bool(item, ATTR_COMPLETED)?.unwrap_or(false),
        created_at: get_optional_datetime(item, ATTR_CREATED_AT)?,
        updated_at: get_optional_datetime(item, ATTR_UPDATED_AT)?,
        extra,
    })
}

/// Convert scanned items, skipping any that cannot be read.
///
/// A skipped item is logged with its id so it can be repaired in the table.
pub fn items_to_todos(items: &[HashMap<String, AttributeValue>]) -> Vec<Todo> {
    items
        .iter()
        .filter_map(|item| match item_to_todo(item) {
            Ok(todo) => Some(todo),
            Err(e) => {
                let id = item
                    .get(ATTR_ID)
                    .and_then(|v| v.as_s().ok())
                    .map(String::as_str)
                    .unwrap_or("<missing>");
                tracing::warn!(todo_id = %id, error = %e, "Skipping unreadable todo");
                None
            }
        })
        .collect()
}

// ============================================================================
// Update expressions
// ============================================================================

/// A `SET` update expression with its placeholder maps.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

impl UpdateExpression {
    /// Build the expression for a partial update.
    ///
    /// `updated_at` is always set. `#id` is registered for the existence
    /// condition on the same request.
    pub fn for_changes(changes: &TodoChanges) -> Self {
        let mut update = Self {
            expression: String::new(),
            names: HashMap::from([(format!("#{ATTR_ID}"), ATTR_ID.to_string())]),
            values: HashMap::new(),
        };

        update.set(
            ATTR_UPDATED_AT,
            AttributeValue::S(format_timestamp(&changes.updated_at)),
        );
        if let Some(title) = &changes.title {
            update.set(ATTR_TITLE, AttributeValue::S(title.clone()));
        }
        if let Some(description) = &changes.description {
            update.set(ATTR_DESCRIPTION, AttributeValue::S(description.clone()));
        }
        if let Some(completed) = changes.completed {
            update.set(ATTR_COMPLETED, AttributeValue::Bool(completed));
        }

        update
    }

    fn set(&mut self, attribute: &str, value: AttributeValue) {
        let name = format!("#{attribute}");
        let placeholder = format!(":{attribute}");

        self.expression.push_str(if self.expression.is_empty() {
            "SET "
        } else {
            ", "
        });
        self.expression
            .push_str(&format!("{name} = {placeholder}"));

        self.names.insert(name, attribute.to_string());
        self.values.insert(placeholder, value);
    }
}

// ============================================================================
// Generic attribute conversions
// ============================================================================

/// Convert a stored attribute into a JSON value.
///
/// Numbers become JSON floats. Binary attributes have no JSON form.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(list) => list
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
            .collect::<Result<Map<String, Value>, RepositoryError>>()
            .map(Value::Object),
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(numbers) => numbers
            .iter()
            .map(|n| number_to_json(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => Err(RepositoryError::InvalidData(
            "Binary attributes are not supported".to_string(),
        )),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Convert a JSON value into a stored attribute.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(key, value)| (key.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

fn number_to_json(raw: &str) -> Result<Value, RepositoryError> {
    store_number_to_json(raw)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {}", raw)))
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute. A stored NULL reads as absent.
fn get_optional_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<String>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Invalid field: {}",
            key
        ))),
    }
}

/// Get an optional boolean attribute.
fn get_optional_bool(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<bool>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Invalid field: {}",
            key
        ))),
    }
}

/// Get an optional datetime attribute (RFC 3339 or naive ISO-8601).
fn get_optional_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<DateTime<Utc>>, RepositoryError> {
    match get_optional_string(item, key)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_timestamp(&s).map(Some).ok_or_else(|| {
            RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, s))
        }),
    }
}
