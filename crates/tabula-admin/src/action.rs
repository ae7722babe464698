//! Request parsing.
//!
//! The page posts flat field maps (`action` plus per-action fields); this
//! module turns them into [`MutationRequest`] values. Only shapes are
//! checked here; identifier and type validation is the engine's job.

use std::collections::HashMap;

use serde_json::Value;
use tabula_schema::request::MutationRequest;

use crate::error::{AdminError, Result};

/// Parses a flat field map into a mutation request.
///
/// Expected actions and fields:
///
/// | action            | fields                     |
/// |-------------------|----------------------------|
/// | `add_table`       | `table`                    |
/// | `rename_table`    | `table`, `to`              |
/// | `add_column`      | `table`, `column`, `type`  |
/// | `rename_column`   | `table`, `column`, `to`    |
/// | `change_type`     | `table`, `column`, `type`  |
/// | `reorder_columns` | `table`, `order` (comma-separated) |
pub fn parse_request(fields: &HashMap<String, String>) -> Result<MutationRequest> {
    let action = field(fields, "action")?;
    match action {
        "add_table" => Ok(MutationRequest::add_table(field(fields, "table")?)),
        "rename_table" => Ok(MutationRequest::rename_table(
            field(fields, "table")?,
            field(fields, "to")?,
        )),
        "add_column" => Ok(MutationRequest::add_column(
            field(fields, "table")?,
            field(fields, "column")?,
            field(fields, "type")?,
        )),
        "rename_column" => Ok(MutationRequest::rename_column(
            field(fields, "table")?,
            field(fields, "column")?,
            field(fields, "to")?,
        )),
        "change_type" => Ok(MutationRequest::change_column_type(
            field(fields, "table")?,
            field(fields, "column")?,
            field(fields, "type")?,
        )),
        "reorder_columns" => Ok(MutationRequest::reorder_columns(
            field(fields, "table")?,
            split_order(field(fields, "order")?),
        )),
        other => Err(AdminError::UnknownAction(other.to_string())),
    }
}

/// Parses a JSON request body into a mutation request.
///
/// Accepts the same fields as [`parse_request`]; `order` may be either a
/// JSON array of strings or a comma-separated string.
pub fn parse_json_request(body: &str) -> Result<MutationRequest> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(object) = value else {
        return Err(AdminError::MalformedRequest(
            "expected a JSON object".to_string(),
        ));
    };

    let mut fields = HashMap::new();
    for (key, value) in object {
        match value {
            Value::String(s) => {
                fields.insert(key, s);
            }
            Value::Array(items) if key == "order" => {
                let names: Vec<String> = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(AdminError::MalformedRequest(format!(
                            "order entries must be strings, got {other}"
                        ))),
                    })
                    .collect::<Result<_>>()?;
                fields.insert(key, names.join(","));
            }
            other => {
                return Err(AdminError::MalformedRequest(format!(
                    "field '{key}' must be a string, got {other}"
                )));
            }
        }
    }
    parse_request(&fields)
}

fn field<'a>(fields: &'a HashMap<String, String>, name: &'static str) -> Result<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or(AdminError::MissingField(name))
}

fn split_order(order: &str) -> Vec<String> {
    order
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
