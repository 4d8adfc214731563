use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::SchemaError;
use crate::config::QueryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn parse(value: &str) -> Result<Self, SchemaError> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(SchemaError::InvalidQuery(format!(
                "Unknown sort direction '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderField {
    pub field: String,
    pub direction: SortDirection,
}

/// A validated list query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub limit: u32,
    pub offset: u32,
    pub order_by: Vec<OrderField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Equality filters over enum, boolean and uuid fields
    pub filters: BTreeMap<String, Value>,
}

/// Parse `orderBy` in any of its three accepted shapes:
/// `"createdAt desc, name"`, `["createdAt desc", "name asc"]` or
/// `{"createdAt": "desc", "name": "asc"}`.
pub fn parse_order(order: &Value) -> Result<Vec<OrderField>, SchemaError> {
    match order {
        Value::Null => Ok(vec![]),
        Value::String(s) => parse_order_string(s),
        Value::Array(arr) => {
            let mut out = Vec::new();
            for v in arr {
                match v {
                    Value::String(s) => out.extend(parse_order_string(s)?),
                    _ => {
                        return Err(SchemaError::InvalidQuery(
                            "orderBy array entries must be strings".to_string(),
                        ))
                    }
                }
            }
            Ok(out)
        }
        Value::Object(obj) => {
            let mut out = Vec::new();
            for (k, v) in obj {
                let direction = match v {
                    Value::String(dir) => SortDirection::parse(dir)?,
                    Value::Null => SortDirection::Asc,
                    _ => {
                        return Err(SchemaError::InvalidQuery(format!(
                            "Sort direction for '{}' must be a string",
                            k
                        )))
                    }
                };
                out.push(OrderField {
                    field: k.clone(),
                    direction,
                });
            }
            Ok(out)
        }
        _ => Err(SchemaError::InvalidQuery(
            "orderBy must be a string, an array or an object".to_string(),
        )),
    }
}

fn parse_order_string(s: &str) -> Result<Vec<OrderField>, SchemaError> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut it = trimmed.split_whitespace();
        if let Some(field) = it.next() {
            let direction = match it.next() {
                Some(dir) => SortDirection::parse(dir)?,
                None => SortDirection::Asc,
            };
            if it.next().is_some() {
                return Err(SchemaError::InvalidQuery(format!(
                    "Malformed order clause '{}'",
                    trimmed
                )));
            }
            out.push(OrderField {
                field: field.to_string(),
                direction,
            });
        }
    }
    Ok(out)
}

/// Non-negative integer from a JSON number or a numeric query-string value
pub(crate) fn parse_count(name: &str, value: &Value) -> Result<u32, String> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| format!("{} must be a non-negative integer", name))
}

/// Requested limit, defaulted and capped by configuration
pub(crate) fn apply_limit(requested: Option<u32>, query: &QueryConfig) -> u32 {
    match requested {
        None => query.default_limit,
        Some(limit) if limit > query.max_limit => {
            tracing::warn!("Limit {} exceeds max {}, capping to max", limit, query.max_limit);
            query.max_limit
        }
        Some(limit) => limit,
    }
}

/// Query-string booleans arrive as text
pub(crate) fn coerce_filter_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s == "true" => Value::Bool(true),
        Value::String(s) if s == "false" => Value::Bool(false),
        other => other.clone(),
    }
}

pub(crate) fn object(value: &Value) -> Result<&Map<String, Value>, SchemaError> {
    value.as_object().ok_or(SchemaError::NotAnObject)
}
