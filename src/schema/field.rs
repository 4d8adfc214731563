use chrono::DateTime;
use serde_json::Value;
use uuid::Uuid;

/// The shape a field's value must have
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text { min: usize, max: usize },
    /// Lowercase letters, digits and hyphens, 1 to 100 characters
    Slug,
    Email,
    Url,
    Uuid,
    /// ISO 3166-1 alpha-2, upper case
    CountryCode,
    Integer { min: i64, max: i64 },
    Number { min: f64, max: f64 },
    Boolean,
    Enum(&'static [&'static str]),
    TextArray,
    UuidArray,
    JsonObject,
    JsonArray,
    /// RFC 3339 date-time
    Timestamp,
}

const SLUG_MAX: usize = 100;

impl FieldKind {
    pub fn text(min: usize, max: usize) -> Self {
        FieldKind::Text { min, max }
    }

    pub fn int(min: i64, max: i64) -> Self {
        FieldKind::Integer { min, max }
    }

    pub fn non_negative() -> Self {
        FieldKind::Integer {
            min: 0,
            max: i64::from(i32::MAX),
        }
    }

    pub fn number(min: f64, max: f64) -> Self {
        FieldKind::Number { min, max }
    }

    /// Usable as an equality filter in list queries
    pub fn is_filterable(&self) -> bool {
        matches!(self, FieldKind::Enum(_) | FieldKind::Boolean | FieldKind::Uuid)
    }

    /// Check a non-null value. The error is a client-facing message.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            FieldKind::Text { min, max } => {
                let s = expect_str(value)?;
                let len = s.chars().count();
                if len < *min {
                    return Err(if *min == 1 {
                        "Must not be empty".to_string()
                    } else {
                        format!("Must be at least {} characters", min)
                    });
                }
                if len > *max {
                    return Err(format!("Cannot exceed {} characters", max));
                }
                Ok(())
            }
            FieldKind::Slug => {
                let s = expect_str(value)?;
                if s.is_empty() {
                    return Err("Slug cannot be empty".to_string());
                }
                if s.len() > SLUG_MAX {
                    return Err(format!("Slug cannot exceed {} characters", SLUG_MAX));
                }
                if !s
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                {
                    return Err(
                        "Slug must contain only lowercase letters, numbers, and hyphens"
                            .to_string(),
                    );
                }
                Ok(())
            }
            FieldKind::Email => {
                let s = expect_str(value)?;
                if is_email(s) {
                    Ok(())
                } else {
                    Err("Must be a valid email address".to_string())
                }
            }
            FieldKind::Url => {
                let s = expect_str(value)?;
                url::Url::parse(s)
                    .map(|_| ())
                    .map_err(|_| "Must be a valid URL".to_string())
            }
            FieldKind::Uuid => check_uuid(value),
            FieldKind::CountryCode => {
                let s = expect_str(value)?;
                if s.len() == 2 && s.chars().all(|c| c.is_ascii_uppercase()) {
                    Ok(())
                } else {
                    Err("Country code must be exactly 2 uppercase letters".to_string())
                }
            }
            FieldKind::Integer { min, max } => {
                let n = value
                    .as_i64()
                    .ok_or_else(|| "Must be an integer".to_string())?;
                if n < *min || n > *max {
                    return Err(format!("Must be between {} and {}", min, max));
                }
                Ok(())
            }
            FieldKind::Number { min, max } => {
                let n = value
                    .as_f64()
                    .ok_or_else(|| "Must be a number".to_string())?;
                if n < *min || n > *max {
                    return Err(format!("Must be between {} and {}", min, max));
                }
                Ok(())
            }
            FieldKind::Boolean => value
                .as_bool()
                .map(|_| ())
                .ok_or_else(|| "Must be a boolean".to_string()),
            FieldKind::Enum(allowed) => {
                let s = expect_str(value)?;
                if allowed.contains(&s) {
                    Ok(())
                } else {
                    Err(format!("Must be one of: {}", allowed.join(", ")))
                }
            }
            FieldKind::TextArray => {
                let items = expect_array(value)?;
                if items.iter().all(Value::is_string) {
                    Ok(())
                } else {
                    Err("Must be an array of strings".to_string())
                }
            }
            FieldKind::UuidArray => {
                let items = expect_array(value)?;
                for item in items {
                    check_uuid(item).map_err(|_| "Must be an array of UUIDs".to_string())?;
                }
                Ok(())
            }
            FieldKind::JsonObject => {
                if value.is_object() {
                    Ok(())
                } else {
                    Err("Must be a valid JSON object".to_string())
                }
            }
            FieldKind::JsonArray => expect_array(value).map(|_| ()),
            FieldKind::Timestamp => {
                let s = expect_str(value)?;
                DateTime::parse_from_rfc3339(s)
                    .map(|_| ())
                    .map_err(|_| "Must be a valid ISO 8601 datetime string".to_string())
            }
        }
    }
}

fn expect_str(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| "Must be a string".to_string())
}

fn expect_array(value: &Value) -> Result<&Vec<Value>, String> {
    value
        .as_array()
        .ok_or_else(|| "Must be a valid JSON array".to_string())
}

fn check_uuid(value: &Value) -> Result<(), String> {
    let s = expect_str(value)?;
    Uuid::parse_str(s)
        .map(|_| ())
        .map_err(|_| "Must be a valid UUID format".to_string())
}

/// One `@`, a non-empty local part, a dotted domain, no whitespace
fn is_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

/// A field of an entity
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Filled in by create validation when the field is absent
    pub default_on_create: Option<Value>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default_on_create: None,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default_on_create: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_on_create = Some(value.into());
        self
    }
}
