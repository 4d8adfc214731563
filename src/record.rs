use serde_json::{Map, Value};

/// Fields owned by the store; never accepted from client input
pub const SYSTEM_FIELDS: &[&str] = &["id", "createdAt", "updatedAt"];

/// Errors that can occur during Record operations
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("System field '{0}' cannot be set via API input")]
    SystemFieldNotAllowed(&'static str),
    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
}

pub fn is_system_field(key: &str) -> bool {
    SYSTEM_FIELDS.contains(&key)
}

fn system_field(key: &str) -> Option<&'static str> {
    SYSTEM_FIELDS.iter().copied().find(|&f| f == key)
}

/// A dynamic, key-ordered field bag. Produced by schema validation and
/// accepted by the scoping and visibility filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create record from API input JSON, rejecting system fields
    pub fn from_json(json: Value) -> Result<Self, RecordError> {
        match json {
            Value::Object(map) => {
                if let Some(field) = map.keys().find_map(|k| system_field(k)) {
                    return Err(RecordError::SystemFieldNotAllowed(field));
                }
                Ok(Self { fields: map })
            }
            _ => Err(RecordError::InvalidJson("Expected JSON object".to_string())),
        }
    }

    /// Create record from stored data (system fields allowed)
    pub fn from_stored(map: Map<String, Value>) -> Self {
        Self { fields: map }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of a field, if present and a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let key = key.into();

        if is_system_field(&key) {
            tracing::warn!("Attempted to set system field '{}' - ignoring", key);
            return self;
        }

        self.fields.insert(key, value.into());
        self
    }

    pub fn set_system_field(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_stored(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_rejects_system_fields() {
        let err = Record::from_json(json!({"name": "x", "createdAt": "2024-01-01T00:00:00Z"}))
            .unwrap_err();
        assert!(matches!(err, RecordError::SystemFieldNotAllowed("createdAt")));
    }

    #[test]
    fn test_from_json_requires_object() {
        let err = Record::from_json(json!(["a"])).unwrap_err();
        assert!(matches!(err, RecordError::InvalidJson(_)));
    }

    #[test]
    fn test_set_ignores_system_fields() {
        let mut record = Record::new();
        record.set("name", "Grace").set("id", "abc");
        assert_eq!(record.len(), 1);
        assert!(!record.contains("id"));

        record.set_system_field("id", "abc");
        assert_eq!(record.get_str("id"), Some("abc"));
    }

    #[test]
    fn test_remove_and_into_json() {
        let mut record = Record::from_json(json!({"a": 1, "b": 2})).unwrap();
        assert_eq!(record.remove("a"), Some(json!(1)));
        assert!(record.remove("missing").is_none());
        assert_eq!(record.into_json(), json!({"b": 2}));
    }
}
