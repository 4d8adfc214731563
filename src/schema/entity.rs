use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::error::{FieldErrors, SchemaError};
use super::field::{FieldKind, FieldSpec};
use super::query::{apply_limit, coerce_filter_value, object, parse_count, parse_order, QueryParams};
use crate::config::{config, QueryConfig};
use crate::record::{Record, SYSTEM_FIELDS};

const SEARCH_MAX: usize = 200;
const QUERY_KEYS: &[&str] = &["limit", "offset", "orderBy", "search"];

/// One entity's fields. Create, update, query and response validation are
/// all derived from this single list.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

fn system_kind(name: &str) -> Option<FieldKind> {
    match name {
        "id" => Some(FieldKind::Uuid),
        "createdAt" | "updatedAt" => Some(FieldKind::Timestamp),
        _ => None,
    }
}

impl EntitySchema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn reject_system_fields(map: &Map<String, Value>) -> Result<(), SchemaError> {
        match SYSTEM_FIELDS.iter().find(|f| map.contains_key(**f)) {
            Some(field) => Err(SchemaError::SystemField(*field)),
            None => Ok(()),
        }
    }

    /// Check every present field against its spec, collecting problems
    fn check_fields(&self, map: &Map<String, Value>, errors: &mut FieldErrors) {
        for (key, value) in map {
            let Some(spec) = self.field(key) else {
                errors.insert(key.clone(), "Unknown field".to_string());
                continue;
            };
            if value.is_null() {
                if spec.required {
                    errors.insert(key.clone(), "Cannot be null".to_string());
                }
                continue;
            }
            if let Err(msg) = spec.kind.check(value) {
                errors.insert(key.clone(), msg);
            }
        }
    }

    /// Validate client input for a new entity. Absent fields with a create
    /// default are filled in.
    pub fn validate_create(&self, input: &Value) -> Result<Record, SchemaError> {
        let map = object(input)?;
        Self::reject_system_fields(map)?;

        let mut errors = FieldErrors::new();
        for spec in self.fields.iter().filter(|f| f.required) {
            if !map.contains_key(spec.name) {
                errors.insert(spec.name.to_string(), "This field is required".to_string());
            }
        }
        self.check_fields(map, &mut errors);

        if !errors.is_empty() {
            return Err(SchemaError::validation(self.name, errors));
        }

        let mut record = Record::from_stored(map.clone());
        for spec in &self.fields {
            if let Some(default) = &spec.default_on_create {
                if !record.contains(spec.name) {
                    record.set(spec.name, default.clone());
                }
            }
        }
        Ok(record)
    }

    /// Validate a partial update. Every field is optional but at least one
    /// must be present.
    pub fn validate_update(&self, input: &Value) -> Result<Record, SchemaError> {
        let map = object(input)?;
        Self::reject_system_fields(map)?;
        if map.is_empty() {
            return Err(SchemaError::EmptyPatch);
        }

        let mut errors = FieldErrors::new();
        self.check_fields(map, &mut errors);

        if !errors.is_empty() {
            return Err(SchemaError::validation(self.name, errors));
        }
        Ok(Record::from_stored(map.clone()))
    }

    /// Validate list query parameters with limits from the global config
    pub fn validate_query(&self, input: &Value) -> Result<QueryParams, SchemaError> {
        self.validate_query_with(input, &config().query)
    }

    pub fn validate_query_with(
        &self,
        input: &Value,
        limits: &QueryConfig,
    ) -> Result<QueryParams, SchemaError> {
        let map = object(input)?;
        let mut errors = FieldErrors::new();

        let requested_limit = match map.get("limit") {
            None | Some(Value::Null) => None,
            Some(v) => match parse_count("limit", v) {
                Ok(0) => {
                    errors.insert("limit".to_string(), "limit must be at least 1".to_string());
                    None
                }
                Ok(n) => Some(n),
                Err(msg) => {
                    errors.insert("limit".to_string(), msg);
                    None
                }
            },
        };

        let offset = match map.get("offset") {
            None | Some(Value::Null) => 0,
            Some(v) => parse_count("offset", v).unwrap_or_else(|msg| {
                errors.insert("offset".to_string(), msg);
                0
            }),
        };

        let search = match map.get("search").map(|v| (v, v.as_str().map(str::trim))) {
            None | Some((Value::Null, _)) => None,
            Some((_, Some(""))) => None,
            Some((_, Some(s))) if s.chars().count() > SEARCH_MAX => {
                errors.insert(
                    "search".to_string(),
                    format!("Cannot exceed {} characters", SEARCH_MAX),
                );
                None
            }
            Some((_, Some(s))) => Some(s.to_string()),
            Some(_) => {
                errors.insert("search".to_string(), "Must be a string".to_string());
                None
            }
        };

        let mut filters = BTreeMap::new();
        for (key, value) in map {
            if QUERY_KEYS.contains(&key.as_str()) {
                continue;
            }
            let Some(spec) = self.field(key).filter(|s| s.kind.is_filterable()) else {
                errors.insert(key.clone(), "Not a filterable field".to_string());
                continue;
            };
            let value = coerce_filter_value(value);
            match spec.kind.check(&value) {
                Ok(()) => {
                    filters.insert(key.clone(), value);
                }
                Err(msg) => {
                    errors.insert(key.clone(), msg);
                }
            }
        }

        if !errors.is_empty() {
            return Err(SchemaError::validation(self.name, errors));
        }

        let order_by = parse_order(map.get("orderBy").unwrap_or(&Value::Null))?;
        if order_by.len() > limits.max_order_fields {
            return Err(SchemaError::InvalidQuery(format!(
                "At most {} order fields are allowed",
                limits.max_order_fields
            )));
        }
        if let Some(unknown) = order_by
            .iter()
            .find(|o| self.field(&o.field).is_none() && system_kind(&o.field).is_none())
        {
            return Err(SchemaError::InvalidQuery(format!(
                "Cannot order by unknown field '{}'",
                unknown.field
            )));
        }

        Ok(QueryParams {
            limit: apply_limit(requested_limit, limits),
            offset,
            order_by,
            search,
            filters,
        })
    }

    /// Check a stored or mapped entity. System fields are allowed, fields
    /// the schema does not know are ignored, and optional fields may be
    /// null or empty strings.
    pub fn validate_entity(&self, entity: &Value) -> Result<(), SchemaError> {
        let map = object(entity)?;
        let mut errors = FieldErrors::new();

        for name in SYSTEM_FIELDS {
            if let (Some(value), Some(kind)) = (map.get(*name), system_kind(name)) {
                if let Err(msg) = kind.check(value) {
                    errors.insert(name.to_string(), msg);
                }
            }
        }

        for spec in &self.fields {
            match map.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        errors.insert(spec.name.to_string(), "This field is required".to_string());
                    }
                }
                Some(Value::String(s)) if s.is_empty() && !spec.required => {}
                Some(value) => {
                    if let Err(msg) = spec.kind.check(value) {
                        errors.insert(spec.name.to_string(), msg);
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::validation(self.name, errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::query::SortDirection;
    use serde_json::json;

    fn schema() -> EntitySchema {
        EntitySchema::new(
            "widget",
            vec![
                FieldSpec::required("name", FieldKind::text(1, 20)),
                FieldSpec::required("slug", FieldKind::Slug),
                FieldSpec::optional("website", FieldKind::Url),
                FieldSpec::optional("status", FieldKind::Enum(&["draft", "live"]))
                    .with_default("draft"),
                FieldSpec::optional("featured", FieldKind::Boolean),
                FieldSpec::optional("ownerId", FieldKind::Uuid),
            ],
        )
    }

    fn limits() -> QueryConfig {
        QueryConfig {
            default_limit: 20,
            max_limit: 100,
            max_order_fields: 2,
        }
    }

    #[test]
    fn test_create_applies_defaults() {
        let record = schema()
            .validate_create(&json!({"name": "Widget", "slug": "widget"}))
            .unwrap();
        assert_eq!(record.get_str("status"), Some("draft"));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_create_collects_every_error() {
        let err = schema()
            .validate_create(&json!({"slug": "Bad Slug", "website": "nope", "color": "red"}))
            .unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields["name"], "This field is required");
        assert!(fields.contains_key("slug"));
        assert!(fields.contains_key("website"));
        assert_eq!(fields["color"], "Unknown field");
    }

    #[test]
    fn test_create_rejects_system_fields() {
        let err = schema()
            .validate_create(&json!({"id": "x", "name": "W", "slug": "w"}))
            .unwrap_err();
        assert!(matches!(err, SchemaError::SystemField("id")));
        assert!(matches!(
            schema().validate_create(&json!("text")),
            Err(SchemaError::NotAnObject)
        ));
    }

    #[test]
    fn test_update_is_partial() {
        let record = schema().validate_update(&json!({"status": "live"})).unwrap();
        assert_eq!(record.len(), 1);
        assert!(matches!(
            schema().validate_update(&json!({})),
            Err(SchemaError::EmptyPatch)
        ));
        assert!(schema().validate_update(&json!({"name": null})).is_err());
        assert!(schema().validate_update(&json!({"website": null})).is_ok());
    }

    #[test]
    fn test_query_defaults_and_filters() {
        let owner = uuid::Uuid::new_v4().to_string();
        let params = schema()
            .validate_query_with(
                &json!({"status": "live", "featured": "true", "ownerId": owner, "search": "  w  "}),
                &limits(),
            )
            .unwrap();
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset, 0);
        assert_eq!(params.search.as_deref(), Some("w"));
        assert_eq!(params.filters["featured"], json!(true));
        assert_eq!(params.filters.len(), 3);
    }

    #[test]
    fn test_query_caps_limit_and_parses_order() {
        let params = schema()
            .validate_query_with(
                &json!({"limit": "500", "offset": 40, "orderBy": "createdAt desc, name"}),
                &limits(),
            )
            .unwrap();
        assert_eq!(params.limit, 100);
        assert_eq!(params.offset, 40);
        assert_eq!(params.order_by.len(), 2);
        assert_eq!(params.order_by[0].direction, SortDirection::Desc);
    }

    #[test]
    fn test_query_rejections() {
        let s = schema();
        assert!(s.validate_query_with(&json!({"limit": 0}), &limits()).is_err());
        assert!(s.validate_query_with(&json!({"name": "x"}), &limits()).is_err());
        assert!(s.validate_query_with(&json!({"status": "gone"}), &limits()).is_err());
        assert!(matches!(
            s.validate_query_with(&json!({"orderBy": "name, slug, status"}), &limits()),
            Err(SchemaError::InvalidQuery(_))
        ));
        assert!(matches!(
            s.validate_query_with(&json!({"orderBy": "color"}), &limits()),
            Err(SchemaError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_query_search_length_counts_trimmed_text() {
        let s = schema();
        let padded = format!("{}{}", "a".repeat(195), " ".repeat(20));
        let params = s
            .validate_query_with(&json!({ "search": padded }), &limits())
            .unwrap();
        assert_eq!(params.search.map(|q| q.len()), Some(195));

        let long = "a".repeat(201);
        let err = s
            .validate_query_with(&json!({ "search": long }), &limits())
            .unwrap_err();
        assert!(err.field_errors().unwrap().contains_key("search"));

        let blank = s.validate_query_with(&json!({"search": "   "}), &limits()).unwrap();
        assert_eq!(blank.search, None);
        assert!(s.validate_query_with(&json!({"search": 5}), &limits()).is_err());
    }

    #[test]
    fn test_entity_validation_is_lenient_on_extras() {
        let entity = json!({
            "id": uuid::Uuid::new_v4().to_string(),
            "createdAt": "2024-01-01T00:00:00Z",
            "name": "Widget",
            "slug": "widget",
            "website": "",
            "isLive": true
        });
        assert!(schema().validate_entity(&entity).is_ok());

        let broken = json!({"id": "nope", "name": "", "slug": "widget"});
        let err = schema().validate_entity(&broken).unwrap_err();
        let fields = err.field_errors().unwrap();
        assert!(fields.contains_key("id"));
        assert!(fields.contains_key("name"));
    }
}
