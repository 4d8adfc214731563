use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::permissions::{ROLE_ADMIN, ROLE_MEMBER, ROLE_OWNER};

/// Field name to the roles allowed to see it. Fields not listed are
/// visible to every role.
pub type FieldPermissions = BTreeMap<String, Vec<String>>;

static MINISTRY_FIELD_PERMISSIONS: Lazy<FieldPermissions> = Lazy::new(|| {
    let roles = |list: &[&str]| list.iter().map(|r| r.to_string()).collect::<Vec<_>>();

    let mut map = FieldPermissions::new();
    map.insert("email".to_string(), roles(&[ROLE_OWNER, ROLE_ADMIN]));
    map.insert("subscriptionTier".to_string(), roles(&[ROLE_OWNER, ROLE_ADMIN]));
    map.insert(
        "ministryMetrics".to_string(),
        roles(&[ROLE_OWNER, ROLE_ADMIN, ROLE_MEMBER]),
    );
    map.insert(
        "organizationContext".to_string(),
        roles(&[ROLE_OWNER, ROLE_ADMIN, ROLE_MEMBER]),
    );
    map
});

/// The process-wide visibility table for ministry profile fields
pub fn ministry_field_permissions() -> &'static FieldPermissions {
    &MINISTRY_FIELD_PERMISSIONS
}

/// Copy `data` without the listed fields the role may not see
pub fn apply_role_based_visibility(
    data: &Map<String, Value>,
    role: &str,
    field_permissions: &FieldPermissions,
) -> Map<String, Value> {
    data.iter()
        .filter(|(key, _)| match field_permissions.get(key.as_str()) {
            Some(allowed) => allowed.iter().any(|r| r == role),
            None => true,
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Serialize a DTO and redact it for `role`. Non-object values are
/// returned as serialized.
pub fn redact_dto<T: Serialize>(
    dto: &T,
    role: &str,
    field_permissions: &FieldPermissions,
) -> Result<Value, serde_json::Error> {
    let value = serde_json::to_value(dto)?;
    Ok(match value {
        Value::Object(map) => {
            Value::Object(apply_role_based_visibility(&map, role, field_permissions))
        }
        other => other,
    })
}
