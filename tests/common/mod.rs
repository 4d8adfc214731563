#![allow(dead_code)]

use anyhow::Result;
use serde_json::{json, Value};
use uuid::Uuid;

use ministry_platform::models::{
    CommunityRow, ContentItemRow, OrganizationMembershipRow, OrganizationRow, UserProfileRow,
};

pub const CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// Merge `overrides` into `base`; a `null` override clears the key
fn merge(mut base: Value, overrides: Value) -> Value {
    if let (Some(target), Value::Object(extra)) = (base.as_object_mut(), overrides) {
        for (k, v) in extra {
            target.insert(k, v);
        }
    }
    base
}

/// A row with only its non-null columns set
pub fn sparse_organization(overrides: Value) -> Result<OrganizationRow> {
    let base = json!({
        "id": Uuid::new_v4(),
        "name": "Grace Fellowship",
        "slug": "grace-fellowship",
        "organizationType": "church",
        "createdAt": CREATED_AT,
        "updatedAt": CREATED_AT
    });
    Ok(serde_json::from_value(merge(base, overrides))?)
}

pub fn membership(role: &str, permissions: Value) -> Result<OrganizationMembershipRow> {
    let row = json!({
        "id": Uuid::new_v4(),
        "userId": Uuid::new_v4(),
        "organizationId": Uuid::new_v4(),
        "role": role,
        "status": "active",
        "permissions": permissions,
        "createdAt": CREATED_AT,
        "updatedAt": CREATED_AT
    });
    Ok(serde_json::from_value(row)?)
}

pub fn sparse_user_profile(overrides: Value) -> Result<UserProfileRow> {
    let base = json!({
        "id": Uuid::new_v4(),
        "email": "leader@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "ministryRole": "church_planter",
        "createdAt": CREATED_AT,
        "updatedAt": CREATED_AT
    });
    Ok(serde_json::from_value(merge(base, overrides))?)
}

pub fn sparse_content_item(overrides: Value) -> Result<ContentItemRow> {
    let base = json!({
        "id": Uuid::new_v4(),
        "title": "Planting in the city",
        "slug": "planting-in-the-city",
        "contentType": "article",
        "authorId": Uuid::new_v4(),
        "createdAt": CREATED_AT,
        "updatedAt": CREATED_AT
    });
    Ok(serde_json::from_value(merge(base, overrides))?)
}

pub fn sparse_community(overrides: Value) -> Result<CommunityRow> {
    let base = json!({
        "id": Uuid::new_v4(),
        "name": "Planters Circle",
        "slug": "planters-circle",
        "communityType": "peer_learning",
        "createdBy": Uuid::new_v4(),
        "createdAt": CREATED_AT,
        "updatedAt": CREATED_AT
    });
    Ok(serde_json::from_value(merge(base, overrides))?)
}
