use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user_profile::MinistryUserProfile;

/// The caller's resolved role and permissions within one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationContext {
    pub organization_id: Uuid,
    pub user_role: String,
    pub permissions: Vec<String>,
    pub is_owner: bool,
    pub is_admin: bool,
    pub can_manage_users: bool,
    pub can_manage_content: bool,
    pub can_view_analytics: bool,
    pub can_manage_subscriptions: bool,
}

impl OrganizationContext {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthMinistryCombined {
    pub auth: AuthUser,
    pub profile: MinistryUserProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_context: Option<OrganizationContext>,
    pub permissions: Vec<String>,
    pub ministry_tier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub id: Uuid,
    pub role: String,
    pub permissions: Vec<String>,
    pub ministry_tier: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationScoped<T> {
    pub data: T,
    pub organization_context: OrganizationContext,
    pub user_context: UserContext,
    pub access_level: String,
}
