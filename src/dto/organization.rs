use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Address;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMetrics {
    pub total_members: i64,
    pub active_members: i64,
    pub total_content: i64,
    pub total_assessments: i64,
    pub average_engagement: f64,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryCapacity {
    pub max_content_creators: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_assessments: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_communities: Option<i32>,
    pub custom_branding: bool,
    pub api_access: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryOrganization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub organization_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_category: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_owner_id: Option<Uuid>,
    pub license_type: String,
    pub max_users: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub ministry_focus: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theological_tradition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denominational_affiliation: Option<String>,
    pub organization_metrics: OrganizationMetrics,
    pub ministry_capacity: MinistryCapacity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMembership {
    pub id: Uuid,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub role: String,
    pub status: String,
    pub permissions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invited_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Computed
    pub is_active: bool,
    pub is_pending: bool,
    pub can_manage: bool,
    pub role_display: String,
    pub status_display: String,
}
