use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::OrganizationContext;
use super::shared::{BrandColors, EmailNotifications, MinistryMetrics, PrivacySettings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformEngagement {
    pub last_active_at: DateTime<Utc>,
    pub total_sessions: i64,
    /// Minutes
    pub average_session_duration: f64,
    pub favorite_content_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryUserProfile {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub ministry_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denomination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_in_ministry: Option<i32>,
    pub country_code: String,
    pub timezone: String,
    pub language_primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_tier: Option<String>,
    pub subscription_tier: String,
    pub theological_focus: Vec<String>,
    pub brand_colors: BrandColors,
    pub email_notifications: EmailNotifications,
    pub privacy_settings: PrivacySettings,
    pub onboarding_completed: bool,
    pub onboarding_step: i32,
    pub account_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_context: Option<OrganizationContext>,
    pub ministry_metrics: MinistryMetrics,
    pub ministry_specialization: Vec<String>,
    pub target_audience: Vec<String>,
    pub ministry_goals: Vec<String>,
    pub network_amplification_score: f64,
    pub influence_radius: i64,
    pub platform_engagement: PlatformEngagement,
}
