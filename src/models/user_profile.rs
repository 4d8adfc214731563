use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::dto::{BrandColors, EmailNotifications, PrivacySettings};

/// A `user_profiles` row. The five `assessment_*` columns hold the
/// APEST dimension scores (see `ApestScores::from_profile`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileRow {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub ministry_role: String,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub years_in_ministry: Option<i32>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub language_primary: Option<String>,
    #[serde(default)]
    pub cultural_context: Option<String>,
    #[serde(default)]
    pub leader_tier: Option<String>,
    #[serde(default)]
    pub subscription_tier: Option<String>,
    #[serde(default)]
    pub theological_focus: Option<Vec<String>>,
    #[serde(default)]
    pub brand_colors: Option<Json<BrandColors>>,
    #[serde(default)]
    pub email_notifications: Option<Json<EmailNotifications>>,
    #[serde(default)]
    pub privacy_settings: Option<Json<PrivacySettings>>,
    #[serde(default)]
    pub onboarding_completed: Option<bool>,
    #[serde(default)]
    pub onboarding_step: Option<i32>,
    #[serde(default)]
    pub account_status: Option<String>,

    // APEST dimensions
    #[serde(default)]
    pub assessment_movement_alignment: Option<i32>,
    #[serde(default)]
    pub assessment_audience_engagement: Option<i32>,
    #[serde(default)]
    pub assessment_content_readiness: Option<i32>,
    #[serde(default)]
    pub assessment_revenue_potential: Option<i32>,
    #[serde(default)]
    pub assessment_strategic_fit: Option<i32>,
    #[serde(default)]
    pub assessment_total: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
}
