use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMinistryContext {
    pub target_ministry_roles: Vec<String>,
    pub theological_focus: Vec<String>,
    pub ministry_stage: String,
    pub geographic_scope: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMinistryMetrics {
    pub active_ministry_leaders: i64,
    pub ministry_stage_distribution: BTreeMap<String, i64>,
    pub theological_diversity: f64,
    pub geographic_diversity: f64,
    pub collaboration_success: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryCommunity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub community_type: String,
    pub geographic_focus: Vec<String>,
    pub cultural_context: String,
    pub language_primary: String,
    pub languages_supported: Vec<String>,
    pub visibility: String,
    pub join_approval_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_members: Option<i32>,
    pub allow_guest_posts: bool,
    pub moderation_level: String,
    pub current_member_count: i32,
    pub total_posts_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
    pub rules: Vec<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub ministry_context: CommunityMinistryContext,
    pub ministry_metrics: CommunityMinistryMetrics,
}
