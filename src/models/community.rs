use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub community_type: String,
    #[serde(default)]
    pub geographic_focus: Option<Vec<String>>,
    #[serde(default)]
    pub cultural_context: Option<String>,
    #[serde(default)]
    pub language_primary: Option<String>,
    #[serde(default)]
    pub languages_supported: Option<Vec<String>>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub join_approval_required: Option<bool>,
    #[serde(default)]
    pub max_members: Option<i32>,
    #[serde(default)]
    pub allow_guest_posts: Option<bool>,
    #[serde(default)]
    pub moderation_level: Option<String>,
    #[serde(default)]
    pub current_member_count: Option<i32>,
    #[serde(default)]
    pub total_posts_count: Option<i32>,
    #[serde(default)]
    pub guidelines: Option<String>,
    #[serde(default)]
    pub rules: Option<Json<Vec<String>>>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
