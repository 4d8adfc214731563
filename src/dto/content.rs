use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::models::Attachment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMinistryContext {
    pub target_ministry_roles: Vec<String>,
    pub theological_depth: String,
    pub practical_application: String,
    pub cultural_relevance: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryImpact {
    pub ministry_effectiveness_score: f64,
    pub leadership_development_value: f64,
    pub theological_accuracy: f64,
    pub practical_applicability: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryEngagement {
    pub ministry_role_engagement: BTreeMap<String, Value>,
    pub cultural_context_engagement: BTreeMap<String, Value>,
    pub theological_theme_engagement: BTreeMap<String, Value>,
    pub practical_application_engagement: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryContentItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub content_type: String,
    pub format: String,
    pub status: String,
    pub visibility: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_source: Option<String>,
    pub license_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category_id: Option<Uuid>,
    pub secondary_categories: Vec<Uuid>,
    pub tags: Vec<String>,
    pub theological_themes: Vec<String>,
    pub author_id: Uuid,
    pub co_authors: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_reading_time: Option<i32>,
    pub view_count: i32,
    pub like_count: i32,
    pub share_count: i32,
    pub comment_count: i32,
    pub bookmark_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_order: Option<i32>,
    pub network_amplification_score: f64,
    pub cross_reference_count: i32,
    pub ai_enhanced: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    pub ai_key_points: Vec<String>,
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    pub attribution_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub ministry_context: ContentMinistryContext,
    pub ministry_impact: MinistryImpact,
    pub ministry_engagement: MinistryEngagement,
}
