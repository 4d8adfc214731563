use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemRow {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub content_type: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub original_source: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub primary_category_id: Option<Uuid>,
    #[serde(default)]
    pub secondary_categories: Option<Vec<Uuid>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub theological_themes: Option<Vec<String>>,
    pub author_id: Uuid,
    #[serde(default)]
    pub co_authors: Option<Vec<Uuid>>,
    #[serde(default)]
    pub word_count: Option<i32>,
    #[serde(default)]
    pub estimated_reading_time: Option<i32>,

    // Engagement counters
    #[serde(default)]
    pub view_count: Option<i32>,
    #[serde(default)]
    pub like_count: Option<i32>,
    #[serde(default)]
    pub share_count: Option<i32>,
    #[serde(default)]
    pub comment_count: Option<i32>,
    #[serde(default)]
    pub bookmark_count: Option<i32>,

    #[serde(default)]
    pub series_id: Option<Uuid>,
    #[serde(default)]
    pub series_order: Option<i32>,
    #[serde(default)]
    pub network_amplification_score: Option<Decimal>,
    #[serde(default)]
    pub cross_reference_count: Option<i32>,
    #[serde(default)]
    pub ai_enhanced: Option<bool>,
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub ai_key_points: Option<Json<Vec<String>>>,
    #[serde(default)]
    pub attachments: Option<Json<Vec<Attachment>>>,
    #[serde(default)]
    pub canonical_url: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attribution_required: Option<bool>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
