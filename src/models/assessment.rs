use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::dto::PersonalizedRecommendations;

/// An assessment definition (`assessments` table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub assessment_type: String,
    pub questions_count: i32,
    #[serde(default)]
    pub estimated_duration: Option<i32>,
    #[serde(default)]
    pub passing_score: Option<i32>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub cultural_adaptation: Option<String>,
    #[serde(default)]
    pub research_backed: Option<bool>,
    #[serde(default)]
    pub validity_score: Option<Decimal>,
    #[serde(default)]
    pub reliability_score: Option<Decimal>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub scoring_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One user's attempt at an assessment (`user_assessments` table)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserAssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completion_percentage: Option<i32>,
    #[serde(default)]
    pub raw_scores: Option<Json<BTreeMap<String, f64>>>,
    #[serde(default)]
    pub total_score: Option<i32>,
    #[serde(default)]
    pub max_possible_score: Option<i32>,
    #[serde(default)]
    pub apostolic_score: Option<i32>,
    #[serde(default)]
    pub prophetic_score: Option<i32>,
    #[serde(default)]
    pub evangelistic_score: Option<i32>,
    #[serde(default)]
    pub shepherding_score: Option<i32>,
    #[serde(default)]
    pub teaching_score: Option<i32>,
    #[serde(default)]
    pub normalized_scores: Option<Json<BTreeMap<String, f64>>>,
    #[serde(default)]
    pub primary_gift: Option<String>,
    #[serde(default)]
    pub secondary_gift: Option<String>,
    #[serde(default)]
    pub response_consistency: Option<Decimal>,
    /// Minutes spent on the attempt
    #[serde(default)]
    pub completion_time: Option<i32>,
    #[serde(default)]
    pub confidence_level: Option<i32>,
    #[serde(default)]
    pub cultural_adjustment_applied: Option<bool>,
    #[serde(default)]
    pub cultural_adjustment_factor: Option<Decimal>,
    #[serde(default)]
    pub ai_insights: Option<String>,
    #[serde(default)]
    pub personalized_recommendations: Option<Json<PersonalizedRecommendations>>,
    #[serde(default)]
    pub suggested_peers: Option<Json<Vec<Uuid>>>,
    #[serde(default)]
    pub complementary_gifts: Option<Json<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
