use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::shared::PersonalizedRecommendations;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryRelevance {
    pub target_ministry_roles: Vec<String>,
    pub cultural_adaptations: Vec<String>,
    pub theological_alignment: Vec<String>,
    pub practical_application: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryScoring {
    pub leadership_potential: f64,
    pub ministry_effectiveness: f64,
    pub cultural_competency: f64,
    pub theological_depth: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageAnalytics {
    pub total_completions: i64,
    /// Minutes
    pub average_completion_time: f64,
    pub completion_rate: f64,
    pub user_satisfaction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryAssessment {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub assessment_type: String,
    pub questions_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passing_score: Option<i32>,
    pub version: String,
    pub language: String,
    pub cultural_adaptation: String,
    pub research_backed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability_score: Option<f64>,
    pub instructions: String,
    pub scoring_method: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub ministry_relevance: MinistryRelevance,
    pub ministry_scoring: MinistryScoring,
    pub usage_analytics: UsageAnalytics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApestProfile {
    pub apostolic: i32,
    pub prophetic: i32,
    pub evangelistic: i32,
    pub shepherding: i32,
    pub teaching: i32,
    pub dominant: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_percentage: i32,
    pub raw_scores: BTreeMap<String, f64>,
    pub total_score: i32,
    pub max_possible_score: i32,
    pub apostolic_score: i32,
    pub prophetic_score: i32,
    pub evangelistic_score: i32,
    pub shepherding_score: i32,
    pub teaching_score: i32,
    pub normalized_scores: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_gift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_gift: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_consistency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<i32>,
    pub cultural_adjustment_applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_adjustment_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub personalized_recommendations: PersonalizedRecommendations,
    pub suggested_peers: Vec<Uuid>,
    pub complementary_gifts: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    // Computed
    pub is_completed: bool,
    pub is_in_progress: bool,
    pub duration_text: String,
    pub score_percentage: i64,
    pub apest_profile: ApestProfile,
    pub completion_status: String,
}
