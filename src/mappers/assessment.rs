use crate::dto::{
    ApestProfile, ApestScores, MinistryAssessment, MinistryRelevance, MinistryScoring,
    UsageAnalytics, UserAssessment,
};
use crate::models::{AssessmentRow, UserAssessmentRow};
use crate::schema::registry;

use super::metrics::{format_duration, score_percentage};
use super::{check_output, decimal_to_f64, defaults};

pub fn to_ministry_assessment_dto(assessment: &AssessmentRow) -> MinistryAssessment {
    let cultural_adaptation = assessment
        .cultural_adaptation
        .clone()
        .unwrap_or_else(|| defaults::CULTURAL_ADAPTATION.to_string());

    // A universal instrument is relevant everywhere
    let relevant_culture = if cultural_adaptation == defaults::CULTURAL_ADAPTATION {
        defaults::GLOBAL_CULTURE.to_string()
    } else {
        cultural_adaptation.clone()
    };

    let dto = MinistryAssessment {
        id: assessment.id,
        name: assessment.name.clone(),
        slug: assessment.slug.clone(),
        description: assessment.description.clone().unwrap_or_default(),
        assessment_type: assessment.assessment_type.clone(),
        questions_count: assessment.questions_count,
        estimated_duration: assessment.estimated_duration,
        passing_score: assessment.passing_score,
        version: assessment
            .version
            .clone()
            .unwrap_or_else(|| defaults::ASSESSMENT_VERSION.to_string()),
        language: assessment
            .language
            .clone()
            .unwrap_or_else(|| defaults::LANGUAGE.to_string()),
        cultural_adaptation,
        research_backed: assessment.research_backed.unwrap_or(false),
        validity_score: assessment.validity_score.map(decimal_to_f64),
        reliability_score: assessment.reliability_score.map(decimal_to_f64),
        instructions: assessment.instructions.clone().unwrap_or_default(),
        scoring_method: assessment
            .scoring_method
            .clone()
            .unwrap_or_else(|| defaults::SCORING_METHOD.to_string()),
        status: assessment
            .status
            .clone()
            .unwrap_or_else(|| defaults::ASSESSMENT_STATUS.to_string()),
        published_at: assessment.published_at,
        created_at: assessment.created_at,
        updated_at: assessment.updated_at,

        ministry_relevance: MinistryRelevance {
            cultural_adaptations: vec![relevant_culture],
            ..MinistryRelevance::default()
        },
        ministry_scoring: MinistryScoring::default(),
        usage_analytics: UsageAnalytics::default(),
    };

    tracing::trace!(assessment_id = %assessment.id, "mapped assessment");
    check_output("assessment", registry::assessment(), &dto);
    dto
}

/// Map one user's assessment attempt, adding the progress and APEST profile
/// fields the UI renders directly.
pub fn to_user_assessment_dto(row: &UserAssessmentRow) -> UserAssessment {
    let scores = ApestScores {
        apostolic: row.apostolic_score.unwrap_or(0),
        prophetic: row.prophetic_score.unwrap_or(0),
        evangelistic: row.evangelistic_score.unwrap_or(0),
        shepherding: row.shepherding_score.unwrap_or(0),
        teaching: row.teaching_score.unwrap_or(0),
    };
    let completion_percentage = row.completion_percentage.unwrap_or(0);
    let is_completed = row.completed_at.is_some();

    UserAssessment {
        id: row.id,
        user_id: row.user_id,
        assessment_id: row.assessment_id,
        started_at: row.started_at,
        completed_at: row.completed_at,
        completion_percentage,
        raw_scores: row.raw_scores.as_ref().map(|s| s.0.clone()).unwrap_or_default(),
        total_score: row.total_score.unwrap_or(0),
        max_possible_score: row.max_possible_score.unwrap_or(0),
        apostolic_score: scores.apostolic,
        prophetic_score: scores.prophetic,
        evangelistic_score: scores.evangelistic,
        shepherding_score: scores.shepherding,
        teaching_score: scores.teaching,
        normalized_scores: row
            .normalized_scores
            .as_ref()
            .map(|s| s.0.clone())
            .unwrap_or_default(),
        primary_gift: row.primary_gift.clone(),
        secondary_gift: row.secondary_gift.clone(),
        response_consistency: row.response_consistency.map(decimal_to_f64),
        completion_time: row.completion_time,
        confidence_level: row.confidence_level,
        cultural_adjustment_applied: row.cultural_adjustment_applied.unwrap_or(false),
        cultural_adjustment_factor: row.cultural_adjustment_factor.map(decimal_to_f64),
        ai_insights: row.ai_insights.clone(),
        personalized_recommendations: row
            .personalized_recommendations
            .as_ref()
            .map(|r| r.0.clone())
            .unwrap_or_default(),
        suggested_peers: row.suggested_peers.as_ref().map(|p| p.0.clone()).unwrap_or_default(),
        complementary_gifts: row
            .complementary_gifts
            .as_ref()
            .map(|g| g.0.clone())
            .unwrap_or_default(),
        created_at: row.created_at,
        updated_at: row.updated_at,

        is_completed,
        is_in_progress: !is_completed && completion_percentage > 0,
        duration_text: format_duration(row.completion_time)
            .unwrap_or_else(|| defaults::NOT_COMPLETED.to_string()),
        score_percentage: score_percentage(row.total_score, row.max_possible_score).unwrap_or(0),
        apest_profile: ApestProfile {
            apostolic: scores.apostolic,
            prophetic: scores.prophetic,
            evangelistic: scores.evangelistic,
            shepherding: scores.shepherding,
            teaching: scores.teaching,
            dominant: row
                .primary_gift
                .clone()
                .or_else(|| scores.dominant().map(str::to_string))
                .unwrap_or_else(|| defaults::UNKNOWN_GIFT.to_string()),
            secondary: row
                .secondary_gift
                .clone()
                .unwrap_or_else(|| defaults::UNKNOWN_GIFT.to_string()),
        },
        completion_status: if is_completed { "completed" } else { "in_progress" }.to_string(),
    }
}
