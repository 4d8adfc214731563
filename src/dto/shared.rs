use serde::{Deserialize, Serialize};

use crate::models::UserProfileRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            secondary: "#64748b".to_string(),
            accent: "#059669".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotifications {
    pub daily_digest: bool,
    pub collaboration_requests: bool,
    pub revenue_reports: bool,
    pub community_updates: bool,
}

impl Default for EmailNotifications {
    fn default() -> Self {
        Self {
            daily_digest: true,
            collaboration_requests: true,
            revenue_reports: true,
            community_updates: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub public_profile: bool,
    pub show_assessment_results: bool,
    pub allow_networking: bool,
    pub share_analytics: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            public_profile: true,
            show_assessment_results: false,
            allow_networking: true,
            share_analytics: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedRecommendations {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub growth_areas: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub content_recommendations: Vec<String>,
}

/// Per-dimension APEST scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApestScores {
    pub apostolic: i32,
    pub prophetic: i32,
    pub evangelistic: i32,
    pub shepherding: i32,
    pub teaching: i32,
}

impl ApestScores {
    /// Scores stored on a profile; each missing column counts as zero.
    pub fn from_profile(profile: &UserProfileRow) -> Self {
        Self {
            apostolic: profile.assessment_movement_alignment.unwrap_or(0),
            prophetic: profile.assessment_audience_engagement.unwrap_or(0),
            evangelistic: profile.assessment_content_readiness.unwrap_or(0),
            shepherding: profile.assessment_revenue_potential.unwrap_or(0),
            teaching: profile.assessment_strategic_fit.unwrap_or(0),
        }
    }

    pub fn dimensions(&self) -> [(&'static str, i32); 5] {
        [
            ("apostolic", self.apostolic),
            ("prophetic", self.prophetic),
            ("evangelistic", self.evangelistic),
            ("shepherding", self.shepherding),
            ("teaching", self.teaching),
        ]
    }

    pub fn total(&self) -> i64 {
        self.dimensions().iter().map(|(_, score)| i64::from(*score)).sum()
    }

    /// Highest scoring dimension; ties resolve in APEST order. `None` when
    /// every dimension is zero.
    pub fn dominant(&self) -> Option<&'static str> {
        let mut best: Option<(&'static str, i32)> = None;
        for (name, score) in self.dimensions() {
            if score <= 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= score => {}
                _ => best = Some((name, score)),
            }
        }
        best.map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub total_content_created: i64,
    pub total_views: i64,
    pub total_likes: i64,
    pub total_shares: i64,
    pub engagement_rate: f64,
    pub average_content_rating: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityMetrics {
    pub communities_joined: i64,
    pub posts_created: i64,
    pub comments_made: i64,
    pub collaborations_participated: i64,
    pub network_connections: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMetrics {
    pub assessments_completed: i64,
    pub content_items_completed: i64,
    pub learning_streak: i64,
    /// Minutes
    pub total_learning_time: i64,
    pub certificates_earned: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistryMetrics {
    pub apest_scores: ApestScores,
    pub content_metrics: ContentMetrics,
    pub community_metrics: CommunityMetrics,
    pub learning_metrics: LearningMetrics,
}
