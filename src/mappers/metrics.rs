//! Derived scores. Pure functions of row fields, recomputed on every call.

use crate::dto::{
    ApestScores, CommunityMetrics, ContentMetrics, LearningMetrics, MinistryMetrics,
};
use crate::models::{ContentItemRow, UserProfileRow};

const MAX_SCORE: f64 = 100.0;

/// Weight of a share relative to the other interactions
const SHARE_WEIGHT: i64 = 3;

/// Engagement counters of a content item, nulls already counted as zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounts {
    pub views: i64,
    pub likes: i64,
    pub shares: i64,
    pub comments: i64,
    pub bookmarks: i64,
}

impl EngagementCounts {
    pub fn from_content(row: &ContentItemRow) -> Self {
        let count = |v: Option<i32>| i64::from(v.unwrap_or(0).max(0));
        Self {
            views: count(row.view_count),
            likes: count(row.like_count),
            shares: count(row.share_count),
            comments: count(row.comment_count),
            bookmarks: count(row.bookmark_count),
        }
    }

    pub fn interactions(&self) -> i64 {
        self.likes + self.shares + self.comments + self.bookmarks
    }

    fn weighted_interactions(&self) -> i64 {
        self.likes + self.comments + self.bookmarks + SHARE_WEIGHT * self.shares
    }
}

/// Network amplification of a leader: the mean of the five APEST
/// dimensions, bounded to `0..=100`.
pub fn apest_amplification_score(scores: &ApestScores) -> f64 {
    let mean = scores.total() as f64 / scores.dimensions().len() as f64;
    mean.clamp(0.0, MAX_SCORE)
}

/// Network amplification of a content item: weighted interactions per view,
/// scaled to `0..=100`. Zero without views.
pub fn content_amplification_score(counts: &EngagementCounts) -> f64 {
    if counts.views <= 0 {
        return 0.0;
    }
    let ratio = counts.weighted_interactions() as f64 / counts.views as f64;
    (ratio * MAX_SCORE).clamp(0.0, MAX_SCORE)
}

/// Interactions per view, bounded to `0..=1`
pub fn engagement_rate(views: i64, interactions: i64) -> f64 {
    if views <= 0 || interactions <= 0 {
        return 0.0;
    }
    (interactions as f64 / views as f64).min(1.0)
}

/// Rounded percentage of `total` over `max`; `None` when either is missing
/// or zero.
pub fn score_percentage(total: Option<i32>, max: Option<i32>) -> Option<i64> {
    match (total, max) {
        (Some(total), Some(max)) if total != 0 && max != 0 => {
            Some((f64::from(total) / f64::from(max) * 100.0).round() as i64)
        }
        _ => None,
    }
}

/// "45 minutes", "2 hours", "1h 30m"
pub fn format_duration(minutes: Option<i32>) -> Option<String> {
    let minutes = minutes.filter(|m| *m > 0)?;
    let plural = |n: i32| if n == 1 { "" } else { "s" };

    if minutes < 60 {
        return Some(format!("{} minute{}", minutes, plural(minutes)));
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        Some(format!("{} hour{}", hours, plural(hours)))
    } else {
        Some(format!("{}h {}m", hours, remaining))
    }
}

impl ContentMetrics {
    /// Totals over a set of content items (typically one author's)
    pub fn from_items(items: &[ContentItemRow]) -> Self {
        let mut totals = EngagementCounts::default();
        for item in items {
            let counts = EngagementCounts::from_content(item);
            totals.views += counts.views;
            totals.likes += counts.likes;
            totals.shares += counts.shares;
            totals.comments += counts.comments;
            totals.bookmarks += counts.bookmarks;
        }

        Self {
            total_content_created: items.len() as i64,
            total_views: totals.views,
            total_likes: totals.likes,
            total_shares: totals.shares,
            engagement_rate: engagement_rate(totals.views, totals.interactions()),
            average_content_rating: 0.0,
        }
    }
}

/// APEST scores from the profile plus whichever metric blocks the caller
/// has; absent blocks are zeroed.
pub fn aggregate_ministry_metrics(
    profile: &UserProfileRow,
    content: Option<ContentMetrics>,
    community: Option<CommunityMetrics>,
    learning: Option<LearningMetrics>,
) -> MinistryMetrics {
    MinistryMetrics {
        apest_scores: ApestScores::from_profile(profile),
        content_metrics: content.unwrap_or_default(),
        community_metrics: community.unwrap_or_default(),
        learning_metrics: learning.unwrap_or_default(),
    }
}
