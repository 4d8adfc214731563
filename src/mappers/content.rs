use crate::dto::{ContentMinistryContext, MinistryContentItem, MinistryEngagement, MinistryImpact};
use crate::models::ContentItemRow;
use crate::schema::registry;

use super::metrics::{content_amplification_score, EngagementCounts};
use super::{check_output, decimal_to_f64, defaults};

pub fn to_ministry_content_item_dto(content: &ContentItemRow) -> MinistryContentItem {
    let counts = EngagementCounts::from_content(content);

    // A stored score wins; otherwise derive it from the engagement counters
    let network_amplification_score = content
        .network_amplification_score
        .map(decimal_to_f64)
        .unwrap_or_else(|| content_amplification_score(&counts));

    let dto = MinistryContentItem {
        id: content.id,
        title: content.title.clone(),
        slug: content.slug.clone(),
        excerpt: content.excerpt.clone().unwrap_or_default(),
        content: content.content.clone().unwrap_or_default(),
        content_type: content.content_type.clone(),
        format: content
            .format
            .clone()
            .unwrap_or_else(|| defaults::CONTENT_FORMAT.to_string()),
        status: content
            .status
            .clone()
            .unwrap_or_else(|| defaults::CONTENT_STATUS.to_string()),
        visibility: content
            .visibility
            .clone()
            .unwrap_or_else(|| defaults::CONTENT_VISIBILITY.to_string()),
        featured_image_url: content.featured_image_url.clone(),
        video_url: content.video_url.clone(),
        audio_url: content.audio_url.clone(),
        meta_title: content.meta_title.clone(),
        meta_description: content.meta_description.clone(),
        original_source: content.original_source.clone(),
        license_type: content
            .license_type
            .clone()
            .unwrap_or_else(|| defaults::CONTENT_LICENSE_TYPE.to_string()),
        primary_category_id: content.primary_category_id,
        secondary_categories: content.secondary_categories.clone().unwrap_or_default(),
        tags: content.tags.clone().unwrap_or_default(),
        theological_themes: content.theological_themes.clone().unwrap_or_default(),
        author_id: content.author_id,
        co_authors: content.co_authors.clone().unwrap_or_default(),
        word_count: content.word_count,
        estimated_reading_time: content.estimated_reading_time,
        view_count: content.view_count.unwrap_or(0),
        like_count: content.like_count.unwrap_or(0),
        share_count: content.share_count.unwrap_or(0),
        comment_count: content.comment_count.unwrap_or(0),
        bookmark_count: content.bookmark_count.unwrap_or(0),
        series_id: content.series_id,
        series_order: content.series_order,
        network_amplification_score,
        cross_reference_count: content.cross_reference_count.unwrap_or(0),
        ai_enhanced: content.ai_enhanced.unwrap_or(false),
        ai_summary: content.ai_summary.clone(),
        ai_key_points: content.ai_key_points.as_ref().map(|k| k.0.clone()).unwrap_or_default(),
        attachments: content.attachments.as_ref().map(|a| a.0.clone()).unwrap_or_default(),
        canonical_url: content.canonical_url.clone(),
        scheduled_at: content.scheduled_at,
        attribution_required: content.attribution_required.unwrap_or(true),
        published_at: content.published_at,
        created_at: content.created_at,
        updated_at: content.updated_at,

        ministry_context: ContentMinistryContext {
            target_ministry_roles: Vec::new(),
            theological_depth: defaults::THEOLOGICAL_DEPTH.to_string(),
            practical_application: defaults::PRACTICAL_APPLICATION.to_string(),
            cultural_relevance: vec![defaults::GLOBAL_CULTURE.to_string()],
        },
        ministry_impact: MinistryImpact::default(),
        ministry_engagement: MinistryEngagement::default(),
    };

    tracing::trace!(content_id = %content.id, "mapped content item");
    check_output("content item", registry::content_item(), &dto);
    dto
}
