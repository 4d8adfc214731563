use crate::dto::{CommunityMinistryContext, CommunityMinistryMetrics, MinistryCommunity};
use crate::models::CommunityRow;
use crate::schema::registry;

use super::{check_output, defaults};

pub fn to_ministry_community_dto(community: &CommunityRow) -> MinistryCommunity {
    let dto = MinistryCommunity {
        id: community.id,
        name: community.name.clone(),
        slug: community.slug.clone(),
        description: community.description.clone().unwrap_or_default(),
        community_type: community.community_type.clone(),
        geographic_focus: community.geographic_focus.clone().unwrap_or_default(),
        cultural_context: community
            .cultural_context
            .clone()
            .unwrap_or_else(|| defaults::COMMUNITY_CULTURAL_CONTEXT.to_string()),
        language_primary: community
            .language_primary
            .clone()
            .unwrap_or_else(|| defaults::LANGUAGE.to_string()),
        languages_supported: community
            .languages_supported
            .clone()
            .unwrap_or_else(defaults::languages_supported),
        visibility: community
            .visibility
            .clone()
            .unwrap_or_else(|| defaults::COMMUNITY_VISIBILITY.to_string()),
        join_approval_required: community.join_approval_required.unwrap_or(false),
        max_members: community.max_members,
        allow_guest_posts: community.allow_guest_posts.unwrap_or(false),
        moderation_level: community
            .moderation_level
            .clone()
            .unwrap_or_else(|| defaults::MODERATION_LEVEL.to_string()),
        current_member_count: community.current_member_count.unwrap_or(0),
        total_posts_count: community.total_posts_count.unwrap_or(0),
        guidelines: community.guidelines.clone(),
        rules: community.rules.as_ref().map(|r| r.0.clone()).unwrap_or_default(),
        created_by: community.created_by,
        created_at: community.created_at,
        updated_at: community.updated_at,

        ministry_context: CommunityMinistryContext {
            target_ministry_roles: Vec::new(),
            theological_focus: Vec::new(),
            ministry_stage: defaults::MINISTRY_STAGE.to_string(),
            geographic_scope: defaults::GEOGRAPHIC_SCOPE.to_string(),
        },
        ministry_metrics: CommunityMinistryMetrics::default(),
    };

    tracing::trace!(community_id = %community.id, "mapped community");
    check_output("community", registry::community(), &dto);
    dto
}
