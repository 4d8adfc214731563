use crate::config::config;
use crate::dto::{MinistryUserProfile, OrganizationContext, PlatformEngagement};
use crate::models::UserProfileRow;
use crate::schema::registry;

use super::metrics::{aggregate_ministry_metrics, apest_amplification_score};
use super::{check_output, defaults};

/// Map a profile row. The organization context, when given, is attached
/// as-is; without it the field is omitted from the DTO.
pub fn to_ministry_user_profile_dto(
    profile: &UserProfileRow,
    organization_context: Option<&OrganizationContext>,
) -> MinistryUserProfile {
    let ministry_metrics = aggregate_ministry_metrics(profile, None, None, None);
    let network_amplification_score = apest_amplification_score(&ministry_metrics.apest_scores);

    let dto = MinistryUserProfile {
        id: profile.id,
        email: profile.email.clone(),
        first_name: profile.first_name.clone(),
        last_name: profile.last_name.clone(),
        display_name: profile.display_name.clone().unwrap_or_default(),
        bio: profile.bio.clone().unwrap_or_default(),
        avatar_url: profile.avatar_url.clone().unwrap_or_default(),
        ministry_role: profile.ministry_role.clone(),
        denomination: profile.denomination.clone(),
        organization_name: profile.organization_name.clone(),
        years_in_ministry: profile.years_in_ministry,
        country_code: profile.country_code.clone().unwrap_or_default(),
        timezone: profile.timezone.clone().unwrap_or_default(),
        language_primary: profile
            .language_primary
            .clone()
            .unwrap_or_else(|| defaults::LANGUAGE.to_string()),
        cultural_context: profile.cultural_context.clone(),
        leader_tier: profile.leader_tier.clone(),
        subscription_tier: profile
            .subscription_tier
            .clone()
            .unwrap_or_else(|| defaults::SUBSCRIPTION_TIER.to_string()),
        theological_focus: profile.theological_focus.clone().unwrap_or_default(),
        brand_colors: profile
            .brand_colors
            .as_ref()
            .map(|c| c.0.clone())
            .unwrap_or_else(|| config().mapper.brand_colors.clone()),
        email_notifications: profile
            .email_notifications
            .as_ref()
            .map(|n| n.0.clone())
            .unwrap_or_default(),
        privacy_settings: profile
            .privacy_settings
            .as_ref()
            .map(|p| p.0.clone())
            .unwrap_or_default(),
        onboarding_completed: profile.onboarding_completed.unwrap_or(false),
        onboarding_step: profile.onboarding_step.unwrap_or(defaults::ONBOARDING_STEP),
        account_status: profile
            .account_status
            .clone()
            .unwrap_or_else(|| defaults::ACCOUNT_STATUS.to_string()),
        created_at: profile.created_at,
        updated_at: profile.updated_at,
        last_active_at: profile.last_active_at,

        organization_context: organization_context.cloned(),
        ministry_metrics,
        ministry_specialization: Vec::new(),
        target_audience: Vec::new(),
        ministry_goals: Vec::new(),
        network_amplification_score,
        influence_radius: 0,
        platform_engagement: PlatformEngagement {
            last_active_at: profile.last_active_at.unwrap_or(profile.updated_at),
            total_sessions: 0,
            average_session_duration: 0.0,
            favorite_content_types: Vec::new(),
        },
    };

    tracing::trace!(user_id = %profile.id, "mapped user profile");
    check_output("user profile", registry::user_profile(), &dto);
    dto
}

/// "core" once the apostolic (movement alignment) score is on file,
/// "basic" otherwise. The other dimensions do not count.
pub(crate) fn ministry_tier(profile: &MinistryUserProfile) -> &'static str {
    if profile.ministry_metrics.apest_scores.apostolic != 0 {
        defaults::TIER_CORE
    } else {
        defaults::TIER_BASIC
    }
}
