//! Default literals substituted for null columns.
//!
//! These are product decisions; keep them verbatim.

// Organization
pub const ORGANIZATION_STATUS: &str = "trial";
pub const ORGANIZATION_LICENSE_TYPE: &str = "individual";
pub const ORGANIZATION_MAX_USERS: i32 = 1;
pub const ORGANIZATION_AVERAGE_ENGAGEMENT: f64 = 0.75;
pub const ORGANIZATION_GROWTH_RATE: f64 = 0.1;

// Membership
pub const MEMBERSHIP_STATUS: &str = "pending";

// User profile
pub const LANGUAGE: &str = "en";
pub const SUBSCRIPTION_TIER: &str = "free";
pub const ACCOUNT_STATUS: &str = "pending_verification";
pub const ONBOARDING_STEP: i32 = 1;

// Assessment
pub const ASSESSMENT_VERSION: &str = "1.0";
pub const CULTURAL_ADAPTATION: &str = "universal";
pub const SCORING_METHOD: &str = "likert_5";
pub const ASSESSMENT_STATUS: &str = "draft";
pub const GLOBAL_CULTURE: &str = "global";
pub const UNKNOWN_GIFT: &str = "unknown";
pub const NOT_COMPLETED: &str = "Not completed";

// Content
pub const CONTENT_FORMAT: &str = "text";
pub const CONTENT_STATUS: &str = "draft";
pub const CONTENT_VISIBILITY: &str = "public";
pub const CONTENT_LICENSE_TYPE: &str = "all_rights_reserved";
pub const THEOLOGICAL_DEPTH: &str = "intermediate";
pub const PRACTICAL_APPLICATION: &str = "practical";

// Community
pub const COMMUNITY_CULTURAL_CONTEXT: &str = "global";
pub const COMMUNITY_VISIBILITY: &str = "public";
pub const MODERATION_LEVEL: &str = "moderated";
pub const MINISTRY_STAGE: &str = "developing";
pub const GEOGRAPHIC_SCOPE: &str = "local";

// Ministry tiers
pub const TIER_CORE: &str = "core";
pub const TIER_BASIC: &str = "basic";

pub fn languages_supported() -> Vec<String> {
    vec![LANGUAGE.to_string()]
}
