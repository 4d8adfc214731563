//! Field lists of the six platform entities, built once on first use.

use once_cell::sync::Lazy;
use serde_json::json;

use super::entity::EntitySchema;
use super::field::{FieldKind, FieldSpec};
use crate::access::permissions::{ROLE_ADMIN, ROLE_MEMBER, ROLE_OWNER, ROLE_VIEWER};

// Vocabularies
pub const ORGANIZATION_TYPES: &[&str] = &[
    "church",
    "denomination",
    "seminary",
    "ministry_network",
    "ministry",
    "nonprofit",
    "business",
    "other",
];
pub const ORGANIZATION_SIZES: &[&str] = &["startup", "small", "medium", "large", "enterprise"];
pub const ORGANIZATION_STATUSES: &[&str] = &["trial", "active", "inactive", "suspended", "cancelled"];
pub const MEMBERSHIP_ROLES: &[&str] = &[ROLE_OWNER, ROLE_ADMIN, ROLE_MEMBER, ROLE_VIEWER];
pub const MEMBERSHIP_STATUSES: &[&str] = &["pending", "active", "inactive", "suspended", "cancelled"];
pub const MINISTRY_ROLES: &[&str] = &[
    "senior_pastor",
    "associate_pastor",
    "church_planter",
    "denominational_leader",
    "seminary_professor",
    "seminary_student",
    "ministry_staff",
    "missionary",
    "marketplace_minister",
    "nonprofit_leader",
    "consultant",
    "academic_researcher",
    "emerging_leader",
    "other",
];
pub const CULTURAL_CONTEXTS: &[&str] = &[
    "western",
    "eastern",
    "african",
    "latin_american",
    "middle_eastern",
    "oceanic",
    "universal",
    "global",
];
pub const LEADER_TIERS: &[&str] = &["core", "network", "emerging", "community"];
pub const SUBSCRIPTION_TIERS: &[&str] = &["free", "individual", "professional", "leader", "institutional"];
pub const ACCOUNT_STATUSES: &[&str] = &["active", "inactive", "suspended", "pending_verification"];
pub const ASSESSMENT_TYPES: &[&str] = &[
    "apest",
    "mdna",
    "cultural_intelligence",
    "leadership_style",
    "spiritual_gifts",
    "other",
];
pub const SCORING_METHODS: &[&str] = &["likert_5", "likert_7", "binary", "ranking", "weighted"];
pub const ASSESSMENT_STATUSES: &[&str] = &["draft", "active", "archived", "under_review"];
pub const CONTENT_TYPES: &[&str] = &[
    "article",
    "video",
    "audio",
    "podcast",
    "book",
    "course",
    "webinar",
    "framework",
    "tool",
    "case_study",
    "interview",
    "course_lesson",
    "other",
];
pub const CONTENT_FORMATS: &[&str] = &[
    "text",
    "html",
    "markdown",
    "video",
    "audio",
    "interactive",
    "pdf",
    "presentation",
];
pub const CONTENT_STATUSES: &[&str] = &["draft", "published", "archived", "under_review", "scheduled"];
pub const CONTENT_VISIBILITIES: &[&str] = &[
    "public",
    "premium",
    "vip",
    "private",
    "organization",
    "invite_only",
];
pub const CONTENT_LICENSES: &[&str] = &[
    "all_rights_reserved",
    "creative_commons",
    "public_domain",
    "fair_use",
    "custom",
];
pub const COMMUNITY_VISIBILITIES: &[&str] = &["public", "private", "invite_only"];
pub const MODERATION_LEVELS: &[&str] = &["none", "moderated", "strict"];

const APEST_SCORE_MAX: i64 = 100;

fn score() -> FieldKind {
    FieldKind::int(0, APEST_SCORE_MAX)
}

fn count() -> FieldKind {
    FieldKind::non_negative()
}

static ORGANIZATION: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "organization",
        vec![
            FieldSpec::required("name", FieldKind::text(1, 200)),
            FieldSpec::required("slug", FieldKind::Slug),
            FieldSpec::optional("description", FieldKind::text(0, 1000)),
            FieldSpec::optional("website", FieldKind::Url),
            FieldSpec::optional("logoUrl", FieldKind::Url),
            FieldSpec::required("organizationType", FieldKind::Enum(ORGANIZATION_TYPES)),
            FieldSpec::optional("sizeCategory", FieldKind::Enum(ORGANIZATION_SIZES)),
            FieldSpec::optional("contactEmail", FieldKind::Email),
            FieldSpec::optional("contactPhone", FieldKind::text(0, 20)),
            FieldSpec::optional("address", FieldKind::JsonObject),
            // Open vocabulary: institutional plans are sold alongside the listed ones
            FieldSpec::optional("licenseType", FieldKind::text(1, 50)).with_default("individual"),
            FieldSpec::optional("maxUsers", FieldKind::int(1, i64::from(i32::MAX))).with_default(1),
            FieldSpec::optional("billingEmail", FieldKind::Email),
            FieldSpec::optional("accountOwnerId", FieldKind::Uuid),
            FieldSpec::optional("status", FieldKind::Enum(ORGANIZATION_STATUSES)).with_default("trial"),
        ],
    )
});

static ORGANIZATION_MEMBERSHIP: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "organization membership",
        vec![
            FieldSpec::required("userId", FieldKind::Uuid),
            FieldSpec::required("organizationId", FieldKind::Uuid),
            FieldSpec::required("role", FieldKind::Enum(MEMBERSHIP_ROLES)),
            FieldSpec::optional("permissions", FieldKind::TextArray).with_default(json!([])),
            FieldSpec::optional("status", FieldKind::Enum(MEMBERSHIP_STATUSES)).with_default("pending"),
            FieldSpec::optional("joinedAt", FieldKind::Timestamp),
            FieldSpec::optional("invitedAt", FieldKind::Timestamp),
            FieldSpec::optional("invitedBy", FieldKind::Uuid),
        ],
    )
});

static USER_PROFILE: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "user profile",
        vec![
            FieldSpec::required("email", FieldKind::Email),
            FieldSpec::required("firstName", FieldKind::text(1, 255)),
            FieldSpec::required("lastName", FieldKind::text(1, 255)),
            FieldSpec::optional("displayName", FieldKind::text(0, 255)),
            FieldSpec::optional("bio", FieldKind::text(0, 5000)),
            FieldSpec::optional("avatarUrl", FieldKind::Url),
            FieldSpec::required("ministryRole", FieldKind::Enum(MINISTRY_ROLES)),
            FieldSpec::optional("denomination", FieldKind::text(0, 255)),
            FieldSpec::optional("organizationName", FieldKind::text(0, 255)),
            FieldSpec::optional("yearsInMinistry", FieldKind::int(0, 100)),
            FieldSpec::optional("countryCode", FieldKind::CountryCode),
            FieldSpec::optional("timezone", FieldKind::text(0, 100)),
            FieldSpec::optional("languagePrimary", FieldKind::text(2, 10)).with_default("en"),
            FieldSpec::optional("culturalContext", FieldKind::Enum(CULTURAL_CONTEXTS)),
            FieldSpec::optional("leaderTier", FieldKind::Enum(LEADER_TIERS)),
            FieldSpec::optional("subscriptionTier", FieldKind::Enum(SUBSCRIPTION_TIERS)).with_default("free"),
            FieldSpec::optional("theologicalFocus", FieldKind::TextArray),
            FieldSpec::optional("brandColors", FieldKind::JsonObject),
            FieldSpec::optional("emailNotifications", FieldKind::JsonObject),
            FieldSpec::optional("privacySettings", FieldKind::JsonObject),
            FieldSpec::optional("onboardingCompleted", FieldKind::Boolean).with_default(false),
            FieldSpec::optional("onboardingStep", FieldKind::int(1, 10)).with_default(1),
            FieldSpec::optional("accountStatus", FieldKind::Enum(ACCOUNT_STATUSES))
                .with_default("pending_verification"),
            FieldSpec::optional("assessmentMovementAlignment", score()),
            FieldSpec::optional("assessmentAudienceEngagement", score()),
            FieldSpec::optional("assessmentContentReadiness", score()),
            FieldSpec::optional("assessmentRevenuePotential", score()),
            FieldSpec::optional("assessmentStrategicFit", score()),
            FieldSpec::optional("assessmentTotal", FieldKind::int(0, 5 * APEST_SCORE_MAX)),
            FieldSpec::optional("lastActiveAt", FieldKind::Timestamp),
        ],
    )
});

static ASSESSMENT: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "assessment",
        vec![
            FieldSpec::required("name", FieldKind::text(1, 200)),
            FieldSpec::required("slug", FieldKind::Slug),
            FieldSpec::optional("description", FieldKind::text(0, 1000)),
            FieldSpec::required("assessmentType", FieldKind::Enum(ASSESSMENT_TYPES)),
            FieldSpec::required("questionsCount", FieldKind::int(1, 1000)),
            FieldSpec::optional("estimatedDuration", FieldKind::int(1, 1440)),
            FieldSpec::optional("passingScore", count()),
            FieldSpec::optional("validityScore", FieldKind::number(0.0, 1.0)),
            FieldSpec::optional("reliabilityScore", FieldKind::number(0.0, 1.0)),
            FieldSpec::optional("instructions", FieldKind::text(0, 2000)),
            FieldSpec::optional("publishedAt", FieldKind::Timestamp),
            FieldSpec::optional("version", FieldKind::text(1, 20)).with_default("1.0"),
            FieldSpec::optional("language", FieldKind::text(2, 10)).with_default("en"),
            FieldSpec::optional("culturalAdaptation", FieldKind::Enum(CULTURAL_CONTEXTS))
                .with_default("universal"),
            FieldSpec::optional("researchBacked", FieldKind::Boolean).with_default(false),
            FieldSpec::optional("scoringMethod", FieldKind::Enum(SCORING_METHODS)).with_default("likert_5"),
            FieldSpec::optional("status", FieldKind::Enum(ASSESSMENT_STATUSES)).with_default("draft"),
        ],
    )
});

static CONTENT_ITEM: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "content item",
        vec![
            FieldSpec::required("title", FieldKind::text(1, 300)),
            FieldSpec::required("slug", FieldKind::Slug),
            FieldSpec::optional("excerpt", FieldKind::text(0, 500)),
            FieldSpec::optional("content", FieldKind::text(0, usize::MAX)),
            FieldSpec::required("authorId", FieldKind::Uuid),
            FieldSpec::optional("coAuthors", FieldKind::UuidArray).with_default(json!([])),
            FieldSpec::required("contentType", FieldKind::Enum(CONTENT_TYPES)),
            FieldSpec::optional("format", FieldKind::Enum(CONTENT_FORMATS)).with_default("text"),
            FieldSpec::optional("wordCount", count()),
            FieldSpec::optional("estimatedReadingTime", count()),
            FieldSpec::optional("viewCount", count()),
            FieldSpec::optional("likeCount", count()),
            FieldSpec::optional("shareCount", count()),
            FieldSpec::optional("commentCount", count()),
            FieldSpec::optional("bookmarkCount", count()),
            FieldSpec::optional("primaryCategoryId", FieldKind::Uuid),
            FieldSpec::optional("secondaryCategories", FieldKind::UuidArray).with_default(json!([])),
            FieldSpec::optional("tags", FieldKind::TextArray).with_default(json!([])),
            FieldSpec::optional("theologicalThemes", FieldKind::TextArray).with_default(json!([])),
            FieldSpec::optional("seriesId", FieldKind::Uuid),
            FieldSpec::optional("seriesOrder", count()),
            FieldSpec::optional("visibility", FieldKind::Enum(CONTENT_VISIBILITIES)).with_default("public"),
            FieldSpec::optional("status", FieldKind::Enum(CONTENT_STATUSES)).with_default("draft"),
            FieldSpec::optional("networkAmplificationScore", FieldKind::number(0.0, 100.0)),
            FieldSpec::optional("crossReferenceCount", count()),
            FieldSpec::optional("aiEnhanced", FieldKind::Boolean).with_default(false),
            FieldSpec::optional("aiSummary", FieldKind::text(0, 5000)),
            FieldSpec::optional("aiKeyPoints", FieldKind::TextArray),
            FieldSpec::optional("featuredImageUrl", FieldKind::Url),
            FieldSpec::optional("videoUrl", FieldKind::Url),
            FieldSpec::optional("audioUrl", FieldKind::Url),
            FieldSpec::optional("attachments", FieldKind::JsonArray),
            FieldSpec::optional("metaTitle", FieldKind::text(0, 100)),
            FieldSpec::optional("metaDescription", FieldKind::text(0, 200)),
            FieldSpec::optional("canonicalUrl", FieldKind::Url),
            FieldSpec::optional("originalSource", FieldKind::text(0, 500)),
            FieldSpec::optional("publishedAt", FieldKind::Timestamp),
            FieldSpec::optional("scheduledAt", FieldKind::Timestamp),
            FieldSpec::optional("licenseType", FieldKind::Enum(CONTENT_LICENSES))
                .with_default("all_rights_reserved"),
            FieldSpec::optional("attributionRequired", FieldKind::Boolean).with_default(true),
        ],
    )
});

static COMMUNITY: Lazy<EntitySchema> = Lazy::new(|| {
    EntitySchema::new(
        "community",
        vec![
            FieldSpec::required("name", FieldKind::text(1, 200)),
            FieldSpec::required("slug", FieldKind::Slug),
            FieldSpec::optional("description", FieldKind::text(0, 1000)),
            FieldSpec::required("communityType", FieldKind::text(1, 50)),
            FieldSpec::optional("geographicFocus", FieldKind::TextArray),
            FieldSpec::optional("culturalContext", FieldKind::Enum(CULTURAL_CONTEXTS)).with_default("global"),
            FieldSpec::optional("languagePrimary", FieldKind::text(2, 10)).with_default("en"),
            FieldSpec::optional("languagesSupported", FieldKind::TextArray).with_default(json!(["en"])),
            FieldSpec::optional("visibility", FieldKind::Enum(COMMUNITY_VISIBILITIES)).with_default("public"),
            FieldSpec::optional("joinApprovalRequired", FieldKind::Boolean).with_default(false),
            FieldSpec::optional("maxMembers", FieldKind::int(1, i64::from(i32::MAX))),
            FieldSpec::optional("allowGuestPosts", FieldKind::Boolean).with_default(false),
            FieldSpec::optional("moderationLevel", FieldKind::Enum(MODERATION_LEVELS))
                .with_default("moderated"),
            FieldSpec::optional("currentMemberCount", count()),
            FieldSpec::optional("totalPostsCount", count()),
            FieldSpec::optional("guidelines", FieldKind::text(0, 5000)),
            FieldSpec::optional("rules", FieldKind::TextArray),
            FieldSpec::required("createdBy", FieldKind::Uuid),
        ],
    )
});

pub fn organization() -> &'static EntitySchema {
    &ORGANIZATION
}

pub fn organization_membership() -> &'static EntitySchema {
    &ORGANIZATION_MEMBERSHIP
}

pub fn user_profile() -> &'static EntitySchema {
    &USER_PROFILE
}

pub fn assessment() -> &'static EntitySchema {
    &ASSESSMENT
}

pub fn content_item() -> &'static EntitySchema {
    &CONTENT_ITEM
}

pub fn community() -> &'static EntitySchema {
    &COMMUNITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_cached() {
        assert!(std::ptr::eq(organization(), organization()));
        assert_eq!(content_item().name, "content item");
    }

    #[test]
    fn test_field_names_are_unique() {
        for schema in [
            organization(),
            organization_membership(),
            user_profile(),
            assessment(),
            content_item(),
            community(),
        ] {
            let mut names: Vec<&str> = schema.fields.iter().map(|f| f.name).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(names.len(), before, "duplicate field in {}", schema.name);
        }
    }

    #[test]
    fn test_defaults_match_their_kinds() {
        for schema in [
            organization(),
            organization_membership(),
            user_profile(),
            assessment(),
            content_item(),
            community(),
        ] {
            for field in &schema.fields {
                if let Some(default) = &field.default_on_create {
                    assert!(
                        field.kind.check(default).is_ok(),
                        "{}.{} default fails its own kind",
                        schema.name,
                        field.name
                    );
                }
            }
        }
    }
}
