//! Response shapes returned to API clients.
//!
//! Every DTO serializes as camelCase JSON. Fields that have no default are
//! `Option` and are omitted from the output when absent.

pub mod assessment;
pub mod community;
pub mod content;
pub mod context;
pub mod organization;
pub mod shared;
pub mod user_profile;

pub use assessment::{
    ApestProfile, MinistryAssessment, MinistryRelevance, MinistryScoring, UsageAnalytics,
    UserAssessment,
};
pub use community::{CommunityMinistryContext, CommunityMinistryMetrics, MinistryCommunity};
pub use content::{ContentMinistryContext, MinistryContentItem, MinistryEngagement, MinistryImpact};
pub use context::{AuthMinistryCombined, AuthUser, OrganizationContext, OrganizationScoped, UserContext};
pub use organization::{
    MinistryCapacity, MinistryOrganization, OrganizationMembership, OrganizationMetrics,
};
pub use shared::{
    ApestScores, BrandColors, CommunityMetrics, ContentMetrics, EmailNotifications,
    LearningMetrics, MinistryMetrics, PersonalizedRecommendations, PrivacySettings,
};
pub use user_profile::{MinistryUserProfile, PlatformEngagement};
