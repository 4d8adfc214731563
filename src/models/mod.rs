//! Database rows as the query layer hands them over.
//!
//! Rows decode straight from Postgres (`sqlx::FromRow`, snake_case columns)
//! or from camelCase JSON. Nullable columns stay `Option`; defaults are
//! applied by the mappers, never here.

pub mod assessment;
pub mod community;
pub mod content;
pub mod organization;
pub mod user_profile;

pub use assessment::{AssessmentRow, UserAssessmentRow};
pub use community::CommunityRow;
pub use content::{Attachment, ContentItemRow};
pub use organization::{Address, OrganizationMembershipRow, OrganizationRow};
pub use user_profile::UserProfileRow;
