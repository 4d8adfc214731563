//! Tenant scoping and role-based access.
//!
//! * [`permissions`] - roles and their default permission lists
//! * [`scope`] - organization and permission filters over item lists
//! * [`visibility`] - per-role field redaction of response objects

pub mod permissions;
pub mod scope;
pub mod visibility;

pub use scope::{
    filter_by_plant_territory, filter_by_role_permissions, PermissionGated, Requirement,
    Territory, TerritoryScoped, DEFAULT_PERMISSION_FIELD,
};
pub use visibility::{
    apply_role_based_visibility, ministry_field_permissions, redact_dto, FieldPermissions,
};
