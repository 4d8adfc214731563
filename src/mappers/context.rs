use crate::access::permissions::{
    resolve_permissions, MANAGE_CONTENT, MANAGE_SUBSCRIPTIONS, MANAGE_USERS, ROLE_ADMIN,
    ROLE_OWNER, VIEW_ANALYTICS,
};
use crate::dto::{
    AuthMinistryCombined, AuthUser, MinistryUserProfile, OrganizationContext, OrganizationScoped,
    UserContext,
};
use crate::models::OrganizationMembershipRow;

use super::user_profile::ministry_tier;

/// Resolve a membership into the caller's organization context. Explicit
/// row permissions win; an empty or missing list falls back to the role's
/// defaults.
pub fn to_organization_context_dto(membership: &OrganizationMembershipRow) -> OrganizationContext {
    let stored = membership
        .permissions
        .as_ref()
        .map(|p| p.0.as_slice())
        .unwrap_or_default();
    let permissions = resolve_permissions(&membership.role, stored);
    let has = |p: &str| permissions.iter().any(|granted| granted == p);

    let context = OrganizationContext {
        organization_id: membership.organization_id,
        user_role: membership.role.clone(),
        is_owner: membership.role == ROLE_OWNER,
        is_admin: membership.role == ROLE_OWNER || membership.role == ROLE_ADMIN,
        can_manage_users: has(MANAGE_USERS),
        can_manage_content: has(MANAGE_CONTENT),
        can_view_analytics: has(VIEW_ANALYTICS),
        can_manage_subscriptions: has(MANAGE_SUBSCRIPTIONS),
        permissions,
    };

    tracing::trace!(
        organization_id = %context.organization_id,
        role = %context.user_role,
        "resolved organization context"
    );
    context
}

pub fn to_auth_ministry_combined_dto(
    auth_user: &AuthUser,
    profile: MinistryUserProfile,
    organization_context: Option<OrganizationContext>,
) -> AuthMinistryCombined {
    let permissions = organization_context
        .as_ref()
        .map(|c| c.permissions.clone())
        .unwrap_or_default();
    let ministry_tier = ministry_tier(&profile).to_string();

    AuthMinistryCombined {
        auth: AuthUser {
            id: auth_user.id,
            email: auth_user.email.clone(),
            is_authenticated: true,
        },
        profile,
        organization_context,
        permissions,
        ministry_tier,
    }
}

/// Wrap a payload with the organization and user context it was resolved
/// under. The access level is the caller's role in that organization.
pub fn to_organization_scoped_dto<T>(
    data: T,
    organization_context: OrganizationContext,
    profile: &MinistryUserProfile,
) -> OrganizationScoped<T> {
    let user_context = UserContext {
        id: profile.id,
        role: organization_context.user_role.clone(),
        permissions: organization_context.permissions.clone(),
        ministry_tier: ministry_tier(profile).to_string(),
    };
    let access_level = organization_context.user_role.clone();

    OrganizationScoped {
        data,
        organization_context,
        user_context,
        access_level,
    }
}
