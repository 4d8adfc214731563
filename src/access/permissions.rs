pub const ROLE_OWNER: &str = "owner";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MEMBER: &str = "member";
pub const ROLE_VIEWER: &str = "viewer";

pub const MANAGE_ORGANIZATION: &str = "manage_organization";
pub const MANAGE_USERS: &str = "manage_users";
pub const MANAGE_CONTENT: &str = "manage_content";
pub const VIEW_ANALYTICS: &str = "view_analytics";
pub const MANAGE_SUBSCRIPTIONS: &str = "manage_subscriptions";
pub const DELETE_ORGANIZATION: &str = "delete_organization";

const OWNER_PERMISSIONS: &[&str] = &[
    MANAGE_ORGANIZATION,
    MANAGE_USERS,
    MANAGE_CONTENT,
    VIEW_ANALYTICS,
    MANAGE_SUBSCRIPTIONS,
    DELETE_ORGANIZATION,
];
const ADMIN_PERMISSIONS: &[&str] = &[MANAGE_USERS, MANAGE_CONTENT, VIEW_ANALYTICS];
const MEMBER_PERMISSIONS: &[&str] = &[MANAGE_CONTENT];

/// Permissions a role carries when the membership stores none.
/// Viewers and unknown roles get nothing.
pub fn default_permissions(role: &str) -> &'static [&'static str] {
    match role {
        ROLE_OWNER => OWNER_PERMISSIONS,
        ROLE_ADMIN => ADMIN_PERMISSIONS,
        ROLE_MEMBER => MEMBER_PERMISSIONS,
        _ => &[],
    }
}

/// Stored permissions when non-empty, otherwise the role's defaults
pub fn resolve_permissions(role: &str, stored: &[String]) -> Vec<String> {
    if !stored.is_empty() {
        return stored.to_vec();
    }
    default_permissions(role).iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults() {
        assert_eq!(default_permissions(ROLE_OWNER).len(), 6);
        assert_eq!(default_permissions(ROLE_ADMIN), &[MANAGE_USERS, MANAGE_CONTENT, VIEW_ANALYTICS]);
        assert_eq!(default_permissions(ROLE_MEMBER), &[MANAGE_CONTENT]);
        assert!(default_permissions(ROLE_VIEWER).is_empty());
        assert!(default_permissions("superuser").is_empty());
    }

    #[test]
    fn test_stored_permissions_win() {
        let stored = vec!["view_analytics".to_string()];
        assert_eq!(resolve_permissions(ROLE_OWNER, &stored), stored);
        assert_eq!(resolve_permissions(ROLE_MEMBER, &[]), vec!["manage_content"]);
    }
}
