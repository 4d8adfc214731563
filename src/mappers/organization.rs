use crate::access::permissions::{ROLE_ADMIN, ROLE_OWNER};
use crate::dto::{MinistryCapacity, MinistryOrganization, OrganizationMembership, OrganizationMetrics};
use crate::models::{OrganizationMembershipRow, OrganizationRow};
use crate::schema::registry;

use super::{capitalize, check_output, defaults};

/// Map an organization row. Member counts come from the caller (they are
/// aggregated elsewhere) and default to zero.
pub fn to_ministry_organization_dto(
    org: &OrganizationRow,
    total_members: Option<i64>,
    active_members: Option<i64>,
) -> MinistryOrganization {
    let max_users = org.max_users.unwrap_or(defaults::ORGANIZATION_MAX_USERS);

    let dto = MinistryOrganization {
        id: org.id,
        name: org.name.clone(),
        slug: org.slug.clone(),
        description: org.description.clone(),
        website: org.website.clone(),
        logo_url: org.logo_url.clone(),
        organization_type: org.organization_type.clone(),
        size_category: org.size_category.clone(),
        status: org
            .status
            .clone()
            .unwrap_or_else(|| defaults::ORGANIZATION_STATUS.to_string()),
        contact_email: org.contact_email.clone(),
        contact_phone: org.contact_phone.clone(),
        address: org.address.as_ref().map(|a| a.0.clone()),
        account_owner_id: org.account_owner_id,
        license_type: org
            .license_type
            .clone()
            .unwrap_or_else(|| defaults::ORGANIZATION_LICENSE_TYPE.to_string()),
        max_users,
        billing_email: org.billing_email.clone(),
        created_at: org.created_at,
        updated_at: org.updated_at,

        ministry_focus: Vec::new(),
        theological_tradition: None,
        denominational_affiliation: None,
        organization_metrics: OrganizationMetrics {
            total_members: total_members.unwrap_or(0),
            active_members: active_members.unwrap_or(0),
            total_content: 0,
            total_assessments: 0,
            average_engagement: defaults::ORGANIZATION_AVERAGE_ENGAGEMENT,
            growth_rate: defaults::ORGANIZATION_GROWTH_RATE,
        },
        ministry_capacity: MinistryCapacity {
            max_content_creators: max_users,
            max_assessments: None,
            max_communities: None,
            custom_branding: false,
            api_access: false,
        },
    };

    tracing::trace!(organization_id = %org.id, "mapped organization");
    check_output("organization", registry::organization(), &dto);
    dto
}

pub fn to_organization_membership_dto(row: &OrganizationMembershipRow) -> OrganizationMembership {
    let status = row
        .status
        .clone()
        .unwrap_or_else(|| defaults::MEMBERSHIP_STATUS.to_string());

    let dto = OrganizationMembership {
        id: row.id,
        user_id: row.user_id,
        organization_id: row.organization_id,
        role: row.role.clone(),
        permissions: row.permissions.as_ref().map(|p| p.0.clone()).unwrap_or_default(),
        joined_at: row.joined_at,
        invited_at: row.invited_at,
        invited_by: row.invited_by,
        created_at: row.created_at,
        updated_at: row.updated_at,

        is_active: status == "active",
        is_pending: status == "pending",
        can_manage: row.role == ROLE_OWNER || row.role == ROLE_ADMIN,
        role_display: capitalize(&row.role),
        status_display: capitalize(&status),
        status,
    };

    tracing::trace!(membership_id = %row.id, "mapped organization membership");
    check_output("organization membership", registry::organization_membership(), &dto);
    dto
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_maps_all_fields() {
        let row = fixtures::organization_row();
        let result = to_ministry_organization_dto(&row, Some(25), Some(20));

        assert_eq!(result.id, row.id);
        assert_eq!(result.name, "Test Church");
        assert_eq!(result.slug, "test-church");
        assert_eq!(result.organization_type, "church");
        assert_eq!(result.status, "active");
        assert_eq!(result.license_type, "institutional");
        assert_eq!(result.max_users, 50);
        assert_eq!(result.organization_metrics.total_members, 25);
        assert_eq!(result.organization_metrics.active_members, 20);
        assert_eq!(result.ministry_capacity.max_content_creators, 50);
        assert!(!result.ministry_capacity.custom_branding);
        assert!(!result.ministry_capacity.api_access);
        assert_eq!(result.address.and_then(|a| a.city).as_deref(), Some("Anytown"));
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let mut row = fixtures::organization_row();
        row.description = None;
        row.website = None;
        row.logo_url = None;
        row.size_category = None;
        row.contact_email = None;
        row.contact_phone = None;
        row.address = None;
        row.account_owner_id = None;
        row.billing_email = None;
        row.status = None;
        row.license_type = None;
        row.max_users = None;

        let result = to_ministry_organization_dto(&row, None, None);

        assert!(result.description.is_none());
        assert!(result.website.is_none());
        assert!(result.logo_url.is_none());
        assert!(result.size_category.is_none());
        assert!(result.contact_email.is_none());
        assert!(result.contact_phone.is_none());
        assert!(result.address.is_none());
        assert!(result.account_owner_id.is_none());
        assert!(result.billing_email.is_none());
        assert_eq!(result.status, "trial");
        assert_eq!(result.license_type, "individual");
        assert_eq!(result.max_users, 1);
        assert_eq!(result.organization_metrics.total_members, 0);
        assert_eq!(result.ministry_capacity.max_content_creators, 1);
    }

    #[test]
    fn test_omitted_fields_are_absent_from_json() {
        let mut row = fixtures::organization_row();
        row.website = None;
        let json = serde_json::to_value(to_ministry_organization_dto(&row, None, None)).unwrap();

        assert!(json.get("website").is_none());
        assert_eq!(json["status"], "active");
        assert_eq!(json["organizationMetrics"]["averageEngagement"], 0.75);
    }

    #[test]
    fn test_membership_computed_fields() {
        let row = fixtures::membership_row();
        let result = to_organization_membership_dto(&row);

        assert!(result.is_active);
        assert!(!result.is_pending);
        assert!(result.can_manage);
        assert_eq!(result.role_display, "Admin");
        assert_eq!(result.status_display, "Active");
        assert_eq!(result.permissions.len(), 3);
    }

    #[test]
    fn test_membership_defaults() {
        let mut row = fixtures::membership_row();
        row.role = "member".to_string();
        row.status = None;
        row.permissions = None;
        row.joined_at = None;

        let result = to_organization_membership_dto(&row);

        assert_eq!(result.status, "pending");
        assert!(result.is_pending);
        assert!(!result.can_manage);
        assert!(result.permissions.is_empty());
        assert!(result.joined_at.is_none());
    }
}
