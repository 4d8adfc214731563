//! Organization ("plant territory") and permission filters.
//!
//! Both filters are order-preserving and never fail. Items take part
//! through [`TerritoryScoped`] and [`PermissionGated`].

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::dto::{OrganizationContext, OrganizationMembership};
use crate::models::OrganizationMembershipRow;
use crate::record::Record;

pub const DEFAULT_PERMISSION_FIELD: &str = "requiredPermission";

const ORGANIZATION_FIELD: &str = "organizationId";

/// Which organization an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Territory {
    /// No owning organization; visible to everyone
    Public,
    Owned(Uuid),
    /// An owner is set but is not a valid id. Never public, never matches.
    Unresolved,
}

impl Territory {
    pub fn is_public(&self) -> bool {
        matches!(self, Territory::Public)
    }

    /// Visible inside the given organization
    pub fn admits(&self, organization_id: Uuid) -> bool {
        match self {
            Territory::Public => true,
            Territory::Owned(id) => *id == organization_id,
            Territory::Unresolved => false,
        }
    }
}

/// A permission an item demands of its reader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement<'a> {
    None,
    Permission(&'a str),
    /// Set to something that is not a permission name; nobody satisfies it
    Unresolved,
}

pub trait TerritoryScoped {
    fn territory(&self) -> Territory;
}

pub trait PermissionGated {
    fn required_permission(&self, field: &str) -> Requirement<'_>;
}

fn territory_of(map: &Map<String, Value>) -> Territory {
    match map.get(ORGANIZATION_FIELD) {
        None | Some(Value::Null) => Territory::Public,
        Some(Value::String(s)) if s.is_empty() => Territory::Public,
        Some(Value::String(s)) => Uuid::parse_str(s)
            .map(Territory::Owned)
            .unwrap_or(Territory::Unresolved),
        Some(_) => Territory::Unresolved,
    }
}

fn requirement_of<'a>(map: &'a Map<String, Value>, field: &str) -> Requirement<'a> {
    match map.get(field) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Requirement::None,
        Some(Value::String(s)) if s.is_empty() => Requirement::None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Requirement::None,
        Some(Value::String(s)) => Requirement::Permission(s),
        Some(_) => Requirement::Unresolved,
    }
}

impl TerritoryScoped for Map<String, Value> {
    fn territory(&self) -> Territory {
        territory_of(self)
    }
}

impl PermissionGated for Map<String, Value> {
    fn required_permission(&self, field: &str) -> Requirement<'_> {
        requirement_of(self, field)
    }
}

impl TerritoryScoped for Value {
    fn territory(&self) -> Territory {
        self.as_object().map(territory_of).unwrap_or(Territory::Public)
    }
}

impl PermissionGated for Value {
    fn required_permission(&self, field: &str) -> Requirement<'_> {
        match self.as_object() {
            Some(map) => requirement_of(map, field),
            None => Requirement::None,
        }
    }
}

impl TerritoryScoped for Record {
    fn territory(&self) -> Territory {
        territory_of(self.as_map())
    }
}

impl PermissionGated for Record {
    fn required_permission(&self, field: &str) -> Requirement<'_> {
        requirement_of(self.as_map(), field)
    }
}

impl TerritoryScoped for OrganizationMembershipRow {
    fn territory(&self) -> Territory {
        Territory::Owned(self.organization_id)
    }
}

impl TerritoryScoped for OrganizationMembership {
    fn territory(&self) -> Territory {
        Territory::Owned(self.organization_id)
    }
}

/// Keep items visible within the caller's organization. Without a context
/// only public items survive.
pub fn filter_by_plant_territory<T: TerritoryScoped>(
    items: Vec<T>,
    context: Option<&OrganizationContext>,
) -> Vec<T> {
    let before = items.len();
    let kept: Vec<T> = match context {
        Some(ctx) => items
            .into_iter()
            .filter(|item| item.territory().admits(ctx.organization_id))
            .collect(),
        None => items
            .into_iter()
            .filter(|item| item.territory().is_public())
            .collect(),
    };

    tracing::debug!(
        organization_id = ?context.map(|c| c.organization_id),
        "territory filter kept {} of {} items",
        kept.len(),
        before
    );
    kept
}

/// Keep items whose required permission the caller holds. Items with no
/// requirement always pass; without a context nothing is filtered.
pub fn filter_by_role_permissions<T: PermissionGated>(
    items: Vec<T>,
    context: Option<&OrganizationContext>,
    permission_field: Option<&str>,
) -> Vec<T> {
    let Some(ctx) = context else {
        return items;
    };
    let field = permission_field.unwrap_or(DEFAULT_PERMISSION_FIELD);

    let before = items.len();
    let kept: Vec<T> = items
        .into_iter()
        .filter(|item| match item.required_permission(field) {
            Requirement::None => true,
            Requirement::Permission(p) => ctx.has_permission(p),
            Requirement::Unresolved => false,
        })
        .collect();

    tracing::debug!(
        role = %ctx.user_role,
        field,
        "permission filter kept {} of {} items",
        kept.len(),
        before
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;
    use serde_json::json;

    #[test]
    fn test_territory_of_values() {
        let org = Uuid::new_v4();
        assert_eq!(json!({"title": "a"}).territory(), Territory::Public);
        assert_eq!(json!({"organizationId": null}).territory(), Territory::Public);
        assert_eq!(json!({"organizationId": ""}).territory(), Territory::Public);
        assert_eq!(
            json!({"organizationId": org.to_string()}).territory(),
            Territory::Owned(org)
        );
        assert_eq!(json!({"organizationId": "org-1"}).territory(), Territory::Unresolved);
        assert_eq!(json!({"organizationId": 42}).territory(), Territory::Unresolved);
    }

    #[test]
    fn test_territory_with_context_keeps_own_and_public() {
        let ctx = fixtures::organization_context("member", &[]);
        let other = Uuid::new_v4();
        let items = vec![
            json!({"id": 1, "organizationId": ctx.organization_id.to_string()}),
            json!({"id": 2}),
            json!({"id": 3, "organizationId": other.to_string()}),
            json!({"id": 4, "organizationId": "not-a-uuid"}),
            json!({"id": 5, "organizationId": null}),
        ];

        let kept = filter_by_plant_territory(items, Some(&ctx));
        let ids: Vec<i64> = kept.iter().filter_map(|v| v["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_territory_without_context_keeps_public_only() {
        let items = vec![
            json!({"id": 1, "organizationId": Uuid::new_v4().to_string()}),
            json!({"id": 2}),
            json!({"id": 3, "organizationId": "not-a-uuid"}),
        ];
        let kept = filter_by_plant_territory(items, None);
        assert_eq!(kept, vec![json!({"id": 2})]);
    }

    #[test]
    fn test_territory_of_memberships() {
        let ctx = fixtures::organization_context("admin", &[]);
        let mut own = fixtures::membership_row();
        own.organization_id = ctx.organization_id;
        let foreign = fixtures::membership_row();

        let kept = filter_by_plant_territory(vec![own.clone(), foreign], Some(&ctx));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, own.id);

        let none = filter_by_plant_territory(vec![own], None);
        assert!(none.is_empty());
    }

    #[test]
    fn test_permission_filter_with_context() {
        let ctx = fixtures::organization_context("member", &["view_analytics"]);
        let items = vec![
            json!({"id": 1}),
            json!({"id": 2, "requiredPermission": "view_analytics"}),
            json!({"id": 3, "requiredPermission": "manage_users"}),
            json!({"id": 4, "requiredPermission": ""}),
            json!({"id": 5, "requiredPermission": null}),
            json!({"id": 6, "requiredPermission": 7}),
            json!({"id": 7, "requiredPermission": 0}),
            json!({"id": 8, "requiredPermission": 0.0}),
            json!({"id": 9, "requiredPermission": false}),
        ];

        let kept = filter_by_role_permissions(items, Some(&ctx), None);
        let ids: Vec<i64> = kept.iter().filter_map(|v| v["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn test_permission_filter_custom_field() {
        let ctx = fixtures::organization_context("admin", &["manage_users"]);
        let items = vec![
            json!({"id": 1, "gate": "manage_users"}),
            json!({"id": 2, "gate": "delete_organization"}),
            json!({"id": 3, "requiredPermission": "delete_organization"}),
        ];

        let kept = filter_by_role_permissions(items, Some(&ctx), Some("gate"));
        let ids: Vec<i64> = kept.iter().filter_map(|v| v["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_permission_filter_without_context_is_identity() {
        let items = vec![
            json!({"requiredPermission": "manage_users"}),
            json!({"requiredPermission": "delete_organization"}),
        ];
        let kept = filter_by_role_permissions(items.clone(), None, None);
        assert_eq!(kept, items);
    }

    #[test]
    fn test_filters_accept_records() {
        let ctx = fixtures::organization_context("member", &["manage_content"]);
        let mut gated = Record::new();
        gated.set("requiredPermission", "manage_users");
        let mut open = Record::new();
        open.set("title", "Open");

        let kept = filter_by_role_permissions(vec![gated, open.clone()], Some(&ctx), None);
        assert_eq!(kept, vec![open]);
    }
}
