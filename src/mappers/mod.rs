//! Row to DTO mappers.
//!
//! Every mapper is total: any row, however sparse, produces a fully shaped
//! DTO. `None` columns are replaced with the literals in [`defaults`];
//! present values pass through untouched.

pub mod assessment;
pub mod community;
pub mod content;
pub mod context;
pub mod defaults;
pub mod metrics;
pub mod organization;
pub mod user_profile;

pub use assessment::{to_ministry_assessment_dto, to_user_assessment_dto};
pub use community::to_ministry_community_dto;
pub use content::to_ministry_content_item_dto;
pub use context::{
    to_auth_ministry_combined_dto, to_organization_context_dto, to_organization_scoped_dto,
};
pub use metrics::{aggregate_ministry_metrics, apest_amplification_score, content_amplification_score};
pub use organization::{to_ministry_organization_dto, to_organization_membership_dto};
pub use user_profile::to_ministry_user_profile_dto;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::config;
use crate::schema::EntitySchema;

/// Decimal column to a JSON-friendly float
pub(crate) fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Upper-case the first character ("trial" -> "Trial")
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check a mapped DTO against its entity schema when output validation is on.
/// Mismatches are logged, never raised.
pub(crate) fn check_output<T: Serialize>(entity: &str, schema: &EntitySchema, dto: &T) {
    if !config().mapper.validate_output {
        return;
    }

    let value = match serde_json::to_value(dto) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("{} DTO could not be serialized for validation: {}", entity, e);
            return;
        }
    };

    if let Err(e) = schema.validate_entity(&value) {
        tracing::warn!("{} DTO failed output validation: {}", entity, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("trial"), "Trial");
        assert_eq!(capitalize("all_rights_reserved"), "All_rights_reserved");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decimal_to_f64() {
        let value = Decimal::from_str("0.85").unwrap();
        assert!((decimal_to_f64(value) - 0.85).abs() < f64::EPSILON);
    }
}
