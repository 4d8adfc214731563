//! Entity schemas.
//!
//! Each entity is described once as a list of [`FieldSpec`]s; create,
//! update, list-query and response validation are derived from it.

pub mod entity;
pub mod error;
pub mod field;
pub mod query;
pub mod registry;

pub use entity::EntitySchema;
pub use error::{FieldErrors, SchemaError};
pub use field::{FieldKind, FieldSpec};
pub use query::{parse_order, OrderField, QueryParams, SortDirection};
