//! Ministry platform mapping layer.
//!
//! Turns nullable database rows into fully shaped camelCase DTOs, scopes
//! item lists to an organization and a caller's permissions, redacts
//! fields by role, and validates entity input against per-entity schemas.

pub mod access;
pub mod config;
pub mod dto;
pub mod error;
pub mod logging;
pub mod mappers;
pub mod models;
pub mod record;
pub mod schema;

#[cfg(test)]
pub mod testing;

pub use error::{Error, Result};
pub use record::{Record, RecordError};
pub use schema::{EntitySchema, SchemaError};
