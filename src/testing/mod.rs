//! Shared row fixtures for unit tests.

pub mod fixtures;
