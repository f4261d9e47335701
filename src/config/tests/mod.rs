//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: API URL, scope, namespace, and site URL resolution

mod field_resolution;
mod helpers;
