//! Shared building blocks for the `nullval` value types.
//!
//! This crate holds what every nullable value type in the workspace has in
//! common: the error type, the value contract and its database value model,
//! and configuration loading.

pub mod config;
pub mod constants;
pub mod error;
pub mod value;

pub use error::{CoreError, CoreResult};
pub use value::{DbValue, NullableValue};
