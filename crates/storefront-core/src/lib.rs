//! Core abstractions shared by the storefront workloads.
//!
//! This crate provides:
//! - `RequestContext` - Typed request parameters and headers
//! - `RequestId` - Unique request identifier for log correlation
//! - `StorefrontConfig` - TOML-backed storefront configuration

mod config;
mod context;

pub use config::*;
pub use context::*;
