//! Product and cart API access.
//!
//! This crate provides:
//! - `FetchClient` - JSON reads from the product service
//! - `CartService` - The cart mutation boundary, implemented by `CartClient`
//! - `FetchError` - Failure taxonomy shared by both

mod cart;
mod client;

pub use cart::*;
pub use client::*;
