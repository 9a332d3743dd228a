//! Catalog and cart domain types for the storefront.
//!
//! - **Catalog**: `ProductDetail` and its `ProductVariation` groups, as served
//!   by the product API
//! - **Cart**: `AddToCartRequest`, the payload the cart API accepts
//! - **Money**: currency-aware display of catalog prices

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use cart::{build_add_to_cart_request, AddToCartRequest, DEFAULT_QUANTITY};
pub use catalog::{ProductDetail, ProductVariation};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
