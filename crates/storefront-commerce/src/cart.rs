//! Cart mutation payloads.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Quantity added per add-to-cart action.
pub const DEFAULT_QUANTITY: u32 = 1;

/// One line of an add-to-cart submission, as the cart API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl AddToCartRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Build the payload for adding one unit of a product.
pub fn build_add_to_cart_request(product_id: ProductId) -> Vec<AddToCartRequest> {
    vec![AddToCartRequest::new(product_id, DEFAULT_QUANTITY)]
}
