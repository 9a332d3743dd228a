//! Path routing for the product details workload.

use storefront_commerce::ProductId;
use storefront_core::Method;

/// Resolved route for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /product/{id}`
    ProductPage(ProductId),
    /// `POST /product/{id}/cart`
    AddToCart(ProductId),
    /// Known path, wrong method.
    MethodNotAllowed,
    NotFound,
}

impl Route {
    pub fn resolve(method: Method, segments: &[&str]) -> Self {
        let (product_id, is_cart) = match segments {
            ["product", id] => (id, false),
            ["product", id, "cart"] => (id, true),
            _ => return Self::NotFound,
        };

        let Ok(product_id) = product_id.parse::<ProductId>() else {
            return Self::NotFound;
        };

        match (method, is_cart) {
            (Method::Get | Method::Head, false) => Self::ProductPage(product_id),
            (Method::Post, true) => Self::AddToCart(product_id),
            _ => Self::MethodNotAllowed,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ProductPage(_) => "product_page",
            Self::AddToCart(_) => "add_to_cart",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::NotFound => "not_found",
        }
    }
}

/// Form action for a product's add-to-cart trigger.
pub fn cart_action(product_id: ProductId) -> String {
    format!("/product/{}/cart", product_id)
}
