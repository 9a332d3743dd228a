//! Product detail page components.
//!
//! Components render to HTML strings. Everything with a side effect or an
//! outside dependency (price formatting, links, toasts, the cart API) is an
//! injected trait so pages and tests can substitute their own.

mod add_to_cart;
mod escape;
mod format;
mod link;
mod product_details;
mod toast;

pub use add_to_cart::*;
pub use escape::escape_html;
pub use format::*;
pub use link::*;
pub use product_details::*;
pub use toast::*;
