//! Add-to-cart interaction.
//!
//! Building the payload is pure (`build_add_to_cart_request`); submitting it
//! and reporting the result happens in `handle_add_to_cart`. Every failure is
//! absorbed here and surfaced only as a toast.

use storefront_commerce::{build_add_to_cart_request, ProductDetail, ProductId};
use storefront_data::{CartResponse, CartService, FetchError};

use crate::escape::escape_html;
use crate::toast::{Notifier, ToastOptions};

pub const ADD_TO_CART_SUCCESS: &str = "Add to cart success";
pub const ADD_TO_CART_LOGIN_REQUIRED: &str = "You need to log in before add to cart";
pub const ADD_TO_CART_FAILED: &str = "Add to cart failed. Try again";

/// Status the cart API returns for anonymous shoppers.
const STATUS_FORBIDDEN: u16 = 403;

/// Categorized result of one add-to-cart attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Added,
    LoginRequired,
    Failed,
}

impl AddToCartOutcome {
    pub fn from_result(result: &Result<CartResponse, FetchError>) -> Self {
        match result {
            Ok(_) => Self::Added,
            Err(e) if e.status() == Some(STATUS_FORBIDDEN) => Self::LoginRequired,
            Err(_) => Self::Failed,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => ADD_TO_CART_SUCCESS,
            Self::LoginRequired => ADD_TO_CART_LOGIN_REQUIRED,
            Self::Failed => ADD_TO_CART_FAILED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::LoginRequired => "login_required",
            Self::Failed => "failed",
        }
    }

    /// Raise the toast for this outcome.
    pub fn notify(&self, notifier: &dyn Notifier) {
        match self {
            Self::Added => notifier.success(self.message(), &ToastOptions::DEFAULT),
            Self::LoginRequired | Self::Failed => {
                notifier.error(self.message(), &ToastOptions::DEFAULT)
            }
        }
    }
}

/// Add one unit of `product_id` to the cart and report the outcome.
///
/// No retry, no deduplication of overlapping calls.
pub async fn handle_add_to_cart<C>(
    product_id: ProductId,
    cart: &C,
    notifier: &dyn Notifier,
) -> AddToCartOutcome
where
    C: CartService + ?Sized,
{
    let items = build_add_to_cart_request(product_id);
    let result = cart.add_to_cart(&items).await;

    let outcome = AddToCartOutcome::from_result(&result);
    outcome.notify(notifier);
    outcome
}

/// The add-to-cart button for one product.
///
/// Disabled exactly when the product is not orderable; a disabled trigger
/// never reaches the cart service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddToCartTrigger {
    product_id: ProductId,
    disabled: bool,
}

impl AddToCartTrigger {
    pub fn for_product(product: &ProductDetail) -> Self {
        Self {
            product_id: product.id,
            disabled: !product.is_allowed_to_order,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Press the button. Returns `None` without side effects when disabled.
    pub async fn invoke<C>(&self, cart: &C, notifier: &dyn Notifier) -> Option<AddToCartOutcome>
    where
        C: CartService + ?Sized,
    {
        if self.disabled {
            return None;
        }
        Some(handle_add_to_cart(self.product_id, cart, notifier).await)
    }

    /// Render as a form posting to `action`.
    pub fn render(&self, action: &str) -> String {
        let disabled = if self.disabled { " disabled" } else { "" };
        format!(
            r#"<form method="post" action="{action}" data-add-to-cart>
        <button type="submit" class="btn btn-dark d-flex align-items-center justify-content-center gap-2 w-100 fs-6 fw-bold add-to-cart"{disabled}>
            <span>Add to cart</span>
        </button>
    </form>"#,
            action = escape_html(action),
            disabled = disabled,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;
    use storefront_commerce::AddToCartRequest;
    use storefront_data::check_status;

    use crate::toast::{ToastKind, ToastQueue};

    enum Reply {
        Ok,
        /// Classified the way `CartClient` classifies a real response.
        Status(u16),
        Offline,
    }

    struct RecordingCart {
        reply: Reply,
        calls: RefCell<Vec<Vec<AddToCartRequest>>>,
    }

    impl RecordingCart {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CartService for RecordingCart {
        async fn add_to_cart(
            &self,
            items: &[AddToCartRequest],
        ) -> Result<CartResponse, FetchError> {
            self.calls.borrow_mut().push(items.to_vec());
            match self.reply {
                Reply::Ok => Ok(CartResponse {
                    status: 200,
                    body: None,
                }),
                Reply::Status(status) => check_status(status, "http://cart/items")
                    .map(|_| CartResponse { status, body: None }),
                Reply::Offline => Err(FetchError::Connection("refused".to_string())),
            }
        }
    }

    fn product(orderable: bool) -> ProductDetail {
        ProductDetail::new(ProductId::new(42), "Acme", 19.99).orderable(orderable)
    }

    #[test]
    fn test_disabled_trigger_never_calls_cart() {
        let cart = RecordingCart::new(Reply::Ok);
        let toasts = ToastQueue::new();
        let trigger = AddToCartTrigger::for_product(&product(false));

        assert!(trigger.is_disabled());
        assert_eq!(block_on(trigger.invoke(&cart, &toasts)), None);
        assert!(cart.calls.borrow().is_empty());
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_enabled_trigger_calls_cart_once_with_single_unit() {
        let cart = RecordingCart::new(Reply::Ok);
        let toasts = ToastQueue::new();
        let trigger = AddToCartTrigger::for_product(&product(true));

        block_on(trigger.invoke(&cart, &toasts));

        let calls = cart.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![AddToCartRequest::new(ProductId::new(42), 1)]
        );
    }

    #[test]
    fn test_success_shows_one_success_toast() {
        let cart = RecordingCart::new(Reply::Ok);
        let toasts = ToastQueue::new();

        let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

        assert_eq!(outcome, AddToCartOutcome::Added);
        let raised = toasts.toasts();
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].kind, ToastKind::Success);
        assert_eq!(raised[0].message, "Add to cart success");
        assert_eq!(raised[0].options, ToastOptions::DEFAULT);
    }

    #[test]
    fn test_forbidden_asks_for_login_without_trailing_period() {
        let cart = RecordingCart::new(Reply::Status(403));
        let toasts = ToastQueue::new();

        let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

        assert_eq!(outcome, AddToCartOutcome::LoginRequired);
        let raised = toasts.toasts();
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].kind, ToastKind::Error);
        assert_eq!(raised[0].message, "You need to log in before add to cart");
    }

    #[test]
    fn test_other_status_is_generic_failure() {
        for status in [301, 302, 400, 401, 404, 500, 503] {
            let cart = RecordingCart::new(Reply::Status(status));
            let toasts = ToastQueue::new();

            let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

            assert_eq!(outcome, AddToCartOutcome::Failed, "status {}", status);
            assert_eq!(toasts.toasts()[0].message, "Add to cart failed. Try again");
        }
    }

    #[test]
    fn test_redirect_from_cart_is_not_success() {
        let cart = RecordingCart::new(Reply::Status(302));
        let toasts = ToastQueue::new();

        let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

        assert_eq!(outcome, AddToCartOutcome::Failed);
        let raised = toasts.toasts();
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].kind, ToastKind::Error);
        assert_ne!(raised[0].message, ADD_TO_CART_SUCCESS);

        let classified = check_status(302, "http://cart/items")
            .map(|_| CartResponse { status: 302, body: None });
        assert_eq!(AddToCartOutcome::from_result(&classified), AddToCartOutcome::Failed);
    }

    #[test]
    fn test_success_statuses_are_added() {
        for status in [200, 201, 204] {
            let cart = RecordingCart::new(Reply::Status(status));
            let toasts = ToastQueue::new();

            let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

            assert_eq!(outcome, AddToCartOutcome::Added, "status {}", status);
        }
    }

    #[test]
    fn test_network_error_is_generic_failure() {
        let cart = RecordingCart::new(Reply::Offline);
        let toasts = ToastQueue::new();

        let outcome = block_on(handle_add_to_cart(ProductId::new(42), &cart, &toasts));

        assert_eq!(outcome, AddToCartOutcome::Failed);
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_overlapping_submissions_each_reach_cart() {
        let cart = RecordingCart::new(Reply::Ok);
        let toasts = ToastQueue::new();
        let trigger = AddToCartTrigger::for_product(&product(true));

        block_on(async {
            futures::join!(trigger.invoke(&cart, &toasts), trigger.invoke(&cart, &toasts))
        });

        assert_eq!(cart.calls.borrow().len(), 2);
        assert_eq!(toasts.len(), 2);
    }

    #[test]
    fn test_render_disabled_state() {
        let enabled = AddToCartTrigger::for_product(&product(true)).render("/product/42/cart");
        let disabled = AddToCartTrigger::for_product(&product(false)).render("/product/42/cart");

        assert!(!enabled.contains(" disabled"));
        assert!(disabled.contains(" disabled>"));
        assert!(enabled.contains(r#"action="/product/42/cart""#));
    }
}
