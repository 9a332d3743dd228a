//! Storefront product detail page.
//!
//! - `GET /product/{id}` renders brand, variations, price, description, the
//!   add-to-cart trigger and installment promotions
//! - `POST /product/{id}/cart` adds one unit to the shopper's cart and answers
//!   with the toast fragment describing the outcome

mod page;
mod routes;

use anyhow::Context;
use futures::future::join;
use spin_sdk::http::{Request, Response};
use spin_sdk::http_component;

use storefront_commerce::{ProductDetail, ProductId, ProductVariation};
use storefront_core::{Method, RequestContext, StorefrontConfig};
use storefront_data::{CartClient, FetchClient, FetchError, ForwardedAuth};
use storefront_observability::StructuredLogger;
use storefront_ui::{
    handle_add_to_cart, render_product_details_fallback, AnchorLink, CurrencyFormatter,
    ProductDetails, ToastQueue,
};

use page::{render_page, render_status_page};
use routes::{cart_action, Route};

const WORKLOAD: &str = "product-details";

/// Workload configuration, compiled in.
const CONFIG_TOML: &str = include_str!("../storefront.toml");

/// Main HTTP handler.
#[http_component]
async fn handle(req: Request) -> anyhow::Result<Response> {
    let config =
        StorefrontConfig::from_toml_str(CONFIG_TOML).context("Invalid storefront.toml")?;

    let Some(ctx) = request_context(&req) else {
        return Ok(html_response(405, None, render_status_page(405, "Method not allowed")));
    };

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_config(&config.logging)
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);

    let route = Route::resolve(ctx.method, &ctx.segments());
    logger
        .info_builder("Request started")
        .field("method", ctx.method.as_str())
        .field("route_name", route.name())
        .emit();

    let response = match route {
        Route::ProductPage(product_id) => product_page(&ctx, &config, &logger, product_id).await?,
        Route::AddToCart(product_id) => add_to_cart(&ctx, &config, &logger, product_id).await,
        Route::MethodNotAllowed => html_response(
            405,
            Some(&ctx),
            render_status_page(405, "Method not allowed"),
        ),
        Route::NotFound => html_response(404, Some(&ctx), render_status_page(404, "Not found")),
    };

    logger
        .info_builder("Request complete")
        .field_i64("status", i64::from(*response.status()))
        .field_i64("total_us", logger.elapsed_us() as i64)
        .emit();

    Ok(response)
}

/// Render the product page.
async fn product_page(
    ctx: &RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
    product_id: ProductId,
) -> anyhow::Result<Response> {
    let formatter = CurrencyFormatter::from_code(&config.display.currency)
        .context("Unsupported display currency")?;

    let client = FetchClient::new(ctx.request_id.clone());
    let detail_url = config.api.product_detail_url(&product_id.to_string());
    let variations_url = config.api.product_variations_url(&product_id.to_string());

    let (product_res, variations_res) = join(
        client.get_json::<ProductDetail>(&detail_url),
        client.get_json::<Vec<ProductVariation>>(&variations_url),
    )
    .await;

    let product = match product_res {
        Ok(product) => product,
        Err(e) if e.status() == Some(404) => {
            logger
                .info_builder("Product not found")
                .field("product_id", product_id.to_string())
                .emit();
            return Ok(html_response(
                404,
                Some(ctx),
                render_status_page(404, "Product not found"),
            ));
        }
        Err(e) => {
            log_fetch_failure(logger, "Product fetch failed", &e);
            let title = format!("Product {}", product_id);
            let html = render_page(&title, &ctx.request_id, &render_product_details_fallback());
            return Ok(html_response(200, Some(ctx), html));
        }
    };

    // A product without variations is normal; a failed fetch renders the same way.
    let variations = match variations_res {
        Ok(variations) => Some(variations),
        Err(e) => {
            log_fetch_failure(logger, "Variations fetch failed", &e);
            None
        }
    };

    let action = cart_action(product.id);
    let section = ProductDetails::new(&product, variations.as_deref(), &config.support, &action)
        .render(&formatter, &AnchorLink);

    logger
        .debug_builder("Rendered product details")
        .field("product_id", product.id.to_string())
        .field_bool("orderable", product.is_allowed_to_order)
        .field_i64("variations", variations.as_ref().map_or(0, |v| v.len() as i64))
        .emit();

    let html = render_page(&product.display_name(), &ctx.request_id, &section);
    Ok(html_response(200, Some(ctx), html))
}

/// Submit one unit to the cart and return the toast fragment.
async fn add_to_cart(
    ctx: &RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
    product_id: ProductId,
) -> Response {
    let auth = ForwardedAuth {
        cookie: ctx.header("cookie").map(str::to_string),
        authorization: ctx.header("authorization").map(str::to_string),
    };
    let cart = CartClient::new(config.api.cart_items_url(), ctx.request_id.clone()).with_auth(auth);

    let toasts = ToastQueue::new();
    let outcome = handle_add_to_cart(product_id, &cart, &toasts).await;

    logger
        .info_builder("Add to cart finished")
        .field("product_id", product_id.to_string())
        .field("outcome", outcome.as_str())
        .emit();

    html_response(200, Some(ctx), toasts.render())
}

fn log_fetch_failure(logger: &StructuredLogger, message: &str, error: &FetchError) {
    let mut entry = logger.warn_builder(message).field("error", error.to_string());
    if let Some(status) = error.status() {
        entry = entry.field_i64("status", i64::from(status));
    }
    entry.emit();
}

fn request_context(req: &Request) -> Option<RequestContext> {
    let method = map_method(req.method())?;

    let mut ctx = RequestContext::new(method, req.path());
    for (name, value) in req.headers() {
        if let Some(value) = value.as_str() {
            ctx = ctx.with_header(name, value);
        }
    }
    Some(ctx)
}

fn map_method(method: &spin_sdk::http::Method) -> Option<Method> {
    use spin_sdk::http::Method as SpinMethod;

    match method {
        SpinMethod::Get => Some(Method::Get),
        SpinMethod::Post => Some(Method::Post),
        SpinMethod::Put => Some(Method::Put),
        SpinMethod::Delete => Some(Method::Delete),
        SpinMethod::Patch => Some(Method::Patch),
        SpinMethod::Head => Some(Method::Head),
        SpinMethod::Options => Some(Method::Options),
        _ => None,
    }
}

fn html_response(status: u16, ctx: Option<&RequestContext>, body: String) -> Response {
    let mut builder = Response::builder();
    builder
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .header("cache-control", "no-store");
    if let Some(ctx) = ctx {
        builder.header("x-request-id", ctx.request_id.as_str());
    }
    builder.body(body).build()
}
