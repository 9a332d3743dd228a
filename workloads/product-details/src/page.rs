//! HTML page shell around the product details section.

use storefront_core::RequestId;
use storefront_ui::{escape_html, TOAST_SCRIPT};

/// Wrap a rendered section in a full document.
pub fn render_page(title: &str, request_id: &RequestId, section: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Storefront</title>
    <style>{styles}</style>
</head>
<body>
    <header class="site-header">
        <nav><a href="/">Home</a> / {title}</nav>
    </header>
    <main class="pdp-container" data-request-id="{request_id}">
        {section}
    </main>
    <div id="toast-root"></div>
    <script>{script}</script>
</body>
</html>"#,
        title = escape_html(title),
        styles = PDP_STYLES,
        request_id = escape_html(request_id.as_str()),
        section = section,
        script = TOAST_SCRIPT,
    )
}

/// Minimal document for error statuses.
pub fn render_status_page(status: u16, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{status}</title></head>
<body><h1>{status}</h1><p>{message}</p></body>
</html>"#,
        status = status,
        message = escape_html(message),
    )
}

const PDP_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f5f5f5; }
.site-header { background: #333; color: white; padding: 1rem 2rem; }
.site-header a { color: #88f; }
.pdp-container { max-width: 640px; margin: 0 auto; padding: 2rem; }
.product-details { background: white; padding: 2rem; border-radius: 8px; }
.product-brand h5 { display: inline; }
.product-variation { margin-bottom: 1rem; }
.variation-option { margin-right: 0.5rem; padding: 0.25rem 0.5rem; border: 1px solid #0d6efd; background: white; color: #0d6efd; border-radius: 4px; cursor: pointer; }
.product-price { font-size: 1.75rem; color: red; }
.product-description { padding: 1.5rem 0; line-height: 1.6; }
.add-to-cart { width: 100%; height: 56px; background: #212529; color: white; border: none; font-weight: bold; border-radius: 4px; cursor: pointer; }
.add-to-cart[disabled] { opacity: 0.5; cursor: not-allowed; }
.installment-banners { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.installment-banner { flex: 1; background: #0d6efd; color: white; border: none; border-radius: 4px; padding: 0.5rem; font-size: 14px; }
.call-to-order { text-align: center; margin: 1.5rem 0; }
.product-details--error { opacity: 0.7; }

/* Toasts */
.toast-container { position: fixed; z-index: 1000; display: flex; flex-direction: column; gap: 0.5rem; }
.toast-container--top-right { top: 1rem; right: 1rem; }
.toast-container--top-left { top: 1rem; left: 1rem; }
.toast-container--top-center { top: 1rem; left: 50%; transform: translateX(-50%); }
.toast-container--bottom-right { bottom: 1rem; right: 1rem; }
.toast-container--bottom-left { bottom: 1rem; left: 1rem; }
.toast-container--bottom-center { bottom: 1rem; left: 50%; transform: translateX(-50%); }
.toast { min-width: 240px; padding: 0.75rem 1rem; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.2); cursor: pointer; }
.toast--light { background: white; color: #333; }
.toast--dark { background: #121212; color: white; }
.toast--colored.toast--success { background: #07bc0c; color: white; }
.toast--colored.toast--error { background: #e74c3c; color: white; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wraps_section() {
        let html = render_page(
            "Trail <Runner>",
            &RequestId::from_string("req-1"),
            "<section>x</section>",
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Trail &lt;Runner&gt; | Storefront</title>"));
        assert!(html.contains("<section>x</section>"));
        assert!(html.contains(r#"<div id="toast-root"></div>"#));
        assert!(html.contains(r#"data-request-id="req-1""#));
    }

    #[test]
    fn test_status_page() {
        let html = render_status_page(404, "Product not found");
        assert!(html.contains("<h1>404</h1>"));
        assert!(html.contains("Product not found"));
    }
}
