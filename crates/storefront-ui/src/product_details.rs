//! Product details section: brand, variations, price, description, the
//! add-to-cart trigger and the installment promotions.

use storefront_commerce::{ProductDetail, ProductVariation};
use storefront_core::SupportConfig;

use crate::add_to_cart::AddToCartTrigger;
use crate::escape::escape_html;
use crate::format::PriceFormatter;
use crate::link::LinkRenderer;

/// Brand pages are not routed yet.
const BRAND_HREF: &str = "#";

/// Installment promotions shown under the add-to-cart trigger.
const INSTALLMENT_BANNERS: [(&str, &str); 2] = [
    ("Installment purchase", "Browse profiles in 5 minutes"),
    ("0% installment payment via card", "Visa, Mastercard, JSB, Amex"),
];

/// Inputs for the product details section. The product is owned by the page
/// and only read here.
#[derive(Debug, Clone, Copy)]
pub struct ProductDetails<'a> {
    pub product: &'a ProductDetail,
    /// `None` and an empty slice both mean "no variations".
    pub product_variations: Option<&'a [ProductVariation]>,
    pub support: &'a SupportConfig,
    /// Form action the add-to-cart trigger posts to.
    pub cart_action: &'a str,
}

impl<'a> ProductDetails<'a> {
    pub fn new(
        product: &'a ProductDetail,
        product_variations: Option<&'a [ProductVariation]>,
        support: &'a SupportConfig,
        cart_action: &'a str,
    ) -> Self {
        Self {
            product,
            product_variations,
            support,
            cart_action,
        }
    }

    pub fn trigger(&self) -> AddToCartTrigger {
        AddToCartTrigger::for_product(self.product)
    }

    /// Render the section.
    pub fn render(&self, price: &dyn PriceFormatter, links: &dyn LinkRenderer) -> String {
        let brand = links.link(BRAND_HREF, "fs-6", &self.product.brand_name);

        let variations: String = self
            .product_variations
            .unwrap_or_default()
            .iter()
            .map(render_variation)
            .collect();

        let banners: String = INSTALLMENT_BANNERS
            .iter()
            .map(|(title, subtitle)| {
                format!(
                    r#"<button class="btn btn-primary w-100 installment-banner">
            <div class="installment-title">{}</div>
            <div class="installment-subtitle">{}</div>
        </button>"#,
                    title, subtitle
                )
            })
            .collect();

        format!(
            r#"<section class="product-details" data-section="product-details">
    <div class="d-flex gap-2 align-items-center mb-2 product-brand">
        <h5 class="m-0 fs-6">Brand: </h5>
        {brand}
    </div>
    {variations}
    <h4 class="fs-3 product-price">{price}</h4>
    <p class="py-4 product-description">{description}</p>
    <div class="add-to-cart-action">
    {trigger}
    </div>
    <div class="d-flex gap-2 mt-2 installment-banners">
        {banners}
    </div>
    <p class="text-center my-4 call-to-order">
        Call to order <a class="fw-bold" href="tel:{phone}">{phone_label}</a> ({hours})
    </p>
</section>"#,
            brand = brand,
            variations = variations,
            price = escape_html(&price.format_price(self.product.price)),
            description = escape_html(&self.product.description),
            trigger = self.trigger().render(self.cart_action),
            banners = banners,
            phone = escape_html(&self.support.phone),
            phone_label = escape_html(&self.support.phone_label),
            hours = escape_html(&self.support.hours),
        )
    }
}

fn render_variation(variation: &ProductVariation) -> String {
    let options: String = variation
        .values()
        .iter()
        .map(|value| {
            format!(
                r#"<button type="button" class="btn btn-outline-primary me-2 py-1 px-2 variation-option">{}</button>"#,
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<div class="mb-3 product-variation">
        <h5 class="mb-2 fs-6">{}:</h5>
        {}
    </div>"#,
        escape_html(&variation.name),
        options
    )
}

/// Rendered in place of the section when the product cannot be loaded.
pub fn render_product_details_fallback() -> String {
    r#"<section class="product-details product-details--error" data-section="product-details">
    <div class="error-message">
        <p>Unable to load product information. Please try again.</p>
    </div>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyFormatter;
    use crate::link::AnchorLink;
    use storefront_commerce::ProductId;

    fn product(orderable: bool) -> ProductDetail {
        ProductDetail::new(ProductId::new(7), "Acme & Sons", 1249.5)
            .with_description("Waterproof <b>shell</b>")
            .orderable(orderable)
    }

    fn render(product: &ProductDetail, variations: Option<&[ProductVariation]>) -> String {
        let support = SupportConfig::default();
        ProductDetails::new(product, variations, &support, "/product/7/cart")
            .render(&CurrencyFormatter::default(), &AnchorLink)
    }

    #[test]
    fn test_renders_brand_as_link() {
        let html = render(&product(true), None);
        assert!(html.contains(r##"<a href="#" class="fs-6">Acme &amp; Sons</a>"##));
    }

    #[test]
    fn test_price_goes_through_formatter() {
        let support = SupportConfig::default();
        let product = product(true);
        let html = ProductDetails::new(&product, None, &support, "/cart")
            .render(&|p: f64| format!("PRICE[{}]", p), &AnchorLink);
        assert!(html.contains("PRICE[1249.5]"));

        assert!(render(&product, None).contains("$1,249.50"));
    }

    #[test]
    fn test_description_is_escaped() {
        let html = render(&product(true), None);
        assert!(html.contains("Waterproof &lt;b&gt;shell&lt;/b&gt;"));
    }

    #[test]
    fn test_no_variations_section_when_absent_or_empty() {
        let absent = render(&product(true), None);
        let empty = render(&product(true), Some(&[]));

        for html in [absent, empty] {
            assert!(!html.contains("product-variation"));
            assert!(!html.contains("variation-option"));
        }
    }

    #[test]
    fn test_variations_render_in_order() {
        let variations = vec![
            ProductVariation::new("Color", vec!["Red".into(), "Blue".into()]),
            ProductVariation::new("Size", vec!["M".into()]),
        ];
        let html = render(&product(true), Some(&variations));

        assert_eq!(html.matches(r#"class="mb-3 product-variation""#).count(), 2);
        assert_eq!(html.matches("variation-option").count(), 3);
        let red = html.find(">Red<").unwrap();
        let blue = html.find(">Blue<").unwrap();
        let size = html.find("Size:").unwrap();
        assert!(red < blue && blue < size);
    }

    #[test]
    fn test_variation_without_values_has_no_buttons() {
        let variations = vec![
            ProductVariation {
                name: "Material".to_string(),
                value: None,
            },
            ProductVariation::new("Finish", Vec::new()),
        ];
        let html = render(&product(true), Some(&variations));

        assert!(html.contains("Material:"));
        assert!(html.contains("Finish:"));
        assert!(!html.contains("variation-option"));
    }

    #[test]
    fn test_trigger_disabled_when_not_orderable() {
        assert!(render(&product(false), None).contains(" disabled>"));
        assert!(!render(&product(true), None).contains(" disabled>"));

        let support = SupportConfig::default();
        let unorderable = product(false);
        assert!(ProductDetails::new(&unorderable, None, &support, "/cart")
            .trigger()
            .is_disabled());
    }

    #[test]
    fn test_installments_and_call_to_order() {
        let html = render(&product(true), None);
        assert!(html.contains("Installment purchase"));
        assert!(html.contains("Visa, Mastercard, JSB, Amex"));
        assert!(html.contains(r#"href="tel:18009999">1800.9999</a> (7:30 - 22:00)"#));
    }

    #[test]
    fn test_render_is_deterministic() {
        let variations = vec![ProductVariation::new("Color", vec!["Red".into()])];
        assert_eq!(
            render(&product(true), Some(&variations)),
            render(&product(true), Some(&variations))
        );
    }

    #[test]
    fn test_fallback() {
        assert!(render_product_details_fallback().contains("product-details--error"));
    }
}
