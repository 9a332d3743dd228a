//! Price formatting boundary.

use storefront_commerce::{CommerceError, Currency, Money};

/// Turns a catalog price into display text.
pub trait PriceFormatter {
    fn format_price(&self, price: f64) -> String;
}

/// Formats prices in a single currency with thousands grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyFormatter {
    currency: Currency,
}

impl CurrencyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Build from an ISO code such as `"USD"`.
    pub fn from_code(code: &str) -> Result<Self, CommerceError> {
        Ok(Self::new(Currency::from_code(code)?))
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format_price(&self, price: f64) -> String {
        Money::from_decimal(price, self.currency).display()
    }
}

impl<F> PriceFormatter for F
where
    F: Fn(f64) -> String,
{
    fn format_price(&self, price: f64) -> String {
        self(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formatter() {
        let usd = CurrencyFormatter::default();
        assert_eq!(usd.format_price(1249.5), "$1,249.50");
        assert_eq!(usd.format_price(0.0), "$0.00");

        let jpy = CurrencyFormatter::from_code("jpy").unwrap();
        assert_eq!(jpy.format_price(1500.0), "\u{00a5}1,500");
    }

    #[test]
    fn test_unknown_currency() {
        assert!(CurrencyFormatter::from_code("ZZZ").is_err());
    }

    #[test]
    fn test_closure_formatter() {
        let fmt = |p: f64| format!("{:.1} credits", p);
        assert_eq!(fmt.format_price(3.0), "3.0 credits");
    }
}
