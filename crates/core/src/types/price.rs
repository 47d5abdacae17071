//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts use [`Decimal`] so that `8.50 + 8.50` is exactly `17.00` - no
/// binary floating point drift in cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a euro price, the storefront default.
    #[must_use]
    pub const fn eur(amount: Decimal) -> Self {
        Self::new(amount, Currency::EUR)
    }

    /// Format for display in the currency's locale convention.
    ///
    /// Euro prices follow the Italian convention with a comma decimal
    /// separator and a trailing symbol (e.g., `8,50 €`); dollar and pound
    /// prices use a leading symbol (e.g., `$8.50`).
    #[must_use]
    pub fn display(&self) -> String {
        let amount = format!("{:.2}", self.amount);
        match self.currency {
            Currency::EUR => format!("{} €", amount.replace('.', ",")),
            Currency::USD | Currency::GBP => {
                format!("{}{amount}", self.currency.symbol())
            }
        }
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    EUR,
    USD,
    GBP,
}

impl Currency {
    /// The currency's display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_display_uses_italian_convention() {
        let price = Price::eur(Decimal::new(850, 2));
        assert_eq!(price.display(), "8,50 €");
    }

    #[test]
    fn test_eur_display_pads_to_two_decimals() {
        let price = Price::eur(Decimal::new(9, 0));
        assert_eq!(price.display(), "9,00 €");
    }

    #[test]
    fn test_usd_display_uses_leading_symbol() {
        let price = Price::new(Decimal::new(1999, 2), Currency::USD);
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::default(), Currency::EUR);
    }
}
