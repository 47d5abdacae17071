//! Pure view models for cart rendering.
//!
//! The UI layer renders these from scratch on every notification; nothing
//! here touches a UI runtime, so all of the cart's observable behavior stays
//! unit-testable headlessly.

use pizzamama_core::Price;
use rust_decimal::Decimal;

use super::{CartSnapshot, LineItem};

/// Flat delivery fee applied to every order.
#[must_use]
pub fn delivery_fee() -> Decimal {
    Decimal::new(350, 2)
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemView {
    pub id: pizzamama_core::ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image: Option<String>,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.product_id,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: Price::eur(item.unit_price).display(),
            line_total: Price::eur(item.line_total()).display(),
            image: item.image.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
    pub is_empty: bool,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: Price::eur(Decimal::ZERO).display(),
            item_count: 0,
            is_empty: true,
        }
    }
}

impl From<&CartSnapshot> for CartView {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            items: snapshot.items.iter().map(CartItemView::from).collect(),
            subtotal: Price::eur(snapshot.subtotal).display(),
            item_count: snapshot.item_count,
            is_empty: snapshot.items.is_empty(),
        }
    }
}

/// Order summary for the checkout panel: subtotal, delivery, grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub delivery: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Formatted subtotal, e.g. `17,00 €`.
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        Price::eur(self.subtotal).display()
    }

    /// Formatted delivery fee.
    #[must_use]
    pub fn delivery_display(&self) -> String {
        Price::eur(self.delivery).display()
    }

    /// Formatted grand total.
    #[must_use]
    pub fn total_display(&self) -> String {
        Price::eur(self.total).display()
    }
}

impl From<&CartSnapshot> for OrderSummary {
    fn from(snapshot: &CartSnapshot) -> Self {
        let delivery = delivery_fee();
        Self {
            subtotal: snapshot.subtotal,
            delivery,
            total: snapshot.subtotal + delivery,
        }
    }
}
