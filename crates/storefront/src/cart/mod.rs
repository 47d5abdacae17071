//! Cart state management.
//!
//! [`CartStore`] is the sole owner and mutator of the cart. Every mutation
//! runs synchronously to completion: the in-memory list is updated first,
//! then the cart is persisted through the injected [`storage::CartStorage`]
//! adapter, then subscribers are notified with a snapshot that already
//! reflects the mutation. Persistence is best-effort - a failed save is
//! logged and never rolls back the in-memory state or suppresses the
//! notification, so the cart stays usable for the session even when it
//! cannot be saved.

pub mod storage;
pub mod view;

use pizzamama_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storage::CartStorage;

/// One product entry in the cart.
///
/// Name and unit price are captured at add-time, so a later catalog price
/// change does not retroactively alter existing entries. Serializes to the
/// persisted slot format: `{"id", "name", "price", "quantity", "image"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable product identifier, unique within the cart.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// Display name captured at add-time.
    pub name: String,
    /// Non-negative unit price captured at add-time.
    #[serde(rename = "price")]
    pub unit_price: Decimal,
    /// Always >= 1; an update that would reach zero removes the item instead.
    pub quantity: u32,
    /// Optional display image URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl LineItem {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Product descriptor consumed by [`CartStore::add`].
///
/// The store is agnostic to where this came from - a catalog fetch, a
/// fixture, anything with an id, a name, and a price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
}

/// Immutable view of the cart published to subscribers after every mutation.
///
/// Includes the derived totals so a quantity badge can always be rendered
/// from the notification payload alone, even with no other listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// Sum of `unit_price * quantity` over all items.
    pub subtotal: Decimal,
    /// Sum of quantities over all items (the badge counter).
    pub item_count: u32,
}

/// Handle returned by [`CartStore::subscribe`]; pass to
/// [`CartStore::unsubscribe`] to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type ListenerFn = Box<dyn Fn(&CartSnapshot)>;

struct Listener {
    id: SubscriptionId,
    callback: ListenerFn,
}

/// The authoritative in-memory cart.
///
/// Construct with an injected storage adapter; the store hydrates from it
/// and persists back after every mutation. Views subscribe for change
/// notifications and re-render from the published snapshot - they never hold
/// a private copy of authoritative state.
pub struct CartStore {
    items: Vec<LineItem>,
    storage: Box<dyn CartStorage>,
    listeners: Vec<Listener>,
    next_listener_id: u64,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create a store hydrated from the given storage adapter.
    ///
    /// A missing, corrupt, or unavailable slot yields an empty cart; hydration
    /// never fails.
    #[must_use]
    pub fn new(storage: Box<dyn CartStorage>) -> Self {
        let items = storage.load();
        Self {
            items,
            storage,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Current line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart subtotal: sum of `unit_price * quantity` over all items.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total quantity across all items (the badge counter).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Build a snapshot of the current state with derived totals.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            subtotal: self.total(),
            item_count: self.item_count(),
        }
    }

    /// Add one unit of a product, merging into an existing line item.
    pub fn add(&mut self, product: &CartProduct) {
        self.add_with_quantity(product, 1);
    }

    /// Add a product with an explicit quantity (clamped to >= 1).
    ///
    /// If a line item with the same product id exists its quantity increases
    /// by the given amount; otherwise a new line item is appended, preserving
    /// insertion order.
    pub fn add_with_quantity(&mut self, product: &CartProduct, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            existing.quantity += quantity;
        } else {
            self.items.push(LineItem {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity,
                image: product.image.clone(),
            });
        }
        self.commit();
    }

    /// Remove the line item with the given product id; no-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id != product_id);
        self.commit();
    }

    /// Set the quantity of a line item to an absolute value.
    ///
    /// A quantity of zero removes the item. Unknown product ids leave the
    /// state unchanged.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: u32) {
        if new_quantity == 0 {
            self.remove(product_id);
            return;
        }
        let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        else {
            return;
        };
        item.quantity = new_quantity;
        self.commit();
    }

    /// Empty the cart (checkout).
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit();
    }

    /// Register a listener invoked with a post-mutation snapshot after every
    /// mutating call. Returns a handle for [`Self::unsubscribe`].
    pub fn subscribe(&mut self, listener: impl Fn(&CartSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push(Listener {
            id,
            callback: Box::new(listener),
        });
        id
    }

    /// Detach a listener. Returns true if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() < before
    }

    /// Persist the cart, then notify listeners.
    ///
    /// Listeners always observe state that is both mutated in memory and (on
    /// a best-effort basis) already written to storage.
    fn commit(&mut self) {
        if let Err(error) = self.storage.save(&self.items) {
            tracing::warn!(%error, "cart persistence failed; keeping in-memory state");
        }
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            (listener.callback)(&snapshot);
        }
    }
}
