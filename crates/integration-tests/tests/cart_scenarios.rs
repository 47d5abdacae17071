//! End-to-end cart scenarios.
//!
//! Walks the reference flows: empty cart through add/merge/update/remove,
//! persistence across store instances, and best-effort persistence when the
//! storage backend fails.

use std::cell::RefCell;
use std::rc::Rc;

use pizzamama_core::ProductId;
use pizzamama_integration_tests::{init_tracing, storage_dir, unique_storage_key};
use pizzamama_storefront::cart::storage::{CartStorage, JsonFileStorage, MemoryStorage};
use pizzamama_storefront::cart::view::{CartView, OrderSummary};
use pizzamama_storefront::cart::{CartProduct, CartStore};
use rust_decimal::Decimal;

fn margherita() -> CartProduct {
    CartProduct {
        id: ProductId::new(1),
        name: "Margherita".to_string(),
        price: Decimal::new(850, 2),
        image: None,
    }
}

fn diavola() -> CartProduct {
    CartProduct {
        id: ProductId::new(2),
        name: "Diavola".to_string(),
        price: Decimal::new(900, 2),
        image: Some("/images/diavola.jpg".to_string()),
    }
}

#[test]
fn scenario_single_add() {
    init_tracing();
    let mut cart = CartStore::new(Box::new(MemoryStorage::new()));

    cart.add(&margherita());

    assert_eq!(cart.item_count(), 1);
    assert_eq!(cart.total(), Decimal::new(850, 2));
}

#[test]
fn scenario_re_add_merges_into_one_line() {
    init_tracing();
    let mut cart = CartStore::new(Box::new(MemoryStorage::new()));

    cart.add(&margherita());
    cart.add(&margherita());

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.total(), Decimal::new(1700, 2));
}

#[test]
fn scenario_quantity_zero_removes() {
    init_tracing();
    let mut cart = CartStore::new(Box::new(MemoryStorage::new()));

    cart.add(&margherita());
    cart.update_quantity(ProductId::new(1), 0);

    assert_eq!(cart.item_count(), 0);
    assert!(cart.is_empty());
}

#[test]
fn scenario_add_three_then_remove() {
    init_tracing();
    let mut cart = CartStore::new(Box::new(MemoryStorage::new()));

    cart.add_with_quantity(&diavola(), 3);
    cart.remove(ProductId::new(2));

    assert!(cart.is_empty());
    assert_eq!(cart.total(), Decimal::ZERO);
}

#[test]
fn scenario_persist_and_reload_fresh_store() {
    init_tracing();
    let key = unique_storage_key();

    {
        let storage = JsonFileStorage::new(storage_dir(), &key);
        let mut cart = CartStore::new(Box::new(storage));
        cart.add(&margherita());
        cart.add(&margherita());
    }

    let storage = JsonFileStorage::new(storage_dir(), &key);
    let path = storage.path().to_path_buf();
    let reloaded = CartStore::new(Box::new(storage));

    assert_eq!(reloaded.items().len(), 1);
    assert_eq!(reloaded.items()[0].quantity, 2);
    assert_eq!(reloaded.items()[0].name, "Margherita");
    assert_eq!(reloaded.total(), Decimal::new(1700, 2));

    std::fs::remove_file(path).expect("cleanup cart slot");
}

#[test]
fn scenario_failing_storage_still_mutates_and_notifies() {
    init_tracing();
    let storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut cart = CartStore::new(Box::new(storage.clone()));

    let totals: Rc<RefCell<Vec<Decimal>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&totals);
    cart.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.subtotal));

    cart.add(&margherita());

    assert_eq!(cart.item_count(), 1);
    assert_eq!(*totals.borrow(), [Decimal::new(850, 2)]);
    assert_eq!(storage.saved(), None, "failed save must not write the slot");
}

#[test]
fn scenario_checkout_clears_cart_and_slot() {
    init_tracing();
    let storage = MemoryStorage::new();
    let mut cart = CartStore::new(Box::new(storage.clone()));

    cart.add(&margherita());
    cart.add_with_quantity(&diavola(), 2);
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(storage.saved(), Some(Vec::new()));
    assert!(CartStore::new(Box::new(storage)).is_empty());
}

#[test]
fn scenario_views_render_from_notifications() {
    init_tracing();
    let mut cart = CartStore::new(Box::new(MemoryStorage::new()));

    let rendered: Rc<RefCell<Option<(CartView, OrderSummary)>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&rendered);
    let subscription = cart.subscribe(move |snapshot| {
        *sink.borrow_mut() = Some((CartView::from(snapshot), OrderSummary::from(snapshot)));
    });

    cart.add_with_quantity(&margherita(), 2);
    cart.add(&diavola());

    {
        let rendered = rendered.borrow();
        let (view, summary) = rendered.as_ref().expect("listener ran");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.subtotal, "26,00 €");
        assert_eq!(summary.total_display(), "29,50 €");
    }

    // Detached views stop rendering.
    assert!(cart.unsubscribe(subscription));
    cart.clear();
    let rendered = rendered.borrow();
    let (view, _) = rendered.as_ref().expect("last render kept");
    assert_eq!(view.item_count, 3);
}

#[test]
fn scenario_slot_roundtrip_is_idempotent() {
    init_tracing();
    let key = unique_storage_key();
    let storage = JsonFileStorage::new(storage_dir(), &key);

    let mut cart = CartStore::new(Box::new(storage.clone()));
    cart.add_with_quantity(&margherita(), 2);
    cart.add(&diavola());

    let loaded = storage.load();
    storage.save(&loaded).expect("re-save loaded items");
    assert_eq!(storage.load(), loaded);

    std::fs::remove_file(storage.path()).expect("cleanup cart slot");
}
