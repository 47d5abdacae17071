//! PizzaMama storefront state library.
//!
//! Headless reimplementation of the PizzaMama client-side state: the cart is
//! an explicitly constructed, dependency-injected store with durable
//! persistence and change notification; rendering is a pure function from a
//! cart snapshot to view models. Nothing in this crate touches a UI runtime.
//!
//! # Architecture
//!
//! - [`cart`] - `CartStore` owns the authoritative line-item list, persists it
//!   through a [`cart::storage::CartStorage`] adapter after every mutation,
//!   and notifies subscribers with a post-mutation snapshot.
//! - [`catalog`] - async client fetching the product list from a configured
//!   JSON endpoint, plus in-memory product filtering.
//! - [`cart::view`] - pure view models (`CartView`, `OrderSummary`) computed
//!   from cart snapshots.
//! - [`config`] - environment-driven configuration.
//!
//! # Example
//!
//! ```rust
//! use pizzamama_core::ProductId;
//! use pizzamama_storefront::cart::{CartProduct, CartStore};
//! use pizzamama_storefront::cart::storage::MemoryStorage;
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::new(Box::new(MemoryStorage::new()));
//! cart.add(&CartProduct {
//!     id: ProductId::new(1),
//!     name: "Margherita".to_string(),
//!     price: Decimal::new(850, 2),
//!     image: None,
//! });
//! assert_eq!(cart.item_count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;

pub use error::{AppError, Result};
pub use state::Storefront;
