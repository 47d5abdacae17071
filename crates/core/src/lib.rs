//! PizzaMama Core - Shared types library.
//!
//! This crate provides common types used across all PizzaMama components:
//! - `storefront` - Client-side cart and catalog state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and locale-aware prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
