//! Assembled storefront state.
//!
//! Ties configuration, the catalog client, and the cart store together for
//! consumers that want the whole storefront wired up. The cart store is
//! explicitly constructed here and handed to views by reference - there is no
//! global singleton.

use crate::cart::CartStore;
use crate::cart::storage::JsonFileStorage;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::Result;

/// The assembled storefront: configuration, catalog client, cart store.
///
/// Unlike the catalog client this is not cloneable - the cart store is the
/// single writer of cart state, and every view renders from the snapshots it
/// publishes.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogClient,
    cart: CartStore,
}

impl Storefront {
    /// Assemble a storefront from configuration.
    ///
    /// The cart hydrates from the configured slot; a missing or corrupt slot
    /// yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let storage = JsonFileStorage::new(&config.cart.storage_dir, &config.cart.storage_key);
        let cart = CartStore::new(Box::new(storage));

        Ok(Self {
            config,
            catalog,
            cart,
        })
    }

    /// Assemble a storefront from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing/invalid or the catalog
    /// client cannot be built.
    pub fn from_env() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        Self::new(config)
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart store (the only mutation path).
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }
}
