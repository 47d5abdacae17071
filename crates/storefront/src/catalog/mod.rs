//! Catalog client.
//!
//! Fetches the product list from a configured JSON endpoint with `reqwest`
//! and caches successful responses with `moka`. The endpoint may return
//! either a `{"results": [...]}` envelope (paginated REST) or a flat array;
//! both parse to the same product list. Fetch failures surface as a
//! [`CatalogError`] result so callers can branch without exception-style
//! control flow - the cart is never affected by a failed catalog load.

pub mod filters;

pub use filters::ProductFilters;

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use moka::future::Cache;

use pizzamama_core::ProductId;

use crate::cart::CartProduct;
use crate::config::CatalogConfig;

/// Cached responses live this long before a refetch.
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connection refused, timeout, invalid URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("catalog endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body was not a product list in either supported shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A product as served by the catalog endpoint.
///
/// The cart consumes only `{id, name, price, image}`; the remaining fields
/// drive catalog cards and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Paginated REST envelope (`{"count": ..., "results": [...]}`).
#[derive(Deserialize)]
struct ProductListEnvelope {
    results: Vec<Product>,
}

/// Parse a product list from either supported response shape.
fn parse_product_list(body: &str) -> Result<Vec<Product>, CatalogError> {
    if let Ok(envelope) = serde_json::from_str::<ProductListEnvelope>(body) {
        return Ok(envelope.results);
    }
    Ok(serde_json::from_str::<Vec<Product>>(body)?)
}

/// Client for the catalog endpoint.
///
/// Cheap to clone; clones share the HTTP connection pool and response cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    endpoint: Url,
    cache: Cache<String, Arc<Vec<Product>>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        let cache = Cache::builder()
            .max_capacity(16)
            .time_to_live(CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                endpoint: config.endpoint.clone(),
                cache,
            }),
        })
    }

    /// The configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetch the product list, serving from cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on network failure, a non-success HTTP status,
    /// or an unparseable response body.
    #[instrument(skip(self), fields(endpoint = %self.inner.endpoint))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let key = self.inner.endpoint.as_str().to_string();
        if let Some(cached) = self.inner.cache.get(&key).await {
            tracing::debug!("catalog cache hit");
            return Ok(cached.as_ref().clone());
        }

        let response = self
            .inner
            .client
            .get(self.inner.endpoint.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "catalog endpoint returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let products = parse_product_list(&body)?;
        self.inner
            .cache
            .insert(key, Arc::new(products.clone()))
            .await;

        Ok(products)
    }
}
