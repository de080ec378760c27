//! Remote shop collaborators: catalog and stock lookups.
//!
//! Both are injected capabilities so the store can be driven by the real
//! REST API ([`HttpShopApi`]) or by the in-process service ([`ShopClient`])
//! without real I/O.

pub mod http;
pub mod shop_actor;

pub use http::*;
pub use shop_actor::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ProductDetails, StockInfo};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    Parse(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(u64),
    #[error("Shop service closed")]
    Closed,
}

/// Read-only product metadata lookup.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn product_details(&self, id: u64) -> Result<ProductDetails, RemoteError>;
}

/// Read-only stock level lookup.
#[async_trait]
pub trait StockService: Send + Sync {
    async fn stock_level(&self, id: u64) -> Result<StockInfo, RemoteError>;
}
