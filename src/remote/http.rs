use async_trait::async_trait;
use tracing::{debug, instrument};

use super::{CatalogService, RemoteError, StockService};
use crate::domain::{ProductDetails, StockInfo};

/// REST client for the storefront API.
#[derive(Clone)]
pub struct HttpShopApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShopApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?
            .error_for_status()
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        resp.json::<T>()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpShopApi {
    #[instrument(skip(self))]
    async fn product_details(&self, id: u64) -> Result<ProductDetails, RemoteError> {
        let url = format!("{}/products/{id}", self.base_url);
        debug!(%url, "Fetching product details");
        self.get_json(&url).await
    }
}

#[async_trait]
impl StockService for HttpShopApi {
    #[instrument(skip(self))]
    async fn stock_level(&self, id: u64) -> Result<StockInfo, RemoteError> {
        let url = format!("{}/stock/{id}", self.base_url);
        debug!(%url, "Fetching stock level");
        self.get_json(&url).await
    }
}
