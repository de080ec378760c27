use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use super::{CatalogService, RemoteError, StockService};
use crate::domain::{ProductDetails, StockInfo};

type Response<T> = oneshot::Sender<Result<T, RemoteError>>;

#[derive(Debug)]
pub enum ShopRequest {
    GetProduct {
        id: u64,
        respond_to: Response<ProductDetails>,
    },
    GetStock {
        id: u64,
        respond_to: Response<StockInfo>,
    },
    Shutdown,
}

/// In-process stand-in for the storefront API.
///
/// Serves catalog and stock reads from an owned map, one request at a
/// time. Callers suspend on the oneshot response, matching the latency
/// shape of the real REST endpoints.
pub struct ShopActor {
    receiver: mpsc::Receiver<ShopRequest>,
    shelf: HashMap<u64, (ProductDetails, u32)>,
}

impl ShopActor {
    pub fn new(buffer_size: usize) -> (Self, ShopClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            shelf: HashMap::new(),
        };
        (actor, ShopClient { sender })
    }

    /// Puts a product on the shelf with the given stock level.
    pub fn add_listing(&mut self, details: ProductDetails, stock: u32) {
        self.shelf.insert(details.id, (details, stock));
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ShopRequest::GetProduct { id, respond_to } => {
                    let result = self
                        .shelf
                        .get(&id)
                        .map(|(details, _)| details.clone())
                        .ok_or(RemoteError::UnknownProduct(id));
                    let _ = respond_to.send(result);
                }
                ShopRequest::GetStock { id, respond_to } => {
                    let result = self
                        .shelf
                        .get(&id)
                        .map(|(_, amount)| StockInfo { id, amount: *amount })
                        .ok_or(RemoteError::UnknownProduct(id));
                    let _ = respond_to.send(result);
                }
                ShopRequest::Shutdown => break,
            }
        }
    }
}

/// Client half of [`ShopActor`]; implements the same capability traits
/// as the HTTP client.
#[derive(Clone)]
pub struct ShopClient {
    sender: mpsc::Sender<ShopRequest>,
}

impl ShopClient {
    /// Asks the actor to stop. Safe to call while other clones are still
    /// live; their later requests fail with [`RemoteError::Closed`].
    pub async fn shutdown(&self) {
        let _ = self.sender.send(ShopRequest::Shutdown).await;
    }
}

#[async_trait]
impl CatalogService for ShopClient {
    #[instrument(skip(self))]
    async fn product_details(&self, id: u64) -> Result<ProductDetails, RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ShopRequest::GetProduct { id, respond_to })
            .await
            .map_err(|_| RemoteError::Closed)?;
        response.await.map_err(|_| RemoteError::Closed)?
    }
}

#[async_trait]
impl StockService for ShopClient {
    #[instrument(skip(self))]
    async fn stock_level(&self, id: u64) -> Result<StockInfo, RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ShopRequest::GetStock { id, respond_to })
            .await
            .map_err(|_| RemoteError::Closed)?;
        response.await.map_err(|_| RemoteError::Closed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_catalog_and_stock_reads() {
        let (mut actor, client) = ShopActor::new(10);
        actor.add_listing(ProductDetails::new(1, "Trail Sneaker", 179.9, "sneaker.jpg"), 5);
        tokio::spawn(actor.run());

        let details = client.product_details(1).await.unwrap();
        assert_eq!(details.title, "Trail Sneaker");

        let stock = client.stock_level(1).await.unwrap();
        assert_eq!(stock, StockInfo { id: 1, amount: 5 });
    }

    #[tokio::test]
    async fn shutdown_stops_the_actor_despite_live_clones() {
        let (mut actor, client) = ShopActor::new(10);
        actor.add_listing(ProductDetails::new(1, "Trail Sneaker", 179.9, "sneaker.jpg"), 5);
        let handle = tokio::spawn(actor.run());

        let survivor = client.clone();
        client.shutdown().await;
        handle.await.unwrap();

        assert_eq!(
            survivor.product_details(1).await,
            Err(RemoteError::Closed)
        );
    }

    #[tokio::test]
    async fn unknown_product_is_an_error() {
        let (actor, client) = ShopActor::new(10);
        tokio::spawn(actor.run());

        assert_eq!(
            client.product_details(99).await,
            Err(RemoteError::UnknownProduct(99))
        );
        assert_eq!(
            client.stock_level(99).await,
            Err(RemoteError::UnknownProduct(99))
        );
    }
}
