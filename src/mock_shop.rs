//! # Test Doubles
//!
//! Deterministic collaborators for store and facade tests: a scripted
//! catalog/stock service, a notifier that records what it was told, and a
//! storage backend that always fails.
//!
//! We don't spin up the real [`ShopActor`](crate::remote::ShopActor) when
//! testing store logic; the doubles answer inline, so a test controls
//! stock levels and failures without any task wiring.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ProductDetails, StockInfo};
use crate::notify::{Notice, Notifier};
use crate::remote::{CatalogService, RemoteError, StockService};
use crate::storage::{CartStorage, StorageError};

/// Scripted catalog/stock service.
#[derive(Default)]
pub struct MockShop {
    products: Mutex<HashMap<u64, ProductDetails>>,
    stock: Mutex<HashMap<u64, u32>>,
    offline: AtomicBool,
}

impl MockShop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(self, details: ProductDetails, stock: u32) -> Self {
        self.stock.lock().unwrap().insert(details.id, stock);
        self.products.lock().unwrap().insert(details.id, details);
        self
    }

    pub fn set_stock(&self, id: u64, amount: u32) {
        self.stock.lock().unwrap().insert(id, amount);
    }

    /// Makes every subsequent request fail with a network error.
    pub fn break_network(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), RemoteError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RemoteError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogService for MockShop {
    async fn product_details(&self, id: u64) -> Result<ProductDetails, RemoteError> {
        self.check_online()?;
        self.products
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RemoteError::UnknownProduct(id))
    }
}

#[async_trait]
impl StockService for MockShop {
    async fn stock_level(&self, id: u64) -> Result<StockInfo, RemoteError> {
        self.check_online()?;
        self.stock
            .lock()
            .unwrap()
            .get(&id)
            .map(|amount| StockInfo { id, amount: *amount })
            .ok_or(RemoteError::UnknownProduct(id))
    }
}

/// Notifier that records every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Storage backend whose writes always fail.
pub struct FailingStorage;

impl CartStorage for FailingStorage {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn save(&self, _key: &str, _payload: &str) -> Result<(), StorageError> {
        Err(StorageError::Io("disk full".to_string()))
    }
}
