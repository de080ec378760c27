//! The cart store: authoritative in-memory cart plus serialize-on-write
//! persistence and stock-validated quantity changes.

pub mod error;

pub use error::CartError;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::domain::Product;
use crate::remote::{CatalogService, StockService};
use crate::storage::CartStorage;

/// Result of an operation that completed without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// The cart was mutated and persisted.
    Applied,
    /// The requested quantity exceeds availability; the cart is untouched.
    /// This is an expected outcome, not a failure.
    OutOfStock { requested: u32, available: u32 },
}

/// Owns the cart for one session.
///
/// Entries are unique by product id and keep insertion order. Every
/// mutation persists the candidate cart first and commits to memory only
/// after the write succeeds, so a partial write is never observable.
pub struct CartStore {
    items: Vec<Product>,
    storage: Arc<dyn CartStorage>,
    storage_key: String,
    catalog: Arc<dyn CatalogService>,
    stock: Arc<dyn StockService>,
}

impl CartStore {
    /// Hydrates the cart from persisted state. An absent key yields an
    /// empty cart; a payload that no longer parses is an error.
    pub fn hydrate(
        storage: Arc<dyn CartStorage>,
        storage_key: impl Into<String>,
        catalog: Arc<dyn CatalogService>,
        stock: Arc<dyn StockService>,
    ) -> Result<Self, CartError> {
        let storage_key = storage_key.into();
        let items: Vec<Product> = match storage.load(&storage_key)? {
            Some(payload) => {
                serde_json::from_str(&payload).map_err(|e| CartError::Corrupt(e.to_string()))?
            }
            None => Vec::new(),
        };

        // A payload that parses but breaks the cart invariants is just as
        // corrupt as one that doesn't parse.
        let mut seen = HashSet::new();
        for item in &items {
            if item.amount < 1 {
                return Err(CartError::Corrupt(format!(
                    "entry for product {} has amount 0",
                    item.id
                )));
            }
            if !seen.insert(item.id) {
                return Err(CartError::Corrupt(format!(
                    "duplicate entry for product {}",
                    item.id
                )));
            }
        }

        Ok(Self {
            items,
            storage,
            storage_key,
            catalog,
            stock,
        })
    }

    /// Current cart entries, in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    fn commit(&mut self, items: Vec<Product>) -> Result<(), CartError> {
        let payload =
            serde_json::to_string(&items).map_err(|e| CartError::Corrupt(e.to_string()))?;
        self.storage.save(&self.storage_key, &payload)?;
        self.items = items;
        Ok(())
    }

    /// Adds one unit of the product to the cart.
    ///
    /// An id already in the cart is bumped through
    /// [`update_product_amount`](Self::update_product_amount), which
    /// re-validates against stock. A first add fetches catalog details
    /// and appends an entry with amount 1, without a stock check.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: u64) -> Result<CartOutcome, CartError> {
        if let Some(existing) = self.items.iter().find(|item| item.id == product_id) {
            // Saturate at u32::MAX; the stock check rejects the request.
            let next_amount = existing.amount.saturating_add(1);
            debug!(amount = next_amount, "Product already in cart, bumping quantity");
            return self.update_product_amount(product_id, next_amount).await;
        }

        let details = self.catalog.product_details(product_id).await?;
        let mut next = self.items.clone();
        next.push(Product::from_details(details, 1));
        self.commit(next)?;
        Ok(CartOutcome::Applied)
    }

    /// Removes the product's entry from the cart.
    #[instrument(skip(self))]
    pub async fn remove_product(&mut self, product_id: u64) -> Result<(), CartError> {
        if !self.items.iter().any(|item| item.id == product_id) {
            return Err(CartError::NotFound(product_id));
        }
        let next: Vec<Product> = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        self.commit(next)?;
        Ok(())
    }

    /// Sets the product's quantity after checking availability.
    ///
    /// The stock read happens first, so a transport failure surfaces even
    /// for a quantity that would be rejected anyway.
    #[instrument(skip(self))]
    pub async fn update_product_amount(
        &mut self,
        product_id: u64,
        amount: u32,
    ) -> Result<CartOutcome, CartError> {
        let stock = self.stock.stock_level(product_id).await?;

        if amount < 1 {
            return Err(CartError::InvalidQuantity(amount));
        }
        if !self.items.iter().any(|item| item.id == product_id) {
            return Err(CartError::NotFound(product_id));
        }
        if amount > stock.amount {
            debug!(
                requested = amount,
                available = stock.amount,
                "Rejecting quantity beyond stock"
            );
            return Ok(CartOutcome::OutOfStock {
                requested: amount,
                available: stock.amount,
            });
        }

        let next: Vec<Product> = self
            .items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    Product {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        self.commit(next)?;
        Ok(CartOutcome::Applied)
    }
}
