use std::sync::Arc;

use tracing::{instrument, warn};

use crate::cart_store::{CartOutcome, CartStore};
use crate::domain::Product;
use crate::notify::{Notice, Notifier};

/// UI-facing cart.
///
/// Same operations as [`CartStore`], but every failed call is reduced to
/// exactly one fixed notification and no state change; success is silent.
/// Callers that need the failure cause use the store directly.
pub struct StorefrontCart {
    store: CartStore,
    notifier: Arc<dyn Notifier>,
}

impl StorefrontCart {
    pub fn new(store: CartStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn items(&self) -> &[Product] {
        self.store.items()
    }

    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: u64) {
        match self.store.add_product(product_id).await {
            Ok(CartOutcome::Applied) => {}
            Ok(CartOutcome::OutOfStock { .. }) => self.notifier.notify(Notice::OutOfStock),
            Err(e) => {
                warn!(error = %e, "Add failed");
                self.notifier.notify(Notice::AddFailed);
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&mut self, product_id: u64) {
        if let Err(e) = self.store.remove_product(product_id).await {
            warn!(error = %e, "Remove failed");
            self.notifier.notify(Notice::RemoveFailed);
        }
    }

    #[instrument(skip(self))]
    pub async fn update_product_amount(&mut self, product_id: u64, amount: u32) {
        match self.store.update_product_amount(product_id, amount).await {
            Ok(CartOutcome::Applied) => {}
            Ok(CartOutcome::OutOfStock { .. }) => self.notifier.notify(Notice::OutOfStock),
            Err(e) => {
                warn!(error = %e, "Update failed");
                self.notifier.notify(Notice::UpdateFailed);
            }
        }
    }
}
