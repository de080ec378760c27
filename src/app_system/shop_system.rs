use tracing::{error, info};

use crate::domain::ProductDetails;
use crate::remote::{ShopActor, ShopClient};

/// Runs the in-process shop service and hands out its client.
///
/// Responsible for starting the actor, seeding its listings, and handling
/// shutdown.
pub struct ShopSystem {
    pub shop_client: ShopClient,
    handle: tokio::task::JoinHandle<()>,
}

impl ShopSystem {
    pub fn new(listings: Vec<(ProductDetails, u32)>) -> Self {
        let (mut actor, shop_client) = ShopActor::new(32);
        for (details, stock) in listings {
            actor.add_listing(details, stock);
        }
        let handle = tokio::spawn(actor.run());

        Self {
            shop_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop service...");
        // Client clones may still be held elsewhere (the cart store keeps
        // its own), so the actor gets an explicit stop signal instead of
        // waiting for every sender to drop.
        self.shop_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!("Shop actor task failed: {:?}", e);
            return Err(format!("Shop actor task failed: {:?}", e));
        }

        info!("Shop service shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use tokio::time::{timeout, Duration};

    use crate::cart_store::CartStore;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn shutdown_completes_while_a_cart_holds_clients() {
        let system = ShopSystem::new(vec![(
            ProductDetails::new(1, "Trail Sneaker", 10.0, "sneaker.jpg"),
            5,
        )]);

        let shop = system.shop_client.clone();
        let _cart = CartStore::hydrate(
            Arc::new(MemoryStorage::new()),
            "@shop:cart",
            Arc::new(shop.clone()),
            Arc::new(shop),
        )
        .unwrap();

        timeout(Duration::from_secs(2), system.shutdown())
            .await
            .expect("shutdown did not complete")
            .unwrap();
    }
}
