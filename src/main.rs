mod domain;
mod notify;
mod remote;
mod storage;

mod app_system;
mod cart_store;
mod ui;

#[cfg(test)]
mod mock_shop;

use std::env;
use std::sync::Arc;

use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, ShopSystem};
use crate::cart_store::CartStore;
use crate::domain::ProductDetails;
use crate::notify::{Notifier, TracingNotifier};
use crate::remote::{CatalogService, HttpShopApi, StockService};
use crate::storage::{CartStorage, JsonFileStorage, MemoryStorage};
use crate::ui::StorefrontCart;

const CART_STORAGE_KEY: &str = "@shop:cart";

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront cart");

    let storage: Arc<dyn CartStorage> = match env::var("CART_STORAGE_DIR") {
        Ok(dir) => {
            info!(%dir, "Using file-backed cart storage");
            Arc::new(JsonFileStorage::new(dir))
        }
        Err(_) => Arc::new(MemoryStorage::new()),
    };

    // Real REST services when SHOP_API_URL is set, an in-process shop otherwise.
    let (catalog, stock, system): (
        Arc<dyn CatalogService>,
        Arc<dyn StockService>,
        Option<ShopSystem>,
    ) = match env::var("SHOP_API_URL") {
        Ok(base) => {
            info!(%base, "Using remote shop API");
            let api = Arc::new(HttpShopApi::new(base));
            (api.clone(), api, None)
        }
        Err(_) => {
            let system = ShopSystem::new(demo_listings());
            let client = system.shop_client.clone();
            (Arc::new(client.clone()), Arc::new(client), Some(system))
        }
    };

    let store = CartStore::hydrate(storage, CART_STORAGE_KEY, catalog, stock)
        .map_err(|e| e.to_string())?;
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let mut cart = StorefrontCart::new(store, notifier);

    let span = tracing::info_span!("demo_session");
    async {
        info!("Adding product 1 twice");
        cart.add_product(1).await;
        cart.add_product(1).await;
        info!(items = ?cart.items(), "Cart after adds");

        info!("Requesting more than the shop has");
        cart.update_product_amount(1, 10).await;

        info!("Adding product 2, then removing product 1");
        cart.add_product(2).await;
        cart.remove_product(1).await;
        info!(items = ?cart.items(), "Final cart");
    }
    .instrument(span)
    .await;

    if let Some(system) = system {
        system.shutdown().await?;
    }

    info!("Session completed");
    Ok(())
}

fn demo_listings() -> Vec<(ProductDetails, u32)> {
    vec![
        (
            ProductDetails::new(1, "Trail Sneaker", 179.9, "sneaker.jpg"),
            5,
        ),
        (
            ProductDetails::new(2, "Canvas High Top", 139.0, "hightop.jpg"),
            2,
        ),
    ]
}
