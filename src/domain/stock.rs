use serde::{Deserialize, Serialize};

/// Available quantity for a product, as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockInfo {
    pub id: u64,
    pub amount: u32,
}
