use thiserror::Error;

use crate::remote::RemoteError;
use crate::storage::StorageError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product not in cart: {0}")]
    NotFound(u64),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Shop service error: {0}")]
    Service(#[from] RemoteError),
    #[error("Persistence error: {0}")]
    Storage(#[from] StorageError),
    #[error("Corrupt persisted cart: {0}")]
    Corrupt(String),
}
