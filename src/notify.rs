use std::fmt;

use tracing::error;

/// Fixed user-facing messages, one per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    AddFailed,
    RemoveFailed,
    UpdateFailed,
    OutOfStock,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::AddFailed => "Failed to add product",
            Notice::RemoveFailed => "Failed to remove product",
            Notice::UpdateFailed => "Failed to update product quantity",
            Notice::OutOfStock => "Requested quantity is out of stock",
        };
        f.write_str(message)
    }
}

/// Fire-and-forget sink for user-facing messages. No return value, no retry.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Routes notices through the tracing pipeline.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        error!(%notice, "User notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_category_has_a_fixed_message() {
        assert_eq!(Notice::AddFailed.to_string(), "Failed to add product");
        assert_eq!(Notice::RemoveFailed.to_string(), "Failed to remove product");
        assert_eq!(
            Notice::UpdateFailed.to_string(),
            "Failed to update product quantity"
        );
        assert_eq!(
            Notice::OutOfStock.to_string(),
            "Requested quantity is out of stock"
        );
    }
}
