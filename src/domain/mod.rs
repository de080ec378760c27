pub mod product;
pub mod stock;

pub use product::*;
pub use stock::*;
