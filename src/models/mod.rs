pub mod product;
pub mod discount;
pub mod cart;

pub use product::*;
pub use discount::*;
pub use cart::*;
