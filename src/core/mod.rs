pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod panels;
pub mod storefront;

pub use crate::domain::model::{CartLine, Product, ProductId};
pub use crate::domain::ports::StoreSettings;
pub use crate::utils::error::Result;
