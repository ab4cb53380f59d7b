pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::StoreConfig;
pub use crate::core::{
    cart::Cart,
    catalog::Catalog,
    checkout::CheckoutLinks,
    storefront::{StoreEvent, Storefront},
};
pub use domain::model::{CartLine, Product, ProductId};
pub use utils::error::{Result, StoreError};
