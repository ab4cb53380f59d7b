// Domain layer: storefront models and the settings port. No I/O here.

pub mod model;
pub mod ports;
