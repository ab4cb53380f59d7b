#[cfg(feature = "cli")]
pub mod commands;
pub mod shell;
pub mod view;
