pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod season;
pub mod status;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
