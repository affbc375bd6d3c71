//! portal-rs
//!
//! Data layer of the internal admin portal: pagination core, backend API
//! clients, list-query controllers, and the campaign flow, plus the CLI
//! that renders them.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod listing;
pub mod logger;
pub mod models;
pub mod pagination;
pub mod services;
pub mod state;

pub use state::Portal;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
