// src/lib.rs
#![crate_type = "lib"]
#![crate_name = "arcmark"]

// Core modules
pub mod application;
pub mod domain;
pub mod infrastructure;

// CLI modules
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod util;

pub use application::services::conversion_service::{Conversion, ConversionService};
pub use application::services::fetch_service::FetchService;
pub use domain::item::{BookmarksData, Item};
