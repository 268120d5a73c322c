// src/application/mod.rs
pub mod error;
pub mod services;

// Re-export key services for easier imports
pub use services::conversion_service_impl::ConversionServiceImpl;
pub use services::fetch_service::FetchServiceImpl;
