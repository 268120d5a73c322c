// src/application/services/mod.rs
pub mod conversion_service;
pub mod conversion_service_impl;
pub mod fetch_service;
