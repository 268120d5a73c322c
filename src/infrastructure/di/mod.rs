// src/infrastructure/di/mod.rs
pub mod service_container;
pub mod test_container;

pub use service_container::ServiceContainer;
pub use test_container::TestServiceContainer;
