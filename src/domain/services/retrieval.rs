// src/domain/services/retrieval.rs
use crate::domain::error::DomainResult;
use std::fmt::Debug;

/// One way of obtaining the body behind a URL.
///
/// Implementations return `Err` for transport failures and for responses
/// whose status is not a success.
pub trait RetrievalStrategy: Send + Sync + Debug {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn retrieve(&self, url: &str) -> DomainResult<String>;
}
