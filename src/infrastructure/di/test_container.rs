// src/infrastructure/di/test_container.rs
use crate::application::services::conversion_service::ConversionService;
use crate::application::services::fetch_service::FetchService;
use crate::application::{ConversionServiceImpl, FetchServiceImpl};
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::services::retrieval::RetrievalStrategy;
use crate::infrastructure::clipboard::DummyClipboardService;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::netscape::RenderOptions;
use crate::util::testing::init_test_env;
use std::sync::Arc;

/// Fixed timestamp used for items without `createdAt` in tests
pub const TEST_NOW: i64 = 1_700_000_000;

/// Test service container: frozen clock, no system clipboard, and a
/// caller-supplied fetch chain so no network is touched.
pub struct TestServiceContainer {
    pub conversion_service: Arc<dyn ConversionService>,
    pub fetch_service: Arc<dyn FetchService>,
    pub clipboard_service: Arc<dyn ClipboardService>,
}

impl TestServiceContainer {
    pub fn new() -> Self {
        Self::with_parts(Vec::new(), DummyClipboardService::new())
    }

    pub fn with_parts(
        strategies: Vec<Arc<dyn RetrievalStrategy>>,
        clipboard: DummyClipboardService,
    ) -> Self {
        let _env = init_test_env();
        Self {
            conversion_service: Arc::new(ConversionServiceImpl::new(
                Arc::new(FixedClock::from_secs(TEST_NOW)),
                RenderOptions::default(),
            )),
            fetch_service: Arc::new(FetchServiceImpl::new(strategies)),
            clipboard_service: Arc::new(clipboard),
        }
    }

    /// Same services behind the production container type
    pub fn into_container(self) -> ServiceContainer {
        ServiceContainer {
            conversion_service: self.conversion_service,
            fetch_service: self.fetch_service,
            clipboard_service: self.clipboard_service,
        }
    }
}

impl Default for TestServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
