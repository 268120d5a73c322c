// src/infrastructure/di/service_container.rs
use crate::application::error::ApplicationResult;
use crate::application::services::conversion_service::ConversionService;
use crate::application::services::fetch_service::FetchService;
use crate::application::{ConversionServiceImpl, FetchServiceImpl};
use crate::config::Settings;
use crate::domain::services::clipboard::ClipboardService;
use crate::domain::services::clock::Clock;
use crate::domain::services::retrieval::RetrievalStrategy;
use crate::infrastructure::clipboard::ClipboardServiceImpl;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::http::{build_client, DirectStrategy, RelayStrategy};
use crate::infrastructure::netscape::{RenderOptions, RenderOptionsBuilder};
use std::sync::Arc;
use tracing::debug;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub conversion_service: Arc<dyn ConversionService>,
    pub fetch_service: Arc<dyn FetchService>,
    pub clipboard_service: Arc<dyn ClipboardService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let conversion_service = Arc::new(ConversionServiceImpl::new(
            clock,
            Self::create_render_options(config)?,
        ));
        let fetch_service = Arc::new(FetchServiceImpl::new(Self::create_strategies(config)?));

        Ok(Self {
            conversion_service,
            fetch_service,
            clipboard_service: Arc::new(ClipboardServiceImpl::new()),
        })
    }

    pub fn create_render_options(config: &Settings) -> ApplicationResult<RenderOptions> {
        Ok(RenderOptionsBuilder::default()
            .title(config.document_title.clone())
            .max_depth(config.max_depth)
            .escape_text(config.escape_text)
            .build()
            .map_err(crate::domain::error::DomainError::from)?)
    }

    /// Relays in configured order, then the direct fetch if enabled
    pub fn create_strategies(config: &Settings) -> ApplicationResult<Vec<Arc<dyn RetrievalStrategy>>> {
        let client = build_client(config.timeout_ms)?;

        let mut strategies: Vec<Arc<dyn RetrievalStrategy>> = config
            .relays
            .iter()
            .map(|relay| {
                Arc::new(RelayStrategy::new(
                    relay.name.as_str(),
                    relay.template.as_str(),
                    client.clone(),
                )) as Arc<dyn RetrievalStrategy>
            })
            .collect();

        if config.direct_fallback {
            strategies.push(Arc::new(DirectStrategy::new(client)));
        }

        debug!("Fetch chain has {} strategies", strategies.len());
        Ok(strategies)
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("conversion_service", &"Arc<dyn ConversionService>")
            .field("fetch_service", &"Arc<dyn FetchService>")
            .field("clipboard_service", &"Arc<dyn ClipboardService>")
            .finish()
    }
}
