// src/application/services/fetch_service.rs
use std::fmt::Debug;
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::services::retrieval::RetrievalStrategy;
use crate::domain::share_url::ShareUrl;
use tracing::{debug, info, instrument, warn};

/// Service interface for retrieving sharing pages
pub trait FetchService: Send + Sync + Debug {
    /// Body from the first strategy that succeeds, `None` when all fail
    fn fetch(&self, url: &str) -> Option<String>;

    /// Like [`FetchService::fetch`] but reports exhaustion as an error
    fn fetch_share_page(&self, url: &ShareUrl) -> ApplicationResult<String>;
}

/// Tries each strategy in order, one request at a time.
#[derive(Debug, Clone, Default)]
pub struct FetchServiceImpl {
    strategies: Vec<Arc<dyn RetrievalStrategy>>,
}

impl FetchServiceImpl {
    pub fn new(strategies: Vec<Arc<dyn RetrievalStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }
}

impl FetchService for FetchServiceImpl {
    #[instrument(skip(self), level = "debug")]
    fn fetch(&self, url: &str) -> Option<String> {
        for strategy in &self.strategies {
            match strategy.retrieve(url) {
                Ok(body) => {
                    info!("Fetched {} bytes via {}", body.len(), strategy.name());
                    return Some(body);
                }
                Err(e) => warn!("Error with {}: {}", strategy.name(), e),
            }
        }
        debug!("All {} strategies failed", self.strategies.len());
        None
    }

    fn fetch_share_page(&self, url: &ShareUrl) -> ApplicationResult<String> {
        self.fetch(url.as_str())
            .ok_or_else(|| ApplicationError::FetchExhausted {
                url: url.to_string(),
                attempts: self.strategies.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{DomainError, DomainResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Scripted {
        name: &'static str,
        body: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn ok(name: &'static str, body: &'static str) -> Arc<Self> {
            Arc::new(Self { name, body: Some(body), calls: AtomicUsize::new(0) })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self { name, body: None, calls: AtomicUsize::new(0) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl RetrievalStrategy for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        fn retrieve(&self, _url: &str) -> DomainResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body
                .map(str::to_string)
                .ok_or_else(|| DomainError::Retrieval("HTTP 503".to_string()))
        }
    }

    fn chain(strategies: &[Arc<Scripted>]) -> FetchServiceImpl {
        FetchServiceImpl::new(
            strategies
                .iter()
                .map(|s| s.clone() as Arc<dyn RetrievalStrategy>)
                .collect(),
        )
    }

    #[test]
    fn given_third_strategy_succeeds_when_fetch_then_later_ones_untouched() {
        let first = Scripted::failing("allorigins");
        let second = Scripted::failing("corsproxy");
        let third = Scripted::ok("cors-anywhere", "<html>third</html>");
        let direct = Scripted::ok("direct", "<html>direct</html>");
        let service = chain(&[first.clone(), second.clone(), third.clone(), direct.clone()]);

        assert_eq!(
            service.fetch("https://arc.net/folder/X").as_deref(),
            Some("<html>third</html>")
        );
        assert_eq!(
            (first.calls(), second.calls(), third.calls(), direct.calls()),
            (1, 1, 1, 0)
        );
    }

    #[test]
    fn given_all_strategies_fail_when_fetch_then_none_after_trying_each_once() {
        let strategies = [Scripted::failing("a"), Scripted::failing("b"), Scripted::failing("direct")];
        let service = chain(&strategies);

        assert!(service.fetch("https://arc.net/folder/X").is_none());
        assert!(strategies.iter().all(|s| s.calls() == 1));
    }

    #[test]
    fn given_all_strategies_fail_when_fetch_share_page_then_fetch_exhausted() {
        let service = chain(&[Scripted::failing("a"), Scripted::failing("direct")]);
        let url = ShareUrl::parse("https://arc.net/folder/X").unwrap();

        match service.fetch_share_page(&url) {
            Err(ApplicationError::FetchExhausted { url, attempts }) => {
                assert_eq!(url, "https://arc.net/folder/X");
                assert_eq!(attempts, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn given_no_strategies_when_fetch_then_none() {
        assert!(FetchServiceImpl::default().fetch("https://arc.net/").is_none());
    }

    #[test]
    fn given_strategies_when_names_listed_then_in_order() {
        let service = chain(&[Scripted::failing("a"), Scripted::ok("b", "")]);
        assert_eq!(service.strategy_names(), vec!["a", "b"]);
    }
}
