// src/util/testing.rs

use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::infrastructure::html::NEXT_DATA_ID;

const ENV_VARS: [&str; 3] = ["ARCMARK_OUTPUT", "ARCMARK_TITLE", "ARCMARK_TIMEOUT_MS"];

/// Global test configuration, initialized exactly once via OnceLock.
#[derive(Debug)]
pub struct TestEnv {
    /// Directory holding sample sharing pages
    pub resources: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            resources: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources"),
        }
    }

    pub fn resource(&self, name: &str) -> PathBuf {
        self.resources.join(name)
    }
}

static TEST_ENV: OnceLock<TestEnv> = OnceLock::new();

/// Initializes logging once and returns the shared test configuration.
pub fn init_test_env() -> &'static TestEnv {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
        TestEnv::new()
    })
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let noisy_modules = ["html5ever", "selectors", "reqwest", "hyper_util", "rustls"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Restores the `ARCMARK_*` environment variables on drop.
#[derive(Debug, Clone)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// Snapshots and clears the variables so each test starts clean
    pub fn new() -> Self {
        let saved = ENV_VARS
            .iter()
            .map(|name| (*name, env::var(name).ok()))
            .collect();
        for name in ENV_VARS {
            env::remove_var(name);
        }
        Self { saved }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(val) => env::set_var(name, val),
                None => env::remove_var(name),
            }
        }
    }
}

/// Wraps a `props.pageProps.data` payload into a minimal Arc sharing page.
pub fn arc_page(data: &serde_json::Value) -> String {
    let next_data = serde_json::json!({
        "props": {"pageProps": {"data": data}},
        "page": "/folder/[folderId]",
        "buildId": "test"
    });
    format!(
        "<!DOCTYPE html><html><head><title>Shared Folder</title></head><body>\
         <div id=\"__next\"></div>\
         <script id=\"{}\" type=\"application/json\">{}</script>\
         </body></html>",
        NEXT_DATA_ID, next_data
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::html::locate_bookmarks;
    use serial_test::serial;

    #[test]
    fn given_test_env_when_initialized_then_points_at_resources() {
        let test_env = init_test_env();
        assert!(test_env.resource("arc_folder.html").ends_with("tests/resources/arc_folder.html"));
    }

    #[test]
    #[serial]
    fn given_guard_when_dropped_then_restores_variables() {
        env::set_var("ARCMARK_TITLE", "before");
        {
            let _guard = EnvGuard::new();
            assert!(env::var("ARCMARK_TITLE").is_err());
            env::set_var("ARCMARK_TITLE", "inside");
        }
        assert_eq!(env::var("ARCMARK_TITLE").unwrap(), "before");
        env::remove_var("ARCMARK_TITLE");
    }

    #[test]
    fn given_payload_when_wrapped_then_locator_finds_it() {
        let html = arc_page(&serde_json::json!({"items": [], "rootItems": ["x"]}));
        assert_eq!(locate_bookmarks(&html).unwrap().root_items, vec!["x".to_string()]);
    }
}
