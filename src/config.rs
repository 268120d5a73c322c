// src/config.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::infrastructure::netscape::{DEFAULT_DOCUMENT_TITLE, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, trace};

/// One relay endpoint of the fetch chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Name shown in logs
    pub name: String,
    /// URL template with `{url}` or `{encoded_url}`
    pub template: String,
}

impl RelaySettings {
    fn new(name: &str, template: &str) -> Self {
        Self {
            name: name.to_string(),
            template: template.to_string(),
        }
    }
}

fn default_relays() -> Vec<RelaySettings> {
    vec![
        RelaySettings::new(
            "allorigins",
            "https://api.allorigins.win/raw?url={encoded_url}",
        ),
        RelaySettings::new("corsproxy", "https://corsproxy.io/?{encoded_url}"),
        RelaySettings::new("cors-anywhere", "https://cors-anywhere.herokuapp.com/{url}"),
    ]
}

fn default_true() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_output_file() -> String {
    "arc_bookmarks.html".to_string()
}

fn default_document_title() -> String {
    DEFAULT_DOCUMENT_TITLE.to_string()
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Relays tried in order before the direct fetch
    #[serde(default = "default_relays")]
    pub relays: Vec<RelaySettings>,

    /// Whether a direct fetch is attempted after all relays failed (default: true)
    #[serde(default = "default_true")]
    pub direct_fallback: bool,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Where the bookmark file is written
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Title and heading of the generated bookmark file
    #[serde(default = "default_document_title")]
    pub document_title: String,

    /// Maximum folder nesting before the graph is rejected
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// HTML-escape titles and URLs (default: false)
    #[serde(default)]
    pub escape_text: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            relays: default_relays(),
            direct_fallback: true,
            timeout_ms: default_timeout_ms(),
            output_file: default_output_file(),
            document_title: default_document_title(),
            max_depth: default_max_depth(),
            escape_text: false,
        }
    }
}

/// `~/.config/arcmark/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config/arcmark/config.toml"))
}

fn read_config_file(path: &Path) -> DomainResult<Settings> {
    let config_text = std::fs::read_to_string(path)?;
    toml::from_str::<Settings>(&config_text).map_err(|e| {
        DomainError::Other(format!(
            "Failed to parse config file {}: {}",
            path.display(),
            e
        ))
    })
}

/// Load settings from the config file and environment variables.
///
/// An explicitly given config file must exist and parse; the default
/// location is optional. Environment variables win over both.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            read_config_file(path)?
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!("Loading config from: {:?}", path);
                read_config_file(&path)?
            }
            None => Settings::default(),
        },
    };

    if let Ok(output) = std::env::var("ARCMARK_OUTPUT") {
        trace!("Using ARCMARK_OUTPUT from environment: {}", output);
        settings.output_file = output;
    }

    if let Ok(title) = std::env::var("ARCMARK_TITLE") {
        trace!("Using ARCMARK_TITLE from environment: {}", title);
        settings.document_title = title;
    }

    if let Ok(timeout) = std::env::var("ARCMARK_TIMEOUT_MS") {
        settings.timeout_ms = timeout.trim().parse().map_err(|_| {
            DomainError::Other(format!("Invalid ARCMARK_TIMEOUT_MS: {}", timeout))
        })?;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}
