// src/infrastructure/clipboard.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::services::clipboard::ClipboardService;
use arboard::Clipboard;
use tracing::{debug, instrument};

/// System clipboard via `arboard`.
///
/// Only reading is needed, so the Linux ownership problem of writing
/// clipboard data from a short-lived process does not apply here.
#[derive(Debug, Default)]
pub struct ClipboardServiceImpl;

impl ClipboardServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardService for ClipboardServiceImpl {
    #[instrument(level = "trace")]
    fn read_text(&self) -> DomainResult<Option<String>> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| DomainError::Clipboard(format!("Failed to initialize clipboard: {}", e)))?;

        match clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => {
                debug!("Clipboard holds no text");
                Ok(None)
            }
            Err(e) => Err(DomainError::Clipboard(format!(
                "Failed to read clipboard text: {}",
                e
            ))),
        }
    }
}

/// Clipboard stand-in for tests, returns preset content
#[derive(Debug, Default)]
pub struct DummyClipboardService {
    content: Option<String>,
}

impl DummyClipboardService {
    pub fn new() -> Self {
        Self { content: None }
    }

    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            content: Some(text.into()),
        }
    }
}

impl ClipboardService for DummyClipboardService {
    #[instrument(level = "trace")]
    fn read_text(&self) -> DomainResult<Option<String>> {
        Ok(self.content.clone())
    }
}
