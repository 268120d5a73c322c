// src/domain/share_url.rs
use crate::domain::error::{DomainError, DomainResult};
use std::fmt;
use url::Url;

const ARC_PREFIX: &str = "https://arc.net/";
const ARC_FOLDER_MARKER: &str = "arc.net/folder/";

/// A validated Arc sharing page URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareUrl(Url);

impl ShareUrl {
    /// Normalizes user input: trims whitespace and drops the `@` Arc adds
    /// when copying links, then requires an `https://arc.net/` address.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let cleaned = input.trim();
        let cleaned = cleaned.strip_prefix('@').unwrap_or(cleaned).trim();

        if cleaned.is_empty() {
            return Err(DomainError::InvalidShareUrl(
                "Please enter a valid Arc sharing URL".to_string(),
            ));
        }
        if !cleaned.starts_with(ARC_PREFIX) {
            return Err(DomainError::InvalidShareUrl(format!(
                "URL must be from arc.net: {}",
                cleaned
            )));
        }

        Url::parse(cleaned)
            .map(Self)
            .map_err(|e| DomainError::InvalidShareUrl(format!("{}: {}", cleaned, e)))
    }

    /// True when clipboard text looks like an Arc folder share link
    pub fn looks_like_share_link(text: &str) -> bool {
        text.trim().contains(ARC_FOLDER_MARKER)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShareUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
