// src/application/services/conversion_service.rs
use crate::application::error::ApplicationResult;
use std::fmt::Debug;

/// Result of converting one sharing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Complete Netscape bookmark file
    pub bookmarks_html: String,
    /// Items with a saved URL, see [`crate::domain::item::BookmarksData::link_count`]
    pub count: usize,
}

/// Service interface for turning Arc sharing pages into bookmark files
pub trait ConversionService: Send + Sync + Debug {
    /// Extract the embedded payload and render it as a bookmark file
    fn convert(&self, html: &str) -> ApplicationResult<Conversion>;

    /// Number of saved links in the page, without rendering
    fn count(&self, html: &str) -> ApplicationResult<usize>;
}
