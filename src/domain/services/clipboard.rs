// src/domain/services/clipboard.rs
use crate::domain::error::DomainResult;

pub trait ClipboardService {
    /// Current clipboard text, `None` when the clipboard holds no text
    fn read_text(&self) -> DomainResult<Option<String>>;
}
