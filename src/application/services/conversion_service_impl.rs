// src/application/services/conversion_service_impl.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::conversion_service::{Conversion, ConversionService};
use crate::domain::services::clock::Clock;
use crate::domain::tree::BookmarkTree;
use crate::infrastructure::html::locate_bookmarks;
use crate::infrastructure::netscape::{NetscapeWriter, RenderOptions};
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct ConversionServiceImpl {
    clock: Arc<dyn Clock>,
    options: RenderOptions,
}

impl ConversionServiceImpl {
    pub fn new(clock: Arc<dyn Clock>, options: RenderOptions) -> Self {
        Self { clock, options }
    }

    fn validate_input(html: &str) -> ApplicationResult<()> {
        if html.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "Please paste HTML content from an Arc sharing page".to_string(),
            ));
        }
        Ok(())
    }
}

impl ConversionService for ConversionServiceImpl {
    #[instrument(skip_all, level = "debug", fields(len = html.len()))]
    fn convert(&self, html: &str) -> ApplicationResult<Conversion> {
        Self::validate_input(html)?;

        let data = locate_bookmarks(html)?;
        let tree = BookmarkTree::new(&data);
        let bookmarks_html = NetscapeWriter::new(self.clock.as_ref(), self.options.clone())
            .render(&tree)?;
        let count = data.link_count();

        debug!("Converted {} bookmarks", count);
        Ok(Conversion {
            bookmarks_html,
            count,
        })
    }

    #[instrument(skip_all, level = "debug", fields(len = html.len()))]
    fn count(&self, html: &str) -> ApplicationResult<usize> {
        Self::validate_input(html)?;
        Ok(locate_bookmarks(html)?.link_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::infrastructure::clock::FixedClock;
    use crate::util::testing::{arc_page, init_test_env};
    use serde_json::json;

    fn service() -> ConversionServiceImpl {
        ConversionServiceImpl::new(
            Arc::new(FixedClock::from_secs(1_700_000_000)),
            RenderOptions::default(),
        )
    }

    #[test]
    fn given_sample_page_when_convert_then_renders_and_counts() {
        let _ = init_test_env();
        let html = arc_page(&json!({
            "items": [
                {"id": "1", "title": "F", "childrenIds": ["2"]},
                {"id": "2", "title": "Site", "data": {"tab": {"savedURL": "https://x.test"}}}
            ],
            "rootItems": ["1"]
        }));

        let conversion = service().convert(&html).unwrap();

        assert_eq!(conversion.count, 1);
        assert_eq!(conversion.bookmarks_html.matches("<H3 ").count(), 1);
        assert!(conversion
            .bookmarks_html
            .contains(r#"        <DT><A HREF="https://x.test" ADD_DATE="1700000000">Site</A>"#));
    }

    #[test]
    fn given_blank_input_when_convert_then_validation_error() {
        let err = service().convert("  \n ").unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn given_page_without_payload_when_convert_then_no_bookmark_data() {
        let err = service()
            .convert("<html><body>nothing here</body></html>")
            .unwrap_err();
        assert!(err.is_no_bookmark_data());
    }

    #[test]
    fn given_cyclic_payload_when_convert_then_no_partial_output() {
        let html = arc_page(&json!({
            "items": [{"id": "a", "childrenIds": ["a"]}],
            "rootItems": ["a"]
        }));
        let err = service().convert(&html).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::MalformedGraph(_))
        ));
    }

    #[test]
    fn given_orphaned_link_when_count_then_included() {
        let html = arc_page(&json!({
            "items": [
                {"id": "1", "data": {"tab": {"savedURL": "https://a.test"}}},
                {"id": "2", "data": {"tab": {"savedURL": "https://orphan.test"}}}
            ],
            "rootItems": ["1"]
        }));
        let svc = service();
        assert_eq!(svc.count(&html).unwrap(), 2);
        assert_eq!(svc.convert(&html).unwrap().bookmarks_html.matches("<A ").count(), 1);
    }
}
