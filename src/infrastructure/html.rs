// src/infrastructure/html.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::item::{BookmarksData, Item};
use select::document::Document;
use select::predicate::{Attr, Name, Predicate};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// `id` of the script block Next.js uses to ship page props
pub const NEXT_DATA_ID: &str = "__NEXT_DATA__";

const PAYLOAD_POINTER: &str = "/props/pageProps/data";

/// Finds the bookmark payload embedded in an Arc sharing page.
///
/// Every `<script id="__NEXT_DATA__">` block is tried in document order;
/// blocks that are not valid JSON or lack `items`/`rootItems` arrays are
/// skipped. Within a payload, malformed items are skipped one by one.
#[instrument(level = "debug", skip_all, fields(len = html.len()))]
pub fn locate_bookmarks(html: &str) -> DomainResult<BookmarksData> {
    let document = Document::from(html);

    for (index, node) in document
        .find(Name("script").and(Attr("id", NEXT_DATA_ID)))
        .enumerate()
    {
        match parse_payload(&node.text()) {
            Ok(Some(data)) => {
                debug!(
                    "Script block {} yields {} items, {} roots",
                    index,
                    data.items.len(),
                    data.root_items.len()
                );
                return Ok(data);
            }
            Ok(None) => debug!("Script block {} has no bookmark payload", index),
            Err(e) => warn!("Error parsing JSON in script block {}: {}", index, e),
        }
    }

    Err(DomainError::NoBookmarkData)
}

fn parse_payload(text: &str) -> Result<Option<BookmarksData>, serde_json::Error> {
    let mut json: Value = serde_json::from_str(text)?;

    let Some(data) = json.pointer_mut(PAYLOAD_POINTER) else {
        return Ok(None);
    };
    if data.get("items").is_none() || data.get("rootItems").is_none() {
        return Ok(None);
    }

    let items: Vec<Value> = serde_json::from_value(data["items"].take())?;
    let roots: Vec<Value> = serde_json::from_value(data["rootItems"].take())?;

    Ok(Some(BookmarksData {
        items: items.into_iter().enumerate().filter_map(parse_item).collect(),
        root_items: roots
            .into_iter()
            .filter_map(|root| match root {
                Value::String(id) => Some(id),
                other => {
                    warn!("Skipping non-string root id: {}", other);
                    None
                }
            })
            .collect(),
    }))
}

/// Items that do not fit the expected shape are dropped, like dangling ids.
fn parse_item((index, value): (usize, Value)) -> Option<Item> {
    match serde_json::from_value::<Item>(value) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Skipping item {}: {}", index, e);
            None
        }
    }
}
