// src/domain/item.rs
use serde::{Deserialize, Serialize};

/// Saved link payload of an Arc item (`data.tab`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SavedTab {
    #[serde(rename = "savedURL", default)]
    pub saved_url: Option<String>,
    #[serde(rename = "savedTitle", default)]
    pub saved_title: Option<String>,
}

/// Item payload wrapper. Arc stores several other shapes here (lists,
/// spaces, easels), only `tab` is relevant for bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ItemData {
    #[serde(default)]
    pub tab: Option<SavedTab>,
}

/// One node of the shared bookmark graph
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds since the epoch, may carry a fractional part
    #[serde(default)]
    pub created_at: Option<f64>,
    #[serde(default)]
    pub children_ids: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<ItemData>,
}

/// How an item renders. Folder wins over link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind<'a> {
    Folder(&'a [String]),
    Link(&'a str),
    Other,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl Item {
    pub fn kind(&self) -> ItemKind<'_> {
        match self.children_ids.as_deref() {
            Some(children) if !children.is_empty() => ItemKind::Folder(children),
            _ => match self.saved_url() {
                Some(url) => ItemKind::Link(url),
                None => ItemKind::Other,
            },
        }
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_ref())
    }

    pub fn saved_url(&self) -> Option<&str> {
        non_empty(self.tab()?.saved_url.as_ref())
    }

    pub fn saved_title(&self) -> Option<&str> {
        non_empty(self.tab()?.saved_title.as_ref())
    }

    /// Creation time truncated to whole seconds; zero and non-finite values
    /// count as missing.
    pub fn created_at_secs(&self) -> Option<i64> {
        self.created_at
            .filter(|ts| ts.is_finite() && *ts != 0.0)
            .map(|ts| ts.floor() as i64)
    }

    fn tab(&self) -> Option<&SavedTab> {
        self.data.as_ref()?.tab.as_ref()
    }
}

/// The `props.pageProps.data` payload of an Arc sharing page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarksData {
    pub items: Vec<Item>,
    pub root_items: Vec<String>,
}

impl BookmarksData {
    /// Number of items in the flat list carrying a saved URL.
    ///
    /// Orphans (items not reachable from `root_items`) are counted as well,
    /// so this may exceed the number of links actually rendered.
    pub fn link_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.saved_url().is_some())
            .count()
    }
}
