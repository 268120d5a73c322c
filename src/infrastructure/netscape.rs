// src/infrastructure/netscape.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::item::{Item, ItemKind};
use crate::domain::services::clock::Clock;
use crate::domain::tree::BookmarkTree;
use derive_builder::Builder;
use std::borrow::Cow;
use tracing::{debug, instrument, trace};

pub const DEFAULT_DOCUMENT_TITLE: &str = "Bookmarks from Arc Browser";
pub const DEFAULT_MAX_DEPTH: usize = 256;
pub const UNTITLED_FOLDER: &str = "Untitled Folder";

const INDENT: &str = "    ";
const LIST_CLOSE: &str = "</DL><p>";

/// Options for rendering a Netscape bookmark file
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct RenderOptions {
    /// Used for both `<TITLE>` and `<H1>`
    #[builder(default = "DEFAULT_DOCUMENT_TITLE.to_string()")]
    pub title: String,
    /// Maximum number of nested folders
    #[builder(default = "DEFAULT_MAX_DEPTH")]
    pub max_depth: usize,
    /// HTML-escape titles and URLs; off by default so the source text is
    /// copied verbatim
    #[builder(default = "false")]
    pub escape_text: bool,
}

impl RenderOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.max_depth {
            Some(0) => Err("max_depth must be at least 1".to_string()),
            _ => Ok(()),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_DOCUMENT_TITLE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            escape_text: false,
        }
    }
}

impl From<RenderOptionsBuilderError> for DomainError {
    fn from(e: RenderOptionsBuilderError) -> Self {
        DomainError::RenderOptions(e.to_string())
    }
}

/// Serializes a [`BookmarkTree`] into the Netscape bookmark file format.
///
/// Output is fully determined by the tree and the clock; items without a
/// creation time are stamped with `clock.now()`, so only a fixed clock gives
/// byte-identical output across runs.
#[derive(Debug)]
pub struct NetscapeWriter<'c> {
    clock: &'c dyn Clock,
    options: RenderOptions,
}

impl<'c> NetscapeWriter<'c> {
    pub fn new(clock: &'c dyn Clock, options: RenderOptions) -> Self {
        Self { clock, options }
    }

    #[instrument(level = "debug", skip_all)]
    pub fn render(&self, tree: &BookmarkTree<'_>) -> DomainResult<String> {
        let mut out = String::with_capacity(512 + tree.len() * 96);
        self.write_header(&mut out);

        let mut ancestors = Vec::new();
        for id in tree.roots() {
            self.write_item(tree, id, 1, &mut ancestors, &mut out)?;
        }

        push_line(&mut out, "", LIST_CLOSE);
        debug!("Rendered {} bytes", out.len());
        Ok(out)
    }

    fn write_header(&self, out: &mut String) {
        let title = self.text(&self.options.title);
        out.push_str("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n");
        out.push_str("<!-- This is an automatically generated file.\n");
        out.push_str("     It will be read and overwritten.\n");
        out.push_str("     DO NOT EDIT! -->\n");
        out.push_str("<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">\n");
        push_line(out, "", &format!("<TITLE>{}</TITLE>", title));
        push_line(out, "", &format!("<H1>{}</H1>", title));
        push_line(out, "", "<DL><p>");
    }

    fn write_item<'t>(
        &self,
        tree: &BookmarkTree<'t>,
        id: &'t str,
        level: usize,
        ancestors: &mut Vec<&'t str>,
        out: &mut String,
    ) -> DomainResult<()> {
        let Some(item) = tree.get(id) else {
            trace!("Skipping unknown item id '{}'", id);
            return Ok(());
        };
        let pad = INDENT.repeat(level);

        match item.kind() {
            ItemKind::Folder(children) => {
                if ancestors.contains(&id) {
                    return Err(DomainError::MalformedGraph(format!(
                        "cycle through item '{}'",
                        id
                    )));
                }
                if ancestors.len() >= self.options.max_depth {
                    return Err(DomainError::MalformedGraph(format!(
                        "folders nested deeper than {} levels at item '{}'",
                        self.options.max_depth, id
                    )));
                }

                let name = self.text(item.title().unwrap_or(UNTITLED_FOLDER));
                let stamp = self.timestamp(item);
                push_line(
                    out,
                    &pad,
                    &format!(
                        "<DT><H3 ADD_DATE=\"{}\" LAST_MODIFIED=\"{}\">{}</H3>",
                        stamp, stamp, name
                    ),
                );
                push_line(out, &pad, "<DL><p>");

                ancestors.push(id);
                for child in children {
                    self.write_item(tree, child, level + 1, ancestors, out)?;
                }
                ancestors.pop();

                push_line(out, &pad, LIST_CLOSE);
            }
            ItemKind::Link(url) => {
                let label = item.title().or_else(|| item.saved_title()).unwrap_or(url);
                push_line(
                    out,
                    &pad,
                    &format!(
                        "<DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>",
                        self.text(url),
                        self.timestamp(item),
                        self.text(label)
                    ),
                );
            }
            ItemKind::Other => trace!("Item '{}' is neither folder nor link", id),
        }
        Ok(())
    }

    fn timestamp(&self, item: &Item) -> i64 {
        item.created_at_secs()
            .unwrap_or_else(|| self.clock.now_secs())
    }

    fn text<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if self.options.escape_text {
            escape_html(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

fn push_line(out: &mut String, pad: &str, body: &str) {
    out.push_str(pad);
    out.push_str(body);
    out.push('\n');
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 16);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
