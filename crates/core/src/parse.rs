//! Source block → page node dispatch.

use crate::node::{HeadingLevel, ImageNode, NodeContent, PageNode};
use crate::page::Page;
use crate::properties::extract_properties;
use crate::source::{BlockKind, SourceBlock};
use crate::{BlockdownError, ParseDiagnostics, ParseWarning};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parser options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Directory image files are expected to be downloaded into.
    pub assets_dir: PathBuf,
}

impl ParseOptions {
    /// Decode options from JSON, filling unspecified fields with defaults.
    pub fn from_json(input: &str) -> Result<Self, BlockdownError> {
        serde_json::from_str(input).map_err(|err| BlockdownError::options(err.to_string()))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("output/assets/image"),
        }
    }
}

/// Parse a source page into a [`Page`].
///
/// Only the page's immediate children are visited; nested pages become
/// unsupported nodes and are expected to be parsed on their own.
pub fn parse_page(source: &SourceBlock, options: &ParseOptions) -> Page {
    parse_page_with_diagnostics(source, options).0
}

/// Parse a source page, also returning what was degraded or skipped.
pub fn parse_page_with_diagnostics(
    source: &SourceBlock,
    options: &ParseOptions,
) -> (Page, ParseDiagnostics) {
    let mut parser = PageParser {
        page: Page::new(&source.id, &source.title),
        diagnostics: ParseDiagnostics::new(),
        options,
    };
    for block in &source.children {
        parser.dispatch(block);
    }

    log::debug!(
        "parsed page {}: {} nodes, {} properties, {} warnings",
        parser.page.identity(),
        parser.page.nodes.len(),
        parser.page.properties.len(),
        parser.diagnostics.count()
    );
    (parser.page, parser.diagnostics)
}

struct PageParser<'a> {
    page: Page,
    diagnostics: ParseDiagnostics,
    options: &'a ParseOptions,
}

impl PageParser<'_> {
    fn dispatch(&mut self, block: &SourceBlock) {
        log::trace!("dispatch {} ({})", block.kind, block.id);
        let content = match &block.kind {
            BlockKind::Text => Some(text_content(block)),
            BlockKind::Image => Some(self.image_content(block)),
            BlockKind::Divider => Some(NodeContent::Divider),
            BlockKind::NumberedList => Some(NodeContent::NumberedListItem {
                text: block.title.clone(),
            }),
            BlockKind::BulletedList => Some(NodeContent::BulletedListItem {
                text: block.title.clone(),
            }),
            BlockKind::Quote => Some(NodeContent::Quote {
                text: block.title.clone(),
            }),
            BlockKind::Callout => Some(NodeContent::Callout {
                text: block.title.clone(),
            }),
            BlockKind::Header => Some(heading(HeadingLevel::H1, block)),
            BlockKind::SubHeader => Some(heading(HeadingLevel::H2, block)),
            BlockKind::SubSubHeader => Some(heading(HeadingLevel::H3, block)),
            BlockKind::Code => self.code_content(block),
            BlockKind::TableOfContents => Some(NodeContent::TableOfContents {
                snapshot_len: self.page.nodes.len(),
            }),
            BlockKind::Page | BlockKind::Other(_) => Some(self.unsupported(block)),
        };

        if let Some(content) = content {
            self.page.nodes.push(PageNode::new(&block.id, content));
        }
    }

    fn image_content(&self, block: &SourceBlock) -> NodeContent {
        let caption = block.caption.clone().unwrap_or_default();
        let local_path = self
            .options
            .assets_dir
            .join(format!("{}_{}", block.id, caption));
        NodeContent::Image(ImageNode {
            source_url: block.source.clone().unwrap_or_default(),
            caption,
            local_path,
        })
    }

    /// Code blocks carrying the properties marker feed the property map instead of emitting a node.
    fn code_content(&mut self, block: &SourceBlock) -> Option<NodeContent> {
        let Some(lines) = extract_properties(&block.title) else {
            return Some(NodeContent::Code {
                text: block.title.clone(),
                language: block.language.clone().unwrap_or_default(),
            });
        };

        lines.apply_to(&mut self.page.properties);
        for line in lines.skipped {
            log::debug!("skipping property line without '=' in {}: {:?}", block.id, line);
            self.diagnostics.add_warning(ParseWarning::MalformedProperty {
                block_id: block.id.clone(),
                line: line.to_string(),
            });
        }
        None
    }

    fn unsupported(&mut self, block: &SourceBlock) -> NodeContent {
        log::warn!("unsupported block kind '{}' ({})", block.kind, block.id);
        self.diagnostics.add_warning(ParseWarning::UnsupportedBlock {
            block_id: block.id.clone(),
            kind: block.kind.to_string(),
        });
        NodeContent::Unsupported {
            source_kind: block.kind.to_string(),
        }
    }
}

fn text_content(block: &SourceBlock) -> NodeContent {
    if block.title.trim().is_empty() {
        NodeContent::BlankLine
    } else {
        NodeContent::Text {
            text: block.title.clone(),
        }
    }
}

fn heading(level: HeadingLevel, block: &SourceBlock) -> NodeContent {
    NodeContent::Heading {
        level,
        text: block.title.clone(),
    }
}
