//! Page nodes: the typed, renderable units a page is made of.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Heading depth supported by the source service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeadingLevel {
    /// `#`
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
}

impl HeadingLevel {
    /// Returns the numeric depth (1-3).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Flat discriminant of a [`PageNode`], with one entry per heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Plain paragraph text.
    PlainText,
    /// Explicit vertical spacing.
    BlankLine,
    /// Horizontal rule.
    Divider,
    /// Ordered list item.
    NumberedListItem,
    /// Unordered list item.
    BulletedListItem,
    /// Block quote.
    Quote,
    /// Callout box.
    Callout,
    /// Level 1 heading.
    Heading1,
    /// Level 2 heading.
    Heading2,
    /// Level 3 heading.
    Heading3,
    /// Fenced code block.
    CodeBlock,
    /// Image.
    Image,
    /// Table of contents.
    TableOfContents,
    /// Fallback for block kinds without a constructor.
    Unsupported,
}

impl NodeKind {
    /// Returns the kebab-case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::PlainText => "plain-text",
            NodeKind::BlankLine => "blank-line",
            NodeKind::Divider => "divider",
            NodeKind::NumberedListItem => "numbered-list-item",
            NodeKind::BulletedListItem => "bulleted-list-item",
            NodeKind::Quote => "quote",
            NodeKind::Callout => "callout",
            NodeKind::Heading1 => "heading-1",
            NodeKind::Heading2 => "heading-2",
            NodeKind::Heading3 => "heading-3",
            NodeKind::CodeBlock => "code-block",
            NodeKind::Image => "image",
            NodeKind::TableOfContents => "table-of-contents",
            NodeKind::Unsupported => "unsupported",
        }
    }

    /// Returns true for the three heading kinds.
    pub fn is_heading(self) -> bool {
        matches!(self, NodeKind::Heading1 | NodeKind::Heading2 | NodeKind::Heading3)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image payload. The local path is derived at parse time; nothing is downloaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageNode {
    /// Caption text, also used as alt text.
    pub caption: String,
    /// Remote URL of the image.
    pub source_url: String,
    /// Where a downloader should place the file.
    ///
    /// Built as `<assets_dir>/<id>_<caption>` with the caption unmodified, so a
    /// caption holding `/` or `..` can point outside the assets directory.
    /// Sanitize before writing to it.
    pub local_path: PathBuf,
}

/// Variant-specific payload of a [`PageNode`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeContent {
    /// Plain paragraph text.
    Text {
        /// Paragraph text.
        text: String,
    },
    /// Blank source line.
    BlankLine,
    /// Horizontal rule.
    Divider,
    /// Ordered list item.
    NumberedListItem {
        /// Item text.
        text: String,
    },
    /// Unordered list item.
    BulletedListItem {
        /// Item text.
        text: String,
    },
    /// Block quote.
    Quote {
        /// Quoted text.
        text: String,
    },
    /// Callout box.
    Callout {
        /// Callout text, possibly spanning lines.
        text: String,
    },
    /// Heading of a given level.
    Heading {
        /// Heading level.
        level: HeadingLevel,
        /// Heading text.
        text: String,
    },
    /// Fenced code block.
    Code {
        /// Code text.
        text: String,
        /// Language tag for the fence, possibly empty.
        language: String,
    },
    /// Image.
    Image(ImageNode),
    /// Table of contents over the nodes preceding it.
    TableOfContents {
        /// Number of page nodes that preceded this one when it was parsed.
        snapshot_len: usize,
    },
    /// Block kind without a constructor.
    Unsupported {
        /// Kind string of the source block.
        source_kind: String,
    },
}

/// One renderable unit of a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageNode {
    /// Id of the source block this node came from.
    pub id: String,
    /// Payload.
    #[serde(flatten)]
    pub content: NodeContent,
}

impl PageNode {
    /// Creates a node from a block id and payload.
    pub fn new(id: impl Into<String>, content: NodeContent) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Returns the flat kind of this node.
    pub fn kind(&self) -> NodeKind {
        match &self.content {
            NodeContent::Text { .. } => NodeKind::PlainText,
            NodeContent::BlankLine => NodeKind::BlankLine,
            NodeContent::Divider => NodeKind::Divider,
            NodeContent::NumberedListItem { .. } => NodeKind::NumberedListItem,
            NodeContent::BulletedListItem { .. } => NodeKind::BulletedListItem,
            NodeContent::Quote { .. } => NodeKind::Quote,
            NodeContent::Callout { .. } => NodeKind::Callout,
            NodeContent::Heading { level, .. } => match level {
                HeadingLevel::H1 => NodeKind::Heading1,
                HeadingLevel::H2 => NodeKind::Heading2,
                HeadingLevel::H3 => NodeKind::Heading3,
            },
            NodeContent::Code { .. } => NodeKind::CodeBlock,
            NodeContent::Image(_) => NodeKind::Image,
            NodeContent::TableOfContents { .. } => NodeKind::TableOfContents,
            NodeContent::Unsupported { .. } => NodeKind::Unsupported,
        }
    }

    /// Returns the text payload of text-bearing nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text { text }
            | NodeContent::NumberedListItem { text }
            | NodeContent::BulletedListItem { text }
            | NodeContent::Quote { text }
            | NodeContent::Callout { text }
            | NodeContent::Heading { text, .. }
            | NodeContent::Code { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns level and text if this node is a heading.
    pub fn heading(&self) -> Option<(HeadingLevel, &str)> {
        match &self.content {
            NodeContent::Heading { level, text } => Some((*level, text)),
            _ => None,
        }
    }
}
