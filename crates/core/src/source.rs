//! Source blocks as handed over by the document-service client.

use crate::BlockdownError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a source block, as named by the document service.
///
/// Kinds the parser has no constructor for are kept verbatim in
/// [`BlockKind::Other`] so they can be reported back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    /// Paragraph text (`text`).
    Text,
    /// Image with caption and source URL (`image`).
    Image,
    /// Horizontal rule (`divider`).
    Divider,
    /// Ordered list item (`numbered_list`).
    NumberedList,
    /// Unordered list item (`bulleted_list`).
    BulletedList,
    /// Block quote (`quote`).
    Quote,
    /// Callout box (`callout`).
    Callout,
    /// Top-level heading (`header`).
    Header,
    /// Second-level heading (`sub_header`).
    SubHeader,
    /// Third-level heading (`sub_sub_header`).
    SubSubHeader,
    /// Code block, possibly holding page properties (`code`).
    Code,
    /// Table of contents marker (`table_of_contents`).
    TableOfContents,
    /// Nested page (`page`).
    Page,
    /// Anything else.
    Other(String),
}

impl BlockKind {
    /// Returns the service name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Divider => "divider",
            BlockKind::NumberedList => "numbered_list",
            BlockKind::BulletedList => "bulleted_list",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
            BlockKind::Header => "header",
            BlockKind::SubHeader => "sub_header",
            BlockKind::SubSubHeader => "sub_sub_header",
            BlockKind::Code => "code",
            BlockKind::TableOfContents => "table_of_contents",
            BlockKind::Page => "page",
            BlockKind::Other(name) => name,
        }
    }
}

impl From<&str> for BlockKind {
    fn from(name: &str) -> Self {
        match name {
            "text" => BlockKind::Text,
            "image" => BlockKind::Image,
            "divider" => BlockKind::Divider,
            "numbered_list" => BlockKind::NumberedList,
            "bulleted_list" => BlockKind::BulletedList,
            "quote" => BlockKind::Quote,
            "callout" => BlockKind::Callout,
            "header" => BlockKind::Header,
            "sub_header" => BlockKind::SubHeader,
            "sub_sub_header" => BlockKind::SubSubHeader,
            "code" => BlockKind::Code,
            "table_of_contents" => BlockKind::TableOfContents,
            "page" => BlockKind::Page,
            other => BlockKind::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockKind {
    fn from(name: String) -> Self {
        BlockKind::from(name.as_str())
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the fetched document tree.
///
/// Every field other than `id` and `type` is optional on the wire; missing
/// fields decode to their empty defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceBlock {
    /// Service-assigned block id.
    pub id: String,
    /// Block kind.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Plain title text of the block.
    #[serde(default)]
    pub title: String,
    /// Ordered child blocks.
    #[serde(default)]
    pub children: Vec<SourceBlock>,
    /// Image caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Image source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Code block language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SourceBlock {
    /// Creates a childless block with the given id, kind and title.
    pub fn new(id: impl Into<String>, kind: impl Into<BlockKind>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            title: title.into(),
            children: Vec::new(),
            caption: None,
            source: None,
            language: None,
        }
    }

    /// Creates an image block.
    pub fn image(id: impl Into<String>, caption: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            source: Some(source.into()),
            ..Self::new(id, BlockKind::Image, "")
        }
    }

    /// Creates a code block.
    pub fn code(id: impl Into<String>, language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Self::new(id, BlockKind::Code, text)
        }
    }

    /// Appends a child block, builder style.
    pub fn with_child(mut self, child: SourceBlock) -> Self {
        self.children.push(child);
        self
    }

    /// Decodes a block tree from JSON.
    pub fn from_json(input: &str) -> Result<Self, BlockdownError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Returns true if this block is a page.
    pub fn is_page(&self) -> bool {
        self.kind == BlockKind::Page
    }
}

/// Collects `root` (when it is a page) and every nested page below it, depth first.
///
/// Only page children are descended into; pages nested inside other block
/// kinds are not reachable, matching how the service exposes sub-pages.
pub fn collect_pages(root: &SourceBlock) -> Vec<&SourceBlock> {
    let mut pages = Vec::new();
    collect_into(root, &mut pages);
    pages
}

fn collect_into<'a>(block: &'a SourceBlock, pages: &mut Vec<&'a SourceBlock>) {
    if block.is_page() {
        pages.push(block);
    }
    for child in block.children.iter().filter(|c| c.is_page()) {
        collect_into(child, pages);
    }
}
