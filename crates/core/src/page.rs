//! Parsed pages and their property-derived accessors.

use crate::node::PageNode;
use std::collections::BTreeMap;

/// Property holding the display title.
pub const TITLE: &str = "Title";
/// Property holding the publication date.
pub const DATE: &str = "Date";
/// Property holding the category.
pub const CATEGORY: &str = "Category";
/// Property holding the tag.
pub const TAG: &str = "Tag";
/// Property holding the published flag.
pub const PUBLISHED: &str = "Published";
/// Property holding the output directory.
pub const FILE_LOCATE: &str = "FileLocate";
/// Property holding the output file name.
pub const FILE_NAME: &str = "FileName";

/// Values of [`PUBLISHED`] that mark a page as published. Matched exactly.
pub const PUBLISHED_TOKENS: &[&str] = &[
    "true",
    "1",
    "t",
    "y",
    "yes",
    "yeah",
    "yup",
    "certainly",
    "uh-huh",
];

/// A parsed page: metadata plus the ordered node sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Id of the source page.
    pub id: String,
    /// Title of the source page.
    pub title: String,
    /// Properties read from `[properties]` blocks.
    pub properties: BTreeMap<String, String>,
    /// Nodes in render order.
    pub nodes: Vec<PageNode>,
}

impl Page {
    /// Creates an empty page.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns a property value if it is present and non-empty.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// `Title` property, else the page title, else `None`.
    pub fn title(&self) -> Option<&str> {
        self.property(TITLE)
            .or_else(|| Some(self.title.as_str()).filter(|t| !t.is_empty()))
    }

    /// `Date` property.
    pub fn date(&self) -> Option<&str> {
        self.property(DATE)
    }

    /// `Category` property.
    pub fn category(&self) -> Option<&str> {
        self.property(CATEGORY)
    }

    /// `Tag` property.
    pub fn tag(&self) -> Option<&str> {
        self.property(TAG)
    }

    /// True iff `Published` is one of [`PUBLISHED_TOKENS`].
    pub fn is_published(&self) -> bool {
        self.properties
            .get(PUBLISHED)
            .is_some_and(|value| PUBLISHED_TOKENS.contains(&value.as_str()))
    }

    /// `FileLocate` property.
    pub fn file_location(&self) -> Option<&str> {
        self.property(FILE_LOCATE)
    }

    /// `FileName` property, else [`Page::title`], else the page id.
    pub fn file_name(&self) -> Option<&str> {
        self.property(FILE_NAME)
            .or_else(|| self.title())
            .or_else(|| Some(self.id.as_str()).filter(|id| !id.is_empty()))
    }

    /// True if the page has a title to render under.
    pub fn is_renderable(&self) -> bool {
        self.title().is_some()
    }

    /// True if the page can be written to a file.
    pub fn is_persistable(&self) -> bool {
        self.file_name().is_some()
    }

    /// `[id]title` label for log lines.
    pub fn identity(&self) -> String {
        format!("[{}]{}", self.id, self.title().unwrap_or_default())
    }
}
