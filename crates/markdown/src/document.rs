//! Whole-page Markdown output.

use crate::options::RenderOptions;
use crate::render::Renderer;
use blockdown_core::{BlockdownError, Page};
use serde::Serialize;

/// Front matter fields derived from a page's properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontMatter<'a> {
    /// Resolved title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    /// `Date` property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    /// `Category` property.
    #[serde(rename = "categories", skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    /// `Tag` property.
    #[serde(rename = "tags", skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'a str>,
    /// Whether the page is marked published.
    pub published: bool,
}

impl<'a> FrontMatter<'a> {
    /// Collects front matter from the page accessors.
    pub fn from_page(page: &'a Page) -> Self {
        Self {
            title: page.title(),
            date: page.date(),
            category: page.category(),
            tag: page.tag(),
            published: page.is_published(),
        }
    }

    /// Serializes to a fenced YAML block ending in a newline.
    pub fn to_yaml_block(&self) -> Result<String, BlockdownError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|err| BlockdownError::front_matter(err.to_string()))?;
        Ok(format!("---\n{}---\n", yaml))
    }
}

/// Renders the page body: every node fragment joined by the separator.
pub fn render_body(page: &Page, options: &RenderOptions) -> String {
    Renderer::new(page, options).render_body()
}

/// Renders the page as a Markdown document, with front matter when enabled.
pub fn render_document(page: &Page, options: &RenderOptions) -> Result<String, BlockdownError> {
    let body = render_body(page, options);
    if !options.front_matter {
        return Ok(body);
    }
    let front_matter = FrontMatter::from_page(page).to_yaml_block()?;
    Ok(format!("{}\n{}", front_matter, body))
}
