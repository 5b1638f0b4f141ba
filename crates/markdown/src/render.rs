//! Page node → Markdown fragment rendering.

use crate::options::RenderOptions;
use crate::toc::render_table_of_contents;
use blockdown_core::{HeadingLevel, NodeContent, Page, PageNode};

/// Renders the nodes of one page.
///
/// Holds the page so that table-of-contents nodes can look back at the
/// headings that preceded them.
pub struct Renderer<'a> {
    page: &'a Page,
    options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for `page`.
    pub fn new(page: &'a Page, options: &'a RenderOptions) -> Self {
        Self { page, options }
    }

    /// Renders a single node of this page to a Markdown fragment.
    pub fn render_node(&self, node: &PageNode) -> String {
        match &node.content {
            NodeContent::Text { text } => text.clone(),
            NodeContent::BlankLine => "\n".to_string(),
            NodeContent::Divider => "---".to_string(),
            // Literal `0.` for every item, never a running counter.
            NodeContent::NumberedListItem { text } => format!("0. {}", text),
            NodeContent::BulletedListItem { text } => format!(" - {}", text),
            NodeContent::Quote { text } => format!("> {}", text),
            NodeContent::Callout { text } => render_callout(text),
            NodeContent::Heading { level, text } => {
                format!("{} {}", heading_marker(*level), text)
            }
            NodeContent::Code { text, language } => {
                format!("```{}\n{}\n```\n", language, text)
            }
            NodeContent::Image(image) => format!("![{}]({})", image.caption, image.source_url),
            NodeContent::TableOfContents { snapshot_len } => {
                let end = (*snapshot_len).min(self.page.nodes.len());
                render_table_of_contents(&self.page.nodes[..end], self.options.anchor_style)
            }
            NodeContent::Unsupported { source_kind } => {
                log::debug!("rendering placeholder for {} ({})", source_kind, node.id);
                format!(
                    "<!-- unsupported page block\ntype: {}\nblock id: {}\n-->",
                    source_kind, node.id
                )
            }
        }
    }

    /// Renders every node of the page, in order.
    pub fn render_fragments(&self) -> Vec<String> {
        self.page
            .nodes
            .iter()
            .map(|node| self.render_node(node))
            .collect()
    }

    /// Renders the page body: fragments joined by the configured separator.
    pub fn render_body(&self) -> String {
        self.render_fragments().join(&self.options.separator)
    }
}

/// Every line gets a `> ` prefix, but lines are joined without a newline.
fn render_callout(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    format!("> {}", lines.join("> "))
}

fn heading_marker(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "#",
        HeadingLevel::H2 => "##",
        HeadingLevel::H3 => "###",
    }
}
