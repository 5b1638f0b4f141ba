//! Table-of-contents rendering.

use crate::options::AnchorStyle;
use crate::slug::Slugger;
use blockdown_core::{HeadingLevel, PageNode};

/// Title line emitted above the links.
pub const TOC_TITLE: &str = "# Table of Contents";

const NBSP: &str = "&nbsp;";

/// Renders links to the headings among `snapshot`, in order.
///
/// Returns an empty string when `snapshot` holds no heading, so a table of
/// contents placed above every heading disappears entirely.
pub fn render_table_of_contents(snapshot: &[PageNode], anchor_style: AnchorStyle) -> String {
    let mut slugger = Slugger::new();
    let lines: Vec<String> = snapshot
        .iter()
        .filter_map(PageNode::heading)
        .map(|(level, text)| {
            let anchor = match anchor_style {
                AnchorStyle::Verbatim => text.to_string(),
                AnchorStyle::Slug => slugger.next_slug(text),
            };
            format!(" - {}[{}](#{})", indent(level), text, anchor)
        })
        .collect();

    if lines.is_empty() {
        return String::new();
    }
    format!("{}\n{}", TOC_TITLE, lines.join("\n"))
}

/// Four non-breaking spaces per level below the top.
fn indent(level: HeadingLevel) -> String {
    NBSP.repeat(4 * usize::from(level.depth() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdown_core::NodeContent;

    fn heading(level: HeadingLevel, text: &str) -> PageNode {
        PageNode::new(
            text,
            NodeContent::Heading {
                level,
                text: text.to_string(),
            },
        )
    }

    #[test]
    fn indents_by_level() {
        let nodes = vec![
            heading(HeadingLevel::H1, "A"),
            PageNode::new("t", NodeContent::Text { text: "body".into() }),
            heading(HeadingLevel::H2, "B"),
            heading(HeadingLevel::H3, "C"),
        ];
        let toc = render_table_of_contents(&nodes, AnchorStyle::Verbatim);
        assert_eq!(
            toc,
            "# Table of Contents\n - [A](#A)\n - &nbsp;&nbsp;&nbsp;&nbsp;[B](#B)\n - &nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;&nbsp;[C](#C)"
        );
    }

    #[test]
    fn empty_without_headings() {
        let nodes = vec![PageNode::new("d", NodeContent::Divider)];
        assert_eq!(render_table_of_contents(&nodes, AnchorStyle::Verbatim), "");
        assert_eq!(render_table_of_contents(&[], AnchorStyle::Slug), "");
    }

    #[test]
    fn slug_anchors_stay_unique_across_lookalike_headings() {
        let nodes = vec![
            heading(HeadingLevel::H1, "Title"),
            heading(HeadingLevel::H1, "Title"),
            heading(HeadingLevel::H2, "Title 1"),
        ];
        let toc = render_table_of_contents(&nodes, AnchorStyle::Slug);
        let anchors: Vec<&str> = toc
            .lines()
            .filter_map(|line| line.split("](#").nth(1))
            .collect();
        assert_eq!(anchors, vec!["title)", "title-1)", "title-1-1)"]);
    }

    #[test]
    fn slug_anchors_are_deduplicated() {
        let nodes = vec![
            heading(HeadingLevel::H1, "Getting Started"),
            heading(HeadingLevel::H1, "Getting Started"),
        ];
        let toc = render_table_of_contents(&nodes, AnchorStyle::Slug);
        assert_eq!(
            toc,
            "# Table of Contents\n - [Getting Started](#getting-started)\n - [Getting Started](#getting-started-1)"
        );
    }
}
