//! Choosing which pages of a tree to convert.

use crate::source::SourceBlock;
use serde::{Deserialize, Serialize};

/// Title-based page filter.
///
/// An empty title list, or the single entry `all`, selects every page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFilter {
    titles: Vec<String>,
}

impl PageFilter {
    /// Creates a filter matching the given titles exactly.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if this filter lets every page through.
    pub fn selects_all(&self) -> bool {
        self.titles.is_empty() || (self.titles.len() == 1 && self.titles[0] == "all")
    }

    /// Returns true if a page with this title is selected.
    pub fn matches(&self, title: &str) -> bool {
        self.selects_all() || self.titles.iter().any(|t| t == title)
    }

    /// Keeps the selected pages, preserving order.
    pub fn apply<'a>(&self, pages: Vec<&'a SourceBlock>) -> Vec<&'a SourceBlock> {
        if self.selects_all() {
            return pages;
        }
        pages.into_iter().filter(|p| self.matches(&p.title)).collect()
    }
}

/// Returns the first page whose title equals `title`.
pub fn find_by_title<'a>(pages: &[&'a SourceBlock], title: &str) -> Option<&'a SourceBlock> {
    pages.iter().copied().find(|p| p.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BlockKind;

    fn pages() -> Vec<SourceBlock> {
        ["Intro", "Draft", "Notes"]
            .into_iter()
            .enumerate()
            .map(|(i, t)| SourceBlock::new(i.to_string(), BlockKind::Page, t))
            .collect()
    }

    #[test]
    fn empty_and_all_select_everything() {
        let owned = pages();
        let refs: Vec<&SourceBlock> = owned.iter().collect();
        assert_eq!(PageFilter::default().apply(refs.clone()).len(), 3);
        assert_eq!(PageFilter::from_titles(["all"]).apply(refs).len(), 3);
    }

    #[test]
    fn filters_by_exact_title() {
        let owned = pages();
        let refs: Vec<&SourceBlock> = owned.iter().collect();
        let filter = PageFilter::from_titles(["Notes", "Intro", "intro"]);
        let titles: Vec<&str> = filter.apply(refs).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Intro", "Notes"]);
    }

    #[test]
    fn all_among_other_titles_is_literal() {
        let filter = PageFilter::from_titles(["all", "Draft"]);
        assert!(!filter.selects_all());
        assert!(filter.matches("Draft"));
        assert!(!filter.matches("Intro"));
    }

    #[test]
    fn finds_first_page_by_title() {
        let owned = pages();
        let refs: Vec<&SourceBlock> = owned.iter().collect();
        assert_eq!(find_by_title(&refs, "Draft").map(|p| p.id.as_str()), Some("1"));
        assert!(find_by_title(&refs, "Missing").is_none());
    }
}
