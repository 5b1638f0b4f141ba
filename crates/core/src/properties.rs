//! The `[properties]` sub-language embedded in code blocks.
//!
//! A code block whose text contains [`PROPERTIES_MARKER`] carries page
//! metadata instead of code. Everything after the last marker is read line by
//! line; a line is either `key=value` (split at the first `=`, both sides
//! trimmed) or inert. There is no escaping, quoting or nesting.

use std::collections::BTreeMap;

/// Marker that turns a code block into a properties block.
pub const PROPERTIES_MARKER: &str = "[properties]";

/// Lines read from a properties block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyLines<'a> {
    /// `(key, value)` pairs in source order, trimmed.
    pub entries: Vec<(&'a str, &'a str)>,
    /// Non-blank lines without `=`.
    pub skipped: Vec<&'a str>,
}

impl PropertyLines<'_> {
    /// Inserts every entry into `map`, later keys overwriting earlier ones.
    pub fn apply_to(&self, map: &mut BTreeMap<String, String>) {
        for (key, value) in &self.entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
    }
}

/// Reads the properties following the marker in `text`.
///
/// Returns `None` when the marker is absent.
pub fn extract_properties(text: &str) -> Option<PropertyLines<'_>> {
    let start = text.rfind(PROPERTIES_MARKER)? + PROPERTIES_MARKER.len();
    let mut lines = PropertyLines::default();

    for line in text[start..].split('\n') {
        match line.split_once('=') {
            Some((key, value)) => lines.entries.push((key.trim(), value.trim())),
            None if line.trim().is_empty() => {}
            None => lines.skipped.push(line),
        }
    }

    Some(lines)
}
