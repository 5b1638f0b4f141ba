//! Rendering options.

use blockdown_core::BlockdownError;
use serde::{Deserialize, Serialize};

/// How table-of-contents links address their headings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnchorStyle {
    /// `#` followed by the heading text, unchanged.
    #[default]
    Verbatim,
    /// GitHub-style slug of the heading text, deduplicated within the table.
    Slug,
}

/// Rendering options for page bodies and documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Placed between consecutive node fragments.
    pub separator: String,
    /// Anchor style for table-of-contents links.
    pub anchor_style: AnchorStyle,
    /// Whether [`crate::render_document`] emits a YAML front matter block.
    pub front_matter: bool,
}

impl RenderOptions {
    /// Decode options from JSON, filling unspecified fields with defaults.
    pub fn from_json(input: &str) -> Result<Self, BlockdownError> {
        serde_json::from_str(input).map_err(|err| BlockdownError::options(err.to_string()))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: "\n".to_string(),
            anchor_style: AnchorStyle::Verbatim,
            front_matter: false,
        }
    }
}
