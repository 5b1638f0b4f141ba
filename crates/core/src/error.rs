use thiserror::Error;

/// Errors raised at the boundaries of blockdown (decoding input, emitting output).
///
/// Parsing and rendering themselves never fail; see [`ParseDiagnostics`] for
/// the non-fatal findings collected while parsing a page.
#[derive(Debug, Error)]
pub enum BlockdownError {
    /// Source block JSON could not be decoded.
    #[error("Source decode error: {0}")]
    Source(#[from] serde_json::Error),
    /// Options could not be decoded.
    #[error("Invalid options: {0}")]
    Options(String),
    /// Front matter could not be serialized.
    #[error("Front matter error: {0}")]
    FrontMatter(String),
}

impl BlockdownError {
    /// Create an options error from any displayable cause
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options(message.into())
    }

    /// Create a front matter error from any displayable cause
    pub fn front_matter(message: impl Into<String>) -> Self {
        Self::FrontMatter(message.into())
    }
}

/// Non-fatal findings recorded while parsing a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A block kind with no constructor was degraded to an unsupported node.
    UnsupportedBlock {
        /// Id of the source block
        block_id: String,
        /// Kind string of the source block
        kind: String,
    },
    /// A line inside a properties block had no `=` and was skipped.
    MalformedProperty {
        /// Id of the code block holding the properties
        block_id: String,
        /// The offending line, untrimmed
        line: String,
    },
}

impl ParseWarning {
    /// Get the id of the block this warning was raised for
    pub fn block_id(&self) -> &str {
        match self {
            ParseWarning::UnsupportedBlock { block_id, .. } => block_id,
            ParseWarning::MalformedProperty { block_id, .. } => block_id,
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseWarning::UnsupportedBlock { block_id, kind } => {
                write!(f, "unsupported block '{}' ({})", kind, block_id)
            }
            ParseWarning::MalformedProperty { block_id, line } => {
                write!(f, "skipped property line '{}' ({})", line, block_id)
            }
        }
    }
}

/// Collection of parse diagnostics for a single page
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// List of non-fatal warnings, in source order
    pub warnings: Vec<ParseWarning>,
}

impl ParseDiagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Iterate over unsupported-block warnings only
    pub fn unsupported_blocks(&self) -> impl Iterator<Item = &ParseWarning> {
        self.warnings
            .iter()
            .filter(|w| matches!(w, ParseWarning::UnsupportedBlock { .. }))
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_display_names_block() {
        let warning = ParseWarning::UnsupportedBlock {
            block_id: "b1".into(),
            kind: "embed".into(),
        };
        assert_eq!(warning.to_string(), "unsupported block 'embed' (b1)");
        assert_eq!(warning.block_id(), "b1");
    }

    #[test]
    fn diagnostics_filter_unsupported() {
        let mut diagnostics = ParseDiagnostics::new();
        assert!(!diagnostics.has_warnings());
        diagnostics.add_warning(ParseWarning::MalformedProperty {
            block_id: "c1".into(),
            line: "badline".into(),
        });
        diagnostics.add_warning(ParseWarning::UnsupportedBlock {
            block_id: "b1".into(),
            kind: "embed".into(),
        });
        assert_eq!(diagnostics.count(), 2);
        assert_eq!(diagnostics.unsupported_blocks().count(), 1);
    }

    #[test]
    fn json_errors_convert() {
        let err: BlockdownError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, BlockdownError::Source(_)), "{err:?}");
        assert!(err.to_string().starts_with("Source decode error"));
    }
}
