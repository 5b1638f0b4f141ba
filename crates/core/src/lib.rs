#![deny(missing_docs)]
//! blockdown core: source blocks, typed page nodes, and the page parser.

/// Parallel parsing across pages.
pub mod batch;
/// Core error and diagnostic types.
pub mod error;
/// Typed page nodes.
pub mod node;
/// Parsed pages and property accessors.
pub mod page;
/// Source block dispatch.
pub mod parse;
/// The `[properties]` sub-language.
pub mod properties;
/// Page selection by title.
pub mod select;
/// Source block model and tree traversal.
pub mod source;

pub use batch::{BatchOptions, parse_pages};
pub use error::{BlockdownError, ParseDiagnostics, ParseWarning};
pub use node::{HeadingLevel, ImageNode, NodeContent, NodeKind, PageNode};
pub use page::Page;
pub use parse::{ParseOptions, parse_page, parse_page_with_diagnostics};
pub use properties::{PROPERTIES_MARKER, PropertyLines, extract_properties};
pub use select::{PageFilter, find_by_title};
pub use source::{BlockKind, SourceBlock, collect_pages};
