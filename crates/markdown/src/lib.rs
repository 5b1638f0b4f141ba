#![deny(missing_docs)]
//! blockdown Markdown output: node fragments, tables of contents and documents.

/// Whole-page rendering and front matter.
pub mod document;
/// Rendering options.
pub mod options;
/// Node fragment rendering.
pub mod render;
/// Heading slug generation.
pub mod slug;
/// Table-of-contents rendering.
pub mod toc;

pub use document::{FrontMatter, render_body, render_document};
pub use options::{AnchorStyle, RenderOptions};
pub use render::Renderer;
pub use slug::{Slugger, slugify};
pub use toc::render_table_of_contents;
