//! # report-forge – Declarative report-layout composition
//!
//! This crate builds hierarchical report documents from high-level intent
//! and hands the finished tree to a pluggable render backend. The
//! composition stages are:
//!
//! 1. **Describe** – transient descriptors carry cell intent
//!    ([`cells::DisplayCell`], [`cells::HeaderCell`], [`textarea::TextAreaInfo`])
//! 2. **Compose** – builders on [`document::Document`] translate intent
//!    into tree nodes ([`table`], [`cells`], [`spacing`], [`lists`],
//!    [`textarea`], [`headerfooter`])
//! 3. **Resolve** – every style attribute is cascaded to a concrete value
//!    as the node is created ([`style`], [`defaults`])
//! 4. **Render** – the tree goes to an external [`render::Renderer`], and
//!    independently rendered documents merge via a [`render::Concatenator`]
//!
//! The core never computes geometry: pagination, page numbering, and glyph
//! layout are backend concerns.

pub mod cells;
pub mod defaults;
pub mod document;
pub mod error;
pub mod headerfooter;
pub mod lists;
pub mod render;
pub mod spacing;
pub mod style;
pub mod table;
pub mod textarea;
pub mod tree;

// Re-exports for convenience
pub use cells::{DisplayCell, HeaderCell, RowLabel, RowStyle};
pub use document::Document;
pub use error::{Error, Result};
pub use lists::yes_no;
pub use render::{render_and_concatenate, Concatenator, RenderError, Renderer};
pub use style::{Alignment, Border, BorderSide, Color, Padding, TableBorder, TextStyle, VerticalAlignment};
pub use table::{column_span_of, TableOptions};
pub use textarea::TextAreaInfo;
pub use tree::{CellId, PageSetup, RowId, SectionId, TableId};
