//! Error types for the composition core.
//!
//! Two failure classes exist. Structural misuse – addressing a node through
//! a stale or foreign handle – fails fast and is always surfaced. Render
//! backend failures propagate unmodified; the core performs no retries.
//! Malformed *optional* inputs (empty column-width strings, zero font
//! sizes, absent colors) are not errors at all: they resolve to the
//! process defaults.

use thiserror::Error;

use crate::render::RenderError;

/// Result type alias for composition operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A section handle does not belong to this document.
    #[error("unknown section handle {0}")]
    UnknownSection(usize),

    /// A table handle does not belong to this document.
    #[error("unknown table handle {0}")]
    UnknownTable(usize),

    /// A row handle points past the end of its table.
    #[error("row {row} out of bounds for table {table}")]
    UnknownRow { table: usize, row: usize },

    /// A cell handle points past the end of its row.
    #[error("cell {cell} out of bounds for table {table} row {row}")]
    UnknownCell {
        table: usize,
        row: usize,
        cell: usize,
    },

    /// The render backend rejected the tree or failed internally.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The tree could not be (de)serialised.
    #[error("layout tree serialisation error: {0}")]
    Serialize(#[from] serde_json::Error),
}
