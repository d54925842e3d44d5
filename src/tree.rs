//! Layout tree primitives – the typed node kinds a report is composed of,
//! plus the id handles used to address them inside a [`Document`].
//!
//! Ownership rules: a [`Document`] owns its sections and a flat arena of
//! tables. A table belongs either to a section (top level) or to exactly one
//! cell (nested) – never both. Rows belong to exactly one table and cells to
//! exactly one row, both held by value.
//!
//! The whole tree is serde-serialisable so a render backend can consume it
//! out of process and tests can snapshot it.
//!
//! [`Document`]: crate::document::Document

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::style::{
    Alignment, Border, Color, Padding, TableBorder, TextStyle, VerticalAlignment,
};

// ---------------------------------------------------------------------------
// Id handles
// ---------------------------------------------------------------------------

/// Handle to a [`Section`] within its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub(crate) usize);

/// Handle to a [`Table`] in the document's table arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId(pub(crate) usize);

/// Handle to a [`Row`] within one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    pub(crate) table: TableId,
    pub(crate) index: usize,
}

impl RowId {
    /// The table this row belongs to.
    pub fn table(&self) -> TableId {
        self.table
    }
}

/// Handle to a [`Cell`] within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    pub(crate) row: RowId,
    pub(crate) index: usize,
}

impl CellId {
    pub fn row(&self) -> RowId {
        self.row
    }
}

// ---------------------------------------------------------------------------
// Page / section
// ---------------------------------------------------------------------------

/// Physical page metrics for one section, in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width: f32,
    pub height: f32,
    pub margin: Padding,
}

impl PageSetup {
    /// A4 portrait with the standard 2.54 cm margin.
    pub fn a4() -> Self {
        let margin = defaults::ONE_CM_PT * defaults::DEFAULT_PAGE_MARGIN_CM;
        Self {
            width: defaults::A4_WIDTH_PT,
            height: defaults::A4_HEIGHT_PT,
            margin: Padding::all(margin),
        }
    }
}

/// A repeating page decoration bound to a section. Odd and even pages share
/// one binding; there is no odd/even differentiation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    /// Distance from the page edge, in points.
    pub distance_from_edge: f32,
    pub table: TableId,
}

/// One page-layout context within a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub page: PageSetup,
    pub is_landscape: bool,
    /// Top-level content in document order.
    pub tables: Vec<TableId>,
    pub header: Option<HeaderFooter>,
    pub footer: Option<HeaderFooter>,
}

impl Section {
    pub fn new(page: PageSetup, is_landscape: bool) -> Self {
        Self {
            page,
            is_landscape,
            tables: Vec::new(),
            header: None,
            footer: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table / row / cell
// ---------------------------------------------------------------------------

/// A structural table. The column-width specification is a single string of
/// space-separated point widths, one token per column – kept verbatim, since
/// both span derivation and the render backend interpret it and must agree
/// on the token count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub column_widths: String,
    pub rows: Vec<Row>,

    // Defaults cascading onto rows/cells that don't override them.
    pub default_cell_padding: Option<Padding>,
    pub default_cell_border: Option<Border>,
    pub default_text: TextStyle,

    pub alignment: Alignment,
    pub border: Option<TableBorder>,
    pub background: Option<Color>,

    // Pagination hints, opaque to the composition core.
    pub is_broken: bool,
    pub is_kept_together: bool,
    pub is_kept_with_next: bool,
    pub is_first_row_repeated: bool,
    pub starts_new_page: bool,
    /// Clip content that exceeds a fixed row height instead of growing.
    pub clips_fixed_row_height: bool,
}

impl Table {
    pub fn new(column_widths: &str) -> Self {
        Self {
            column_widths: column_widths.to_string(),
            rows: Vec::new(),
            default_cell_padding: None,
            default_cell_border: None,
            default_text: TextStyle::default(),
            alignment: Alignment::Left,
            border: None,
            background: None,
            is_broken: true,
            is_kept_together: false,
            is_kept_with_next: false,
            is_first_row_repeated: false,
            starts_new_page: false,
            clips_fixed_row_height: false,
        }
    }
}

/// One row of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub default_text: TextStyle,
    pub default_alignment: Alignment,
    pub default_cell_padding: Option<Padding>,
    pub default_cell_border: Option<Border>,
    /// Border drawn around the row itself, independent of any cells.
    pub border: Option<Border>,
    pub background: Option<Color>,
    pub vertical_alignment: VerticalAlignment,
    pub is_broken: bool,
    pub is_in_new_page: bool,
    pub fixed_height: Option<f32>,
}

impl Row {
    pub fn new(default_text: TextStyle) -> Self {
        Self {
            cells: Vec::new(),
            default_text,
            default_alignment: Alignment::Left,
            default_cell_padding: None,
            default_cell_border: None,
            border: None,
            background: None,
            vertical_alignment: VerticalAlignment::Top,
            is_broken: true,
            is_in_new_page: false,
            fixed_height: None,
        }
    }
}

/// One cell of a row. All style attributes are fully resolved by the time
/// the cell sits in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    pub column_span: usize,
    pub row_span: usize,
    pub border: Option<Border>,
    /// Rounded-corner radius for the cell border, when requested.
    pub corner_radius: Option<f32>,
    pub background: Option<Color>,
    pub text: TextStyle,
    pub alignment: Option<Alignment>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub padding: Option<Padding>,
    pub is_no_border: bool,
}

impl Cell {
    pub fn new(content: CellContent, text: TextStyle) -> Self {
        Self {
            content,
            column_span: defaults::DEFAULT_COLUMN_SPAN,
            row_span: defaults::DEFAULT_ROW_SPAN,
            border: None,
            corner_radius: None,
            background: None,
            text,
            alignment: None,
            vertical_alignment: None,
            padding: None,
            is_no_border: false,
        }
    }

    pub fn empty(text: TextStyle) -> Self {
        Self::new(CellContent::Empty, text)
    }
}

// ---------------------------------------------------------------------------
// Leaf content
// ---------------------------------------------------------------------------

/// What a cell holds. Exactly one variant per cell; the richer intent
/// descriptors used during composition are consumed and never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellContent {
    /// A styled placeholder with no content.
    Empty,
    /// A single text run.
    Text(TextRun),
    /// Multiple differently styled runs flowing as one paragraph.
    Segments(Vec<Segment>),
    /// A bullet, auto-numbered, or checkbox item.
    ListItem(ListItem),
    /// A nested table.
    Table(TableId),
}

/// A single styled text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub style: TextStyle,
    /// Extra margin around the paragraph, outside the cell padding.
    pub margin: Option<Padding>,
}

impl TextRun {
    pub fn new(content: &str, style: TextStyle) -> Self {
        Self {
            content: content.to_string(),
            style,
            margin: None,
        }
    }
}

/// One run within a [`CellContent::Segments`] paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub content: String,
    pub style: TextStyle,
}

/// The label in front of a list item's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListMarker {
    /// A literal glyph (bullet point, checkbox tick).
    Glyph {
        glyph: String,
        offset: f32,
        font_size: f32,
    },
    /// An auto-incrementing arabic label ("1.", "2.", …). Numbering is
    /// scoped to the item's own table; it restarts for every item composed
    /// through a separate call.
    AutoNumber { suffix: String },
}

/// A normalised list entry (bullet point, numbered heading, checkbox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub marker: ListMarker,
    pub content: String,
    pub level: u8,
    pub style: TextStyle,
}
