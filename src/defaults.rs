//! Process-wide style defaults – named constants and presets used as the
//! fallback whenever a caller does not override a style attribute.
//!
//! Everything here is immutable. Dimensions are PDF points (1 pt = 1/72 inch)
//! unless stated otherwise; column-width presets use the same space-separated
//! string format the composers and the render backend share.

use crate::style::{Color, Padding};

// ---------------------------------------------------------------------------
// Page metrics
// ---------------------------------------------------------------------------

/// One centimetre in points.
pub const ONE_CM_PT: f32 = 28.3465;

/// A4 width: 210mm = 595.28 points.
pub const A4_WIDTH_PT: f32 = 595.28;

/// A4 height: 297mm = 841.89 points.
pub const A4_HEIGHT_PT: f32 = 841.89;

/// Standard page margin for A4 documents, in centimetres.
pub const DEFAULT_PAGE_MARGIN_CM: f32 = 2.54;

/// Distance from the page edge for headers and footers, in centimetres.
pub const PAGE_DISTANCE_FROM_EDGE_CM: f32 = 1.27;

// ---------------------------------------------------------------------------
// Borders
// ---------------------------------------------------------------------------

/// Width of a typical hairline border.
pub const DEFAULT_BORDER_WIDTH: f32 = 0.1;

/// Corner radius used for rounded text-area borders.
pub const DEFAULT_CORNER_RADIUS: f32 = 10.0;

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

/// Body / label font.
pub const ARIAL_FONT: &str = "Arial";

/// Header and footer font.
pub const HELVETICA_FONT: &str = "Helvetica";

/// Font used for glyphs outside the WinAnsi range (checkbox crosses etc.).
pub const ARIAL_UNICODE_FONT: &str = "Arial Unicode MS";

pub const HEADING_ONE_FONT_SIZE: f32 = 16.0;
pub const HEADING_TWO_FONT_SIZE: f32 = 11.0;
pub const HEADING_THREE_FONT_SIZE: f32 = 10.0;
pub const HEADING_FOUR_FONT_SIZE: f32 = 9.0;

/// Default font size for inner-table body text.
pub const BODY_FONT_SIZE: f32 = 9.0;

pub const BULLET_POINT_FONT_SIZE: f32 = 11.0;
pub const HEADER_FONT_SIZE: f32 = 12.0;
pub const FOOTER_ROW_FONT_SIZE: f32 = 8.0;

// ---------------------------------------------------------------------------
// Spans, levels, spacing
// ---------------------------------------------------------------------------

/// Default depth (level) for bullet and numbered styles.
pub const DEFAULT_STYLE_LEVEL: u8 = 1;

/// Standard header column span (outer-table header labels).
pub const DEFAULT_HEADER_COLUMN_SPAN: usize = 2;

/// Standard column span for inner-table cells.
pub const DEFAULT_COLUMN_SPAN: usize = 1;

/// Standard row span for inner-table cells.
pub const DEFAULT_ROW_SPAN: usize = 1;

/// Column span used when hosting a nested table inside a parent cell.
pub const DEFAULT_NESTED_COLUMN_SPAN: usize = 2;

/// Default line spacing for cell text.
pub const DEFAULT_LINE_SPACING: f32 = 3.0;

/// Line spacing for text-area labels and bodies.
pub const TEXT_AREA_LINE_SPACING: f32 = 1.0;

/// Horizontal offset of the bullet glyph from its text.
pub const BULLET_POINT_OFFSET: f32 = 5.0;

/// Horizontal offset of the checkbox glyph from its text.
pub const CHECK_BOX_OFFSET: f32 = -2.0;

// ---------------------------------------------------------------------------
// Row heights
// ---------------------------------------------------------------------------

/// Fixed height of a standard blank spacer row.
pub const BLANK_ROW_HEIGHT: f32 = 20.0;

/// Fixed height of a short blank spacer row. Strictly lower than
/// [`BLANK_ROW_HEIGHT`].
pub const SHORT_BLANK_ROW_HEIGHT: f32 = 10.0;

/// Fixed height of a blank spacer row inside a text area.
pub const BLANK_ROW_TEXT_AREA_HEIGHT: f32 = 30.0;

/// Fixed height of a blank spacer row appended to an existing table.
pub const TABLE_BLANK_ROW_HEIGHT: f32 = 15.0;

/// Default height of a text-area body row.
pub const TEXT_AREA_ROW_HEIGHT: f32 = 60.0;

/// Default height of an inner-table data row.
pub const INNER_TABLE_ROW_HEIGHT: f32 = 40.0;

// ---------------------------------------------------------------------------
// Padding presets
// ---------------------------------------------------------------------------

/// Default padding for cells of an outer (page-structure) table.
pub const OUTER_PADDING: Padding = Padding {
    top: 2.0,
    right: 2.0,
    bottom: 2.0,
    left: 0.0,
};

/// Default padding for cells of an inner (data-grid) table.
pub const INNER_PADDING: Padding = Padding::all(3.5);

/// Padding for sub-heading text rows.
pub const SUB_HEADING_PADDING: Padding = Padding {
    top: 0.0,
    right: 4.0,
    bottom: 0.0,
    left: 0.0,
};

/// Bottom-only padding beneath sub-heading rows.
pub const SUB_HEADING_BOTTOM_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 3.0,
    left: 0.0,
};

/// Extra bottom padding for outer-table text rows.
pub const OUTER_BOTTOM_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 8.0,
    left: 0.0,
};

/// Top-and-bottom padding around sub-heading rows.
pub const SUB_HEADING_TOP_BOTTOM_PADDING: Padding = Padding {
    top: 5.0,
    right: 0.0,
    bottom: 3.0,
    left: 0.0,
};

/// Padding for text-area labels.
pub const TEXT_AREA_LABEL_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 4.0,
    left: 0.0,
};

/// Padding for text-area body cells.
pub const TEXT_AREA_BODY_PADDING: Padding = Padding::all(4.0);

/// Padding for free-standing text-area paragraphs.
pub const TEXT_AREA_PARAGRAPH_PADDING: Padding = Padding {
    top: 4.0,
    right: 0.0,
    bottom: 4.0,
    left: 0.0,
};

pub const ZERO_PADDING: Padding = Padding::all(0.0);

pub const TOP_PADDING: Padding = Padding {
    top: 10.0,
    right: 0.0,
    bottom: 0.0,
    left: 0.0,
};

/// Padding for a heading immediately followed by a row or table, with no
/// sub-heading in between.
pub const HEADING_WITH_NO_SUB_HEADING_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 12.0,
    left: 0.0,
};

/// Padding used when a table needs blank-row spacing but a spacer row
/// cannot be inserted.
pub const INTERNAL_BLANK_ROW_PADDING: Padding = Padding {
    top: 0.0,
    right: 0.0,
    bottom: 20.0,
    left: 0.0,
};

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Background of header cells and color of outer-table headings.
pub const HEADER_BACKGROUND_COLOR: Color = Color::rgb(0.153, 0.306, 0.576);

/// Default foreground for labels and descriptions.
pub const GREY_COLOR: Color = Color::rgb(0.349, 0.349, 0.349);

/// Shading for empty placeholder cells.
pub const LIGHT_GRAY_COLOR: Color = Color::rgb(0.851, 0.851, 0.851);

/// Background of inner-table data rows.
pub const INNER_TABLE_COLOR: Color = Color::rgb(0.949, 0.949, 0.949);

// ---------------------------------------------------------------------------
// Column-width presets (space-separated point widths, one token per column)
// ---------------------------------------------------------------------------

pub const DEFAULT_FULL_WIDTH: &str = "520";
pub const COLUMN_SPAN_ONE_WIDTH: &str = "105";
pub const COLUMN_SPAN_THREE_WIDTH: &str = "350";
pub const COLUMN_SPAN_FOUR_WIDTH: &str = "450";
pub const TEXT_AREA_COLUMN_WIDTH: &str = "450";
pub const CHECK_BOX_COLUMN_WIDTHS: &str = "420 100";

pub const HEADER_ROW_PORTRAIT_COLUMN_WIDTHS: &str = "520";
pub const HEADER_ROW_LANDSCAPE_COLUMN_WIDTHS: &str = "770";
pub const FOOTER_ROW_PORTRAIT_COLUMN_WIDTHS: &str = "260 260";
pub const FOOTER_ROW_LANDSCAPE_COLUMN_WIDTHS: &str = "385 385";

// ---------------------------------------------------------------------------
// Glyphs and literals
// ---------------------------------------------------------------------------

/// Default bullet glyph.
pub const DEFAULT_BULLET_STYLE: &str = "\u{2022}";

/// Glyph embedded for a checked checkbox.
pub const CHECK_BOX_GLYPH: &str = "\u{2713}";

/// Literal embedded for an unchecked checkbox.
pub const CROSS_LABEL: &str = "\u{2717}";

pub const YES_VALUE: &str = "Yes";
pub const NO_VALUE: &str = "No";

/// Marker the render backend substitutes with the current page number.
pub const PAGE_CURRENT_MARKER: &str = "$p";

/// Marker the render backend substitutes with the total page count.
pub const PAGE_TOTAL_MARKER: &str = "$P";
