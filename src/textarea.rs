//! Text areas – bordered free-text regions with an optional bold label
//! above, either as a standalone block or as a single cell in a data row.
//!
//! The block form is three tables deep: an outer keep-together table, a
//! nested label table, and the bordered body table. The border is applied
//! last; requesting rounded corners replaces the straight border outright
//! rather than layering a radius on top of it.

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::{
    Alignment, Border, Color, Padding, TableBorder, TextStyle, VerticalAlignment,
};
use crate::table::TableOptions;
use crate::tree::{Cell, CellContent, CellId, RowId, SectionId, TableId, TextRun};

/// Delegation payload on a display cell: render the cell's content as a
/// text area instead of a plain text run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextAreaInfo {
    pub column_widths: String,
    pub with_border: bool,
    pub with_rounded_corners: bool,
    pub padding: Option<Padding>,
}

impl TextAreaInfo {
    pub fn bordered() -> Self {
        Self {
            with_border: true,
            ..Self::default()
        }
    }

    pub fn rounded() -> Self {
        Self {
            with_border: true,
            with_rounded_corners: true,
            ..Self::default()
        }
    }
}

impl Document {
    /// Build a labelled text-area block at the end of `section`: a bold grey
    /// label above a bordered, shaded body. Returns the body table so
    /// callers can append further rows.
    #[allow(clippy::too_many_arguments)]
    pub fn create_text_area_cell(
        &mut self,
        section: SectionId,
        parent_column_widths: &str,
        title: &str,
        body: &str,
        default_column_width: Option<&str>,
        text_area_padding: Option<Padding>,
        with_internal_blank_row: bool,
        with_rounded_corners: bool,
    ) -> Result<TableId> {
        let outer = self.create_outer_table(
            section,
            parent_column_widths,
            defaults::ARIAL_FONT,
            defaults::HEADING_TWO_FONT_SIZE,
            Some(defaults::OUTER_PADDING),
            TableOptions::kept_together(),
            None,
        )?;

        // Label sits in its own nested table so its width is independent of
        // the parent grid.
        let label_table = self.add_nested_table(
            outer,
            default_column_width.unwrap_or(defaults::TEXT_AREA_COLUMN_WIDTH),
            defaults::ARIAL_FONT,
            defaults::HEADING_TWO_FONT_SIZE,
            None,
            TableOptions {
                is_kept_together: true,
                is_kept_with_next: true,
                ..TableOptions::default()
            },
            None,
        )?;
        let label_row = self.add_row(label_table)?;
        {
            let row = self.row_mut(label_row)?;
            row.is_broken = false;
            row.default_text.is_bold = true;
            row.default_text.color = defaults::GREY_COLOR;
            row.default_text.line_spacing = defaults::TEXT_AREA_LINE_SPACING;
        }
        let label_style = self.row(label_row)?.default_text.clone();
        let mut label_cell = Cell::new(
            CellContent::Text(TextRun::new(title, label_style.clone())),
            label_style,
        );
        label_cell.padding =
            Some(text_area_padding.unwrap_or(defaults::TEXT_AREA_LABEL_PADDING));
        self.push_cell(label_row, label_cell)?;

        let inner = self.create_inner_table(
            section,
            defaults::DEFAULT_FULL_WIDTH,
            Some(outer),
            crate::style::BorderSide::All,
            "",
            defaults::HEADING_TWO_FONT_SIZE,
            Alignment::Left,
            // Spacing below the block has to come from padding here; a
            // spacer row inside the bordered body would be drawn shaded.
            with_internal_blank_row.then_some(defaults::HEADING_WITH_NO_SUB_HEADING_PADDING),
            TableOptions::kept_together(),
        )?;
        self.table_mut(inner)?.background = Some(defaults::INNER_TABLE_COLOR);
        let body_row = self.add_row(inner)?;
        let body_style = self.row(body_row)?.default_text.clone();
        let mut body_cell = Cell::new(
            CellContent::Text(TextRun::new(body, body_style.clone())),
            body_style,
        );
        body_cell.padding =
            Some(text_area_padding.unwrap_or(defaults::TEXT_AREA_BODY_PADDING));
        self.push_cell(body_row, body_cell)?;

        self.apply_text_area_border(inner, with_rounded_corners)?;
        Ok(inner)
    }

    /// Append one text-area cell to an existing data row. The row is marked
    /// unbreakable; border and rounded corners are drawn on the cell itself.
    #[allow(clippy::too_many_arguments)]
    pub fn create_text_area_cell_in_row(
        &mut self,
        row: RowId,
        text: &str,
        text_area_padding: Option<Padding>,
        vertical_alignment: VerticalAlignment,
        alignment: Alignment,
        with_rounded_corners: bool,
        with_border: bool,
    ) -> Result<CellId> {
        self.row_mut(row)?.is_broken = false;
        let style = TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE)
            .colored(defaults::GREY_COLOR);
        let mut cell = Cell::new(
            CellContent::Text(TextRun::new(text, style.clone())),
            style,
        );
        cell.padding = Some(text_area_padding.unwrap_or(defaults::TEXT_AREA_BODY_PADDING));
        cell.vertical_alignment = Some(vertical_alignment);
        cell.alignment = Some(alignment);
        if with_border || with_rounded_corners {
            cell.border = Some(Border::all());
        }
        if with_rounded_corners {
            cell.corner_radius = Some(defaults::DEFAULT_CORNER_RADIUS);
        }
        self.push_cell(row, cell)
    }

    /// Full black border on the body table; rounded corners replace the
    /// straight border when requested.
    fn apply_text_area_border(&mut self, table: TableId, rounded: bool) -> Result<()> {
        let border = if rounded {
            TableBorder::Rounded {
                corner_radius: defaults::DEFAULT_CORNER_RADIUS,
                width: defaults::DEFAULT_BORDER_WIDTH,
                color: Color::BLACK,
            }
        } else {
            TableBorder::Square(Border {
                side: crate::style::BorderSide::All,
                width: defaults::DEFAULT_BORDER_WIDTH,
                color: Color::BLACK,
            })
        };
        self.table_mut(table)?.border = Some(border);
        Ok(())
    }
}
