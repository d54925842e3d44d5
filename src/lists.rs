//! List-style content – bullet points, auto-numbered headings, and
//! checkbox rows.
//!
//! Each helper normalises its inputs into a [`ListItem`] and places it in
//! the tree. Helpers that take an optional parent are silent no-ops when no
//! parent is supplied; the item is built and dropped, matching the
//! fire-and-forget call style of report templates that conditionally omit
//! whole blocks.

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::TextStyle;
use crate::tree::{Cell, CellContent, ListItem, ListMarker, Table, TableId, TextRun};

/// "Yes" or "No" for boolean answers rendered as text.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        defaults::YES_VALUE
    } else {
        defaults::NO_VALUE
    }
}

/// A checked-box list item: the tick glyph with no trailing text.
pub(crate) fn check_box_item() -> ListItem {
    ListItem {
        marker: ListMarker::Glyph {
            glyph: defaults::CHECK_BOX_GLYPH.to_string(),
            offset: defaults::CHECK_BOX_OFFSET,
            font_size: defaults::HEADING_TWO_FONT_SIZE,
        },
        content: String::new(),
        level: defaults::DEFAULT_STYLE_LEVEL,
        style: TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE),
    }
}

impl Document {
    /// Add a bullet point to `parent`. The glyph defaults to the round
    /// bullet; callers may substitute any single-character marker. Without
    /// a parent the call is a silent no-op.
    pub fn create_bullet_point_style(
        &mut self,
        description: &str,
        bullet_style: Option<&str>,
        level: u8,
        parent: Option<TableId>,
    ) -> Result<()> {
        let item = ListItem {
            marker: ListMarker::Glyph {
                glyph: bullet_style
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults::DEFAULT_BULLET_STYLE)
                    .to_string(),
                offset: defaults::BULLET_POINT_OFFSET,
                font_size: defaults::BULLET_POINT_FONT_SIZE,
            },
            content: description.to_string(),
            level,
            style: TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE),
        };

        let Some(parent) = parent else {
            log::debug!("bullet point without a parent table, dropping");
            return Ok(());
        };
        self.table(parent)?;
        let row = self.add_row(parent)?;
        let text = self.row(row)?.default_text.clone();
        self.push_cell(row, Cell::new(CellContent::ListItem(item), text))?;
        Ok(())
    }

    /// Add an auto-numbered line ("1.", "2.", …) to `parent`. The item gets
    /// its own single-cell table hosted in a span-two cell, so the label
    /// column never disturbs the parent grid. Numbering restarts for every
    /// call; a run of consecutive numbers needs a single backend list scope,
    /// which each hosting table provides.
    pub fn create_numbered_style(
        &mut self,
        description: &str,
        parent: TableId,
        level: u8,
    ) -> Result<()> {
        let item = ListItem {
            marker: ListMarker::AutoNumber {
                suffix: ".".to_string(),
            },
            content: description.to_string(),
            level,
            style: TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE),
        };

        let host = self.alloc_table(Table::new(defaults::COLUMN_SPAN_FOUR_WIDTH));
        let host_row = self.add_row(host)?;
        let text = self.row(host_row)?.default_text.clone();
        self.push_cell(host_row, Cell::new(CellContent::ListItem(item), text))?;

        let row = self.add_row(parent)?;
        let text = self.row(row)?.default_text.clone();
        let mut cell = Cell::new(CellContent::Table(host), text);
        cell.column_span = defaults::DEFAULT_NESTED_COLUMN_SPAN;
        self.push_cell(row, cell)?;
        Ok(())
    }

    /// Add a bold label with a ticked checkbox beside it, as a two-column
    /// table hosted in a fresh row+cell of `parent`. Without a parent the
    /// call is a silent no-op.
    pub fn create_label_with_check_box(
        &mut self,
        label: &str,
        column_widths: Option<&str>,
        parent: Option<TableId>,
    ) -> Result<()> {
        let Some(parent) = parent else {
            log::debug!("label with checkbox without a parent table, dropping");
            return Ok(());
        };
        self.table(parent)?;

        let widths = column_widths
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults::CHECK_BOX_COLUMN_WIDTHS);
        let table = self.alloc_table(Table::new(widths));
        let row = self.add_row(table)?;

        let style = TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE).bold();
        let mut label_cell = Cell::new(
            CellContent::Text(TextRun::new(label, style.clone())),
            style.clone(),
        );
        label_cell.padding = Some(defaults::INNER_PADDING);
        self.push_cell(row, label_cell)?;

        let mut box_cell = Cell::new(CellContent::ListItem(check_box_item()), style);
        box_cell.padding = Some(defaults::INNER_PADDING);
        self.push_cell(row, box_cell)?;

        let parent_row = self.add_row(parent)?;
        let text = self.row(parent_row)?.default_text.clone();
        self.push_cell(parent_row, Cell::new(CellContent::Table(table), text))?;
        Ok(())
    }
}
