//! Table composition – outer (borderless, page-structure) tables, inner
//! (bordered, data-grid) tables, and nested tables hosted inside a parent
//! cell.
//!
//! Column widths are declared as a single string of space-separated point
//! widths. The token count doubles as the table's column span, so the
//! string is stored verbatim and both this module and the render backend
//! derive from it.

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::{
    resolve_text, Alignment, Border, BorderSide, Padding, TableBorder, TextOverride, TextStyle,
};
use crate::tree::{Cell, CellContent, RowId, SectionId, Table, TableId};

/// Pagination hints shared by the table constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableOptions {
    /// Treat the table as a single entity that must not split across pages.
    pub keep_content_together: bool,
    /// Force the table onto a fresh page.
    pub starts_new_page: bool,
    pub is_kept_with_next: bool,
    pub is_kept_together: bool,
}

impl TableOptions {
    pub fn kept_together() -> Self {
        Self {
            keep_content_together: true,
            ..Self::default()
        }
    }
}

/// Derive the column span from a column-width specification: the number of
/// space-separated tokens, or 1 when the string is empty or holds a single
/// token. Malformed input degrades to 1 rather than failing.
pub fn column_span_of(column_widths: &str) -> usize {
    if !column_widths.is_empty() && column_widths.contains(' ') {
        column_widths.split(' ').count()
    } else {
        1
    }
}

impl Document {
    /// Column span of a table, derived from its declared column widths.
    /// This is the canonical way any composer infers how many columns a
    /// table occupies when spanning it inside a parent cell.
    pub fn column_span(&self, table: TableId) -> Result<usize> {
        Ok(column_span_of(&self.table(table)?.column_widths))
    }

    /// Create a borderless outer table for page structure (labels,
    /// headings). With `parent`, the table is wrapped in a fresh row+cell
    /// of that table; otherwise it is appended to `section`.
    pub fn create_outer_table(
        &mut self,
        section: SectionId,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        default_padding: Option<Padding>,
        opts: TableOptions,
        parent: Option<TableId>,
    ) -> Result<TableId> {
        let mut table = Table::new(column_widths);
        table.default_cell_border = Some(Border::none());
        table.border = Some(TableBorder::Square(Border::none()));
        table.default_text = resolve_text(
            &TextOverride::font(font_name, font_size),
            &TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE),
        );
        table.is_broken = !opts.keep_content_together;
        table.starts_new_page = opts.starts_new_page;
        table.is_kept_with_next = opts.is_kept_with_next;
        table.is_kept_together = opts.is_kept_together;

        match parent {
            Some(parent) => {
                table.default_cell_padding =
                    Some(default_padding.unwrap_or(defaults::OUTER_PADDING));
                self.nest_in_fresh_cell(parent, table, defaults::DEFAULT_COLUMN_SPAN, false)
            }
            None => {
                table.default_cell_padding = default_padding;
                self.attach_table(section, table)
            }
        }
    }

    /// Create a bordered inner table for tabular data. The first row is
    /// repeated after page breaks (sticky header). With `parent`, the
    /// hosting cell is borderless so the grid's own border stands alone.
    #[allow(clippy::too_many_arguments)]
    pub fn create_inner_table(
        &mut self,
        section: SectionId,
        column_widths: &str,
        parent: Option<TableId>,
        border_side: BorderSide,
        font_name: &str,
        font_size: f32,
        alignment: Alignment,
        padding: Option<Padding>,
        opts: TableOptions,
    ) -> Result<TableId> {
        let mut table = Table::new(column_widths);
        table.default_cell_border = Some(if border_side.is_none() {
            Border::none()
        } else {
            Border::new(border_side)
        });
        table.default_text = resolve_text(
            &TextOverride::font(font_name, font_size),
            &TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE),
        );
        table.alignment = alignment;
        table.is_broken = !opts.keep_content_together;
        table.is_first_row_repeated = true;
        table.is_kept_with_next = opts.is_kept_with_next;
        table.is_kept_together = opts.is_kept_together;

        match parent {
            Some(parent) => {
                let row = self.add_row(parent)?;
                if let Some(padding) = padding {
                    self.row_mut(row)?.default_cell_padding = Some(padding);
                }
                let id = self.alloc_table(table);
                self.host_in_row(row, id, defaults::DEFAULT_COLUMN_SPAN, true)?;
                Ok(id)
            }
            None => {
                table.default_cell_padding = padding;
                self.attach_table(section, table)
            }
        }
    }

    /// Create an inner table that is *not* bound to any section or parent.
    /// Handy for nesting grids successively: the caller injects the table
    /// into a cell later, typically through a display-cell descriptor.
    #[allow(clippy::too_many_arguments)]
    pub fn create_simple_inner_table(
        &mut self,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        border_side: BorderSide,
        alignment: Alignment,
        padding: Option<Padding>,
        opts: TableOptions,
    ) -> TableId {
        let mut table = Table::new(column_widths);
        table.default_text = resolve_text(
            &TextOverride::font(font_name, font_size),
            &TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE),
        );
        table.alignment = alignment;
        table.is_broken = !opts.keep_content_together;
        table.is_first_row_repeated = true;
        table.is_kept_with_next = opts.is_kept_with_next;
        if !border_side.is_none() {
            table.border = Some(TableBorder::Square(Border::new(border_side)));
        }
        table.default_cell_padding = padding;
        self.alloc_table(table)
    }

    /// Nest a new table inside a fresh row+cell of `parent`. The hosting
    /// cell spans `column_span` columns (2 unless overridden).
    #[allow(clippy::too_many_arguments)]
    pub fn add_nested_table(
        &mut self,
        parent: TableId,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        default_padding: Option<Padding>,
        opts: TableOptions,
        column_span: Option<usize>,
    ) -> Result<TableId> {
        self.table(parent)?;
        let table = self.nested_table_body(column_widths, font_name, font_size, default_padding, opts);
        let span = column_span.unwrap_or(defaults::DEFAULT_NESTED_COLUMN_SPAN);
        self.nest_in_fresh_cell(parent, table, span, false)
    }

    /// Nest a new table inside `parent`, spanning the host cell across all
    /// of the parent's declared columns.
    pub fn add_nested_table_from_table(
        &mut self,
        parent: TableId,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        parent_padding: Option<Padding>,
        opts: TableOptions,
    ) -> Result<TableId> {
        let span = self.column_span(parent)?;
        let row = self.add_row(parent)?;
        self.row_mut(row)?.default_cell_padding =
            Some(parent_padding.unwrap_or(defaults::INNER_PADDING));
        let table =
            self.nested_table_body(column_widths, font_name, font_size, parent_padding, opts);
        let id = self.alloc_table(table);
        self.host_in_row(row, id, span, true)?;
        Ok(id)
    }

    /// Nest a new table inside an additional cell of an existing row.
    pub fn add_nested_table_from_row(
        &mut self,
        row: RowId,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        parent_padding: Option<Padding>,
        opts: TableOptions,
    ) -> Result<TableId> {
        self.row(row)?;
        self.row_mut(row)?.default_cell_padding =
            Some(parent_padding.unwrap_or(defaults::INNER_PADDING));
        let table =
            self.nested_table_body(column_widths, font_name, font_size, parent_padding, opts);
        let id = self.alloc_table(table);
        self.host_in_row(row, id, defaults::DEFAULT_COLUMN_SPAN, true)?;
        Ok(id)
    }

    // -- helpers -----------------------------------------------------------

    fn nested_table_body(
        &mut self,
        column_widths: &str,
        font_name: &str,
        font_size: f32,
        default_padding: Option<Padding>,
        opts: TableOptions,
    ) -> Table {
        let mut table = Table::new(column_widths);
        table.default_cell_padding = Some(default_padding.unwrap_or(defaults::OUTER_PADDING));
        table.default_text = resolve_text(
            &TextOverride::font(font_name, font_size),
            &TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE),
        );
        table.is_broken = !opts.keep_content_together;
        table.is_kept_together = opts.is_kept_together;
        table.is_kept_with_next = opts.is_kept_with_next;
        table
    }


    /// Create a fresh row+cell in `parent` and host `table` in the cell.
    fn nest_in_fresh_cell(
        &mut self,
        parent: TableId,
        table: Table,
        column_span: usize,
        no_border: bool,
    ) -> Result<TableId> {
        let id = self.alloc_table(table);
        let row = self.add_row(parent)?;
        self.host_in_row(row, id, column_span, no_border)?;
        Ok(id)
    }

    fn host_in_row(
        &mut self,
        row: RowId,
        table: TableId,
        column_span: usize,
        no_border: bool,
    ) -> Result<()> {
        let text = self.row(row)?.default_text.clone();
        let mut cell = Cell::new(CellContent::Table(table), text);
        cell.column_span = column_span.max(1);
        cell.is_no_border = no_border;
        self.push_cell(row, cell)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_counts_tokens() {
        assert_eq!(column_span_of("100 250 100"), 3);
        assert_eq!(column_span_of("140 310"), 2);
        assert_eq!(column_span_of("10 20 30 40 50"), 5);
    }

    #[test]
    fn span_degrades_to_one() {
        assert_eq!(column_span_of(""), 1);
        assert_eq!(column_span_of("520"), 1);
        assert_eq!(column_span_of("garbage"), 1);
    }

    #[test]
    fn outer_table_is_borderless() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let id = doc
            .create_outer_table(
                section,
                "140 310",
                defaults::ARIAL_FONT,
                defaults::HEADING_TWO_FONT_SIZE,
                None,
                TableOptions::kept_together(),
                None,
            )
            .unwrap();
        let table = doc.table(id).unwrap();
        assert_eq!(table.default_cell_border.unwrap().side, BorderSide::None);
        assert!(!table.is_broken);
        assert_eq!(doc.section(section).unwrap().tables, vec![id]);
    }

    #[test]
    fn outer_table_nests_under_parent() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let parent = doc
            .create_outer_table(section, "520", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let child = doc
            .create_outer_table(
                section,
                "100 100",
                "Arial",
                11.0,
                None,
                TableOptions::default(),
                Some(parent),
            )
            .unwrap();
        // The child lands in a fresh row+cell of the parent, not on the
        // section's top level.
        assert_eq!(doc.section(section).unwrap().tables, vec![parent]);
        let host_row = doc.table(parent).unwrap().rows.last().unwrap();
        assert_eq!(host_row.cells[0].content, CellContent::Table(child));
        assert_eq!(
            doc.table(child).unwrap().default_cell_padding,
            Some(defaults::OUTER_PADDING)
        );
    }

    #[test]
    fn inner_table_defaults() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let id = doc
            .create_inner_table(
                section,
                "100 250 100",
                None,
                BorderSide::All,
                "",
                0.0,
                Alignment::Left,
                None,
                TableOptions::default(),
            )
            .unwrap();
        let table = doc.table(id).unwrap();
        assert!(table.is_first_row_repeated);
        assert_eq!(table.default_cell_border.unwrap().side, BorderSide::All);
        // Empty font name and zero size resolve to the process defaults.
        assert_eq!(table.default_text.font_name, defaults::ARIAL_FONT);
        assert_eq!(table.default_text.font_size, defaults::BODY_FONT_SIZE);
    }

    #[test]
    fn inner_table_host_cell_is_borderless() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let parent = doc
            .create_outer_table(section, "520", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let inner = doc
            .create_inner_table(
                section,
                "100 100",
                Some(parent),
                BorderSide::All,
                "Arial",
                9.0,
                Alignment::Left,
                Some(defaults::INNER_PADDING),
                TableOptions::default(),
            )
            .unwrap();
        let host_row = doc.table(parent).unwrap().rows.last().unwrap();
        assert!(host_row.cells[0].is_no_border);
        assert_eq!(host_row.cells[0].content, CellContent::Table(inner));
        assert_eq!(host_row.default_cell_padding, Some(defaults::INNER_PADDING));
    }

    #[test]
    fn nested_table_spans_two_columns_by_default() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let parent = doc
            .create_outer_table(section, "140 310", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let nested = doc
            .add_nested_table(parent, "450", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let host_row = doc.table(parent).unwrap().rows.last().unwrap();
        assert_eq!(host_row.cells[0].column_span, 2);
        assert_eq!(host_row.cells[0].content, CellContent::Table(nested));
    }

    #[test]
    fn nested_from_table_spans_all_parent_columns() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let parent = doc
            .create_outer_table(
                section,
                "100 100 100",
                "Arial",
                11.0,
                None,
                TableOptions::default(),
                None,
            )
            .unwrap();
        doc.add_nested_table_from_table(
            parent,
            "300",
            "Arial",
            9.0,
            None,
            TableOptions::default(),
        )
        .unwrap();
        let host_row = doc.table(parent).unwrap().rows.last().unwrap();
        assert_eq!(host_row.cells[0].column_span, 3);
        assert!(host_row.cells[0].is_no_border);
    }

    #[test]
    fn simple_inner_table_is_detached() {
        let mut doc = Document::new();
        let id = doc.create_simple_inner_table(
            "100 100",
            "",
            0.0,
            BorderSide::All,
            Alignment::Left,
            None,
            TableOptions::default(),
        );
        assert!(doc.table(id).is_ok());
        assert!(doc.section(doc.first_section()).unwrap().tables.is_empty());
        assert!(matches!(
            doc.table(id).unwrap().border,
            Some(TableBorder::Square(_))
        ));
    }
}
