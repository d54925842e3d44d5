//! Vertical spacing and sub-headings – blank spacer rows in their several
//! placements, and the bold sub-heading row.
//!
//! A blank row is a fixed-height row with no content. Standalone spacers get
//! their own single-row table with content clipping enabled so the height
//! holds even if the backend would otherwise grow the row.

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::{Border, BorderSide, Padding, TextStyle};
use crate::tree::{Cell, CellContent, CellId, SectionId, Table, TableId, TextRun};

impl Document {
    /// Insert a blank spacer row. Without `table` the spacer is a standalone
    /// single-row table appended to `section`; with `table` it is hosted in
    /// a fresh row+cell of that table, keeping the parent's own row heights
    /// untouched.
    pub fn blank_row(
        &mut self,
        section: SectionId,
        border: BorderSide,
        table: Option<TableId>,
        is_short: bool,
    ) -> Result<()> {
        let height = if is_short {
            defaults::SHORT_BLANK_ROW_HEIGHT
        } else {
            defaults::BLANK_ROW_HEIGHT
        };
        match table {
            None => {
                let spacer = self.attach_table(section, Self::spacer_table())?;
                self.push_spacer_row(spacer, height, border)?;
            }
            Some(parent) => {
                let row = self.add_row(parent)?;
                let spacer = self.alloc_table(Self::spacer_table());
                self.push_spacer_row(spacer, height, border)?;
                let text = self.row(row)?.default_text.clone();
                self.push_cell(row, Cell::new(CellContent::Table(spacer), text))?;
            }
        }
        Ok(())
    }

    /// Insert a blank spacer into a cell, replacing its content with a
    /// spacer table. With a zero `fixed_height` the spacer table stays
    /// empty and adds no vertical space of its own.
    pub fn blank_row_in_cell(
        &mut self,
        cell: CellId,
        fixed_height: f32,
        is_short: bool,
        border: BorderSide,
    ) -> Result<()> {
        let spacer = self.alloc_table(Self::spacer_table());
        if fixed_height > 0.0 {
            let height = if is_short {
                defaults::SHORT_BLANK_ROW_HEIGHT
            } else {
                defaults::BLANK_ROW_TEXT_AREA_HEIGHT
            };
            self.push_spacer_row(spacer, height, border)?;
        }
        self.cell_mut(cell)?.content = CellContent::Table(spacer);
        Ok(())
    }

    /// Append a plain fixed-height blank row to a table. Without `table`
    /// this degrades to a standalone section spacer.
    pub fn blank_row_in_table(
        &mut self,
        section: SectionId,
        table: Option<TableId>,
        is_short: bool,
    ) -> Result<()> {
        let Some(table) = table else {
            return self.blank_row(section, BorderSide::None, None, is_short);
        };
        let row = self.add_row(table)?;
        let target = self.row_mut(row)?;
        if !target.is_in_new_page {
            target.fixed_height = Some(if is_short {
                defaults::SHORT_BLANK_ROW_HEIGHT
            } else {
                defaults::TABLE_BLANK_ROW_HEIGHT
            });
        }
        Ok(())
    }

    /// Append a bold sub-heading row. With `is_full_page` the heading gets
    /// its own full-width table appended to `section` instead of joining
    /// `table`'s column grid.
    pub fn create_sub_heading_row(
        &mut self,
        section: SectionId,
        text: &str,
        table: TableId,
        margins: Option<Padding>,
        is_full_page: bool,
    ) -> Result<CellId> {
        let target = if is_full_page {
            self.attach_table(section, Table::new(defaults::DEFAULT_FULL_WIDTH))?
        } else {
            table
        };
        let row = self.add_row(target)?;
        let style =
            TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_TWO_FONT_SIZE).bold();
        let mut run = TextRun::new(text, style.clone());
        run.margin = margins;
        let mut cell = Cell::new(CellContent::Text(run), style);
        cell.column_span = defaults::DEFAULT_HEADER_COLUMN_SPAN;
        cell.padding = Some(defaults::SUB_HEADING_PADDING);
        self.push_cell(row, cell)
    }

    fn spacer_table() -> Table {
        let mut table = Table::new("");
        table.clips_fixed_row_height = true;
        table
    }

    fn push_spacer_row(&mut self, table: TableId, height: f32, border: BorderSide) -> Result<()> {
        let row = self.add_row(table)?;
        let target = self.row_mut(row)?;
        target.fixed_height = Some(height);
        target.border = Some(Border::new(border));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableOptions;

    #[test]
    fn standalone_blank_row_clips_its_height() {
        let mut doc = Document::new();
        let section = doc.first_section();
        doc.blank_row(section, BorderSide::None, None, false).unwrap();
        let tables = &doc.section(section).unwrap().tables;
        assert_eq!(tables.len(), 1);
        let spacer = doc.table(tables[0]).unwrap();
        assert!(spacer.clips_fixed_row_height);
        assert_eq!(
            spacer.rows[0].fixed_height,
            Some(defaults::BLANK_ROW_HEIGHT)
        );
    }

    #[test]
    fn short_blank_row_is_lower() {
        let mut doc = Document::new();
        let section = doc.first_section();
        doc.blank_row(section, BorderSide::None, None, true).unwrap();
        doc.blank_row(section, BorderSide::None, None, false).unwrap();
        let tables = doc.section(section).unwrap().tables.clone();
        let short = doc.table(tables[0]).unwrap().rows[0].fixed_height.unwrap();
        let normal = doc.table(tables[1]).unwrap().rows[0].fixed_height.unwrap();
        assert!(short < normal);
    }

    #[test]
    fn nested_blank_row_keeps_parent_rows_unsized() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let parent = doc
            .create_outer_table(section, "520", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        doc.blank_row(section, BorderSide::None, Some(parent), false)
            .unwrap();
        let host_row = &doc.table(parent).unwrap().rows[0];
        assert_eq!(host_row.fixed_height, None);
        let CellContent::Table(spacer) = host_row.cells[0].content else {
            panic!("expected a hosted spacer table");
        };
        assert_eq!(
            doc.table(spacer).unwrap().rows[0].fixed_height,
            Some(defaults::BLANK_ROW_HEIGHT)
        );
    }

    #[test]
    fn table_blank_row_uses_table_height() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
            .create_outer_table(section, "520", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        doc.blank_row_in_table(section, Some(table), false).unwrap();
        assert_eq!(
            doc.table(table).unwrap().rows[0].fixed_height,
            Some(defaults::TABLE_BLANK_ROW_HEIGHT)
        );
    }

    #[test]
    fn full_page_sub_heading_gets_its_own_table() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
            .create_outer_table(section, "140 310", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let cell = doc
            .create_sub_heading_row(section, "Details", table, None, true)
            .unwrap();
        // The heading table is full width and attached after the parent.
        let tables = &doc.section(section).unwrap().tables;
        assert_eq!(tables.len(), 2);
        assert_ne!(cell.row().table(), table);
        assert_eq!(
            doc.table(cell.row().table()).unwrap().column_widths,
            defaults::DEFAULT_FULL_WIDTH
        );
        assert!(doc.table(table).unwrap().rows.is_empty());
    }

    #[test]
    fn sub_heading_is_bold_and_spans_two() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
            .create_outer_table(section, "140 310", "Arial", 11.0, None, TableOptions::default(), None)
            .unwrap();
        let cell = doc
            .create_sub_heading_row(section, "Details", table, Some(defaults::TOP_PADDING), false)
            .unwrap();
        let cell = doc.cell(cell).unwrap();
        assert_eq!(cell.column_span, 2);
        assert_eq!(cell.padding, Some(defaults::SUB_HEADING_PADDING));
        match &cell.content {
            CellContent::Text(run) => {
                assert!(run.style.is_bold);
                assert_eq!(run.style.font_size, defaults::HEADING_TWO_FONT_SIZE);
                assert_eq!(run.margin, Some(defaults::TOP_PADDING));
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
