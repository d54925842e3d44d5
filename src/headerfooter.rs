//! Page headers and footers – one binding per section, shared by odd and
//! even pages.
//!
//! The footer's page-number cell embeds the `$p` / `$P` markers verbatim;
//! substituting real page numbers is the render backend's job since only it
//! knows the final page count.

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::{Alignment, Border, TextStyle, VerticalAlignment};
use crate::tree::{Cell, CellContent, HeaderFooter, SectionId, Table, TextRun};

impl Document {
    /// Bind a centred header line and a two-cell footer (free text left,
    /// "Page x of y" right) to one section. Column widths follow the
    /// section's orientation.
    pub fn create_header_and_footer_for_section(
        &mut self,
        section: SectionId,
        header_text: &str,
        footer_text: &str,
    ) -> Result<()> {
        let is_landscape = self.section(section)?.is_landscape;
        let distance = defaults::ONE_CM_PT * defaults::PAGE_DISTANCE_FROM_EDGE_CM;

        // Header: one borderless full-width cell, centred both ways.
        let mut header_table = Table::new(if is_landscape {
            defaults::HEADER_ROW_LANDSCAPE_COLUMN_WIDTHS
        } else {
            defaults::HEADER_ROW_PORTRAIT_COLUMN_WIDTHS
        });
        header_table.default_cell_border = Some(Border::none());
        header_table.default_text =
            TextStyle::new(defaults::HELVETICA_FONT, defaults::HEADER_FONT_SIZE);
        let header_id = self.alloc_table(header_table);
        let header_row = self.add_row(header_id)?;
        let style = self.row(header_row)?.default_text.clone();
        let mut cell = Cell::new(
            CellContent::Text(TextRun::new(header_text, style.clone())),
            style,
        );
        cell.vertical_alignment = Some(VerticalAlignment::Center);
        cell.alignment = Some(Alignment::Center);
        self.push_cell(header_row, cell)?;
        self.section_mut(section)?.header = Some(HeaderFooter {
            distance_from_edge: distance,
            table: header_id,
        });

        // Footer: free text on the left, page numbering on the right.
        let mut footer_table = Table::new(if is_landscape {
            defaults::FOOTER_ROW_LANDSCAPE_COLUMN_WIDTHS
        } else {
            defaults::FOOTER_ROW_PORTRAIT_COLUMN_WIDTHS
        });
        footer_table.default_cell_border = Some(Border::none());
        footer_table.default_text =
            TextStyle::new(defaults::HELVETICA_FONT, defaults::FOOTER_ROW_FONT_SIZE);
        let footer_id = self.alloc_table(footer_table);
        let footer_row = self.add_row(footer_id)?;
        let style = self.row(footer_row)?.default_text.clone();

        let mut text_cell = Cell::new(
            CellContent::Text(TextRun::new(footer_text, style.clone())),
            style.clone(),
        );
        text_cell.alignment = Some(Alignment::Left);
        self.push_cell(footer_row, text_cell)?;

        let page_label = format!(
            "Page {} of {}",
            defaults::PAGE_CURRENT_MARKER,
            defaults::PAGE_TOTAL_MARKER
        );
        let mut page_cell = Cell::new(
            CellContent::Text(TextRun::new(&page_label, style.clone())),
            style,
        );
        page_cell.vertical_alignment = Some(VerticalAlignment::Center);
        page_cell.alignment = Some(Alignment::Right);
        self.push_cell(footer_row, page_cell)?;
        self.section_mut(section)?.footer = Some(HeaderFooter {
            distance_from_edge: distance,
            table: footer_id,
        });
        Ok(())
    }

    /// Bind the same header and footer text to every section in the
    /// document.
    pub fn create_header_and_footer(&mut self, header_text: &str, footer_text: &str) -> Result<()> {
        let sections: Vec<_> = self.section_ids().collect();
        for section in sections {
            self.create_header_and_footer_for_section(section, header_text, footer_text)?;
        }
        Ok(())
    }
}
