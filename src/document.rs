//! Document façade – owns the section list and the table arena, and is the
//! receiver for every composition operation in the crate.
//!
//! Sections are addressed through explicit [`SectionId`] handles returned
//! from the creation calls; there is no hidden "current section" cursor, so
//! independent parts of a report can be composed in any order. A document
//! is single-writer mutable state: callers needing parallel generation
//! build independent documents and merge the rendered bytes afterwards
//! (see [`render_and_concatenate`]).
//!
//! [`render_and_concatenate`]: crate::render::render_and_concatenate

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Renderer;
use crate::style::Padding;
use crate::tree::{Cell, PageSetup, Row, Section, SectionId, Table, TableId};
use crate::tree::{CellId, RowId};

/// An in-memory report: an ordered list of sections plus the arena holding
/// every table, top level or nested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    sections: Vec<Section>,
    tables: Vec<Table>,
}

impl Document {
    /// A4 portrait document with the standard 2.54 cm margin and one
    /// initial portrait section.
    pub fn new() -> Self {
        Self::with_page(PageSetup::a4())
    }

    /// Document with caller-specified page metrics (points). The initial
    /// section is created immediately; a document never has zero sections.
    pub fn with_page(page: PageSetup) -> Self {
        Self {
            sections: vec![Section::new(page, false)],
            tables: Vec::new(),
        }
    }

    /// Convenience for custom page dimensions with a uniform margin.
    pub fn with_page_metrics(margin: f32, height: f32, width: f32) -> Self {
        Self::with_page(PageSetup {
            width,
            height,
            margin: Padding::all(margin),
        })
    }

    // -- sections ----------------------------------------------------------

    /// The section created with the document.
    pub fn first_section(&self) -> SectionId {
        SectionId(0)
    }

    /// Append a new portrait section, reusing the first section's page
    /// metrics.
    pub fn add_portrait_section(&mut self) -> SectionId {
        self.add_section(false)
    }

    /// Append a new landscape section.
    pub fn add_landscape_section(&mut self) -> SectionId {
        self.add_section(true)
    }

    fn add_section(&mut self, is_landscape: bool) -> SectionId {
        let page = self.sections[0].page;
        self.sections.push(Section::new(page, is_landscape));
        SectionId(self.sections.len() - 1)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// All section handles, in page order.
    pub fn section_ids(&self) -> impl Iterator<Item = SectionId> {
        (0..self.sections.len()).map(SectionId)
    }

    pub fn section(&self, id: SectionId) -> Result<&Section> {
        self.sections.get(id.0).ok_or(Error::UnknownSection(id.0))
    }

    pub(crate) fn section_mut(&mut self, id: SectionId) -> Result<&mut Section> {
        self.sections
            .get_mut(id.0)
            .ok_or(Error::UnknownSection(id.0))
    }

    // -- table arena -------------------------------------------------------

    pub fn table(&self, id: TableId) -> Result<&Table> {
        self.tables.get(id.0).ok_or(Error::UnknownTable(id.0))
    }

    pub(crate) fn table_mut(&mut self, id: TableId) -> Result<&mut Table> {
        self.tables.get_mut(id.0).ok_or(Error::UnknownTable(id.0))
    }

    /// Place a table into the arena, detached from any parent.
    pub(crate) fn alloc_table(&mut self, table: Table) -> TableId {
        self.tables.push(table);
        TableId(self.tables.len() - 1)
    }

    /// Place a table into the arena and attach it to a section's top level.
    pub(crate) fn attach_table(&mut self, section: SectionId, table: Table) -> Result<TableId> {
        self.section(section)?;
        let id = self.alloc_table(table);
        self.section_mut(section)?.tables.push(id);
        Ok(id)
    }

    // -- rows / cells ------------------------------------------------------

    pub fn row(&self, id: RowId) -> Result<&Row> {
        self.table(id.table)?
            .rows
            .get(id.index)
            .ok_or(Error::UnknownRow {
                table: id.table.0,
                row: id.index,
            })
    }

    pub(crate) fn row_mut(&mut self, id: RowId) -> Result<&mut Row> {
        self.table_mut(id.table)?
            .rows
            .get_mut(id.index)
            .ok_or(Error::UnknownRow {
                table: id.table.0,
                row: id.index,
            })
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        self.row(id.row)?.cells.get(id.index).ok_or(Error::UnknownCell {
            table: id.row.table.0,
            row: id.row.index,
            cell: id.index,
        })
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell> {
        self.row_mut(id.row)?
            .cells
            .get_mut(id.index)
            .ok_or(Error::UnknownCell {
                table: id.row.table.0,
                row: id.row.index,
                cell: id.index,
            })
    }

    /// Append an unstyled row to a table, inheriting the table's default
    /// text style.
    pub fn add_row(&mut self, table: TableId) -> Result<RowId> {
        let default_text = self.table(table)?.default_text.clone();
        let rows = &mut self.table_mut(table)?.rows;
        rows.push(Row::new(default_text));
        Ok(RowId {
            table,
            index: rows.len() - 1,
        })
    }

    /// Append a cell to a row and return its handle.
    pub(crate) fn push_cell(&mut self, row: RowId, cell: Cell) -> Result<CellId> {
        let cells = &mut self.row_mut(row)?.cells;
        cells.push(cell);
        Ok(CellId {
            row,
            index: cells.len() - 1,
        })
    }

    // -- output ------------------------------------------------------------

    /// Hand the finished tree to a render backend. The only potentially
    /// long-running call in the crate; treated as atomic.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) -> Result<Vec<u8>> {
        log::debug!(
            "rendering document: {} sections, {} tables",
            self.sections.len(),
            self.tables.len()
        );
        Ok(renderer.render(self)?)
    }

    /// Serialise the tree to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialise a tree from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Table;

    #[test]
    fn document_starts_with_one_section() {
        let doc = Document::new();
        assert_eq!(doc.section_count(), 1);
        assert!(doc.section(doc.first_section()).is_ok());
    }

    #[test]
    fn sections_keep_insertion_order() {
        let mut doc = Document::new();
        let a = doc.add_landscape_section();
        let b = doc.add_portrait_section();
        assert_eq!(doc.section_count(), 3);
        assert!(doc.section(a).unwrap().is_landscape);
        assert!(!doc.section(b).unwrap().is_landscape);
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let doc = Document::new();
        assert!(matches!(
            doc.section(SectionId(7)),
            Err(Error::UnknownSection(7))
        ));
        assert!(matches!(doc.table(TableId(0)), Err(Error::UnknownTable(0))));
    }

    #[test]
    fn rows_address_their_table() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc.attach_table(section, Table::new("100 200")).unwrap();
        let row = doc.add_row(table).unwrap();
        assert_eq!(row.table(), table);
        assert!(doc.row(row).is_ok());
    }

    #[test]
    fn json_roundtrip() {
        let mut doc = Document::new();
        let section = doc.first_section();
        doc.attach_table(section, Table::new("520")).unwrap();
        let json = doc.to_json().unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(doc, back);
    }
}
