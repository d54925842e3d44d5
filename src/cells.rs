//! Cell composition – the transient intent descriptors ([`DisplayCell`],
//! [`HeaderCell`]) and the row/cell builders that consume them.
//!
//! Descriptors carry *intent* (this cell is a header, a total, a currency
//! amount); the builders translate intent into fully resolved style
//! attributes on the tree and then drop the descriptor. Nothing in the
//! finished tree refers back to a descriptor.
//!
//! When several flags are set on one descriptor they are applied in a fixed
//! order, so later flags win conflicting attributes. `is_header` is applied
//! second to last and therefore overrides color, font, and background from
//! any earlier flag.

use crate::defaults;
use crate::document::Document;
use crate::error::Result;
use crate::style::{
    resolve, resolve_text, Alignment, Border, BorderSide, Color, Padding, TextOverride, TextStyle,
    VerticalAlignment,
};
use crate::textarea::TextAreaInfo;
use crate::tree::{Cell, CellContent, CellId, RowId, Segment, TableId, TextRun};

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// One-shot description of a data cell. Flags may be freely combined; the
/// builder applies them in a fixed order (border, color, cell border,
/// centring, total, currency, background, header, empty).
#[derive(Debug, Clone, Default)]
pub struct DisplayCell {
    pub content: String,
    /// Declared span; zero means "use the default of 1".
    pub column_span: usize,
    pub row_span: usize,

    pub is_date: bool,
    pub is_header: bool,
    pub is_total: bool,
    pub is_currency: bool,
    pub is_empty: bool,
    pub need_cell_border: bool,
    pub is_centralized: bool,
    pub is_check_box: bool,
    pub is_checked: bool,

    /// Delegate the cell to the text-area builder instead of plain text.
    pub text_area: Option<TextAreaInfo>,
    /// Host a previously built (detached) table instead of text.
    pub table: Option<TableId>,

    pub color: Option<Color>,
    pub background: Option<Color>,
    pub border: BorderSide,
}

impl DisplayCell {
    pub fn text(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::default()
        }
    }

    pub fn header(content: &str) -> Self {
        Self {
            is_header: true,
            ..Self::text(content)
        }
    }

    /// A light-gray shaded placeholder.
    pub fn empty() -> Self {
        Self {
            is_empty: true,
            ..Self::default()
        }
    }

    pub fn check_box(is_checked: bool) -> Self {
        Self {
            is_check_box: true,
            is_checked,
            ..Self::default()
        }
    }
}

/// One-shot description of a header cell (blue background, white bold text).
#[derive(Debug, Clone, Default)]
pub struct HeaderCell {
    pub content: String,
    /// Override for the standard header background.
    pub background: Option<Color>,
    pub border: BorderSide,
    /// Zero means "use the default of 1".
    pub row_span: usize,
    pub is_no_border: bool,
    pub is_centralized: bool,
}

impl HeaderCell {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Self::default()
        }
    }
}

/// Row-level style inputs shared by every cell composed into the row.
/// All fields are optional overrides except the alignments.
#[derive(Debug, Clone)]
pub struct RowStyle {
    pub padding: Option<Padding>,
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font_name: Option<String>,
    pub font_size: Option<f32>,
    pub vertical_alignment: VerticalAlignment,
    pub alignment: Alignment,
    pub fixed_row_height: Option<f32>,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            padding: None,
            background: None,
            text_color: None,
            font_name: None,
            font_size: None,
            // Data rows sit their content on the baseline by default.
            vertical_alignment: VerticalAlignment::Bottom,
            alignment: Alignment::Left,
            fixed_row_height: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

impl Document {
    /// Append an unbreakable data row with the standard inner-table shading.
    pub fn create_inner_table_row(
        &mut self,
        table: TableId,
        parent_padding: Option<Padding>,
        vertical_alignment: VerticalAlignment,
        background: Option<Color>,
        with_border: bool,
    ) -> Result<RowId> {
        let id = self.add_row(table)?;
        let row = self.row_mut(id)?;
        row.default_cell_padding = Some(parent_padding.unwrap_or(defaults::INNER_PADDING));
        row.vertical_alignment = vertical_alignment;
        row.is_broken = false;
        row.background = Some(resolve(background, defaults::INNER_TABLE_COLOR));
        if with_border {
            row.default_cell_border = Some(Border::all());
        }
        Ok(id)
    }

    /// Populate a data row from display-cell descriptors. The row is marked
    /// unbreakable and restyled from `style` before any cell is added.
    pub fn create_inner_table_item_cells(
        &mut self,
        row: RowId,
        style: &RowStyle,
        cells: &[DisplayCell],
    ) -> Result<()> {
        {
            let target = self.row_mut(row)?;
            target.is_broken = false;
            target.background = Some(resolve(style.background, defaults::INNER_TABLE_COLOR));
            target.default_text.color = resolve(style.text_color, defaults::GREY_COLOR);
            target.default_text.font_name = style
                .font_name
                .clone()
                .unwrap_or_else(|| defaults::ARIAL_FONT.to_string());
            target.default_text.font_size = style.font_size.unwrap_or(defaults::BODY_FONT_SIZE);
            target.default_alignment = style.alignment;
            target.vertical_alignment = style.vertical_alignment;
            target.default_cell_padding = Some(style.padding.unwrap_or(defaults::INNER_PADDING));
            if let Some(height) = style.fixed_row_height {
                target.fixed_height = Some(height);
            }
        }

        for item in cells {
            let cell = self.add_item_cell(row, style, item)?;
            self.apply_display_flags(cell, item)?;
        }
        Ok(())
    }

    fn add_item_cell(
        &mut self,
        row: RowId,
        style: &RowStyle,
        item: &DisplayCell,
    ) -> Result<CellId> {
        if let Some(area) = &item.text_area {
            return self.create_text_area_cell_in_row(
                row,
                &item.content,
                area.padding,
                style.vertical_alignment,
                style.alignment,
                area.with_rounded_corners,
                area.with_border,
            );
        }

        let default_text = self.row(row)?.default_text.clone();
        let content = if let Some(table) = item.table {
            CellContent::Table(table)
        } else if item.is_check_box {
            if item.is_checked {
                CellContent::ListItem(crate::lists::check_box_item())
            } else {
                // The cross glyph sits outside WinAnsi, so it needs the
                // unicode font regardless of the row default.
                let mut style = default_text.clone();
                style.font_name = defaults::ARIAL_UNICODE_FONT.to_string();
                style.is_unicode = true;
                CellContent::Text(TextRun::new(defaults::CROSS_LABEL, style))
            }
        } else if item.content.is_empty() {
            CellContent::Empty
        } else {
            let mut style = default_text.clone();
            style.is_unicode = true;
            CellContent::Text(TextRun::new(&item.content, style))
        };

        self.push_cell(row, Cell::new(content, default_text))
    }

    /// Apply descriptor flags to one finished cell, in the fixed order.
    fn apply_display_flags(&mut self, id: CellId, item: &DisplayCell) -> Result<()> {
        let cell = self.cell_mut(id)?;
        if !item.border.is_none() {
            cell.border = Some(Border::new(item.border));
        }
        if let Some(color) = item.color {
            cell.text.color = color;
        }
        if item.need_cell_border {
            cell.border = Some(Border::all());
        }
        if item.is_date || item.is_centralized {
            cell.alignment = Some(Alignment::Center);
        }
        if item.is_total {
            cell.text.font_name = defaults::ARIAL_FONT.to_string();
            cell.text.is_bold = true;
        }
        if item.is_currency {
            cell.alignment = Some(Alignment::Right);
            cell.vertical_alignment = Some(VerticalAlignment::Center);
        }
        if let Some(background) = item.background {
            cell.background = Some(background);
        }
        if item.is_header {
            cell.background = Some(defaults::HEADER_BACKGROUND_COLOR);
            cell.text.color = Color::WHITE;
            cell.text.font_name = defaults::ARIAL_FONT.to_string();
            cell.text.font_size = defaults::HEADING_THREE_FONT_SIZE;
            cell.text.is_bold = true;
        }
        if item.is_empty {
            cell.background = Some(defaults::LIGHT_GRAY_COLOR);
        }

        cell.column_span = item.column_span.max(defaults::DEFAULT_COLUMN_SPAN);
        cell.row_span = item.row_span.max(defaults::DEFAULT_ROW_SPAN);
        Ok(())
    }

    /// Append one header-styled cell (blue background, white bold text) to a
    /// row. The row is marked unbreakable so a page break never separates a
    /// header from its first data row.
    pub fn create_inner_table_header_cell(
        &mut self,
        row: RowId,
        header: &HeaderCell,
    ) -> Result<CellId> {
        self.row_mut(row)?.is_broken = false;

        let mut style = TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE)
            .bold()
            .colored(Color::WHITE);
        style.is_unicode = true;

        let mut cell = Cell::new(
            CellContent::Text(TextRun::new(&header.content, style.clone())),
            style,
        );
        cell.padding = Some(defaults::INNER_PADDING);
        cell.background = Some(resolve(header.background, defaults::HEADER_BACKGROUND_COLOR));
        cell.is_no_border = header.is_no_border;
        if header.is_centralized {
            cell.alignment = Some(Alignment::Center);
        }
        if !header.border.is_none() {
            cell.border = Some(Border::new(header.border));
        }
        if header.row_span > 0 {
            cell.row_span = header.row_span;
        }
        self.push_cell(row, cell)
    }

    /// Append one header-styled cell per descriptor, left to right.
    pub fn create_inner_table_header_cells(
        &mut self,
        row: RowId,
        headers: &[HeaderCell],
    ) -> Result<()> {
        for header in headers {
            self.create_inner_table_header_cell(row, header)?;
        }
        Ok(())
    }

    /// Append a page-heading row to an outer table: a single spanning cell
    /// with large bold text in the header color.
    pub fn create_outer_table_row_heading(
        &mut self,
        table: TableId,
        title: &str,
        column_span: Option<usize>,
        padding: Option<Padding>,
        use_spacing: bool,
    ) -> Result<CellId> {
        let row = self.add_row(table)?;
        let mut style = TextStyle::new(defaults::ARIAL_FONT, defaults::HEADING_ONE_FONT_SIZE)
            .bold()
            .colored(defaults::HEADER_BACKGROUND_COLOR);
        if use_spacing {
            style.line_spacing = defaults::DEFAULT_LINE_SPACING;
        }

        let mut cell = Cell::new(
            CellContent::Text(TextRun::new(title, style.clone())),
            style,
        );
        cell.column_span = column_span.unwrap_or(defaults::DEFAULT_HEADER_COLUMN_SPAN);
        cell.padding = padding;
        self.push_cell(row, cell)
    }

    /// Append a bold grey label and its description to an outer-table row.
    #[allow(clippy::too_many_arguments)]
    pub fn create_outer_table_row_cells(
        &mut self,
        row: RowId,
        title: &str,
        description: &str,
        padding: Option<Padding>,
        description_alignment: Alignment,
        use_spacing: bool,
    ) -> Result<(CellId, CellId)> {
        let base = self.row(row)?.default_text.clone();
        let spacing = if use_spacing {
            defaults::DEFAULT_LINE_SPACING
        } else {
            base.line_spacing
        };

        let mut label_style = base.clone();
        label_style.color = defaults::GREY_COLOR;
        label_style.font_size = defaults::HEADING_TWO_FONT_SIZE;
        label_style.is_bold = true;
        label_style.line_spacing = spacing;
        let mut label = Cell::new(
            CellContent::Text(TextRun::new(title, label_style.clone())),
            label_style,
        );
        label.padding = padding;

        let mut description_style = base;
        description_style.font_name = defaults::ARIAL_FONT.to_string();
        description_style.font_size = defaults::HEADING_TWO_FONT_SIZE;
        description_style.color = defaults::GREY_COLOR;
        description_style.line_spacing = spacing;
        let mut body = Cell::new(
            CellContent::Text(TextRun::new(description, description_style.clone())),
            description_style,
        );
        body.alignment = Some(description_alignment);
        body.padding = padding;

        let label_id = self.push_cell(row, label)?;
        let body_id = self.push_cell(row, body)?;
        Ok((label_id, body_id))
    }

    /// Stack several description lines in one bordered, shaded cell by
    /// nesting a single-column table inside it.
    pub fn create_nested_inner_table_cell(
        &mut self,
        row: RowId,
        descriptions: &[&str],
        font_name: &str,
        font_size: f32,
        parent_padding: Option<Padding>,
    ) -> Result<CellId> {
        let text = resolve_text(
            &TextOverride::font(font_name, font_size),
            &TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE),
        );
        let mut table = crate::tree::Table::new("");
        table.default_text = text.clone();
        let id = self.alloc_table(table);
        for description in descriptions {
            let line = self.add_row(id)?;
            let style = text.clone();
            self.push_cell(
                line,
                Cell::new(CellContent::Text(TextRun::new(description, style.clone())), style),
            )?;
        }

        let default_text = self.row(row)?.default_text.clone();
        let mut host = Cell::new(CellContent::Table(id), default_text);
        host.border = Some(Border::all());
        host.padding = Some(parent_padding.unwrap_or(defaults::INNER_PADDING));
        host.background = Some(defaults::INNER_TABLE_COLOR);
        self.push_cell(row, host)
    }

    /// Build a bordered label/value pair as a nested table hosted in a
    /// span-two cell of `table`. Returns the nested table.
    pub fn create_inner_table_label_value_row(
        &mut self,
        table: TableId,
        column_widths: &str,
        label: RowLabel<'_>,
        description: &str,
        padding: Option<Padding>,
    ) -> Result<TableId> {
        let body = TextStyle::new(defaults::ARIAL_FONT, defaults::BODY_FONT_SIZE);
        let mut nested = crate::tree::Table::new(column_widths);
        nested.default_text = body.clone();
        nested.default_cell_border = Some(Border::all());
        nested.default_cell_padding = Some(defaults::INNER_PADDING);
        nested.background = Some(defaults::INNER_TABLE_COLOR);
        let nested_id = self.alloc_table(nested);

        let row = self.add_row(nested_id)?;
        match label {
            RowLabel::Emphasised {
                lead,
                underlined,
                trail,
            } => {
                let bold = body.clone().bold();
                let mut underline = bold.clone();
                underline.is_underline = true;
                let segments = vec![
                    Segment {
                        content: lead.to_string(),
                        style: bold.clone(),
                    },
                    Segment {
                        content: underlined.to_string(),
                        style: underline,
                    },
                    Segment {
                        content: trail.to_string(),
                        style: bold,
                    },
                ];
                self.push_cell(row, Cell::new(CellContent::Segments(segments), body.clone()))?;
            }
            RowLabel::Plain(text) => {
                let bold = body.clone().bold();
                self.push_cell(
                    row,
                    Cell::new(CellContent::Text(TextRun::new(text, bold.clone())), bold),
                )?;
            }
        }
        let mut value = Cell::new(
            CellContent::Text(TextRun::new(description, body.clone())),
            body,
        );
        value.vertical_alignment = Some(VerticalAlignment::Center);
        self.push_cell(row, value)?;

        let parent_row = self.add_row(table)?;
        let default_text = self.row(parent_row)?.default_text.clone();
        let mut host = Cell::new(CellContent::Table(nested_id), default_text);
        host.column_span = defaults::DEFAULT_NESTED_COLUMN_SPAN;
        host.padding = padding;
        self.push_cell(parent_row, host)?;
        Ok(nested_id)
    }

    /// Build a titled single-column data table from plain description lines:
    /// one header row plus one shaded row per description. With no
    /// descriptions the call is a silent no-op and nothing is created.
    #[allow(clippy::too_many_arguments)]
    pub fn create_simple_three_column_inner_table(
        &mut self,
        section: crate::tree::SectionId,
        descriptions: &[&str],
        column_widths: Option<&str>,
        title: &str,
        parent: Option<TableId>,
        parent_padding: Option<Padding>,
        opts: crate::table::TableOptions,
    ) -> Result<Option<TableId>> {
        if descriptions.is_empty() {
            log::debug!("no reference data supplied, skipping table '{title}'");
            return Ok(None);
        }

        let table = self.create_inner_table(
            section,
            column_widths.unwrap_or(defaults::COLUMN_SPAN_THREE_WIDTH),
            parent,
            BorderSide::All,
            "",
            0.0,
            Alignment::Left,
            None,
            opts,
        )?;

        let style = RowStyle {
            padding: parent_padding,
            ..RowStyle::default()
        };
        let header_row = self.create_inner_table_row(
            table,
            parent_padding,
            VerticalAlignment::Top,
            None,
            false,
        )?;
        self.create_inner_table_item_cells(header_row, &style, &[DisplayCell::header(title)])?;

        for description in descriptions {
            let row = self.add_row(table)?;
            self.create_inner_table_item_cells(row, &style, &[DisplayCell::text(description)])?;
        }
        Ok(Some(table))
    }
}

/// The label half of a label/value row.
#[derive(Debug, Clone, Copy)]
pub enum RowLabel<'a> {
    /// A single bold label.
    Plain(&'a str),
    /// Three bold runs flowing as one paragraph, the middle one underlined.
    Emphasised {
        lead: &'a str,
        underlined: &'a str,
        trail: &'a str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableOptions;

    fn doc_with_inner_table() -> (Document, TableId) {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
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
        (doc, table)
    }

    #[test]
    fn header_flag_overrides_background_and_color() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        let item = DisplayCell {
            color: Some(defaults::GREY_COLOR),
            background: Some(defaults::LIGHT_GRAY_COLOR),
            ..DisplayCell::header("Amount")
        };
        doc.create_inner_table_item_cells(row, &RowStyle::default(), &[item])
            .unwrap();
        let cell = &doc.table(table).unwrap().rows[0].cells[0];
        assert_eq!(cell.background, Some(defaults::HEADER_BACKGROUND_COLOR));
        assert_eq!(cell.text.color, Color::WHITE);
        assert_eq!(cell.text.font_size, defaults::HEADING_THREE_FONT_SIZE);
        assert!(cell.text.is_bold);
    }

    #[test]
    fn currency_cells_align_right_and_center() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        let item = DisplayCell {
            is_currency: true,
            ..DisplayCell::text("£1,250.00")
        };
        doc.create_inner_table_item_cells(row, &RowStyle::default(), &[item])
            .unwrap();
        let cell = &doc.table(table).unwrap().rows[0].cells[0];
        assert_eq!(cell.alignment, Some(Alignment::Right));
        assert_eq!(cell.vertical_alignment, Some(VerticalAlignment::Center));
    }

    #[test]
    fn declared_spans_never_fall_below_one() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        let wide = DisplayCell {
            column_span: 3,
            ..DisplayCell::text("spanning")
        };
        doc.create_inner_table_item_cells(
            row,
            &RowStyle::default(),
            &[wide, DisplayCell::empty()],
        )
        .unwrap();
        let cells = &doc.table(table).unwrap().rows[0].cells;
        assert_eq!(cells[0].column_span, 3);
        assert_eq!(cells[1].column_span, 1);
        assert_eq!(cells[1].row_span, 1);
        assert_eq!(cells[1].background, Some(defaults::LIGHT_GRAY_COLOR));
    }

    #[test]
    fn unchecked_box_renders_cross_in_unicode_font() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        doc.create_inner_table_item_cells(
            row,
            &RowStyle::default(),
            &[DisplayCell::check_box(false), DisplayCell::check_box(true)],
        )
        .unwrap();
        let cells = &doc.table(table).unwrap().rows[0].cells;
        match &cells[0].content {
            CellContent::Text(run) => {
                assert_eq!(run.content, defaults::CROSS_LABEL);
                assert_eq!(run.style.font_name, defaults::ARIAL_UNICODE_FONT);
                assert!(run.style.is_unicode);
            }
            other => panic!("expected text content, got {other:?}"),
        }
        assert!(matches!(cells[1].content, CellContent::ListItem(_)));
    }

    #[test]
    fn item_rows_are_unbreakable_and_shaded() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        doc.create_inner_table_item_cells(
            row,
            &RowStyle::default(),
            &[DisplayCell::text("value")],
        )
        .unwrap();
        let row = &doc.table(table).unwrap().rows[0];
        assert!(!row.is_broken);
        assert_eq!(row.background, Some(defaults::INNER_TABLE_COLOR));
        assert_eq!(row.default_text.color, defaults::GREY_COLOR);
        assert_eq!(row.vertical_alignment, VerticalAlignment::Bottom);
    }

    #[test]
    fn header_cell_preset() {
        let (mut doc, table) = doc_with_inner_table();
        let row = doc.add_row(table).unwrap();
        doc.create_inner_table_header_cells(
            row,
            &[
                HeaderCell::new("Name"),
                HeaderCell {
                    is_centralized: true,
                    row_span: 2,
                    ..HeaderCell::new("Qty")
                },
            ],
        )
        .unwrap();
        let row = &doc.table(table).unwrap().rows[0];
        assert!(!row.is_broken);
        let first = &row.cells[0];
        assert_eq!(first.background, Some(defaults::HEADER_BACKGROUND_COLOR));
        assert_eq!(first.text.color, Color::WHITE);
        assert!(first.text.is_bold);
        assert_eq!(row.cells[1].alignment, Some(Alignment::Center));
        assert_eq!(row.cells[1].row_span, 2);
    }

    #[test]
    fn outer_heading_spans_and_colors() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
            .create_outer_table(
                section,
                "140 310",
                defaults::ARIAL_FONT,
                defaults::HEADING_TWO_FONT_SIZE,
                None,
                TableOptions::default(),
                None,
            )
            .unwrap();
        doc.create_outer_table_row_heading(table, "Example Heading", None, None, false)
            .unwrap();
        let cell = &doc.table(table).unwrap().rows[0].cells[0];
        assert_eq!(cell.column_span, 2);
        assert_eq!(cell.text.font_size, defaults::HEADING_ONE_FONT_SIZE);
        assert_eq!(cell.text.color, defaults::HEADER_BACKGROUND_COLOR);
        assert!(cell.text.is_bold);
    }

    #[test]
    fn label_value_row_builds_segment_paragraph() {
        let (mut doc, table) = doc_with_inner_table();
        let nested = doc
            .create_inner_table_label_value_row(
                table,
                "150 300",
                RowLabel::Emphasised {
                    lead: "Signed by ",
                    underlined: "J. Smith",
                    trail: " on behalf of",
                },
                "Acme Ltd",
                None,
            )
            .unwrap();
        let row = &doc.table(nested).unwrap().rows[0];
        match &row.cells[0].content {
            CellContent::Segments(segments) => {
                assert_eq!(segments.len(), 3);
                assert!(segments.iter().all(|s| s.style.is_bold));
                assert!(segments[1].style.is_underline);
                assert!(!segments[0].style.is_underline);
            }
            other => panic!("expected segments, got {other:?}"),
        }
        assert_eq!(
            row.cells[1].vertical_alignment,
            Some(VerticalAlignment::Center)
        );
        // The nested table sits in a span-two cell of the parent.
        let host = doc.table(table).unwrap().rows.last().unwrap();
        assert_eq!(host.cells[0].column_span, 2);
    }

    #[test]
    fn reference_data_table_skips_when_empty() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let built = doc
            .create_simple_three_column_inner_table(
                section,
                &[],
                None,
                "Reference",
                None,
                None,
                TableOptions::default(),
            )
            .unwrap();
        assert!(built.is_none());
        assert!(doc.section(section).unwrap().tables.is_empty());
    }

    #[test]
    fn reference_data_table_builds_header_plus_rows() {
        let mut doc = Document::new();
        let section = doc.first_section();
        let table = doc
            .create_simple_three_column_inner_table(
                section,
                &["alpha", "beta"],
                None,
                "Reference",
                None,
                None,
                TableOptions::default(),
            )
            .unwrap()
            .unwrap();
        let rows = &doc.table(table).unwrap().rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].cells[0].background,
            Some(defaults::HEADER_BACKGROUND_COLOR)
        );
        match &rows[1].cells[0].content {
            CellContent::Text(run) => assert_eq!(run.content, "alpha"),
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
