//! Tabular document composer
//!
//! Builds a paginated document out of titled sections, each a header block
//! plus a data table. The [`Document`] is an explicit value threaded through
//! every composition call; it tracks a vertical cursor per page and inserts
//! page breaks when content would overflow, repeating the table header at the
//! top of each continuation page.
//!
//! Pagination policy:
//! - A section needs room for its title, the table header, and at least one
//!   data row before it starts; otherwise it opens a new page.
//! - A row that would cross the bottom margin closes the page; the table
//!   continues on a fresh page with its header repeated.
//! - A section placed on a page that already has content resumes at the
//!   previous content's end plus [`layout::SECTION_GAP`].
//! - Content that exactly reaches the bottom margin still fits; only strict
//!   overflow breaks the page.

pub mod layout;

use crate::error::{ReportError, ReportResult};
use crate::report::TableSection;

/// One placed element on a page
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A free-standing text line at a vertical offset
    Text {
        /// Line content
        text: String,
        /// Offset from the top edge, in points
        y: f32,
        /// Font size in points
        size: f32,
    },

    /// A table fragment: header row plus the data rows that fit on this page
    Table {
        /// Column headers, repeated on every fragment of a split table
        columns: Vec<String>,
        /// Data rows placed on this page
        rows: Vec<Vec<String>>,
        /// Offset of the header row from the top edge, in points
        y: f32,
    },
}

/// One page of placed blocks plus the vertical cursor
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    blocks: Vec<Block>,
    cursor: f32,
}

impl Page {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            cursor: layout::MARGIN_TOP,
        }
    }

    /// Blocks placed on this page, in placement order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Current vertical cursor (next free offset from the top edge)
    pub fn cursor(&self) -> f32 {
        self.cursor
    }
}

/// A paginated document under composition
///
/// Created without pages; [`Document::push_page`] opens the first page.
/// Exclusively owned by one export call and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    /// Create a document with no pages yet
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Pages composed so far
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages composed so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Open a new page and move the cursor to its top margin
    ///
    /// Used both to initialize the document and to force a page break before
    /// a section that must start on its own page.
    pub fn push_page(&mut self) {
        self.pages.push(Page::new());
    }

    /// Place a free-standing text line at the current cursor
    ///
    /// Breaks to a new page first if the line would cross the bottom margin.
    pub fn push_text(&mut self, text: impl Into<String>, size: f32) -> ReportResult<()> {
        if self.pages.is_empty() {
            return Err(ReportError::UninitializedDocument);
        }

        let height = size + layout::LINE_GAP;
        if self.current_cursor() + height > layout::printable_bottom() {
            self.push_page();
        }

        let page = self.pages.last_mut().expect("page exists");
        page.blocks.push(Block::Text {
            text: text.into(),
            y: page.cursor,
            size,
        });
        page.cursor += height;

        Ok(())
    }

    /// Append a titled section (title line + data table) to the document
    ///
    /// Resumes after the previous content with a fixed gap, or at the top of
    /// a fresh page when the title plus one row would not fit. Rows that
    /// overflow the page continue on the next page under a repeated header.
    pub fn compose_section(&mut self, section: &TableSection) -> ReportResult<()> {
        if section.columns.is_empty() {
            return Err(ReportError::invalid_section(format!(
                "section '{}' has no columns",
                section.title
            )));
        }
        if self.pages.is_empty() {
            return Err(ReportError::UninitializedDocument);
        }

        let limit = layout::printable_bottom();

        // Resume below existing content, with the inter-section gap
        {
            let page = self.pages.last_mut().expect("page exists");
            if !page.blocks.is_empty() {
                page.cursor += layout::SECTION_GAP;
            }
        }

        // The title never starts a page alone: title + header + one row must fit
        let intro = layout::TITLE_HEIGHT + layout::HEADER_ROW_HEIGHT + layout::ROW_HEIGHT;
        if self.current_cursor() + intro > limit {
            self.push_page();
        }

        let page = self.pages.last_mut().expect("page exists");
        page.blocks.push(Block::Text {
            text: section.title.clone(),
            y: page.cursor,
            size: layout::TITLE_SIZE,
        });
        page.cursor += layout::TITLE_HEIGHT;

        self.start_table_fragment(&section.columns);

        for row in &section.rows {
            if self.current_cursor() + layout::ROW_HEIGHT > limit {
                self.push_page();
                self.start_table_fragment(&section.columns);
            }

            let page = self.pages.last_mut().expect("page exists");
            match page.blocks.last_mut() {
                Some(Block::Table { rows, .. }) => rows.push(row.clone()),
                _ => unreachable!("table fragment was just started"),
            }
            page.cursor += layout::ROW_HEIGHT;
        }

        Ok(())
    }

    /// Stamp a footer line onto every page at the fixed bottom offset
    ///
    /// `make` receives the 1-based page index and the total page count. Runs
    /// as a distinct final pass because the total is only known once
    /// composition is complete.
    pub fn stamp_footers(&mut self, make: impl Fn(usize, usize) -> String) {
        let total = self.pages.len();
        for (i, page) in self.pages.iter_mut().enumerate() {
            page.blocks.push(Block::Text {
                text: make(i + 1, total),
                y: layout::PAGE_HEIGHT - layout::FOOTER_OFFSET,
                size: layout::FOOTER_SIZE,
            });
        }
    }

    fn current_cursor(&self) -> f32 {
        self.pages.last().map(|p| p.cursor).unwrap_or(0.0)
    }

    /// Place a new (possibly repeated) table header at the current cursor
    fn start_table_fragment(&mut self, columns: &[String]) {
        let page = self.pages.last_mut().expect("page exists");
        page.blocks.push(Block::Table {
            columns: columns.to_vec(),
            rows: Vec::new(),
            y: page.cursor,
        });
        page.cursor += layout::HEADER_ROW_HEIGHT;
    }
}
