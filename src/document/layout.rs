//! Layout constants for paginated report documents
//!
//! All values are in PostScript points on an A4 portrait page. Vertical
//! offsets grow downward from the top edge; the PDF renderer converts to its
//! own coordinate system. Constants stay fixed for the life of a document.

/// Page width (A4 portrait)
pub const PAGE_WIDTH: f32 = 595.0;

/// Page height (A4 portrait)
pub const PAGE_HEIGHT: f32 = 842.0;

/// Top margin before the first block on a page
pub const MARGIN_TOP: f32 = 48.0;

/// Bottom margin; content never crosses into it
pub const MARGIN_BOTTOM: f32 = 48.0;

/// Left margin for text and tables
pub const MARGIN_LEFT: f32 = 56.0;

/// Right margin for text and tables
pub const MARGIN_RIGHT: f32 = 56.0;

/// Vertical space reserved for a section title line
pub const TITLE_HEIGHT: f32 = 24.0;

/// Vertical space for a table header row
pub const HEADER_ROW_HEIGHT: f32 = 18.0;

/// Vertical space for one table data row
pub const ROW_HEIGHT: f32 = 16.0;

/// Gap inserted between the end of one section and the next section's title
pub const SECTION_GAP: f32 = 20.0;

/// Extra leading added below a free-standing text line
pub const LINE_GAP: f32 = 8.0;

/// Footer baseline distance above the page bottom edge
pub const FOOTER_OFFSET: f32 = 24.0;

/// Font size for cover-page headline text
pub const COVER_SIZE: f32 = 24.0;

/// Font size for report and section titles
pub const TITLE_SIZE: f32 = 16.0;

/// Font size for subtitle / date lines
pub const SUBTITLE_SIZE: f32 = 12.0;

/// Font size for table cells
pub const BODY_SIZE: f32 = 10.0;

/// Font size for page footers
pub const FOOTER_SIZE: f32 = 8.0;

/// Lowest offset content may reach on a page
pub const fn printable_bottom() -> f32 {
    PAGE_HEIGHT - MARGIN_BOTTOM
}

/// Horizontal width available for tables
pub const fn printable_width() -> f32 {
    PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}
