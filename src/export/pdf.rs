//! PDF rendering backend
//!
//! Draws a composed [`Document`] onto printpdf pages. The composer works in
//! points with offsets growing downward from the top edge; printpdf wants
//! millimeters from the bottom-left corner, so offsets are converted here.
//! Tables render as text at fixed per-column offsets, headers in bold.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::document::{layout, Block, Document};
use crate::error::{ReportError, ReportResult};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Render a composed document to PDF bytes
///
/// The document title goes into the PDF metadata, not onto a page. Any
/// printpdf failure surfaces as a serialization error.
pub fn render_pdf(document: &Document, title: &str) -> ReportResult<Vec<u8>> {
    let (pdf, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(layout::PAGE_WIDTH * MM_PER_PT),
        Mm(layout::PAGE_HEIGHT * MM_PER_PT),
        "content",
    );

    let body_font = builtin(&pdf, BuiltinFont::Helvetica)?;
    let bold_font = builtin(&pdf, BuiltinFont::HelveticaBold)?;

    for (i, page) in document.pages().iter().enumerate() {
        let layer = if i == 0 {
            pdf.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) = pdf.add_page(
                Mm(layout::PAGE_WIDTH * MM_PER_PT),
                Mm(layout::PAGE_HEIGHT * MM_PER_PT),
                "content",
            );
            pdf.get_page(page_idx).get_layer(layer_idx)
        };

        for block in page.blocks() {
            match block {
                Block::Text { text, y, size } => {
                    draw_text(&layer, text, *size, layout::MARGIN_LEFT, *y, &body_font);
                }
                Block::Table { columns, rows, y } => {
                    draw_table(&layer, columns, rows, *y, &body_font, &bold_font);
                }
            }
        }
    }

    pdf.save_to_bytes()
        .map_err(|e| ReportError::Serialization(e.to_string()))
}

fn builtin(
    pdf: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> ReportResult<IndirectFontRef> {
    pdf.add_builtin_font(font)
        .map_err(|e| ReportError::Serialization(e.to_string()))
}

/// Place a text line; `x`/`y_offset` are composer coordinates in points
fn draw_text(
    layer: &PdfLayerReference,
    text: &str,
    size: f32,
    x: f32,
    y_offset: f32,
    font: &IndirectFontRef,
) {
    // Baseline sits one font-size below the block's top offset
    let baseline = layout::PAGE_HEIGHT - y_offset - size;
    layer.use_text(text, size, Mm(x * MM_PER_PT), Mm(baseline * MM_PER_PT), font);
}

fn draw_table(
    layer: &PdfLayerReference,
    columns: &[String],
    rows: &[Vec<String>],
    y: f32,
    body: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    let column_width = layout::printable_width() / columns.len() as f32;
    let column_x = |i: usize| layout::MARGIN_LEFT + i as f32 * column_width;

    for (i, header) in columns.iter().enumerate() {
        draw_text(layer, header, layout::BODY_SIZE, column_x(i), y, bold);
    }

    for (r, row) in rows.iter().enumerate() {
        let row_y = y + layout::HEADER_ROW_HEIGHT + r as f32 * layout::ROW_HEIGHT;
        for (i, cell) in row.iter().enumerate().take(columns.len()) {
            draw_text(layer, cell, layout::BODY_SIZE, column_x(i), row_y, body);
        }
    }
}
