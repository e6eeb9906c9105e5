//! PDF page assembly primitives
//!
//! A thin builder over printpdf for the strictly sequential report layout:
//! draw onto the current A4 page, stamp the footer, turn the page. Pages are
//! materialized lazily so finishing the last page never leaves a blank
//! trailing page in the document.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};
use tracing::warn;

use crate::error::{ExpenseError, ExpenseResult};

/// A4 portrait dimensions
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// One PDF point in millimeters
const PT_TO_MM: f32 = 0.352_778;

/// Rough average glyph advance for Helvetica, as a fraction of the font size.
/// Good enough for centering headings and right-aligning the footer.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Sequential A4 document builder with numbered footers
pub struct DocumentBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    page_number: u32,
    page_pending: bool,
}

impl DocumentBuilder {
    /// Create a document with its first page ready for drawing
    pub fn new(title: &str) -> ExpenseResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExpenseError::Document(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExpenseError::Document(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            bold,
            page_number: 1,
            page_pending: false,
        })
    }

    /// Current page number, starting at 1
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Draw text at the given position (mm from the page's bottom-left)
    pub fn text(&mut self, text: &str, size: f32, x: f32, y: f32) {
        self.ensure_page();
        self.layer.use_text(text, size, Mm(x), Mm(y), &self.font);
    }

    /// Draw bold text
    pub fn text_bold(&mut self, text: &str, size: f32, x: f32, y: f32) {
        self.ensure_page();
        self.layer.use_text(text, size, Mm(x), Mm(y), &self.bold);
    }

    /// Draw text horizontally centered on the page
    pub fn text_centered(&mut self, text: &str, size: f32, y: f32, bold: bool) {
        let x = (PAGE_WIDTH_MM - approx_text_width_mm(text, size)).max(0.0) / 2.0;
        if bold {
            self.text_bold(text, size, x, y);
        } else {
            self.text(text, size, x, y);
        }
    }

    /// Draw a horizontal grid line
    pub fn hline(&mut self, x1: f32, x2: f32, y: f32) {
        self.line(x1, y, x2, y);
    }

    /// Draw a vertical grid line
    pub fn vline(&mut self, x: f32, y1: f32, y2: f32) {
        self.line(x, y1, x, y2);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ensure_page();
        self.layer.set_outline_color(grey());
        self.layer.set_outline_thickness(0.3);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y1)), false),
                (Point::new(Mm(x2), Mm(y2)), false),
            ],
            is_closed: false,
        });
    }

    /// Embed a PNG image with its top-left corner at `(x, y_top)`, scaled to
    /// `width x height` mm. Any failure to load or decode the image is
    /// swallowed with a warning; the page simply misses the picture.
    pub fn image(&mut self, path: &Path, x: f32, y_top: f32, width: f32, height: f32) {
        self.ensure_page();
        if let Err(e) = self.try_image(path, x, y_top, width, height) {
            warn!("skipping image {}: {}", path.display(), e);
        }
    }

    fn try_image(
        &mut self,
        path: &Path,
        x: f32,
        y_top: f32,
        width: f32,
        height: f32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = BufReader::new(File::open(path)?);
        let image = Image::try_from(PngDecoder::new(&mut reader)?)?;

        // Native size at the default 300 dpi, then scale to the target box.
        let dpi = 300.0;
        let native_w = image.image.width.0 as f32 * 25.4 / dpi;
        let native_h = image.image.height.0 as f32 * 25.4 / dpi;
        if native_w <= 0.0 || native_h <= 0.0 {
            return Err("image has no pixels".into());
        }

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(y_top - height)),
                scale_x: Some(width / native_w),
                scale_y: Some(height / native_h),
                dpi: Some(dpi),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Stamp the footer on the current page and schedule the next one.
    ///
    /// The next page is only created when something is drawn on it, so a
    /// trailing `finish_page` before `save` does not append a blank page.
    pub fn finish_page(&mut self) {
        self.ensure_page();
        let footer = format!("Page {}", self.page_number);
        let x = PAGE_WIDTH_MM - 14.0 - approx_text_width_mm(&footer, 9.0);
        self.layer.set_fill_color(grey());
        self.layer.use_text(footer, 9.0, Mm(x), Mm(10.0), &self.font);
        self.layer.set_fill_color(black());
        self.page_pending = true;
    }

    fn ensure_page(&mut self) {
        if self.page_pending {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.page_number += 1;
            self.page_pending = false;
        }
    }

    /// Write the document to disk
    pub fn save(self, path: &Path) -> ExpenseResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| ExpenseError::Document(e.to_string()))
    }
}

fn approx_text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM
}

fn grey() -> Color {
    Color::Rgb(Rgb::new(0.45, 0.45, 0.45, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_page_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.pdf");

        let mut builder = DocumentBuilder::new("test").unwrap();
        builder.text_centered("Hello", 24.0, 270.0, true);
        assert_eq!(builder.page_number(), 1);
        builder.finish_page();
        builder.save(&path).unwrap();

        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_page_numbers_increase_once_drawn_on() {
        let mut builder = DocumentBuilder::new("test").unwrap();
        builder.text("first", 11.0, 20.0, 270.0);
        builder.finish_page();
        // Page two only materializes when content lands on it.
        assert_eq!(builder.page_number(), 1);
        builder.text("second", 11.0, 20.0, 270.0);
        assert_eq!(builder.page_number(), 2);
    }

    #[test]
    fn test_missing_image_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.pdf");

        let mut builder = DocumentBuilder::new("test").unwrap();
        builder.image(Path::new("/nonexistent/logo.png"), 20.0, 270.0, 40.0, 40.0);
        builder.finish_page();
        builder.save(&path).unwrap();
        assert!(path.exists());
    }
}
