//! Cursor-based page writer over printpdf: A4 pages, optional running
//! header/footer, automatic page breaks, bordered cells for tabular layouts.

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use super::ReportError;

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
pub(crate) const MARGIN_LEFT: f32 = 15.0;
pub(crate) const MARGIN_RIGHT: f32 = 15.0;
const MARGIN_TOP: f32 = 15.0;
const MARGIN_BOTTOM: f32 = 20.0;

const PT_TO_MM: f32 = 0.352_778;
// Mean advance width of the Helvetica faces, in em. Good enough for
// centering and right-alignment without shipping font metrics.
const MEAN_GLYPH_EM: f32 = 0.5;

pub(crate) fn text_width_mm(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * MEAN_GLYPH_EM * PT_TO_MM
}

#[derive(Clone, Copy)]
pub(crate) enum FontStyle {
    Regular,
    Bold,
    Italic,
}

#[derive(Clone, Copy)]
pub(crate) enum Align {
    Left,
    Center,
}

pub(crate) struct PageWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
    running_header: Option<String>,
    /// Distance of the next write from the top edge, in mm.
    cursor: f32,
    page_no: usize,
}

impl PageWriter {
    pub fn new(title: &str, running_header: Option<&str>) -> Result<Self, ReportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let italic = doc.add_builtin_font(BuiltinFont::HelveticaOblique)?;
        let layer = doc.get_page(page).get_layer(layer);

        let mut writer = Self {
            doc,
            layer,
            regular,
            bold,
            italic,
            running_header: running_header.map(str::to_string),
            cursor: MARGIN_TOP,
            page_no: 1,
        };
        writer.decorate_page();
        Ok(writer)
    }

    fn font(&self, style: FontStyle) -> &IndirectFontRef {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
            FontStyle::Italic => &self.italic,
        }
    }

    /// `top` is the baseline distance from the top edge.
    fn draw_text(&self, text: &str, style: FontStyle, size: f32, x: f32, top: f32) {
        self.layer
            .use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - top), self.font(style));
    }

    fn decorate_page(&mut self) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(0.4);

        if let Some(header) = self.running_header.clone() {
            self.text_centered(&header, FontStyle::Bold, 14.0);
            self.advance(15.0);

            let footer = format!("Page {}", self.page_no);
            let x = (PAGE_WIDTH - text_width_mm(&footer, 8.0)) / 2.0;
            self.draw_text(&footer, FontStyle::Italic, 8.0, x, PAGE_HEIGHT - 10.0);
        }
    }

    fn new_page(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.page_no += 1;
        self.cursor = MARGIN_TOP;
        self.decorate_page();
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor += height;
    }

    /// Breaks to a fresh page when fewer than `needed` mm remain.
    pub fn ensure_space(&mut self, needed: f32) {
        if self.cursor + needed > PAGE_HEIGHT - MARGIN_BOTTOM {
            self.new_page();
        }
    }

    pub fn text_at(&self, text: &str, style: FontStyle, size: f32, x: f32) {
        self.draw_text(text, style, size, x, self.cursor + size * PT_TO_MM);
    }

    pub fn text_centered(&self, text: &str, style: FontStyle, size: f32) {
        let x = ((PAGE_WIDTH - text_width_mm(text, size)) / 2.0).max(MARGIN_LEFT);
        self.text_at(text, style, size, x);
    }

    pub fn text_right(&self, text: &str, style: FontStyle, size: f32) {
        let x = (PAGE_WIDTH - MARGIN_RIGHT - text_width_mm(text, size)).max(MARGIN_LEFT);
        self.text_at(text, style, size, x);
    }

    fn stroke_rect(&self, x: f32, top: f32, width: f32, height: f32) {
        let y_top = PAGE_HEIGHT - top;
        let y_bottom = PAGE_HEIGHT - (top + height);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x), Mm(y_top)), false),
                (Point::new(Mm(x + width), Mm(y_top)), false),
                (Point::new(Mm(x + width), Mm(y_bottom)), false),
                (Point::new(Mm(x), Mm(y_bottom)), false),
            ],
            is_closed: true,
        });
    }

    fn hline(&self) {
        let y = PAGE_HEIGHT - self.cursor;
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(y)), false),
                (Point::new(Mm(PAGE_WIDTH - MARGIN_RIGHT), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    /// A bordered table cell at the current cursor row. Does not advance the
    /// cursor; rows advance once after their last cell.
    pub fn cell(
        &self,
        x: f32,
        width: f32,
        height: f32,
        text: &str,
        style: FontStyle,
        size: f32,
        align: Align,
    ) {
        self.stroke_rect(x, self.cursor, width, height);
        let tx = match align {
            Align::Left => x + 2.0,
            Align::Center => x + ((width - text_width_mm(text, size)) / 2.0).max(1.0),
        };
        let baseline = self.cursor + height / 2.0 + size * PT_TO_MM / 2.0;
        self.draw_text(text, style, size, tx, baseline);
    }

    pub fn section_title(&mut self, title: &str) {
        self.ensure_space(18.0);
        self.text_at(title, FontStyle::Bold, 12.0, MARGIN_LEFT);
        self.advance(7.0);
        self.hline();
        self.advance(3.0);
    }

    pub fn field_row(&mut self, label: &str, value: &str) {
        self.ensure_space(6.0);
        self.text_at(&format!("{label}:"), FontStyle::Bold, 10.0, MARGIN_LEFT);
        self.text_at(value, FontStyle::Regular, 10.0, MARGIN_LEFT + 50.0);
        self.advance(6.0);
    }

    pub fn body_line(&mut self, text: &str) {
        self.ensure_space(5.0);
        self.text_at(text, FontStyle::Regular, 9.0, MARGIN_LEFT);
        self.advance(5.0);
    }

    pub fn finish(self) -> Result<Vec<u8>, ReportError> {
        Ok(self.doc.save_to_bytes()?)
    }
}
