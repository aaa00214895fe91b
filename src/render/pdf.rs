//! Portable-document export of a filled template body.
//! The object graph (catalog, pages, font, per-page content streams) is
//! managed by hand with pdf-writer.

use pdf_writer::{Content, Name, Pdf, Rect, Ref};

pub struct PdfDocument {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    title_font_size: f32,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        // Global font
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            line_h: 16.0,

            next_id,
            font_id,

            font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Open a new page and its content object
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
    }

    /// Lay the body text out over as many pages as needed. Long lines are
    /// wrapped to the printable width first.
    pub fn write_body(&mut self, title: &str, body: &str) {
        let wrap_cols = ((self.page_w - 2.0 * self.margin) / (self.font_size * 0.55)) as usize;

        let mut lines: Vec<String> = Vec::new();
        for raw in body.lines() {
            if raw.is_empty() {
                lines.push(String::new());
            } else {
                for piece in textwrap::wrap(raw, wrap_cols.max(20)) {
                    lines.push(piece.into_owned());
                }
            }
        }

        let mut remaining: &[String] = &lines;
        let mut first_page = true;

        while !remaining.is_empty() || first_page {
            let mut content = self.new_page();

            let mut y = self.page_h - self.margin;
            if first_page {
                self.draw_text(&mut content, self.margin, y, self.title_font_size, title);
                y -= 2.0 * self.line_h;
                first_page = false;
            }

            let mut consumed = 0;
            for line in remaining {
                if y - self.line_h < self.margin {
                    break;
                }
                self.draw_text(&mut content, self.margin, y, self.font_size, line);
                y -= self.line_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
        }
    }

    /// Build catalog and pages tree once, then hand back the final bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

/// Render a filled document body straight to PDF bytes.
pub fn render_pdf(title: &str, body: &str) -> Vec<u8> {
    let mut doc = PdfDocument::new();
    doc.write_body(title, body);
    doc.finish()
}
