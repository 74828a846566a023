//! PDF export: a note rendered as paginated plain text (title, metadata,
//! markup-stripped body). Export never touches in-memory or persisted state.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};

use crate::markup::strip_markup;
use crate::model::note::Note;
use crate::util::wrap::wrap_text;

// A4 geometry, millimetres
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LINE_STEP: f32 = 6.0;
const BODY_WRAP_COLS: usize = 90;

/// Error type for PDF export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("could not create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pdf rendering failed: {0}")]
    Render(#[from] printpdf::Error),
}

/// File name for a note's export: sanitized title + `.pdf`
pub fn export_file_name(note: &Note) -> String {
    format!("{}.pdf", sanitize_title(&note.title))
}

fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "note".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render `note` as a PDF at `path`
pub fn export_note(note: &Note, path: &Path) -> Result<(), ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        note.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Page 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT - MARGIN,
        pages: 1,
    };

    // Title + metadata header
    writer.line(&note.title, 18.0, &bold);
    writer.advance(2.0);
    let meta = format!(
        "Created {}  ·  Updated {}",
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M"),
    );
    writer.line(&meta, 9.0, &regular);
    writer.advance(4.0);

    // Body
    let body = strip_markup(&note.content);
    for line in wrap_text(&body, BODY_WRAP_COLS) {
        writer.line(&line, 11.0, &regular);
    }

    let file = File::create(path).map_err(|e| ExportError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;
    doc.save(&mut BufWriter::new(file))?;
    Ok(())
}

/// Cursor over the current page; adds pages as the body overflows
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: printpdf::PdfLayerReference,
    y: f32,
    pages: usize,
}

impl PageWriter<'_> {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        if self.y < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        if !text.is_empty() {
            self.layer
                .use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        }
        self.y -= LINE_STEP;
    }

    fn advance(&mut self, mm: f32) {
        self.y -= mm;
    }
}
