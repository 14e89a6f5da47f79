// Résumé PDF assembly.
// Pure: (validated résumé, summary, page config, timestamp) -> PDF bytes.
// Nothing touches the filesystem; CPU-bound, so callers run it inside spawn_blocking.

pub mod canvas;
pub mod encoding;
pub mod sections;

use std::io::Cursor;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use thiserror::Error;

use crate::layout::{PageConfig, PdfFont};
use crate::models::ResumeRequest;
use canvas::{LinkArea, PageDraft, PdfCanvas};
use encoding::encode_win_ansi;
use sections::{draw_resume, resume_sections, DOCUMENT_TITLE};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] std::io::Error),
}

/// A finished résumé document.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Bytes,
    pub page_count: usize,
}

/// Lays out and serializes the résumé. Streams are compressed before saving.
pub fn render_resume_pdf(
    resume: &ResumeRequest,
    summary: &str,
    config: &PageConfig,
    generated_at: DateTime<Utc>,
) -> Result<RenderedPdf, RenderError> {
    let mut doc = build_resume_document(resume, summary, config, generated_at)?;
    let page_count = doc.get_pages().len();

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output)?;

    Ok(RenderedPdf {
        bytes: Bytes::from(output.into_inner()),
        page_count,
    })
}

/// Builds the in-memory `lopdf::Document` without serializing it.
pub fn build_resume_document(
    resume: &ResumeRequest,
    summary: &str,
    config: &PageConfig,
    generated_at: DateTime<Utc>,
) -> Result<Document, RenderError> {
    let sections = resume_sections(resume, summary);

    let mut canvas = PdfCanvas::new(config);
    draw_resume(&mut canvas, config, &resume.name, &sections);

    let title = format!("{DOCUMENT_TITLE} - {}", resume.name);
    assemble_document(canvas.into_pages(), config, &title, generated_at)
}

fn assemble_document(
    pages: Vec<PageDraft>,
    config: &PageConfig,
    title: &str,
    generated_at: DateTime<Utc>,
) -> Result<Document, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for font in PdfFont::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => font.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(font.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = Content {
            operations: page.operations,
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        };

        if !page.links.is_empty() {
            let annots: Vec<Object> = page
                .links
                .iter()
                .map(|link| doc.add_object(link_annotation(link)).into())
                .collect();
            page_dict.set("Annots", annots);
        }

        kids.push(doc.add_object(page_dict).into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            config.page_width_pt.into(),
            config.page_height_pt.into(),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(DOCUMENT_TITLE),
        "CreationDate" => Object::string_literal(
            generated_at.format("D:%Y%m%d%H%M%SZ").to_string(),
        ),
    });

    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

fn link_annotation(link: &LinkArea) -> Dictionary {
    let [x1, y1, x2, y2] = link.rect;
    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => vec![x1.into(), y1.into(), x2.into(), y2.into()],
        "Border" => vec![0.into(), 0.into(), 0.into()],
        "A" => dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(link.uri.as_str()),
        },
    }
}
