//! Résumé text extraction.

use std::io::{Cursor, Read};

use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::errors::AppError;
use crate::resume::ResumeFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Body part of a Word document inside its zip container.
const DOCX_BODY: &str = "word/document.xml";

impl DocumentKind {
    /// Detects the format from the declared content type, then the file extension.
    pub fn detect(file: &ResumeFile) -> Option<Self> {
        let content_type = file.content_type.as_deref().unwrap_or_default();
        match content_type {
            "application/pdf" => return Some(DocumentKind::Pdf),
            DOCX_CONTENT_TYPE => return Some(DocumentKind::Docx),
            "text/plain" | "text/markdown" => return Some(DocumentKind::PlainText),
            _ => {}
        }
        match file.extension().as_deref() {
            Some("pdf") => Some(DocumentKind::Pdf),
            Some("docx") => Some(DocumentKind::Docx),
            Some("txt") | Some("md") => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Pulls plain text out of an uploaded résumé.
///
/// PDF and DOCX extraction are CPU-bound and run on the blocking pool.
pub async fn extract_text(file: &ResumeFile) -> Result<String, AppError> {
    let kind = DocumentKind::detect(file).ok_or_else(|| {
        AppError::ResumeParse(format!(
            "unsupported file type for '{}'; upload a PDF, DOCX or plain-text résumé",
            file.file_name
        ))
    })?;

    let text = match kind {
        DocumentKind::PlainText => String::from_utf8(file.bytes.to_vec())
            .map_err(|_| AppError::ResumeParse("text file is not valid UTF-8".to_string()))?,
        DocumentKind::Pdf => extract_pdf(file.bytes.clone()).await?,
        DocumentKind::Docx => extract_docx(file.bytes.clone()).await?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::ResumeParse(format!(
            "no readable text found in '{}'",
            file.file_name
        )));
    }
    debug!("Extracted {} chars from {}", text.len(), file.file_name);
    Ok(text)
}

async fn extract_pdf(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::ResumeParse(format!("could not read PDF: {e}")))
}

async fn extract_docx(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || read_docx(bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
}

fn unreadable_docx(e: impl std::fmt::Display) -> AppError {
    AppError::ResumeParse(format!("could not read DOCX: {e}"))
}

fn read_docx(bytes: Bytes) -> Result<String, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(unreadable_docx)?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(unreadable_docx)?
        .read_to_string(&mut xml)
        .map_err(unreadable_docx)?;

    document_text(&xml).map_err(unreadable_docx)
}

/// Text runs of a WordprocessingML body, one line per paragraph.
fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(text)
}
