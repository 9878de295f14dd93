//! Document text extraction for uploaded contracts.
//!
//! Plain text and markdown pass through unchanged; PDFs are read page by page
//! with `pdf-extract`. PDF parsing is CPU-bound and runs inside
//! `tokio::task::spawn_blocking`.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not read document: {0}")]
    Unreadable(String),

    #[error("document contains no extractable text")]
    NoText,
}

/// Classifies an upload by declared MIME type or file name.
/// `None` means the file must be rejected before extraction.
pub fn classify(mime: Option<&str>, file_name: &str) -> Option<DocumentKind> {
    let mime = mime.map(|m| m.trim().to_ascii_lowercase());
    let name = file_name.to_ascii_lowercase();

    if mime.as_deref() == Some("application/pdf") || name.ends_with(".pdf") {
        Some(DocumentKind::Pdf)
    } else if matches!(mime.as_deref(), Some("text/plain" | "text/markdown"))
        || name.ends_with(".txt")
        || name.ends_with(".md")
    {
        Some(DocumentKind::PlainText)
    } else {
        None
    }
}

/// Synchronous extraction. Prefer [`extract_document`] from async code.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(data).into_owned()),
        DocumentKind::Pdf => {
            let pages = pdf_extract::extract_text_from_mem_by_pages(data)
                .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
            debug!("PDF extracted: {} pages", pages.len());
            if pages.iter().all(|p| p.trim().is_empty()) {
                // Image-only PDFs parse fine but carry no text layer.
                return Err(ExtractError::NoText);
            }
            Ok(join_pages(&pages))
        }
    }
}

/// Runs [`extract_text`] on the blocking pool. A panic inside the PDF
/// library is reported as an unreadable document.
pub async fn extract_document(kind: DocumentKind, data: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text(kind, &data))
        .await
        .map_err(|e| {
            warn!("Extraction task aborted: {e}");
            ExtractError::Unreadable("extraction aborted".to_string())
        })?
}

/// `--- Page N ---` marker before each page, pages separated by a blank line.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .enumerate()
        .map(|(i, text)| format!("--- Page {} ---\n{}\n\n", i + 1, text.trim_end()))
        .collect()
}
