//! Document classification for generic file attachments.
//!
//! [`classify_document`] is total: every input, including an empty buffer, a truncated
//! archive or invalid UTF-8, resolves to one of the twelve [`DocumentKind`] outcomes with
//! [`DocumentKind::Binary`] as the universal fallback.

use super::archive::classify_zip;
use super::text::{classify_text, is_likely_text};
use crate::core::signature::starts_with;
use crate::types::ContentType;
use serde::Serialize;

pub const PDF_MAGIC: &[u8] = b"%PDF";
pub const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// The closed vocabulary of document outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Xlsx,
    Pptx,
    Zip,
    Csv,
    Json,
    Html,
    Xml,
    Markdown,
    Text,
    Binary,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 12] = [
        DocumentKind::Pdf,
        DocumentKind::Docx,
        DocumentKind::Xlsx,
        DocumentKind::Pptx,
        DocumentKind::Zip,
        DocumentKind::Csv,
        DocumentKind::Json,
        DocumentKind::Html,
        DocumentKind::Xml,
        DocumentKind::Markdown,
        DocumentKind::Text,
        DocumentKind::Binary,
    ];

    pub const fn content_type(self) -> ContentType {
        match self {
            DocumentKind::Pdf => ContentType::new("application/pdf", "pdf"),
            DocumentKind::Docx => ContentType::new(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "docx",
            ),
            DocumentKind::Xlsx => {
                ContentType::new("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "xlsx")
            }
            DocumentKind::Pptx => ContentType::new(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation",
                "pptx",
            ),
            DocumentKind::Zip => ContentType::new("application/zip", "zip"),
            DocumentKind::Csv => ContentType::new("text/csv", "csv"),
            DocumentKind::Json => ContentType::new("application/json", "json"),
            DocumentKind::Html => ContentType::new("text/html", "html"),
            DocumentKind::Xml => ContentType::new("application/xml", "xml"),
            DocumentKind::Markdown => ContentType::new("text/markdown", "md"),
            DocumentKind::Text => ContentType::new("text/plain", "txt"),
            DocumentKind::Binary => ContentType::new("application/octet-stream", "bin"),
        }
    }

    pub const fn extension(self) -> &'static str {
        self.content_type().extension()
    }

    /// Case-insensitive reverse lookup from a MIME type.
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.content_type().mime_type().eq_ignore_ascii_case(mime_type))
    }
}

/// Classify a document buffer.
///
/// PDF and ZIP magic are checked before the text screen because their headers are not
/// valid text. A ZIP that cannot be read as an archive is binary, not `zip`.
pub fn detect_document_kind(content: &[u8]) -> DocumentKind {
    if content.is_empty() {
        return DocumentKind::Binary;
    }

    if starts_with(content, 0, PDF_MAGIC) {
        return DocumentKind::Pdf;
    }

    if starts_with(content, 0, ZIP_MAGIC) {
        return match classify_zip(content) {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!("ZIP signature present but archive unreadable: {}", e);
                DocumentKind::Binary
            }
        };
    }

    if is_likely_text(content) {
        return classify_text(content);
    }

    DocumentKind::Binary
}

/// Classify a document buffer into its [`ContentType`].
///
/// Never fails; unrecognized content is `application/octet-stream` / `bin`.
pub fn classify_document(content: &[u8]) -> ContentType {
    detect_document_kind(content).content_type()
}
