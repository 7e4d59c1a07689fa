//! MIME type lookups across every detector family.
//!
//! The detectors produce [`ContentType`] values directly; this module answers the reverse
//! question for callers that only hold a MIME string, e.g. one received alongside an
//! upload, and need the canonical extension for it.

use crate::detection::{AudioVideoFormat, DocumentKind, ImageFormat};
use crate::types::ContentType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const ZIP_MIME_TYPE: &str = "application/zip";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const EXCEL_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const POWER_POINT_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const HTML_MIME_TYPE: &str = "text/html";
pub const XML_MIME_TYPE: &str = "application/xml";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const BINARY_MIME_TYPE: &str = "application/octet-stream";
pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Extension reported for anything unknown.
pub const BINARY_EXTENSION: &str = "bin";

/// Lower-cased MIME type to content type, over every type any detector can emit.
static MIME_TO_CONTENT_TYPE: Lazy<HashMap<&'static str, ContentType>> = Lazy::new(|| {
    let mut m = HashMap::new();

    for kind in DocumentKind::ALL {
        let content_type = kind.content_type();
        m.insert(content_type.mime_type(), content_type);
    }

    for format in ImageFormat::ALL {
        let content_type = format.content_type();
        m.insert(content_type.mime_type(), content_type);
    }

    for format in AudioVideoFormat::ALL {
        let content_type = format.content_type();
        m.insert(content_type.mime_type(), content_type);
    }

    m
});

/// Look up the content type for a MIME string, ignoring ASCII case and any parameters
/// such as `; charset=utf-8`.
pub fn content_type_for_mime_type(mime_type: &str) -> Option<ContentType> {
    let essence = mime_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    MIME_TO_CONTENT_TYPE.get(essence.as_str()).copied()
}

/// File extension (without dot) for a MIME string; `bin` when unknown.
pub fn extension_for_mime_type(mime_type: &str) -> &'static str {
    content_type_for_mime_type(mime_type).map_or(BINARY_EXTENSION, |content_type| content_type.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_constants_match_detector() {
        assert_eq!(DocumentKind::Pdf.content_type().mime_type(), PDF_MIME_TYPE);
        assert_eq!(DocumentKind::Zip.content_type().mime_type(), ZIP_MIME_TYPE);
        assert_eq!(DocumentKind::Docx.content_type().mime_type(), DOCX_MIME_TYPE);
        assert_eq!(DocumentKind::Xlsx.content_type().mime_type(), EXCEL_MIME_TYPE);
        assert_eq!(DocumentKind::Pptx.content_type().mime_type(), POWER_POINT_MIME_TYPE);
        assert_eq!(DocumentKind::Csv.content_type().mime_type(), CSV_MIME_TYPE);
        assert_eq!(DocumentKind::Json.content_type().mime_type(), JSON_MIME_TYPE);
        assert_eq!(DocumentKind::Html.content_type().mime_type(), HTML_MIME_TYPE);
        assert_eq!(DocumentKind::Xml.content_type().mime_type(), XML_MIME_TYPE);
        assert_eq!(DocumentKind::Markdown.content_type().mime_type(), MARKDOWN_MIME_TYPE);
        assert_eq!(DocumentKind::Text.content_type().mime_type(), PLAIN_TEXT_MIME_TYPE);
        assert_eq!(DocumentKind::Binary.content_type().mime_type(), BINARY_MIME_TYPE);
        assert_eq!(ImageFormat::Svg.content_type().mime_type(), SVG_MIME_TYPE);
    }

    #[test]
    fn test_extension_for_mime_type() {
        let test_cases = vec![
            ("application/pdf", "pdf"),
            (DOCX_MIME_TYPE, "docx"),
            ("text/markdown", "md"),
            ("TEXT/PLAIN", "txt"),
            ("text/csv; charset=utf-8", "csv"),
            ("image/svg+xml", "svg"),
            ("image/x-icon", "ico"),
            ("video/quicktime", "mov"),
            ("audio/mp4", "m4a"),
            ("application/octet-stream", "bin"),
        ];

        for (mime_type, expected) in test_cases {
            assert_eq!(extension_for_mime_type(mime_type), expected, "Failed for {}", mime_type);
        }
    }

    #[test]
    fn test_unknown_mime_type_is_bin() {
        assert_eq!(extension_for_mime_type("application/x-unknown"), "bin");
        assert_eq!(extension_for_mime_type(""), "bin");
        assert_eq!(content_type_for_mime_type("application/x-unknown"), None);
    }

    #[test]
    fn test_content_type_for_mime_type() {
        assert_eq!(
            content_type_for_mime_type(" Image/PNG "),
            Some(ImageFormat::Png.content_type())
        );
    }
}
