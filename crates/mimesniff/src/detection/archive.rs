//! ZIP container introspection.
//!
//! Office Open XML packages are ZIP archives; the part directory at the root tells the
//! formats apart. Only the central directory and local headers are read, never any
//! entry's compressed data, and nested archives are not opened.

use super::document::DocumentKind;
use std::io::Cursor;
use zip::ZipArchive;
use zip::result::ZipResult;

/// Entry-name prefixes identifying OOXML packages.
const OOXML_PART_PREFIXES: &[(&str, DocumentKind)] = &[
    ("word/", DocumentKind::Docx),
    ("xl/", DocumentKind::Xlsx),
    ("ppt/", DocumentKind::Pptx),
];

/// Classify a buffer that starts with the ZIP local file header signature.
///
/// Entries are visited in archive order and the first one under `word/`, `xl/` or `ppt/`
/// decides the result. A readable archive without such entries is [`DocumentKind::Zip`].
///
/// # Errors
///
/// Returns the underlying `ZipError` when the archive is truncated or corrupted.
pub fn classify_zip(content: &[u8]) -> ZipResult<DocumentKind> {
    let mut archive = ZipArchive::new(Cursor::new(content))?;

    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index)?;
        let name = entry.name();

        if let Some(&(_, kind)) = OOXML_PART_PREFIXES.iter().find(|(prefix, _)| name.starts_with(prefix)) {
            tracing::trace!("ZIP entry '{}' identifies {:?}", name, kind);
            return Ok(kind);
        }
    }

    Ok(DocumentKind::Zip)
}
