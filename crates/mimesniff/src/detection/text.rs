//! Text screening and heuristic text classification.
//!
//! [`is_likely_text`] decides whether a buffer is text at all; [`classify_text`] then runs
//! the structural cascade JSON → XML/HTML → CSV → Markdown → plain text. The checks look at
//! shape only. Nothing here validates JSON or XML against a grammar.

use super::document::DocumentKind;
use memchr::{memchr_iter, memmem};

#[cfg(feature = "simd-utf8")]
use simdutf8::compat::from_utf8;
#[cfg(not(feature = "simd-utf8"))]
use std::str::from_utf8;

/// Number of leading bytes decoded by the text screener.
pub const TEXT_SAMPLE_SIZE: usize = 1024;

/// Number of leading characters searched for HTML markers.
const HTML_SAMPLE_CHARS: usize = 1024;

/// Maximum number of lines sampled by the CSV check.
const CSV_SAMPLE_LINES: usize = 10;

const HTML_MARKERS: &[&str] = &["<!doctype html", "<html", "<head", "<body"];

/// Check whether `content` is probably text.
///
/// Strictly decodes at most the first [`TEXT_SAMPLE_SIZE`] bytes as UTF-8. Malformed
/// sequences (overlong encodings, stray continuation bytes, surrogates, a multi-byte
/// sequence cut by the sample boundary) reject the buffer, as does any control character
/// other than whitespace.
pub fn is_likely_text(content: &[u8]) -> bool {
    let sample = &content[..content.len().min(TEXT_SAMPLE_SIZE)];

    let Ok(text) = from_utf8(sample) else {
        return false;
    };

    !text.chars().any(|c| c.is_control() && !is_whitespace_control(c))
}

/// Control characters that still count as whitespace: TAB, LF, VT, FF, CR and the
/// information separators U+001C..U+001F.
fn is_whitespace_control(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}')
}

/// Whitespace trimmed before classification: the whitespace controls plus Unicode
/// space, line and paragraph separators, excluding the no-break spaces and NEL.
fn is_trimmable_whitespace(c: char) -> bool {
    is_whitespace_control(c) || (c.is_whitespace() && !matches!(c, '\u{85}' | '\u{A0}' | '\u{2007}' | '\u{202F}'))
}

/// Classify a buffer that already passed [`is_likely_text`].
pub fn classify_text(content: &[u8]) -> DocumentKind {
    let decoded = String::from_utf8_lossy(content);
    let text = decoded.trim_matches(is_trimmable_whitespace);

    if looks_like_json(text) {
        return DocumentKind::Json;
    }

    if looks_like_xml(text) {
        if looks_like_html(text) {
            return DocumentKind::Html;
        }

        return DocumentKind::Xml;
    }

    if looks_like_csv(text) {
        return DocumentKind::Csv;
    }

    if looks_like_markdown(text) {
        return DocumentKind::Markdown;
    }

    DocumentKind::Text
}

fn looks_like_json(text: &str) -> bool {
    (text.starts_with('{') && text.ends_with('}')) || (text.starts_with('[') && text.ends_with(']'))
}

fn looks_like_xml(text: &str) -> bool {
    text.starts_with('<') && text.ends_with('>')
}

fn looks_like_html(xml: &str) -> bool {
    let head: String = xml.chars().take(HTML_SAMPLE_CHARS).collect::<String>().to_lowercase();
    HTML_MARKERS.iter().any(|marker| head.contains(marker))
}

/// Consistent comma or semicolon separated values across the sampled lines.
fn looks_like_csv(text: &str) -> bool {
    let lines: Vec<&str> = text.split('\n').take(CSV_SAMPLE_LINES).collect();

    if lines.len() < 2 {
        return false;
    }

    let delimiter = if lines[0].contains(';') { b';' } else { b',' };
    let expected = count_byte(lines[0], delimiter);

    if expected == 0 {
        return false;
    }

    let consistent = lines
        .iter()
        .filter(|line| !line.trim().is_empty() && count_byte(line, delimiter) == expected)
        .count();

    consistent >= lines.len().min(3)
}

fn count_byte(line: &str, byte: u8) -> usize {
    memchr_iter(byte, line.as_bytes()).count()
}

/// ATX headings, inline links or fenced code blocks.
fn looks_like_markdown(text: &str) -> bool {
    let bytes = text.as_bytes();
    has_atx_heading(text) || memmem::find(bytes, b"](").is_some() || memmem::find(bytes, b"```").is_some()
}

/// A line opening with one to six `#` followed by a space.
fn has_atx_heading(text: &str) -> bool {
    text.lines().any(|line| {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        (1..=6).contains(&level) && line.as_bytes().get(level) == Some(&b' ')
    })
}
