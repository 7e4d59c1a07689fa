//! mimesniff - content sniffing for raw byte buffers
//!
//! Given a fully buffered byte sequence with no filename and no declared content type,
//! mimesniff determines the most likely content type and a canonical file extension.
//!
//! # Quick Start
//!
//! ```rust
//! use mimesniff::{classify_audio_video, classify_document, classify_image};
//!
//! let document = classify_document(b"name,age\nJohn,30\nJane,25");
//! assert_eq!(document.extension(), "csv");
//!
//! let image = classify_image(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
//! assert_eq!(image.mime_type(), "image/png");
//! assert!(image.supports_alpha_channel);
//!
//! assert!(classify_audio_video(b"plain text").is_none());
//! ```
//!
//! # Architecture
//!
//! - **Detectors** (`detection`): one pure function per family (documents, images,
//!   audio/video), plus [`detect_bytes`] to pick a family at runtime
//! - **Core** (`core`): signature tables, MIME lookups, configuration and capped file reading
//!
//! Every detector is a pure function of the buffer: no I/O, no shared state, safe to call
//! from any number of threads.

#![deny(unsafe_code)]

pub mod core;
pub mod detection;
pub mod error;
pub mod types;

pub use error::{Result, SniffError};
pub use types::{ContentType, ImageType};

pub use detection::{
    AudioVideoFormat, Detection, DocumentKind, Family, ImageFormat, classify_audio_video, classify_document,
    classify_image, detect_bytes,
};

pub use core::config::SniffConfig;
pub use core::mime::{
    BINARY_MIME_TYPE, DOCX_MIME_TYPE, EXCEL_MIME_TYPE, HTML_MIME_TYPE, JSON_MIME_TYPE, MARKDOWN_MIME_TYPE,
    PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE, POWER_POINT_MIME_TYPE, XML_MIME_TYPE, content_type_for_mime_type,
    extension_for_mime_type,
};
