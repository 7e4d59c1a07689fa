//! Core building blocks shared by the detectors and the surfaces around them.
//!
//! - **Signatures** (`signature`): ordered magic-byte tables and the shared matcher
//! - **MIME lookups** (`mime`): MIME constants and MIME → extension resolution
//! - **Configuration** (`config`): size caps and default family, loaded from TOML/JSON
//! - **I/O** (`io`): capped file reading feeding [`crate::detect_bytes`]

pub mod config;
pub mod io;
pub mod mime;
pub mod signature;

pub use config::SniffConfig;
pub use io::{detect_file, read_file_capped};
pub use mime::{content_type_for_mime_type, extension_for_mime_type};
