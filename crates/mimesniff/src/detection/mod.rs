//! Content detectors.
//!
//! Three independent detector families, each a pure function over a resident buffer:
//!
//! - **Documents** ([`classify_document`]): PDF, OOXML/ZIP and text heuristics; total,
//!   falling back to `application/octet-stream`
//! - **Images** ([`classify_image`]): magic bytes plus an SVG heuristic; `None` when the
//!   buffer is not an image
//! - **Audio/video** ([`classify_audio_video`]): container magic bytes including RIFF and
//!   ISO-BMFF brands; `None` when unrecognized
//!
//! [`detect_bytes`] picks a family explicitly or tries them all in turn.

pub mod archive;
pub mod audio_video;
pub mod document;
pub mod image;
pub mod text;

pub use audio_video::{AudioVideoFormat, classify_audio_video, detect_audio_video_format};
pub use document::{DocumentKind, classify_document, detect_document_kind};
pub use image::{ImageFormat, classify_image, detect_image_format};

use crate::SniffError;
use crate::types::{ContentType, ImageType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which detector family to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    Document,
    Image,
    AudioVideo,
    /// Image, then audio/video, then document.
    #[default]
    Auto,
}

impl Family {
    pub const fn as_str(self) -> &'static str {
        match self {
            Family::Document => "document",
            Family::Image => "image",
            Family::AudioVideo => "audio-video",
            Family::Auto => "auto",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = SniffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "document" | "doc" => Ok(Family::Document),
            "image" => Ok(Family::Image),
            "audio-video" | "audio_video" | "av" => Ok(Family::AudioVideo),
            "auto" => Ok(Family::Auto),
            other => Err(SniffError::UnsupportedFormat(format!("Unknown detector family: {}", other))),
        }
    }
}

/// Outcome of [`detect_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "family", rename_all = "kebab-case")]
pub enum Detection {
    Document(ContentType),
    Image(ImageType),
    AudioVideo(ContentType),
    /// The requested image or audio/video detector did not recognize the content.
    Unrecognized,
}

impl Detection {
    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            Detection::Document(content_type) | Detection::AudioVideo(content_type) => Some(*content_type),
            Detection::Image(image) => Some(image.content_type()),
            Detection::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Detection::Unrecognized)
    }
}

/// Run the detector(s) for `family` over `content`.
///
/// With [`Family::Auto`] the document detector is always the last resort, so the result is
/// never [`Detection::Unrecognized`].
pub fn detect_bytes(content: &[u8], family: Family) -> Detection {
    let detection = match family {
        Family::Document => Detection::Document(classify_document(content)),
        Family::Image => classify_image(content).map_or(Detection::Unrecognized, Detection::Image),
        Family::AudioVideo => classify_audio_video(content).map_or(Detection::Unrecognized, Detection::AudioVideo),
        Family::Auto => detect_auto(content),
    };

    tracing::trace!(family = %family, len = content.len(), ?detection, "classified buffer");
    detection
}

/// Text that passes the screen is a document unless it is SVG; short magic such as `BM`
/// or `ID3` would otherwise claim ordinary prose. Everything else tries image, then
/// audio/video, then document.
fn detect_auto(content: &[u8]) -> Detection {
    if text::is_likely_text(content) {
        return match detect_image_format(content) {
            Some(ImageFormat::Svg) => Detection::Image(ImageFormat::Svg.image_type()),
            _ => Detection::Document(classify_document(content)),
        };
    }

    classify_image(content)
        .map(Detection::Image)
        .or_else(|| classify_audio_video(content).map(Detection::AudioVideo))
        .unwrap_or_else(|| Detection::Document(classify_document(content)))
}
