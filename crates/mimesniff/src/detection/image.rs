//! Image detection by magic bytes.
//!
//! Recognized: JPEG, PNG, GIF, BMP, WEBP, ICO, SVG, HEIC, HEIF, JXL and TIFF. Each result
//! carries the capability flags image sanitizers act on. Unrecognized content yields
//! `None`, which is not the same as binary.

use crate::core::signature::{Signature, first_match};
use crate::types::{ContentType, ImageType};
use memchr::memmem;
use serde::Serialize;

pub const RIFF_MAGIC: &[u8] = b"RIFF";
pub const FTYP_MAGIC: &[u8] = b"ftyp";

/// Shortest buffer the image detector looks at.
const MIN_IMAGE_LEN: usize = 4;

/// Number of leading bytes searched by the SVG fallback heuristic.
const SVG_SAMPLE_SIZE: usize = 1024;

const SVG_NAMESPACE: &[u8] = b"http://www.w3.org/2000/svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Webp,
    Ico,
    Svg,
    Heic,
    Heif,
    Jxl,
    Tiff,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 11] = [
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Gif,
        ImageFormat::Bmp,
        ImageFormat::Webp,
        ImageFormat::Ico,
        ImageFormat::Svg,
        ImageFormat::Heic,
        ImageFormat::Heif,
        ImageFormat::Jxl,
        ImageFormat::Tiff,
    ];

    pub const fn content_type(self) -> ContentType {
        match self {
            ImageFormat::Jpeg => ContentType::new("image/jpeg", "jpeg"),
            ImageFormat::Png => ContentType::new("image/png", "png"),
            ImageFormat::Gif => ContentType::new("image/gif", "gif"),
            ImageFormat::Bmp => ContentType::new("image/bmp", "bmp"),
            ImageFormat::Webp => ContentType::new("image/webp", "webp"),
            ImageFormat::Ico => ContentType::new("image/x-icon", "ico"),
            ImageFormat::Svg => ContentType::new("image/svg+xml", "svg"),
            ImageFormat::Heic => ContentType::new("image/heic", "heic"),
            ImageFormat::Heif => ContentType::new("image/heif", "heif"),
            ImageFormat::Jxl => ContentType::new("image/jxl", "jxl"),
            ImageFormat::Tiff => ContentType::new("image/tiff", "tiff"),
        }
    }

    /// The content type together with its capability flags.
    pub const fn image_type(self) -> ImageType {
        // (supported_as_attachment, supports_alpha_channel, needs_legacy_conversion)
        let (attachment, alpha, legacy) = match self {
            ImageFormat::Jpeg => (true, false, false),
            ImageFormat::Png => (true, true, false),
            ImageFormat::Gif => (true, true, true),
            ImageFormat::Bmp => (true, false, true),
            ImageFormat::Webp => (true, true, false),
            ImageFormat::Ico => (false, false, false),
            ImageFormat::Svg => (true, false, false),
            ImageFormat::Heic => (false, false, false),
            ImageFormat::Heif => (false, false, false),
            ImageFormat::Jxl => (false, true, false),
            ImageFormat::Tiff => (false, false, true),
        };

        ImageType::new(self.content_type(), attachment, alpha, legacy)
    }
}

/// Ordered image signatures. RIFF must carry the `WEBP` form type and ISO-BMFF `ftyp`
/// boxes are told apart by the brand at offset 8.
const IMAGE_SIGNATURES: &[Signature<ImageFormat>] = &[
    Signature::new(0, &[0xFF, 0xD8, 0xFF], ImageFormat::Jpeg),
    Signature::new(0, &[0x89, b'P', b'N', b'G'], ImageFormat::Png),
    Signature::new(0, b"GIF8", ImageFormat::Gif),
    Signature::new(0, b"BM", ImageFormat::Bmp),
    Signature::with_sub_magic(0, RIFF_MAGIC, 8, b"WEBP", ImageFormat::Webp),
    Signature::new(0, &[0x00, 0x00, 0x01, 0x00], ImageFormat::Ico),
    Signature::new(0, b"<svg", ImageFormat::Svg),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"heic", ImageFormat::Heic),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"mif1", ImageFormat::Heif),
    // bare codestream
    Signature::new(0, &[0xFF, 0x0A], ImageFormat::Jxl),
    Signature::new(0, b"JXL ", ImageFormat::Jxl),
    // ISO-BMFF container: 12-byte `JXL ` signature box
    Signature::new(0, &[0x00, 0x00, 0x00, 0x0C, b'J', b'X', b'L', b' '], ImageFormat::Jxl),
    Signature::new(0, &[b'I', b'I', b'*', 0x00], ImageFormat::Tiff),
    Signature::new(0, &[b'M', b'M', 0x00, b'*'], ImageFormat::Tiff),
];

/// Detect the image format of `content`.
pub fn detect_image_format(content: &[u8]) -> Option<ImageFormat> {
    if content.len() < MIN_IMAGE_LEN {
        return None;
    }

    first_match(IMAGE_SIGNATURES, content).or_else(|| is_likely_svg(content).then_some(ImageFormat::Svg))
}

/// Classify `content` as an image, or `None` when it is not one.
pub fn classify_image(content: &[u8]) -> Option<ImageType> {
    detect_image_format(content).map(ImageFormat::image_type)
}

/// An XML document whose head mentions an `<svg` element or the SVG namespace.
fn is_likely_svg(content: &[u8]) -> bool {
    let head = content[..content.len().min(SVG_SAMPLE_SIZE)].to_ascii_lowercase();
    head.starts_with(b"<?xml")
        && (memmem::find(&head, b"<svg").is_some() || memmem::find(&head, SVG_NAMESPACE).is_some())
}
