//! Result types shared by every detector family.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// A detected content type: canonical MIME value plus file extension.
///
/// Two classifications of the same format compare equal; the type carries no
/// identity beyond its field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ContentType {
    mime_type: &'static str,
    extension: &'static str,
}

impl ContentType {
    pub const fn new(mime_type: &'static str, extension: &'static str) -> Self {
        Self { mime_type, extension }
    }

    /// The MIME type string, e.g. `application/pdf`.
    pub const fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    /// The file extension without a leading dot, e.g. `pdf`.
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Encode `content` as standard Base64.
    pub fn to_base64(&self, content: &[u8]) -> String {
        STANDARD.encode(content)
    }

    /// Encode `content` as a `data:<mime-type>;base64,<data>` URI labelled with this type.
    pub fn to_data_uri(&self, content: &[u8]) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64(content))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime_type)
    }
}

/// An image content type annotated with the capabilities image sanitizers act on.
///
/// The flags are metadata only; nothing in this crate converts or re-encodes images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageType {
    #[serde(flatten)]
    content_type: ContentType,
    /// Usable as an attachment without prior conversion.
    pub supported_as_attachment: bool,
    /// The format can carry an alpha channel that may need flattening.
    pub supports_alpha_channel: bool,
    /// The format should be re-encoded (as PNG) before use.
    pub needs_legacy_conversion: bool,
}

impl ImageType {
    pub const fn new(
        content_type: ContentType,
        supported_as_attachment: bool,
        supports_alpha_channel: bool,
        needs_legacy_conversion: bool,
    ) -> Self {
        Self {
            content_type,
            supported_as_attachment,
            supports_alpha_channel,
            needs_legacy_conversion,
        }
    }

    pub const fn content_type(&self) -> ContentType {
        self.content_type
    }
}

impl Deref for ImageType {
    type Target = ContentType;

    fn deref(&self) -> &ContentType {
        &self.content_type
    }
}

impl From<ImageType> for ContentType {
    fn from(image: ImageType) -> Self {
        image.content_type
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.content_type, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: ContentType = ContentType::new("image/png", "png");

    #[test]
    fn test_value_equality() {
        assert_eq!(PNG, ContentType::new("image/png", "png"));
        assert_ne!(PNG, ContentType::new("image/png", "apng"));
    }

    #[test]
    fn test_to_base64() {
        assert_eq!(PNG.to_base64(b"hello"), "aGVsbG8=");
        assert_eq!(PNG.to_base64(b""), "");
    }

    #[test]
    fn test_to_data_uri() {
        let pdf = ContentType::new("application/pdf", "pdf");
        assert_eq!(pdf.to_data_uri(b"%PDF"), "data:application/pdf;base64,JVBERg==");
    }

    #[test]
    fn test_display_is_mime_type() {
        assert_eq!(PNG.to_string(), "image/png");
    }

    #[test]
    fn test_image_type_derefs_to_content_type() {
        let image = ImageType::new(PNG, true, true, false);
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!(image.extension(), "png");
        assert_eq!(ContentType::from(image), PNG);
        assert_eq!(image.to_string(), "image/png");
    }

    #[test]
    fn test_image_type_serializes_flat() {
        let image = ImageType::new(PNG, true, true, false);
        let json = serde_json::to_value(image).unwrap();
        assert_eq!(json["mime_type"], "image/png");
        assert_eq!(json["extension"], "png");
        assert_eq!(json["supports_alpha_channel"], true);
        assert_eq!(json["needs_legacy_conversion"], false);
    }
}
