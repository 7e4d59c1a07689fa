//! Audio and video container detection by magic bytes.

use super::image::{FTYP_MAGIC, RIFF_MAGIC};
use crate::core::signature::{Signature, first_match, starts_with};
use crate::types::ContentType;
use memchr::memmem;
use serde::Serialize;

pub const EBML_MAGIC: &[u8] = &[0x1A, 0x45, 0xDF, 0xA3];

/// EBML `DocType` element id.
const EBML_DOCTYPE_ID: &[u8] = &[0x42, 0x82];

/// Number of leading bytes searched for the EBML `DocType`.
const EBML_HEADER_SCAN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioVideoFormat {
    Mp3,
    Wav,
    Flac,
    Ogg,
    M4a,
    Mp4,
    Mov,
    Mkv,
    Webm,
    Avi,
}

impl AudioVideoFormat {
    pub const ALL: [AudioVideoFormat; 10] = [
        AudioVideoFormat::Mp3,
        AudioVideoFormat::Wav,
        AudioVideoFormat::Flac,
        AudioVideoFormat::Ogg,
        AudioVideoFormat::M4a,
        AudioVideoFormat::Mp4,
        AudioVideoFormat::Mov,
        AudioVideoFormat::Mkv,
        AudioVideoFormat::Webm,
        AudioVideoFormat::Avi,
    ];

    pub const fn content_type(self) -> ContentType {
        match self {
            AudioVideoFormat::Mp3 => ContentType::new("audio/mpeg", "mp3"),
            AudioVideoFormat::Wav => ContentType::new("audio/wav", "wav"),
            AudioVideoFormat::Flac => ContentType::new("audio/flac", "flac"),
            AudioVideoFormat::Ogg => ContentType::new("audio/ogg", "ogg"),
            AudioVideoFormat::M4a => ContentType::new("audio/mp4", "m4a"),
            AudioVideoFormat::Mp4 => ContentType::new("video/mp4", "mp4"),
            AudioVideoFormat::Mov => ContentType::new("video/quicktime", "mov"),
            AudioVideoFormat::Mkv => ContentType::new("video/x-matroska", "mkv"),
            AudioVideoFormat::Webm => ContentType::new("video/webm", "webm"),
            AudioVideoFormat::Avi => ContentType::new("video/x-msvideo", "avi"),
        }
    }
}

const AUDIO_VIDEO_SIGNATURES: &[Signature<AudioVideoFormat>] = &[
    Signature::new(0, b"ID3", AudioVideoFormat::Mp3),
    Signature::new(0, b"fLaC", AudioVideoFormat::Flac),
    Signature::new(0, b"OggS", AudioVideoFormat::Ogg),
    Signature::new(0, EBML_MAGIC, AudioVideoFormat::Mkv),
    Signature::with_sub_magic(0, RIFF_MAGIC, 8, b"WAVE", AudioVideoFormat::Wav),
    Signature::with_sub_magic(0, RIFF_MAGIC, 8, b"AVI ", AudioVideoFormat::Avi),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"isom", AudioVideoFormat::Mp4),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"iso2", AudioVideoFormat::Mp4),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"mp41", AudioVideoFormat::Mp4),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"mp42", AudioVideoFormat::Mp4),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"qt  ", AudioVideoFormat::Mov),
    Signature::with_sub_magic(4, FTYP_MAGIC, 8, b"M4A ", AudioVideoFormat::M4a),
];

/// Detect the audio/video container of `content`.
///
/// An `ftyp` box with an unlisted brand, or a RIFF file that is neither WAVE nor AVI, is
/// unrecognized rather than defaulted.
pub fn detect_audio_video_format(content: &[u8]) -> Option<AudioVideoFormat> {
    if is_mpeg_frame_sync(content) {
        return Some(AudioVideoFormat::Mp3);
    }

    match first_match(AUDIO_VIDEO_SIGNATURES, content)? {
        AudioVideoFormat::Mkv if is_webm(content) => Some(AudioVideoFormat::Webm),
        format => Some(format),
    }
}

/// Classify `content` as audio/video, or `None` when it is not.
pub fn classify_audio_video(content: &[u8]) -> Option<ContentType> {
    detect_audio_video_format(content).map(AudioVideoFormat::content_type)
}

/// MPEG audio frame header: 11 sync bits set.
fn is_mpeg_frame_sync(content: &[u8]) -> bool {
    matches!(content, [0xFF, second, ..] if second & 0xE0 == 0xE0)
}

/// EBML header whose `DocType` is `webm`.
fn is_webm(content: &[u8]) -> bool {
    let head = &content[..content.len().min(EBML_HEADER_SCAN)];

    let Some(position) = memmem::find(head, EBML_DOCTYPE_ID) else {
        return false;
    };

    let size_offset = position + EBML_DOCTYPE_ID.len();
    let Some(&size_byte) = content.get(size_offset) else {
        return false;
    };

    // The element size is an EBML variable-length integer; its width is one plus the
    // number of leading zero bits of the first byte.
    let size_width = size_byte.leading_zeros() as usize + 1;
    starts_with(content, size_offset + size_width, b"webm")
}
