//! Properties that hold for every input buffer.

use mimesniff::{
    AudioVideoFormat, Detection, DocumentKind, Family, ImageFormat, classify_audio_video, classify_document,
    classify_image, detect_bytes,
};
use std::sync::Arc;
use std::thread;

mod helpers;

use helpers::{create_zip, create_zip_with_entry, ftyp_header, pseudo_random_bytes, riff_header};

fn assorted_buffers() -> Vec<Vec<u8>> {
    let mut buffers = vec![
        Vec::new(),
        b"%PDF-1.4".to_vec(),
        b"{\"key\": [1, 2, 3]}".to_vec(),
        b"<html><body/></html>".to_vec(),
        b"# Title\n\nBody".to_vec(),
        b"a,b\n1,2\n3,4".to_vec(),
        b"PK\x03\x04".to_vec(),
        vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        vec![0xFF, 0xD8, 0xFF, 0xE0],
        vec![0xFF, 0xFB, 0x90, 0x64],
        riff_header(b"WEBP"),
        riff_header(b"WAVE"),
        ftyp_header(b"heic"),
        ftyp_header(b"isom"),
        create_zip_with_entry("word/document.xml", b"<document/>"),
        create_zip_with_entry("notes.txt", b"hello"),
    ];

    for seed in 0..64 {
        buffers.push(pseudo_random_bytes(seed, (seed as usize * 37) % 2048));
    }

    buffers
}

#[test]
fn test_document_vocabulary_is_closed() {
    let vocabulary: Vec<_> = DocumentKind::ALL.iter().map(|kind| kind.content_type()).collect();
    assert_eq!(vocabulary.len(), 12);

    for buffer in assorted_buffers() {
        let content_type = classify_document(&buffer);
        assert!(
            vocabulary.contains(&content_type),
            "{} is outside the document vocabulary",
            content_type
        );
    }
}

#[test]
fn test_image_and_audio_video_vocabularies_are_closed() {
    let images: Vec<_> = ImageFormat::ALL.iter().map(|format| format.image_type()).collect();
    let media: Vec<_> = AudioVideoFormat::ALL.iter().map(|format| format.content_type()).collect();

    for buffer in assorted_buffers() {
        if let Some(image) = classify_image(&buffer) {
            assert!(images.contains(&image));
        }
        if let Some(content_type) = classify_audio_video(&buffer) {
            assert!(media.contains(&content_type));
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    for buffer in assorted_buffers() {
        assert_eq!(classify_document(&buffer), classify_document(&buffer));
        assert_eq!(classify_image(&buffer), classify_image(&buffer));
        assert_eq!(classify_audio_video(&buffer), classify_audio_video(&buffer));
        assert_eq!(detect_bytes(&buffer, Family::Auto), detect_bytes(&buffer, Family::Auto));
    }
}

#[test]
fn test_classification_does_not_mutate_input() {
    for buffer in assorted_buffers() {
        let snapshot = buffer.clone();
        let _ = classify_document(&buffer);
        let _ = classify_image(&buffer);
        let _ = classify_audio_video(&buffer);
        assert_eq!(buffer, snapshot);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(classify_document(&[]), DocumentKind::Binary.content_type());
    assert_eq!(classify_image(&[]), None);
    assert_eq!(classify_audio_video(&[]), None);
    assert_eq!(
        detect_bytes(&[], Family::Auto),
        Detection::Document(DocumentKind::Binary.content_type())
    );
}

#[test]
fn test_short_inputs_never_panic() {
    for len in 0..16 {
        for seed in 0..8 {
            let buffer = pseudo_random_bytes(seed, len);
            let _ = classify_document(&buffer);
            let _ = classify_image(&buffer);
            let _ = classify_audio_video(&buffer);
        }
    }
}

#[test]
fn test_zip_without_office_parts_is_generic_zip() {
    let content = create_zip(&[
        ("README.md", &b"# readme"[..]),
        ("src/lib.rs", &b"fn main() {}"[..]),
        ("words/not-word.xml", &b"<x/>"[..]),
    ]);
    assert_eq!(classify_document(&content), DocumentKind::Zip.content_type());
}

#[test]
fn test_first_office_prefix_wins() {
    let content = create_zip(&[
        ("xl/workbook.xml", &b"<workbook/>"[..]),
        ("word/document.xml", &b"<document/>"[..]),
    ]);
    assert_eq!(classify_document(&content), DocumentKind::Xlsx.content_type());
}

#[test]
fn test_auto_detection_is_always_recognized() {
    for buffer in assorted_buffers() {
        assert!(detect_bytes(&buffer, Family::Auto).is_recognized());
    }
}

#[test]
fn test_concurrent_classification() {
    let buffers = Arc::new(assorted_buffers());
    let expected: Vec<_> = buffers.iter().map(|buffer| detect_bytes(buffer, Family::Auto)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let buffers = Arc::clone(&buffers);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for (buffer, expected) in buffers.iter().zip(expected.iter()) {
                    assert_eq!(detect_bytes(buffer, Family::Auto), *expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
