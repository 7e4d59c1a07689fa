//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};

/// Build an in-memory ZIP with one entry per `(name, content)` pair, in order.
pub fn create_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = ZipWriter::new(&mut cursor);
        let options = FileOptions::<'_, ()>::default();

        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content).unwrap();
        }

        zip.finish().unwrap();
    }
    cursor.into_inner()
}

/// Build an in-memory ZIP holding a single entry.
pub fn create_zip_with_entry(name: &str, content: &[u8]) -> Vec<u8> {
    create_zip(&[(name, content)])
}

/// Deterministic pseudo-random bytes (64-bit LCG).
pub fn pseudo_random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

/// An ISO-BMFF `ftyp` box header carrying `brand`.
pub fn ftyp_header(brand: &[u8; 4]) -> Vec<u8> {
    let mut content = vec![0x00, 0x00, 0x00, 0x18];
    content.extend_from_slice(b"ftyp");
    content.extend_from_slice(brand);
    content.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    content
}

/// A RIFF header with the given form type.
pub fn riff_header(form_type: &[u8; 4]) -> Vec<u8> {
    let mut content = b"RIFF".to_vec();
    content.extend_from_slice(&[0x24, 0x00, 0x00, 0x00]);
    content.extend_from_slice(form_type);
    content
}
