//! Magic-byte signature tables.
//!
//! Each detector family owns a flat, ordered table of [`Signature`] records. Lookup walks
//! the table in declaration order and stops at the first record that matches, so records
//! whose magic is a prefix of another record's (or that share a container such as RIFF or
//! an ISO-BMFF `ftyp` box) must be ordered deliberately.

/// A byte signature paired with the classification it produces.
#[derive(Debug, Clone, Copy)]
pub struct Signature<T: 'static> {
    /// Offset of `magic` within the buffer.
    pub offset: usize,
    /// Primary magic bytes.
    pub magic: &'static [u8],
    /// Secondary magic required at its own offset, e.g. a RIFF form type or `ftyp` brand.
    pub sub_magic: Option<(usize, &'static [u8])>,
    pub kind: T,
}

impl<T: Copy> Signature<T> {
    pub const fn new(offset: usize, magic: &'static [u8], kind: T) -> Self {
        Self {
            offset,
            magic,
            sub_magic: None,
            kind,
        }
    }

    pub const fn with_sub_magic(
        offset: usize,
        magic: &'static [u8],
        sub_offset: usize,
        sub_magic: &'static [u8],
        kind: T,
    ) -> Self {
        Self {
            offset,
            magic,
            sub_magic: Some((sub_offset, sub_magic)),
            kind,
        }
    }

    /// Whether `content` carries this signature.
    ///
    /// A primary match whose declared sub-magic is missing is not a match.
    pub fn matches(&self, content: &[u8]) -> bool {
        if !starts_with(content, self.offset, self.magic) {
            return false;
        }

        match self.sub_magic {
            Some((sub_offset, sub_magic)) => starts_with(content, sub_offset, sub_magic),
            None => true,
        }
    }
}

/// Check whether `content` holds `prefix` at `offset`.
///
/// Buffers too short for the window are a plain non-match.
#[inline]
pub fn starts_with(content: &[u8], offset: usize, prefix: &[u8]) -> bool {
    offset
        .checked_add(prefix.len())
        .and_then(|end| content.get(offset..end))
        .is_some_and(|window| window == prefix)
}

/// Return the kind of the first signature in `table` that matches `content`.
pub fn first_match<T: Copy>(table: &[Signature<T>], content: &[u8]) -> Option<T> {
    table.iter().find(|signature| signature.matches(content)).map(|signature| signature.kind)
}
