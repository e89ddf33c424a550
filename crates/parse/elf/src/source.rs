//! Bounds-checked byte access over a raw ELF image.
//!
//! [`ByteSource`] is the only type in this crate that touches the raw
//! buffer. Every read goes through a range check, so a malformed header
//! can never cause a read past the end of the image.

use crate::header::ElfError;

/// ELF magic bytes: `\x7fELF`.
pub const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// Read a little-endian `u16` from the start of `b`, or `None` if `b` is too short.
fn le_u16(b: &[u8]) -> Option<u16> {
    Some(u16::from_le_bytes(*b.first_chunk()?))
}

/// Read a little-endian `u32` from the start of `b`.
fn le_u32(b: &[u8]) -> Option<u32> {
    Some(u32::from_le_bytes(*b.first_chunk()?))
}

/// Read a little-endian `u64` from the start of `b`.
fn le_u64(b: &[u8]) -> Option<u64> {
    Some(u64::from_le_bytes(*b.first_chunk()?))
}

/// An immutable, bounds-checked view over an ELF image.
///
/// Offsets are `u64` because every offset field in an ELF64 file is; the
/// conversion to `usize` is part of the bounds check.
#[derive(Debug, Clone, Copy)]
pub struct ByteSource<'a> {
    data: &'a [u8],
}

impl<'a> ByteSource<'a> {
    /// Wraps `data` after checking it starts with the ELF magic.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::InvalidSignature`] if the first four bytes are not
    /// `7F 45 4C 46`, including when `data` is shorter than four bytes.
    pub fn new(data: &'a [u8]) -> Result<Self, ElfError> {
        match data.first_chunk::<4>() {
            Some(magic) if *magic == ELF_MAGIC => Ok(Self { data }),
            _ => Err(ElfError::InvalidSignature),
        }
    }

    /// Wraps a sub-range without re-checking the magic.
    pub(crate) fn window(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Returns the number of bytes in the source.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the source holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the whole underlying buffer.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Returns `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if any part of the range falls
    /// outside the source.
    pub fn slice(&self, offset: u64, len: u64) -> Result<&'a [u8], ElfError> {
        let oob = ElfError::OutOfBounds { offset, len };
        let start = usize::try_from(offset).map_err(|_| oob)?;
        let size = usize::try_from(len).map_err(|_| oob)?;
        let end = start.checked_add(size).ok_or(oob)?;
        self.data.get(start..end).ok_or(oob)
    }

    /// Returns a sub-source covering `len` bytes at `offset`.
    ///
    /// Field reads on the returned source are relative to `offset`.
    pub(crate) fn sub(&self, offset: u64, len: u64) -> Result<Self, ElfError> {
        self.slice(offset, len).map(Self::window)
    }

    /// Reads the byte at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if `offset` is past the end.
    pub fn read_u8(&self, offset: u64) -> Result<u8, ElfError> {
        Ok(self.slice(offset, 1)?[0])
    }

    /// Reads a little-endian `u16` at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if `offset + 2` exceeds the length.
    pub fn read_u16(&self, offset: u64) -> Result<u16, ElfError> {
        let b = self.slice(offset, 2)?;
        le_u16(b).ok_or(ElfError::OutOfBounds { offset, len: 2 })
    }

    /// Reads a little-endian `u32` at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if `offset + 4` exceeds the length.
    pub fn read_u32(&self, offset: u64) -> Result<u32, ElfError> {
        let b = self.slice(offset, 4)?;
        le_u32(b).ok_or(ElfError::OutOfBounds { offset, len: 4 })
    }

    /// Reads a little-endian `u64` at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if `offset + 8` exceeds the length.
    pub fn read_u64(&self, offset: u64) -> Result<u64, ElfError> {
        let b = self.slice(offset, 8)?;
        le_u64(b).ok_or(ElfError::OutOfBounds { offset, len: 8 })
    }
}
