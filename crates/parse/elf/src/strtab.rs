//! String table lookup and extraction.
//!
//! [`StringTable`] answers "what string starts at this offset", which is
//! how section and symbol names are resolved. [`extract_strings`] walks
//! every `SHT_STRTAB` section and yields each string it contains together
//! with its file offset.

use core::fmt;
use core::iter::FusedIterator;

use crate::header::ElfError;
use crate::section::{SectionHeaderEntry, SectionHeaderIter, SectionHeaderTable};
use crate::source::ByteSource;

/// A zero-copy wrapper around a NUL-terminated string table section.
#[derive(Debug, Clone, Copy)]
pub struct StringTable<'a> {
    data: &'a [u8],
}

impl<'a> StringTable<'a> {
    /// Creates a new string table from the raw section data.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Loads the string table held by `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if the section range does not fit.
    pub fn from_section(
        source: &ByteSource<'a>,
        section: &SectionHeaderEntry,
    ) -> Result<Self, ElfError> {
        section.data(source).map(Self::new)
    }

    /// Looks up a NUL-terminated string at the given byte offset.
    ///
    /// Returns `None` if the offset is out of bounds or the string
    /// is unterminated or invalid UTF-8.
    #[must_use]
    pub fn get(&self, offset: u32) -> Option<&'a str> {
        let start = usize::try_from(offset).ok()?;
        let remaining = self.data.get(start..)?;
        let nul_pos = remaining.iter().position(|&b| b == 0)?;
        core::str::from_utf8(&remaining[..nul_pos]).ok()
    }
}

/// One string found in a string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringRecord<'a> {
    /// File offset of the first byte of the string.
    pub offset: u64,
    /// The string bytes, without the terminator.
    pub bytes: &'a [u8],
}

impl<'a> StringRecord<'a> {
    /// Returns the string if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.bytes).ok()
    }
}

impl fmt::Display for StringRecord<'_> {
    /// Writes the string, replacing invalid UTF-8 with `U+FFFD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.bytes.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{fffd}")?;
            }
        }
        Ok(())
    }
}

/// The strings of one string-table region, in ascending offset order.
///
/// Runs of NUL bytes separate strings; empty runs produce nothing. A final
/// run without a terminator is still yielded. The iterator is `Clone`, so a
/// saved copy restarts the scan from the same point.
#[derive(Debug, Clone)]
pub struct Strings<'a> {
    data: &'a [u8],
    base: u64,
    pos: usize,
}

impl<'a> Strings<'a> {
    /// Scans `data`, which starts at file offset `base`.
    ///
    /// Scanning stops at the first string whose offset would exceed
    /// `u64::MAX`.
    #[must_use]
    pub fn new(data: &'a [u8], base: u64) -> Self {
        Self { data, base, pos: 0 }
    }

    /// Scans the contents of `section`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if the section range does not fit.
    pub fn from_section(
        source: &ByteSource<'a>,
        section: &SectionHeaderEntry,
    ) -> Result<Self, ElfError> {
        let data = section.data(source)?;
        Ok(Self::new(data, section.sh_offset))
    }
}

impl<'a> Iterator for Strings<'a> {
    type Item = StringRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.data.get(self.pos..)?;
        let start = self.pos + rest.iter().position(|&b| b != 0)?;
        let len = self.data[start..]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.data.len() - start);
        // A string whose file offset does not fit in a u64 ends the scan.
        let offset = self.base.checked_add(u64::try_from(start).ok()?)?;
        self.pos = start + len;
        Some(StringRecord {
            offset,
            bytes: &self.data[start..start + len],
        })
    }
}

impl FusedIterator for Strings<'_> {}

/// The strings of one `SHT_STRTAB` section.
#[derive(Debug, Clone)]
pub struct StringTableSection<'a> {
    /// Index of the section in the section header table.
    pub index: usize,
    /// The section's header.
    pub header: SectionHeaderEntry,
    /// The section's strings, or [`ElfError::OutOfBounds`] if its declared
    /// range does not fit in the file.
    pub strings: Result<Strings<'a>, ElfError>,
}

/// Iterator over the string-table sections of a file, in section order.
///
/// Section headers that fail to decode are skipped here; their errors are
/// reported by the section header table itself.
#[derive(Debug, Clone)]
pub struct StringTables<'a> {
    source: ByteSource<'a>,
    sections: core::iter::Enumerate<SectionHeaderIter<'a>>,
}

impl<'a> Iterator for StringTables<'a> {
    type Item = StringTableSection<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, entry) in self.sections.by_ref() {
            let Ok(header) = entry else { continue };
            if !header.is_string_table() {
                continue;
            }
            return Some(StringTableSection {
                index,
                header,
                strings: Strings::from_section(&self.source, &header),
            });
        }
        None
    }
}

impl FusedIterator for StringTables<'_> {}

/// Extracts the strings of every `SHT_STRTAB` section in `sections`.
///
/// A section whose range exceeds the source reports
/// [`ElfError::OutOfBounds`] in its own [`StringTableSection::strings`] and
/// extraction moves on to the next section.
#[must_use]
pub fn extract_strings<'a>(
    source: &ByteSource<'a>,
    sections: &SectionHeaderTable<'a>,
) -> StringTables<'a> {
    StringTables {
        source: *source,
        sections: sections.iter().enumerate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::decode_header;
    use crate::section::decode_section_headers;
    use crate::section::tests::{append_section, make_elf_with_sections};

    fn collect(strings: Strings<'_>) -> Vec<(u64, &[u8])> {
        strings.map(|s| (s.offset, s.bytes)).collect()
    }

    #[test]
    fn splits_on_terminators() {
        let strings = Strings::new(b"abc\0de\0", 0x100);
        assert_eq!(collect(strings), [(0x100, &b"abc"[..]), (0x104, &b"de"[..])]);
    }

    #[test]
    fn skips_empty_runs() {
        let strings = Strings::new(b"\0\0hello\0\0\0world\0", 0);
        assert_eq!(
            collect(strings),
            [(2, &b"hello"[..]), (10, &b"world"[..])]
        );
        assert_eq!(Strings::new(b"\0\0\0", 0).count(), 0);
        assert_eq!(Strings::new(b"", 0).count(), 0);
    }

    #[test]
    fn unterminated_tail_is_yielded() {
        let strings = Strings::new(b"ab\0cd", 8);
        assert_eq!(collect(strings), [(8, &b"ab"[..]), (11, &b"cd"[..])]);
    }

    #[test]
    fn base_near_u64_max_stops_instead_of_overflowing() {
        assert_eq!(Strings::new(b"\0a", u64::MAX).count(), 0);
        let strings = Strings::new(b"ab\0cd", u64::MAX - 2);
        assert_eq!(collect(strings), [(u64::MAX - 2, &b"ab"[..])]);
    }

    #[test]
    fn clone_restarts_from_same_point() {
        let mut strings = Strings::new(b"one\0two\0three\0", 0);
        assert_eq!(strings.next().unwrap().bytes, b"one");
        let saved = strings.clone();
        assert_eq!(strings.count(), 2);
        assert_eq!(saved.count(), 2);
    }

    #[test]
    fn lossy_display() {
        let record = StringRecord {
            offset: 0,
            bytes: b"ok\xffok",
        };
        assert_eq!(record.as_str(), None);
        assert_eq!(record.to_string(), "ok\u{fffd}ok");
    }

    #[test]
    fn string_table_lookup() {
        let strtab = StringTable::new(b"\0hello\0world\0");
        assert_eq!(strtab.get(0), Some(""));
        assert_eq!(strtab.get(1), Some("hello"));
        assert_eq!(strtab.get(3), Some("llo"));
        assert_eq!(strtab.get(7), Some("world"));
        assert_eq!(strtab.get(100), None);
    }

    #[test]
    fn string_table_no_nul_terminator() {
        let strtab = StringTable::new(b"abc");
        assert_eq!(strtab.get(0), None);
    }

    #[test]
    fn extracts_every_string_table_in_order() {
        let buf = make_elf_with_sections();
        let src = ByteSource::new(&buf).unwrap();
        let hdr = decode_header(&src).unwrap();
        let sections = decode_section_headers(&src, &hdr).unwrap();

        let tables: Vec<_> = extract_strings(&src, &sections).collect();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].index, 1);
        assert_eq!(tables[1].index, 3);

        let strtab: Vec<_> = tables[0]
            .strings
            .clone()
            .unwrap()
            .map(|s| (s.offset, s.as_str().unwrap()))
            .collect();
        assert_eq!(strtab, [(321, "hello"), (327, "world")]);

        let names: Vec<_> = tables[1]
            .strings
            .clone()
            .unwrap()
            .filter_map(|s| s.as_str())
            .collect();
        assert_eq!(names, [".strtab", ".text", ".shstrtab"]);
    }

    #[test]
    fn out_of_range_section_does_not_stop_extraction() {
        let mut buf = make_elf_with_sections();
        let tail = buf.split_off(64 + 4 * 64);
        // Move section data out of the way and add a fifth, bogus STRTAB
        // section pointing past the end of the file.
        append_section(&mut buf, 0, 3, 0, 0, 0x10_0000, 16, 0, 0, 1, 0);
        let shift = 64u64;
        buf.extend_from_slice(&tail);
        // Section data moved by one header; patch the three real offsets.
        for i in 1..4 {
            let at = 64 + i * 64 + 24;
            let old = u64::from_le_bytes(buf[at..at + 8].try_into().unwrap());
            buf[at..at + 8].copy_from_slice(&(old + shift).to_le_bytes());
        }

        let src = ByteSource::new(&buf).unwrap();
        let hdr = decode_header(&src).unwrap();
        let sections = decode_section_headers(&src, &hdr).unwrap();
        let tables: Vec<_> = extract_strings(&src, &sections).collect();

        assert_eq!(tables.len(), 3);
        assert!(tables[0].strings.is_ok());
        assert!(tables[1].strings.is_ok());
        assert_eq!(tables[2].index, 4);
        assert_eq!(
            tables[2].strings.clone().unwrap_err(),
            ElfError::OutOfBounds {
                offset: 0x10_0000,
                len: 16
            }
        );
        let hello = tables[0].strings.clone().unwrap().next().unwrap();
        assert_eq!(hello.bytes, b"hello");
        assert_eq!(hello.offset, 321 + shift);
    }
}
