//! [`ElfFile`], the convenience entry point bundling source and header.

use crate::header::{ElfError, FileHeader, decode_header};
use crate::section::{SectionHeaderEntry, SectionHeaderTable, SectionType, decode_section_headers};
use crate::segment::{ProgramHeaderEntry, ProgramHeaderTable, SegmentType, decode_program_headers};
use crate::source::ByteSource;
use crate::strtab::{StringTable, StringTables, extract_strings};

/// A parsed ELF64 file, holding the byte source and the decoded header.
#[derive(Debug, Clone, Copy)]
pub struct ElfFile<'a> {
    source: ByteSource<'a>,
    header: FileHeader,
}

impl<'a> ElfFile<'a> {
    /// Checks the magic and decodes the file header.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::InvalidSignature`] or [`ElfError::TruncatedHeader`].
    pub fn parse(data: &'a [u8]) -> Result<Self, ElfError> {
        let source = ByteSource::new(data)?;
        let header = decode_header(&source)?;
        Ok(Self { source, header })
    }

    /// Returns the decoded file header.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Returns the byte source.
    #[must_use]
    pub fn source(&self) -> &ByteSource<'a> {
        &self.source
    }

    /// Returns the virtual address of the entry point.
    #[must_use]
    pub fn entry_point(&self) -> u64 {
        self.header.e_entry
    }

    /// Returns the program header table.
    ///
    /// # Errors
    ///
    /// See [`decode_program_headers`].
    pub fn program_headers(&self) -> Result<ProgramHeaderTable<'a>, ElfError> {
        decode_program_headers(&self.source, &self.header)
    }

    /// Returns the section header table.
    ///
    /// # Errors
    ///
    /// See [`decode_section_headers`].
    pub fn section_headers(&self) -> Result<SectionHeaderTable<'a>, ElfError> {
        decode_section_headers(&self.source, &self.header)
    }

    /// Returns the strings of every string-table section.
    ///
    /// # Errors
    ///
    /// Fails only if the section header table itself cannot be located.
    pub fn string_tables(&self) -> Result<StringTables<'a>, ElfError> {
        let sections = self.section_headers()?;
        Ok(extract_strings(&self.source, &sections))
    }

    /// Returns the section name string table (`e_shstrndx`).
    ///
    /// Returns `None` if the index is `SHN_UNDEF`, out of range, does not
    /// name a string table, or the table is out of bounds.
    #[must_use]
    pub fn section_name_table(&self) -> Option<StringTable<'a>> {
        let index = self.header.e_shstrndx;
        if index == 0 {
            return None;
        }
        let shdr = self.section_headers().ok()?.get(usize::from(index))?.ok()?;
        if shdr.sh_type != SectionType::StrTab {
            return None;
        }
        StringTable::from_section(&self.source, &shdr).ok()
    }

    /// Resolves a section's name through the section name string table.
    #[must_use]
    pub fn section_name(&self, section: &SectionHeaderEntry) -> Option<&'a str> {
        section.name(&self.section_name_table()?)
    }

    /// Returns the file-backed bytes of a segment.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if the segment does not fit.
    pub fn segment_data(&self, segment: &ProgramHeaderEntry) -> Result<&'a [u8], ElfError> {
        self.source.slice(segment.p_offset, segment.p_filesz)
    }

    /// Returns the program interpreter path named by `PT_INTERP`, if any.
    #[must_use]
    pub fn interpreter(&self) -> Option<&'a str> {
        let interp = self
            .program_headers()
            .ok()?
            .iter()
            .filter_map(Result::ok)
            .find(|p| p.p_type == SegmentType::Interp)?;
        let data = self.segment_data(&interp).ok()?;
        StringTable::new(data).get(0)
    }
}
