//! ELF64 section header table decoding.
//!
//! Section names are left as offsets; resolving them needs the section
//! name string table, see [`SectionHeaderEntry::name`].

use core::fmt;

use crate::header::{ElfError, FileHeader};
use crate::macros::elf_enum;
use crate::source::ByteSource;
use crate::strtab::StringTable;
use crate::table::{Table, TableEntry, TableIter};

/// Size of an ELF64 section header entry (64 bytes).
pub const ELF64_SHDR_SIZE: usize = 64;

elf_enum! {
    /// Section type (`sh_type`).
    pub enum SectionType: u32 {
        /// `SHT_NULL`: inactive entry.
        Null = 0 => "NULL",
        /// `SHT_PROGBITS`: program-defined contents.
        ProgBits = 1 => "PROGBITS",
        /// `SHT_SYMTAB`: symbol table.
        SymTab = 2 => "SYMTAB",
        /// `SHT_STRTAB`: string table.
        StrTab = 3 => "STRTAB",
        /// `SHT_RELA`: relocation entries with addends.
        Rela = 4 => "RELA",
        /// `SHT_HASH`: symbol hash table.
        Hash = 5 => "HASH",
        /// `SHT_DYNAMIC`: dynamic linking information.
        Dynamic = 6 => "DYNAMIC",
        /// `SHT_NOTE`: auxiliary information.
        Note = 7 => "NOTE",
        /// `SHT_NOBITS`: occupies no file space (`.bss`).
        NoBits = 8 => "NOBITS",
        /// `SHT_REL`: relocation entries without addends.
        Rel = 9 => "REL",
        /// `SHT_SHLIB`: reserved.
        ShLib = 10 => "SHLIB",
        /// `SHT_DYNSYM`: dynamic linker symbol table.
        DynSym = 11 => "DYNSYM",
    }
}

bitflags::bitflags! {
    /// Section attribute flags (`sh_flags`).
    ///
    /// Only the write, alloc, and exec bits are rendered; other bits are
    /// retained for callers that care.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SectionFlags: u64 {
        /// `SHF_WRITE`: writable during execution.
        const WRITE = 0x1;
        /// `SHF_ALLOC`: occupies memory during execution.
        const ALLOC = 0x2;
        /// `SHF_EXECINSTR`: executable machine instructions.
        const EXECINSTR = 0x4;
        /// `SHF_MERGE`: may be merged to eliminate duplication.
        const MERGE = 0x10;
        /// `SHF_STRINGS`: contains NUL-terminated strings.
        const STRINGS = 0x20;
        /// `SHF_INFO_LINK`: `sh_info` holds a section index.
        const INFO_LINK = 0x40;
    }
}

impl fmt::Display for SectionFlags {
    /// Renders the flags as `WAX`, with `-` for each absent bit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag, c| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(Self::WRITE, 'W'),
            bit(Self::ALLOC, 'A'),
            bit(Self::EXECINSTR, 'X')
        )
    }
}

/// Decoded ELF64 section header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeaderEntry {
    /// Offset into the section name string table.
    pub sh_name: u32,
    /// Section type.
    pub sh_type: SectionType,
    /// Section flags.
    pub sh_flags: SectionFlags,
    /// Virtual address of the section in memory (0 if not loaded).
    pub sh_addr: u64,
    /// File offset of the section data.
    pub sh_offset: u64,
    /// Size of the section in bytes.
    pub sh_size: u64,
    /// Index of a related section; meaning depends on the type.
    pub sh_link: u32,
    /// Extra information; meaning depends on the type.
    pub sh_info: u32,
    /// Required alignment of the section.
    pub sh_addralign: u64,
    /// Size of each fixed-size record, or 0.
    pub sh_entsize: u64,
}

impl SectionHeaderEntry {
    /// Returns `true` if this section is classified as a string table.
    #[must_use]
    pub fn is_string_table(&self) -> bool {
        self.sh_type == SectionType::StrTab
    }

    /// Returns the section contents as a slice of `source`.
    ///
    /// `SHT_NOBITS` sections occupy no file space and yield an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::OutOfBounds`] if the declared range does not fit.
    pub fn data<'a>(&self, source: &ByteSource<'a>) -> Result<&'a [u8], ElfError> {
        if self.sh_type == SectionType::NoBits {
            return Ok(&[]);
        }
        source.slice(self.sh_offset, self.sh_size)
    }

    /// Resolves `sh_name` against the section name string table.
    ///
    /// Returns `None` if the offset is out of range, unterminated, or not
    /// valid UTF-8.
    #[must_use]
    pub fn name<'a>(&self, names: &StringTable<'a>) -> Option<&'a str> {
        names.get(self.sh_name)
    }
}

impl TableEntry for SectionHeaderEntry {
    const SIZE: u16 = 64;

    fn decode(b: &ByteSource<'_>) -> Result<Self, ElfError> {
        Ok(Self {
            sh_name: b.read_u32(0)?,
            sh_type: SectionType::from_raw(b.read_u32(4)?),
            sh_flags: SectionFlags::from_bits_retain(b.read_u64(8)?),
            sh_addr: b.read_u64(16)?,
            sh_offset: b.read_u64(24)?,
            sh_size: b.read_u64(32)?,
            sh_link: b.read_u32(40)?,
            sh_info: b.read_u32(44)?,
            sh_addralign: b.read_u64(48)?,
            sh_entsize: b.read_u64(56)?,
        })
    }
}

/// The section header table of an ELF64 file.
pub type SectionHeaderTable<'a> = Table<'a, SectionHeaderEntry>;

/// Iterator over [`SectionHeaderTable`] entries.
pub type SectionHeaderIter<'a> = TableIter<'a, SectionHeaderEntry>;

/// Locates the section header table described by `header`.
///
/// Entry `i` is read at `e_shoff + i * e_shentsize`; each entry is bounds
/// checked on its own.
///
/// # Errors
///
/// Fails if the file is not ELF64 little-endian, or if `e_shentsize` is
/// smaller than [`ELF64_SHDR_SIZE`] while `e_shnum` is non-zero.
pub fn decode_section_headers<'a>(
    source: &ByteSource<'a>,
    header: &FileHeader,
) -> Result<SectionHeaderTable<'a>, ElfError> {
    header.require_native_layout()?;
    Table::new(*source, header.e_shoff, header.e_shentsize, header.e_shnum)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
