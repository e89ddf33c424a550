//! ELF64 program header (segment) table decoding.

use core::fmt;

use crate::header::{ElfError, FileHeader};
use crate::source::ByteSource;
use crate::table::{Table, TableEntry, TableIter};

/// Size of an ELF64 program header entry (56 bytes).
pub const ELF64_PHDR_SIZE: usize = 56;

const PT_LOOS: u32 = 0x6000_0000;
const PT_HIOS: u32 = 0x6fff_ffff;
const PT_LOPROC: u32 = 0x7000_0000;
const PT_HIPROC: u32 = 0x7fff_ffff;

/// Segment type (`p_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// `PT_NULL`: unused entry.
    Null,
    /// `PT_LOAD`: loadable segment.
    Load,
    /// `PT_DYNAMIC`: dynamic linking information.
    Dynamic,
    /// `PT_INTERP`: path of the program interpreter.
    Interp,
    /// `PT_NOTE`: auxiliary information.
    Note,
    /// `PT_SHLIB`: reserved.
    Shlib,
    /// `PT_PHDR`: the program header table itself.
    Phdr,
    /// `PT_TLS`: thread-local storage template.
    Tls,
    /// `PT_GNU_EH_FRAME`: `.eh_frame_hdr` location.
    GnuEhFrame,
    /// `PT_GNU_STACK`: stack executability.
    GnuStack,
    /// `PT_GNU_RELRO`: read-only after relocation.
    GnuRelro,
    /// `PT_GNU_PROPERTY`: `.note.gnu.property` location.
    GnuProperty,
    /// Any other value in `PT_LOOS..=PT_HIOS`.
    OsSpecific(u32),
    /// Any value in `PT_LOPROC..=PT_HIPROC`.
    ProcessorSpecific(u32),
    /// A value outside every defined value and range.
    Unrecognized(u32),
}

impl SegmentType {
    /// Classifies a raw `p_type` value.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Null,
            1 => Self::Load,
            2 => Self::Dynamic,
            3 => Self::Interp,
            4 => Self::Note,
            5 => Self::Shlib,
            6 => Self::Phdr,
            7 => Self::Tls,
            0x6474_e550 => Self::GnuEhFrame,
            0x6474_e551 => Self::GnuStack,
            0x6474_e552 => Self::GnuRelro,
            0x6474_e553 => Self::GnuProperty,
            PT_LOOS..=PT_HIOS => Self::OsSpecific(raw),
            PT_LOPROC..=PT_HIPROC => Self::ProcessorSpecific(raw),
            _ => Self::Unrecognized(raw),
        }
    }

    /// Returns the raw `p_type` value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        match self {
            Self::Null => 0,
            Self::Load => 1,
            Self::Dynamic => 2,
            Self::Interp => 3,
            Self::Note => 4,
            Self::Shlib => 5,
            Self::Phdr => 6,
            Self::Tls => 7,
            Self::GnuEhFrame => 0x6474_e550,
            Self::GnuStack => 0x6474_e551,
            Self::GnuRelro => 0x6474_e552,
            Self::GnuProperty => 0x6474_e553,
            Self::OsSpecific(raw) | Self::ProcessorSpecific(raw) | Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` unless the value is [`Self::Unrecognized`].
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Load => f.write_str("LOAD"),
            Self::Dynamic => f.write_str("DYNAMIC"),
            Self::Interp => f.write_str("INTERP"),
            Self::Note => f.write_str("NOTE"),
            Self::Shlib => f.write_str("SHLIB"),
            Self::Phdr => f.write_str("PHDR"),
            Self::Tls => f.write_str("TLS"),
            Self::GnuEhFrame => f.write_str("GNU_EH_FRAME"),
            Self::GnuStack => f.write_str("GNU_STACK"),
            Self::GnuRelro => f.write_str("GNU_RELRO"),
            Self::GnuProperty => f.write_str("GNU_PROPERTY"),
            Self::OsSpecific(raw) => write!(f, "LOOS+{:#x}", raw - PT_LOOS),
            Self::ProcessorSpecific(raw) => write!(f, "LOPROC+{:#x}", raw - PT_LOPROC),
            Self::Unrecognized(raw) => write!(f, "unknown ({raw:#x})"),
        }
    }
}

bitflags::bitflags! {
    /// Segment permission flags (`p_flags`).
    ///
    /// Bits outside the three permissions are retained but not named.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SegmentFlags: u32 {
        /// `PF_X`.
        const EXECUTE = 0x1;
        /// `PF_W`.
        const WRITE = 0x2;
        /// `PF_R`.
        const READ = 0x4;
    }
}

impl fmt::Display for SegmentFlags {
    /// Renders the permissions as `RWX`, with `-` for each absent bit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag, c| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(Self::READ, 'R'),
            bit(Self::WRITE, 'W'),
            bit(Self::EXECUTE, 'X')
        )
    }
}

/// Decoded ELF64 program header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeaderEntry {
    /// Segment type.
    pub p_type: SegmentType,
    /// Segment permission flags.
    pub p_flags: SegmentFlags,
    /// Offset of the segment data in the file.
    pub p_offset: u64,
    /// Virtual address of the segment.
    pub p_vaddr: u64,
    /// Physical address of the segment, where relevant.
    pub p_paddr: u64,
    /// Size of the segment data in the file.
    pub p_filesz: u64,
    /// Size of the segment in memory.
    pub p_memsz: u64,
    /// Required alignment of the segment.
    pub p_align: u64,
}

impl TableEntry for ProgramHeaderEntry {
    const SIZE: u16 = 56;

    fn decode(b: &ByteSource<'_>) -> Result<Self, ElfError> {
        Ok(Self {
            p_type: SegmentType::from_raw(b.read_u32(0)?),
            p_flags: SegmentFlags::from_bits_retain(b.read_u32(4)?),
            p_offset: b.read_u64(8)?,
            p_vaddr: b.read_u64(16)?,
            p_paddr: b.read_u64(24)?,
            p_filesz: b.read_u64(32)?,
            p_memsz: b.read_u64(40)?,
            p_align: b.read_u64(48)?,
        })
    }
}

/// The program header table of an ELF64 file.
pub type ProgramHeaderTable<'a> = Table<'a, ProgramHeaderEntry>;

/// Iterator over [`ProgramHeaderTable`] entries.
pub type ProgramHeaderIter<'a> = TableIter<'a, ProgramHeaderEntry>;

/// Locates the program header table described by `header`.
///
/// Entry `i` is read at `e_phoff + i * e_phentsize`. Entries are decoded
/// lazily; an entry outside the source yields [`ElfError::OutOfBounds`] for
/// that index only.
///
/// # Errors
///
/// Fails if the file is not ELF64 little-endian, or if `e_phentsize` is
/// smaller than [`ELF64_PHDR_SIZE`] while `e_phnum` is non-zero.
pub fn decode_program_headers<'a>(
    source: &ByteSource<'a>,
    header: &FileHeader,
) -> Result<ProgramHeaderTable<'a>, ElfError> {
    header.require_native_layout()?;
    Table::new(*source, header.e_phoff, header.e_phentsize, header.e_phnum)
}
