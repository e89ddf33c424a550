//! ELF64 file header decoding.
//!
//! Decodes the fixed 64-byte file header from a [`ByteSource`]. Only a
//! buffer too short to hold the header is fatal; every enumerated field is
//! classified into a closed enum with an `Unrecognized` fallback.

use core::fmt;

use crate::machine::Machine;
use crate::macros::elf_enum;
use crate::source::ByteSource;

/// Size of an ELF64 file header (64 bytes).
pub const ELF64_EHDR_SIZE: usize = 64;

/// Number of `EI_PAD` bytes in `e_ident`.
const EI_PAD_LEN: usize = 7;

/// Start of the OS-specific object type range.
const ET_LOOS: u16 = 0xfe00;

/// End of the OS-specific object type range.
const ET_HIOS: u16 = 0xfeff;

/// Start of the processor-specific object type range.
const ET_LOPROC: u16 = 0xff00;

/// Errors that can occur when decoding an ELF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// The file does not start with the ELF magic bytes.
    InvalidSignature,
    /// The input is shorter than the 64-byte file header.
    TruncatedHeader,
    /// A table entry or section range falls outside the input.
    OutOfBounds {
        /// File offset of the requested range.
        offset: u64,
        /// Length of the requested range.
        len: u64,
    },
    /// Table decoding requires `ELFCLASS64`.
    UnsupportedClass(Class),
    /// Table decoding requires `ELFDATA2LSB`.
    UnsupportedEncoding(DataEncoding),
    /// The header declares a table stride smaller than one native record.
    EntrySizeTooSmall {
        /// Entry size declared in the file header.
        declared: u16,
        /// Size of the record this crate decodes.
        required: u16,
    },
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "invalid ELF magic bytes"),
            Self::TruncatedHeader => write!(
                f,
                "input shorter than the {ELF64_EHDR_SIZE}-byte ELF64 header"
            ),
            Self::OutOfBounds { offset, len } => write!(
                f,
                "range {offset:#x}..+{len:#x} lies outside the input"
            ),
            Self::UnsupportedClass(class) => {
                write!(f, "unsupported ELF class {class} (expected ELFCLASS64)")
            }
            Self::UnsupportedEncoding(data) => {
                write!(f, "unsupported data encoding {data} (expected little-endian)")
            }
            Self::EntrySizeTooSmall { declared, required } => write!(
                f,
                "declared entry size {declared} is smaller than the {required}-byte record"
            ),
        }
    }
}

impl core::error::Error for ElfError {}

elf_enum! {
    /// File class (`EI_CLASS`).
    pub enum Class: u8 {
        /// `ELFCLASSNONE`.
        None = 0 => "Invalid class",
        /// `ELFCLASS32`.
        Elf32 = 1 => "32-bit architecture",
        /// `ELFCLASS64`.
        Elf64 = 2 => "64-bit architecture",
    }
}

elf_enum! {
    /// Data encoding (`EI_DATA`).
    pub enum DataEncoding: u8 {
        /// `ELFDATANONE`.
        None = 0 => "Invalid data encoding",
        /// `ELFDATA2LSB`.
        LittleEndian = 1 => "2's complement, little endian",
        /// `ELFDATA2MSB`.
        BigEndian = 2 => "2's complement, big endian",
    }
}

elf_enum! {
    /// Identification version (`EI_VERSION`).
    pub enum IdentVersion: u8 {
        /// `EV_NONE`.
        None = 0 => "Invalid version",
        /// `EV_CURRENT`.
        Current = 1 => "Current version",
    }
}

elf_enum! {
    /// Object file version (`e_version`).
    pub enum FileVersion: u32 {
        /// `EV_NONE`.
        None = 0 => "Invalid version",
        /// `EV_CURRENT`.
        Current = 1 => "Current version",
    }
}

elf_enum! {
    /// Operating system and ABI (`EI_OSABI`).
    pub enum OsAbi: u8 {
        /// `ELFOSABI_SYSV` (also `ELFOSABI_NONE`).
        SysV = 0 => "UNIX System V ABI",
        /// `ELFOSABI_HPUX`.
        HpUx = 1 => "HP-UX",
        /// `ELFOSABI_NETBSD`.
        NetBsd = 2 => "NetBSD",
        /// `ELFOSABI_LINUX` (also `ELFOSABI_GNU`).
        Linux = 3 => "Linux",
        /// `ELFOSABI_HURD`.
        Hurd = 4 => "GNU Hurd",
        /// `ELFOSABI_SOLARIS`.
        Solaris = 6 => "Sun Solaris",
        /// `ELFOSABI_AIX`.
        Aix = 7 => "IBM AIX",
        /// `ELFOSABI_IRIX`.
        Irix = 8 => "SGI Irix",
        /// `ELFOSABI_FREEBSD`.
        FreeBsd = 9 => "FreeBSD",
        /// `ELFOSABI_TRU64`.
        Tru64 = 10 => "Compaq TRU64 UNIX",
        /// `ELFOSABI_MODESTO`.
        Modesto = 11 => "Novell Modesto",
        /// `ELFOSABI_OPENBSD`.
        OpenBsd = 12 => "OpenBSD",
        /// `ELFOSABI_OPENVMS`.
        OpenVms = 13 => "OpenVMS",
        /// `ELFOSABI_NSK`.
        Nsk = 14 => "HP Non-Stop Kernel",
        /// `ELFOSABI_AROS`.
        Aros = 15 => "AROS",
        /// `ELFOSABI_FENIXOS`.
        FenixOs = 16 => "FenixOS",
        /// `ELFOSABI_CLOUDABI`.
        CloudAbi = 17 => "Nuxi CloudABI",
        /// `ELFOSABI_OPENVOS`.
        OpenVos = 18 => "Stratus OpenVOS",
        /// `ELFOSABI_ARM_AEABI`.
        ArmAeabi = 64 => "ARM EABI",
        /// `ELFOSABI_ARM`.
        Arm = 97 => "ARM",
        /// `ELFOSABI_STANDALONE`.
        Standalone = 255 => "Standalone (embedded) application",
    }
}

/// Object file type (`e_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `ET_NONE`.
    None,
    /// `ET_REL`.
    Relocatable,
    /// `ET_EXEC`.
    Executable,
    /// `ET_DYN`.
    SharedObject,
    /// `ET_CORE`.
    Core,
    /// `ET_LOOS..=ET_HIOS`.
    OsSpecific(u16),
    /// `ET_LOPROC..=ET_HIPROC`.
    ProcessorSpecific(u16),
    /// A value outside every defined value and range.
    Unrecognized(u16),
}

impl ObjectType {
    /// Classifies a raw `e_type` value.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Relocatable,
            2 => Self::Executable,
            3 => Self::SharedObject,
            4 => Self::Core,
            ET_LOOS..=ET_HIOS => Self::OsSpecific(raw),
            ET_LOPROC..=u16::MAX => Self::ProcessorSpecific(raw),
            _ => Self::Unrecognized(raw),
        }
    }

    /// Returns the raw `e_type` value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Relocatable => 1,
            Self::Executable => 2,
            Self::SharedObject => 3,
            Self::Core => 4,
            Self::OsSpecific(raw) | Self::ProcessorSpecific(raw) | Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns `true` unless the value is [`Self::Unrecognized`].
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("No file type"),
            Self::Relocatable => f.write_str("Relocatable file"),
            Self::Executable => f.write_str("Executable file"),
            Self::SharedObject => f.write_str("Shared object file"),
            Self::Core => f.write_str("Core file"),
            Self::OsSpecific(raw) => write!(f, "OS-specific ({raw:#x})"),
            Self::ProcessorSpecific(raw) => write!(f, "Processor-specific ({raw:#x})"),
            Self::Unrecognized(raw) => write!(f, "unknown ({raw:#x})"),
        }
    }
}

/// Decoded ELF64 file header.
///
/// Field names follow the ELF specification. The struct holds every byte
/// of the header, so [`FileHeader::to_bytes`] reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// `EI_MAG0..=EI_MAG3`, always `\x7fELF`.
    pub ei_magic: [u8; 4],
    /// File class.
    pub ei_class: Class,
    /// Data encoding.
    pub ei_data: DataEncoding,
    /// Identification version.
    pub ei_version: IdentVersion,
    /// Target OS/ABI.
    pub ei_osabi: OsAbi,
    /// ABI version.
    pub ei_abiversion: u8,
    /// Padding bytes, expected to be zero.
    pub ei_pad: [u8; EI_PAD_LEN],
    /// Object file type.
    pub e_type: ObjectType,
    /// Target machine architecture.
    pub e_machine: Machine,
    /// Object file version.
    pub e_version: FileVersion,
    /// Virtual address of the entry point.
    pub e_entry: u64,
    /// Offset of the program header table in the file.
    pub e_phoff: u64,
    /// Offset of the section header table in the file.
    pub e_shoff: u64,
    /// Processor-specific flags.
    pub e_flags: u32,
    /// Size of this header.
    pub e_ehsize: u16,
    /// Size of each program header entry.
    pub e_phentsize: u16,
    /// Number of program header entries.
    pub e_phnum: u16,
    /// Size of each section header entry.
    pub e_shentsize: u16,
    /// Number of section header entries.
    pub e_shnum: u16,
    /// Section header string table index.
    pub e_shstrndx: u16,
}

impl FileHeader {
    /// Returns the sum of the `EI_PAD` bytes.
    #[must_use]
    pub fn padding_sum(&self) -> u32 {
        self.ei_pad.iter().map(|&b| u32::from(b)).sum()
    }

    /// Returns `true` if any padding byte is non-zero.
    ///
    /// This is an anomaly worth reporting, not a decode failure.
    #[must_use]
    pub fn has_nonzero_padding(&self) -> bool {
        self.padding_sum() != 0
    }

    /// Returns `true` if the tables in this file use the ELF64 little-endian
    /// layout this crate decodes.
    #[must_use]
    pub fn is_native_layout(&self) -> bool {
        self.ei_class == Class::Elf64 && self.ei_data == DataEncoding::LittleEndian
    }

    /// Checks the layout required by the table decoders.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError::UnsupportedClass`] or
    /// [`ElfError::UnsupportedEncoding`] for any other layout.
    pub fn require_native_layout(&self) -> Result<(), ElfError> {
        if self.ei_class != Class::Elf64 {
            return Err(ElfError::UnsupportedClass(self.ei_class));
        }
        if self.ei_data != DataEncoding::LittleEndian {
            return Err(ElfError::UnsupportedEncoding(self.ei_data));
        }
        Ok(())
    }

    /// Re-serializes the header into its 64-byte on-disk form.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; ELF64_EHDR_SIZE] {
        let mut b = [0u8; ELF64_EHDR_SIZE];
        b[0..4].copy_from_slice(&self.ei_magic);
        b[4] = self.ei_class.raw();
        b[5] = self.ei_data.raw();
        b[6] = self.ei_version.raw();
        b[7] = self.ei_osabi.raw();
        b[8] = self.ei_abiversion;
        b[9..16].copy_from_slice(&self.ei_pad);
        b[16..18].copy_from_slice(&self.e_type.raw().to_le_bytes());
        b[18..20].copy_from_slice(&self.e_machine.raw().to_le_bytes());
        b[20..24].copy_from_slice(&self.e_version.raw().to_le_bytes());
        b[24..32].copy_from_slice(&self.e_entry.to_le_bytes());
        b[32..40].copy_from_slice(&self.e_phoff.to_le_bytes());
        b[40..48].copy_from_slice(&self.e_shoff.to_le_bytes());
        b[48..52].copy_from_slice(&self.e_flags.to_le_bytes());
        b[52..54].copy_from_slice(&self.e_ehsize.to_le_bytes());
        b[54..56].copy_from_slice(&self.e_phentsize.to_le_bytes());
        b[56..58].copy_from_slice(&self.e_phnum.to_le_bytes());
        b[58..60].copy_from_slice(&self.e_shentsize.to_le_bytes());
        b[60..62].copy_from_slice(&self.e_shnum.to_le_bytes());
        b[62..64].copy_from_slice(&self.e_shstrndx.to_le_bytes());
        b
    }
}

/// Decodes the ELF64 file header.
///
/// Out-of-range enumerated values never fail; they decode to their
/// `Unrecognized` variant.
///
/// # Errors
///
/// Returns [`ElfError::TruncatedHeader`] if the source is shorter than
/// [`ELF64_EHDR_SIZE`].
pub fn decode_header(source: &ByteSource<'_>) -> Result<FileHeader, ElfError> {
    let h = source
        .sub(0, ELF64_EHDR_SIZE as u64)
        .map_err(|_| ElfError::TruncatedHeader)?;
    let ident = h.slice(0, 16)?;

    let mut ei_magic = [0u8; 4];
    ei_magic.copy_from_slice(&ident[0..4]);
    let mut ei_pad = [0u8; EI_PAD_LEN];
    ei_pad.copy_from_slice(&ident[9..16]);

    Ok(FileHeader {
        ei_magic,
        ei_class: Class::from_raw(ident[4]),
        ei_data: DataEncoding::from_raw(ident[5]),
        ei_version: IdentVersion::from_raw(ident[6]),
        ei_osabi: OsAbi::from_raw(ident[7]),
        ei_abiversion: ident[8],
        ei_pad,
        e_type: ObjectType::from_raw(h.read_u16(16)?),
        e_machine: Machine::from_raw(h.read_u16(18)?),
        e_version: FileVersion::from_raw(h.read_u32(20)?),
        e_entry: h.read_u64(24)?,
        e_phoff: h.read_u64(32)?,
        e_shoff: h.read_u64(40)?,
        e_flags: h.read_u32(48)?,
        e_ehsize: h.read_u16(52)?,
        e_phentsize: h.read_u16(54)?,
        e_phnum: h.read_u16(56)?,
        e_shentsize: h.read_u16(58)?,
        e_shnum: h.read_u16(60)?,
        e_shstrndx: h.read_u16(62)?,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::section::ELF64_SHDR_SIZE;
    use crate::segment::ELF64_PHDR_SIZE;
    use crate::source::ELF_MAGIC;

    /// Build a minimal valid ELF64 header (64 bytes) as a `Vec<u8>`.
    ///
    /// Defaults: `ET_EXEC`, `EM_X86_64`, entry=0x401000, phoff=64, phnum=0,
    /// phentsize=56, shentsize=64, no sections.
    pub(crate) fn make_elf_header() -> Vec<u8> {
        let mut buf = vec![0u8; ELF64_EHDR_SIZE];

        buf[0..4].copy_from_slice(&ELF_MAGIC);
        // ELFCLASS64, ELFDATA2LSB, EV_CURRENT, ELFOSABI_SYSV
        buf[4] = 2;
        buf[5] = 1;
        buf[6] = 1;
        buf[7] = 0;
        // e_type: ET_EXEC
        buf[16..18].copy_from_slice(&2u16.to_le_bytes());
        // e_machine: EM_X86_64
        buf[18..20].copy_from_slice(&62u16.to_le_bytes());
        // e_version
        buf[20..24].copy_from_slice(&1u32.to_le_bytes());
        // e_entry
        buf[24..32].copy_from_slice(&0x0040_1000u64.to_le_bytes());
        // e_phoff: right after header
        buf[32..40].copy_from_slice(&(ELF64_EHDR_SIZE as u64).to_le_bytes());
        // e_ehsize
        buf[52..54].copy_from_slice(&(ELF64_EHDR_SIZE as u16).to_le_bytes());
        // e_phentsize
        buf[54..56].copy_from_slice(&(ELF64_PHDR_SIZE as u16).to_le_bytes());
        // e_shentsize
        buf[58..60].copy_from_slice(&(ELF64_SHDR_SIZE as u16).to_le_bytes());

        buf
    }

    fn decode(buf: &[u8]) -> Result<FileHeader, ElfError> {
        decode_header(&ByteSource::new(buf)?)
    }

    #[test]
    fn parse_valid_header() {
        let buf = make_elf_header();
        let hdr = decode(&buf).expect("valid header");
        assert_eq!(hdr.ei_class, Class::Elf64);
        assert_eq!(hdr.ei_data, DataEncoding::LittleEndian);
        assert_eq!(hdr.ei_version, IdentVersion::Current);
        assert_eq!(hdr.ei_osabi, OsAbi::SysV);
        assert_eq!(hdr.e_type, ObjectType::Executable);
        assert_eq!(hdr.e_machine, Machine::X86_64);
        assert_eq!(hdr.e_version, FileVersion::Current);
        assert_eq!(hdr.e_entry, 0x0040_1000);
        assert_eq!(hdr.e_phoff, ELF64_EHDR_SIZE as u64);
        assert_eq!(hdr.e_phnum, 0);
        assert_eq!(hdr.e_phentsize, ELF64_PHDR_SIZE as u16);
        assert!(hdr.is_native_layout());
        assert!(!hdr.has_nonzero_padding());
    }

    #[test]
    fn undefined_class_is_not_fatal() {
        let mut buf = make_elf_header();
        buf[4] = 3;
        let hdr = decode(&buf).expect("header still decodes");
        assert_eq!(hdr.ei_class, Class::Unrecognized(3));
        assert_eq!(hdr.ei_class.to_string(), "unknown (0x3)");
        assert_eq!(
            hdr.require_native_layout(),
            Err(ElfError::UnsupportedClass(Class::Unrecognized(3)))
        );
    }

    #[test]
    fn big_endian_is_observed_not_decoded() {
        let mut buf = make_elf_header();
        buf[5] = 2;
        let hdr = decode(&buf).expect("header still decodes");
        assert_eq!(hdr.ei_data, DataEncoding::BigEndian);
        assert_eq!(
            hdr.require_native_layout(),
            Err(ElfError::UnsupportedEncoding(DataEncoding::BigEndian))
        );
    }

    #[test]
    fn elf32_class_is_reported() {
        let mut buf = make_elf_header();
        buf[4] = 1;
        let hdr = decode(&buf).unwrap();
        assert_eq!(hdr.ei_class, Class::Elf32);
        assert!(!hdr.is_native_layout());
    }

    #[test]
    fn nonzero_padding_is_soft() {
        let mut buf = make_elf_header();
        buf[9] = 1;
        buf[15] = 0xff;
        let hdr = decode(&buf).unwrap();
        assert_eq!(hdr.padding_sum(), 0x100);
        assert!(hdr.has_nonzero_padding());
    }

    #[test]
    fn reject_bad_magic() {
        let mut buf = make_elf_header();
        buf[0] = 0x00;
        assert_eq!(decode(&buf), Err(ElfError::InvalidSignature));
    }

    #[test]
    fn reject_truncated_data() {
        let buf = make_elf_header();
        assert_eq!(decode(&buf[..63]), Err(ElfError::TruncatedHeader));
        assert_eq!(decode(&buf[..4]), Err(ElfError::TruncatedHeader));
    }

    #[test]
    fn reserialize_reproduces_input() {
        let mut buf = make_elf_header();
        // Fill every field with a distinct, mostly out-of-range pattern.
        for (i, b) in buf.iter_mut().enumerate().skip(4) {
            *b = (i as u8).wrapping_mul(37).wrapping_add(5);
        }
        let hdr = decode(&buf).unwrap();
        assert_eq!(hdr.to_bytes().as_slice(), buf.as_slice());

        let plain = make_elf_header();
        assert_eq!(decode(&plain).unwrap().to_bytes().as_slice(), plain.as_slice());
    }

    #[test]
    fn class_and_data_names() {
        assert_eq!(Class::from_raw(0), Class::None);
        assert_eq!(Class::from_raw(1), Class::Elf32);
        assert_eq!(Class::from_raw(2).to_string(), "64-bit architecture");
        assert_eq!(DataEncoding::from_raw(0), DataEncoding::None);
        assert_eq!(DataEncoding::from_raw(2), DataEncoding::BigEndian);
        for raw in 3..=u8::MAX {
            assert_eq!(Class::from_raw(raw), Class::Unrecognized(raw));
            assert_eq!(DataEncoding::from_raw(raw), DataEncoding::Unrecognized(raw));
        }
        assert_eq!(IdentVersion::from_raw(7), IdentVersion::Unrecognized(7));
        assert_eq!(FileVersion::from_raw(0x1234_5678).raw(), 0x1234_5678);
    }

    #[test]
    fn os_abi_table() {
        let known: &[(u8, OsAbi)] = &[
            (0, OsAbi::SysV),
            (1, OsAbi::HpUx),
            (2, OsAbi::NetBsd),
            (3, OsAbi::Linux),
            (4, OsAbi::Hurd),
            (6, OsAbi::Solaris),
            (7, OsAbi::Aix),
            (8, OsAbi::Irix),
            (9, OsAbi::FreeBsd),
            (10, OsAbi::Tru64),
            (11, OsAbi::Modesto),
            (12, OsAbi::OpenBsd),
            (13, OsAbi::OpenVms),
            (14, OsAbi::Nsk),
            (15, OsAbi::Aros),
            (16, OsAbi::FenixOs),
            (17, OsAbi::CloudAbi),
            (18, OsAbi::OpenVos),
            (64, OsAbi::ArmAeabi),
            (97, OsAbi::Arm),
            (255, OsAbi::Standalone),
        ];
        for &(raw, abi) in known {
            assert_eq!(OsAbi::from_raw(raw), abi);
            assert_eq!(abi.raw(), raw);
            assert!(abi.description().is_some());
        }
        for raw in 0..=u8::MAX {
            let abi = OsAbi::from_raw(raw);
            assert_eq!(abi.raw(), raw);
            let listed = known.iter().any(|&(k, _)| k == raw);
            assert_eq!(abi.is_recognized(), listed, "EI_OSABI {raw}");
        }
        assert_eq!(OsAbi::from_raw(5), OsAbi::Unrecognized(5));
        assert_eq!(OsAbi::from_raw(200), OsAbi::Unrecognized(200));
    }

    #[test]
    fn object_type_ranges() {
        assert_eq!(ObjectType::from_raw(0), ObjectType::None);
        assert_eq!(ObjectType::from_raw(1), ObjectType::Relocatable);
        assert_eq!(ObjectType::from_raw(3), ObjectType::SharedObject);
        assert_eq!(ObjectType::from_raw(4), ObjectType::Core);
        assert_eq!(ObjectType::from_raw(5), ObjectType::Unrecognized(5));
        assert_eq!(ObjectType::from_raw(0xfe10), ObjectType::OsSpecific(0xfe10));
        assert_eq!(
            ObjectType::from_raw(0xffff),
            ObjectType::ProcessorSpecific(0xffff)
        );
        for raw in [0u16, 2, 5, 0xfe00, 0xff00, 0x1234] {
            assert_eq!(ObjectType::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn display_errors() {
        let errors = [
            ElfError::InvalidSignature,
            ElfError::TruncatedHeader,
            ElfError::OutOfBounds { offset: 0x40, len: 0x38 },
            ElfError::UnsupportedClass(Class::Elf32),
            ElfError::UnsupportedEncoding(DataEncoding::BigEndian),
            ElfError::EntrySizeTooSmall { declared: 8, required: 56 },
        ];
        for err in &errors {
            let msg = format!("{err}");
            assert!(!msg.is_empty());
        }
    }
}
