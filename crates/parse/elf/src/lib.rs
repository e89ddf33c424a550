//! Read-only ELF64 structural decoder.
//!
//! Decodes the file header, program header table, section header table,
//! and string-table sections from a raw byte slice using safe field
//! extraction (`from_le_bytes`). No unsafe code, no allocations.
//!
//! Every read is bounds-checked. A bad magic or a truncated header aborts
//! decoding; an out-of-range table entry or string section only fails that
//! entry. Enumerated fields never fail to decode: values outside the known
//! set are kept as `Unrecognized(raw)`.
//!
//! # Usage
//!
//! ```
//! use elfdump_elf::{ByteSource, decode_header, decode_section_headers, extract_strings};
//!
//! fn dump(data: &[u8]) -> Result<(), elfdump_elf::ElfError> {
//!     let source = ByteSource::new(data)?;
//!     let header = decode_header(&source)?;
//!     let sections = decode_section_headers(&source, &header)?;
//!     for table in extract_strings(&source, &sections) {
//!         for s in table.strings? {
//!             // s.offset is relative to the start of the file
//!             let _ = (s.offset, s.bytes);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

mod macros;

pub mod file;
pub mod header;
pub mod machine;
pub mod section;
pub mod segment;
pub mod source;
pub mod strtab;
pub mod table;

pub use file::ElfFile;
pub use header::{
    Class, DataEncoding, ELF64_EHDR_SIZE, ElfError, FileHeader, FileVersion, IdentVersion,
    ObjectType, OsAbi, decode_header,
};
pub use machine::Machine;
pub use section::{
    ELF64_SHDR_SIZE, SectionFlags, SectionHeaderEntry, SectionHeaderIter, SectionHeaderTable,
    SectionType, decode_section_headers,
};
pub use segment::{
    ELF64_PHDR_SIZE, ProgramHeaderEntry, ProgramHeaderIter, ProgramHeaderTable, SegmentFlags,
    SegmentType, decode_program_headers,
};
pub use source::{ByteSource, ELF_MAGIC};
pub use strtab::{StringRecord, StringTable, StringTableSection, StringTables, Strings, extract_strings};
pub use table::{Table, TableEntry, TableIter};
