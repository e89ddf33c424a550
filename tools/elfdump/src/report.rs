//! Decoded view of an ELF file, shared by the text and JSON renderers.
//!
//! The report is built once from an [`ElfFile`] and then rendered. Table-level
//! failures (an unsupported layout, a bad entry size) become [`Part::Failed`]
//! so the parts that did decode are still shown; a single out-of-range entry
//! becomes an [`Entry::Err`] row and the rest of its table is unaffected.

use std::path::Path;

use elfdump_elf::{
    ElfError, ElfFile, FileHeader, ProgramHeaderEntry, SectionHeaderEntry, StringTable, Table,
    TableEntry,
};
use serde::Serialize;

use crate::cli::Selection;
use crate::verbose::{Timer, vprintln};

/// Everything elfdump knows about one file.
#[derive(Serialize)]
pub struct Report {
    pub file: String,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Part<TableReport<SegmentRow>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Part<TableReport<SectionRow>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<Part<Vec<StringSection>>>,
}

impl Report {
    /// Number of selected parts that could not be decoded at all.
    pub fn failed_parts(&self) -> usize {
        [
            self.segments.as_ref().is_some_and(Part::is_failed),
            self.sections.as_ref().is_some_and(Part::is_failed),
            self.strings.as_ref().is_some_and(Part::is_failed),
        ]
        .into_iter()
        .filter(|&failed| failed)
        .count()
    }
}

/// A part of the report that either decoded or failed as a whole.
#[derive(Serialize)]
#[serde(untagged)]
pub enum Part<T> {
    Decoded(T),
    Failed { error: String },
}

impl<T> Part<T> {
    fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl<T> From<Result<T, ElfError>> for Part<T> {
    fn from(res: Result<T, ElfError>) -> Self {
        match res {
            Ok(value) => Self::Decoded(value),
            Err(err) => Self::Failed {
                error: err.to_string(),
            },
        }
    }
}

/// How a header value is shown in text output.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Hex,
    Decimal,
    Char,
}

/// One row of the file header table.
#[derive(Serialize)]
pub struct HeaderField {
    pub offset: usize,
    pub name: &'static str,
    pub value: u64,
    pub meaning: String,
    pub size: usize,
    #[serde(rename = "type")]
    pub ty: &'static str,
    #[serde(skip)]
    pub style: ValueStyle,
}

/// The decoded file header.
#[derive(Serialize)]
pub struct HeaderReport {
    pub fields: Vec<HeaderField>,
    pub padding_sum: u32,
}

/// Geometry and rows of a decoded table.
#[derive(Serialize)]
pub struct TableReport<T> {
    pub offset: u64,
    pub entry_size: u16,
    pub count: usize,
    pub entries: Vec<Entry<T>>,
}

/// A table row, or the reason that index could not be decoded.
#[derive(Serialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Ok(T),
    Err { index: usize, error: String },
}

/// One program header.
#[derive(Serialize)]
pub struct SegmentRow {
    pub index: usize,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_raw: u32,
    pub flags: String,
    pub offset: u64,
    pub vaddr: u64,
    pub paddr: u64,
    pub filesz: u64,
    pub memsz: u64,
    pub align: u64,
}

/// One section header.
#[derive(Serialize)]
pub struct SectionRow {
    pub index: usize,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_raw: u32,
    pub flags: String,
    pub flags_raw: u64,
    pub addr: u64,
    pub offset: u64,
    pub size: u64,
    pub link: u32,
    pub info: u32,
    pub addralign: u64,
    pub entsize: u64,
}

/// The strings found in one string-table section.
#[derive(Serialize)]
pub struct StringSection {
    pub index: usize,
    pub name: Option<String>,
    pub offset: u64,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub strings: Vec<StringRow>,
}

/// One string and its file offset.
#[derive(Serialize)]
pub struct StringRow {
    pub offset: u64,
    pub value: String,
}

/// Decodes the selected parts of `elf`.
pub fn build(path: &Path, elf: &ElfFile<'_>, selection: Selection) -> Report {
    let names = elf.section_name_table();
    if names.is_none() && (selection.sections || selection.strings) {
        vprintln!(
            "e_shstrndx {} does not name a usable string table, section names unavailable",
            elf.header().e_shstrndx
        );
    }

    Report {
        file: path.display().to_string(),
        size: elf.source().len(),
        header: selection.header.then(|| header_report(elf.header())),
        segments: selection.segments.then(|| {
            let _t = Timer::start("program headers");
            elf.program_headers()
                .map(|table| table_report(&table, "program header", segment_row))
                .into()
        }),
        sections: selection.sections.then(|| {
            let _t = Timer::start("section headers");
            elf.section_headers()
                .map(|table| {
                    table_report(&table, "section header", |index, entry| {
                        section_row(index, entry, names.as_ref())
                    })
                })
                .into()
        }),
        strings: selection.strings.then(|| {
            let _t = Timer::start("string tables");
            string_sections(elf, names.as_ref()).into()
        }),
    }
}

fn table_report<T: TableEntry, R>(
    table: &Table<'_, T>,
    what: &str,
    mut row: impl FnMut(usize, &T) -> R,
) -> TableReport<R> {
    vprintln!(
        "{what} table: offset={:#x} entsize={} count={}",
        table.offset(),
        table.entry_size(),
        table.len()
    );
    let entries = table
        .iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Ok(entry) => Entry::Ok(row(index, &entry)),
            Err(err) => {
                vprintln!("{what} {index}: {err}");
                Entry::Err {
                    index,
                    error: err.to_string(),
                }
            }
        })
        .collect();
    TableReport {
        offset: table.offset(),
        entry_size: table.entry_size(),
        count: table.len(),
        entries,
    }
}

fn segment_row(index: usize, p: &ProgramHeaderEntry) -> SegmentRow {
    SegmentRow {
        index,
        kind: p.p_type.to_string(),
        type_raw: p.p_type.raw(),
        flags: p.p_flags.to_string(),
        offset: p.p_offset,
        vaddr: p.p_vaddr,
        paddr: p.p_paddr,
        filesz: p.p_filesz,
        memsz: p.p_memsz,
        align: p.p_align,
    }
}

fn section_row(index: usize, s: &SectionHeaderEntry, names: Option<&StringTable<'_>>) -> SectionRow {
    SectionRow {
        index,
        name: names.and_then(|n| s.name(n)).map(str::to_owned),
        kind: s.sh_type.to_string(),
        type_raw: s.sh_type.raw(),
        flags: s.sh_flags.to_string(),
        flags_raw: s.sh_flags.bits(),
        addr: s.sh_addr,
        offset: s.sh_offset,
        size: s.sh_size,
        link: s.sh_link,
        info: s.sh_info,
        addralign: s.sh_addralign,
        entsize: s.sh_entsize,
    }
}

fn string_sections(
    elf: &ElfFile<'_>,
    names: Option<&StringTable<'_>>,
) -> Result<Vec<StringSection>, ElfError> {
    let tables = elf.string_tables()?;
    Ok(tables
        .map(|table| {
            let (strings, error) = match table.strings {
                Ok(strings) => (
                    strings
                        .map(|s| StringRow {
                            offset: s.offset,
                            value: s.to_string(),
                        })
                        .collect(),
                    None,
                ),
                Err(err) => {
                    vprintln!("string table {}: {err}", table.index);
                    (Vec::new(), Some(err.to_string()))
                }
            };
            StringSection {
                index: table.index,
                name: names.and_then(|n| table.header.name(n)).map(str::to_owned),
                offset: table.header.sh_offset,
                size: table.header.sh_size,
                error,
                strings,
            }
        })
        .collect())
}

fn field(
    offset: usize,
    name: &'static str,
    value: impl Into<u64>,
    meaning: impl ToString,
    size: usize,
    ty: &'static str,
    style: ValueStyle,
) -> HeaderField {
    HeaderField {
        offset,
        name,
        value: value.into(),
        meaning: meaning.to_string(),
        size,
        ty,
        style,
    }
}

/// Lays out every file header field in file order.
fn header_report(h: &FileHeader) -> HeaderReport {
    use ValueStyle::{Char, Decimal, Hex};

    let [mag0, mag1, mag2, mag3] = h.ei_magic;
    let fields = vec![
        field(0x00, "EI_MAG0", mag0, "Magic number 0", 1, "uint8_t", Hex),
        field(0x01, "EI_MAG1", mag1, "Magic number 1", 1, "uint8_t", Char),
        field(0x02, "EI_MAG2", mag2, "Magic number 2", 1, "uint8_t", Char),
        field(0x03, "EI_MAG3", mag3, "Magic number 3", 1, "uint8_t", Char),
        field(0x04, "EI_CLASS", h.ei_class.raw(), h.ei_class, 1, "uint8_t", Decimal),
        field(0x05, "EI_DATA", h.ei_data.raw(), h.ei_data, 1, "uint8_t", Decimal),
        field(0x06, "EI_VERSION", h.ei_version.raw(), h.ei_version, 1, "uint8_t", Decimal),
        field(0x07, "EI_OSABI", h.ei_osabi.raw(), h.ei_osabi, 1, "uint8_t", Decimal),
        field(0x08, "EI_ABIVERSION", h.ei_abiversion, "ABI version", 1, "uint8_t", Decimal),
        field(0x09, "EI_PAD", h.padding_sum(), "Padding (sum)", 7, "uint8_t[7]", Hex),
        field(0x10, "e_type", h.e_type.raw(), h.e_type, 2, "Elf64_Half", Hex),
        field(0x12, "e_machine", h.e_machine.raw(), h.e_machine, 2, "Elf64_Half", Decimal),
        field(0x14, "e_version", h.e_version.raw(), h.e_version, 4, "Elf64_Word", Decimal),
        field(0x18, "e_entry", h.e_entry, "Entry point", 8, "Elf64_Addr", Hex),
        field(0x20, "e_phoff", h.e_phoff, "Program header offset", 8, "Elf64_Off", Hex),
        field(0x28, "e_shoff", h.e_shoff, "Section header offset", 8, "Elf64_Off", Hex),
        field(0x30, "e_flags", h.e_flags, "Processor flags", 4, "Elf64_Word", Hex),
        field(0x34, "e_ehsize", h.e_ehsize, "ELF header size", 2, "Elf64_Half", Decimal),
        field(0x36, "e_phentsize", h.e_phentsize, "Program header size", 2, "Elf64_Half", Decimal),
        field(0x38, "e_phnum", h.e_phnum, "Program header count", 2, "Elf64_Half", Decimal),
        field(0x3a, "e_shentsize", h.e_shentsize, "Section header size", 2, "Elf64_Half", Decimal),
        field(0x3c, "e_shnum", h.e_shnum, "Section header count", 2, "Elf64_Half", Decimal),
        field(0x3e, "e_shstrndx", h.e_shstrndx, "Section name table", 2, "Elf64_Half", Decimal),
    ];
    HeaderReport {
        fields,
        padding_sum: h.padding_sum(),
    }
}
