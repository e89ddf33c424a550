//! Human-readable rendering of a [`Report`].

use std::io::{self, Write};

use crate::report::{
    Entry, HeaderField, HeaderReport, Part, Report, SectionRow, SegmentRow, StringSection,
    TableReport, ValueStyle,
};

/// Writes every selected part of `report`, separated by blank lines.
pub fn render(out: &mut impl Write, report: &Report) -> io::Result<()> {
    let mut first = true;
    let mut separate = |out: &mut dyn Write| -> io::Result<()> {
        if !std::mem::take(&mut first) {
            writeln!(out)?;
        }
        Ok(())
    };

    if let Some(header) = &report.header {
        separate(out)?;
        render_header(out, header)?;
    }
    if let Some(segments) = &report.segments {
        separate(out)?;
        writeln!(out, "Program Headers")?;
        render_part(out, segments, render_segments)?;
    }
    if let Some(sections) = &report.sections {
        separate(out)?;
        writeln!(out, "Section Headers")?;
        render_part(out, sections, render_sections)?;
    }
    if let Some(strings) = &report.strings {
        separate(out)?;
        writeln!(out, "Strings")?;
        render_part(out, strings, |out, s| render_strings(out, s))?;
    }
    Ok(())
}

fn render_part<W: Write, T>(
    out: &mut W,
    part: &Part<T>,
    body: impl FnOnce(&mut W, &T) -> io::Result<()>,
) -> io::Result<()> {
    match part {
        Part::Decoded(value) => body(out, value),
        Part::Failed { error } => {
            writeln!(out)?;
            writeln!(out, "  error: {error}")
        }
    }
}

fn header_value(f: &HeaderField) -> String {
    match f.style {
        ValueStyle::Hex => format!("{:#x}", f.value),
        ValueStyle::Decimal => f.value.to_string(),
        ValueStyle::Char => u8::try_from(f.value)
            .ok()
            .filter(u8::is_ascii_graphic)
            .map_or_else(|| format!("{:#x}", f.value), |b| char::from(b).to_string()),
    }
}

fn render_header(out: &mut impl Write, header: &HeaderReport) -> io::Result<()> {
    writeln!(out, "Elf Header")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:>6} {:>13} {:>18} {:>34} {:>6} {:>12}",
        "Offset", "Name", "Value", "Meaning", "Size", "Type"
    )?;
    for f in &header.fields {
        writeln!(
            out,
            "{:#06x} {:>13} {:>18} {:>34} {:>6} {:>12}",
            f.offset,
            f.name,
            header_value(f),
            f.meaning,
            f.size,
            f.ty
        )?;
    }
    Ok(())
}

fn table_summary<W: Write, T>(out: &mut W, table: &TableReport<T>) -> io::Result<()> {
    writeln!(
        out,
        "  {} entries at offset {:#x}, {} bytes each",
        table.count, table.offset, table.entry_size
    )?;
    writeln!(out)
}

fn error_row(out: &mut impl Write, index: usize, error: &str) -> io::Result<()> {
    writeln!(out, "  [{index:>3}] <error: {error}>")
}

fn render_segments(out: &mut impl Write, table: &TableReport<SegmentRow>) -> io::Result<()> {
    table_summary(out, table)?;
    writeln!(
        out,
        "  [Nr]  {:<14} {:<5} {:<18} {:<18} {:<18} {:<18} {:<18} {}",
        "Type", "Flags", "Offset", "VirtAddr", "PhysAddr", "FileSiz", "MemSiz", "Align"
    )?;
    for entry in &table.entries {
        match entry {
            Entry::Ok(p) => writeln!(
                out,
                "  [{:>3}] {:<14} {:<5} {:#018x} {:#018x} {:#018x} {:#018x} {:#018x} {:#x}",
                p.index, p.kind, p.flags, p.offset, p.vaddr, p.paddr, p.filesz, p.memsz, p.align
            )?,
            Entry::Err { index, error } => error_row(out, *index, error)?,
        }
    }
    Ok(())
}

fn render_sections(out: &mut impl Write, table: &TableReport<SectionRow>) -> io::Result<()> {
    table_summary(out, table)?;
    writeln!(
        out,
        "  [Nr]  {:<20} {:<14} {:<5} {:<18} {:<10} {:<10} {:>4} {:>4} {:>5} {}",
        "Name", "Type", "Flags", "Address", "Offset", "Size", "Link", "Info", "Align", "EntSize"
    )?;
    for entry in &table.entries {
        match entry {
            Entry::Ok(s) => writeln!(
                out,
                "  [{:>3}] {:<20} {:<14} {:<5} {:#018x} {:#010x} {:#010x} {:>4} {:>4} {:>5} {:#x}",
                s.index,
                s.name.as_deref().unwrap_or("?"),
                s.kind,
                s.flags,
                s.addr,
                s.offset,
                s.size,
                s.link,
                s.info,
                s.addralign,
                s.entsize
            )?,
            Entry::Err { index, error } => error_row(out, *index, error)?,
        }
    }
    Ok(())
}

fn render_strings(out: &mut impl Write, sections: &[StringSection]) -> io::Result<()> {
    if sections.is_empty() {
        writeln!(out)?;
        return writeln!(out, "  no string tables");
    }
    for section in sections {
        writeln!(out)?;
        writeln!(
            out,
            "  [{:>3}] {} at offset {:#x}, {} bytes",
            section.index,
            section.name.as_deref().unwrap_or("?"),
            section.offset,
            section.size
        )?;
        if let Some(error) = &section.error {
            writeln!(out, "  <error: {error}>")?;
            continue;
        }
        for s in &section.strings {
            writeln!(out, "  {:#010x}  {}", s.offset, s.value)?;
        }
    }
    Ok(())
}
