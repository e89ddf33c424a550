//! elfdump, an ELF64 structure inspector.
//!
//! Reads a file, checks the magic, decodes the file header and then, as
//! selected, the program header table, the section header table, and the
//! contents of every string-table section.
//!
//! Pipeline: read file → decode header → decode tables → build report →
//!           render as text or JSON.

mod cli;
mod report;
mod text;
mod verbose;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use elfdump_elf::ElfFile;

use crate::cli::{Cli, Format};
use crate::verbose::{Timer, vprintln, wprintln};

fn main() -> Result<()> {
    let cli = Cli::parse();
    verbose::init(cli.quiet, cli.verbose);

    let data = {
        let _t = Timer::start("read");
        std::fs::read(&cli.file)
            .with_context(|| format!("failed to read {}", cli.file.display()))?
    };
    if data.is_empty() {
        bail!("{}: file is empty", cli.file.display());
    }
    vprintln!("read {} bytes from {}", data.len(), cli.file.display());

    let elf = ElfFile::parse(&data)
        .with_context(|| format!("{}: cannot decode ELF header", cli.file.display()))?;
    check_header(&elf);

    let report = report::build(&cli.file, &elf, cli.selection());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => text::render(&mut out, &report)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    let failed = report.failed_parts();
    if failed > 0 {
        bail!("{failed} part(s) of {} could not be decoded", cli.file.display());
    }
    Ok(())
}

/// Warns about header anomalies that do not stop decoding.
fn check_header(elf: &ElfFile<'_>) {
    let header = elf.header();
    if header.has_nonzero_padding() {
        wprintln!(
            "warning: EI_PAD bytes sum to {:#x}, expected 0",
            header.padding_sum()
        );
    }
    if !header.is_native_layout() {
        wprintln!(
            "warning: {} / {} is not ELF64 little-endian; tables will not be decoded",
            header.ei_class,
            header.ei_data
        );
    }
    vprintln!(
        "{} for {}, entry point {:#x}",
        header.e_type,
        header.e_machine,
        elf.entry_point()
    );
}
