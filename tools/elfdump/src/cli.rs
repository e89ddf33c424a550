//! Command-line interface definitions for elfdump.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Inspect the structure of an ELF64 file.
#[derive(Parser)]
#[command(name = "elfdump", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// ELF file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show the file header (the default when nothing else is selected).
    #[arg(long)]
    pub file_header: bool,

    /// Show the program header table.
    #[arg(long)]
    pub segments: bool,

    /// Show the section header table.
    #[arg(long)]
    pub sections: bool,

    /// List the strings of every string-table section.
    #[arg(long)]
    pub strings: bool,

    /// Show everything.
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Suppress progress output; show only results and errors.
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with table geometry and timings.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Output formats.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable tables.
    Text,
    /// A single JSON document.
    Json,
}

/// Which parts of the file to report on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Selection {
    pub header: bool,
    pub segments: bool,
    pub sections: bool,
    pub strings: bool,
}

impl Cli {
    /// Resolves the selector flags. With none given, only the header is shown.
    pub fn selection(&self) -> Selection {
        let any = self.file_header || self.segments || self.sections || self.strings;
        if self.all {
            return Selection {
                header: true,
                segments: true,
                sections: true,
                strings: true,
            };
        }
        Selection {
            header: self.file_header || !any,
            segments: self.segments,
            sections: self.sections,
            strings: self.strings,
        }
    }
}
