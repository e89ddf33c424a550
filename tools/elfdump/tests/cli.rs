//! Integration tests for the elfdump binary.
//!
//! Each test writes a synthetic ELF file into a temporary directory and runs
//! the built binary against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Builds a small ELF64 little-endian executable:
/// one `PT_LOAD` segment and four sections (NULL, .strtab, .text, .shstrtab).
fn sample_elf() -> Vec<u8> {
    const PHOFF: usize = 64;
    const SHOFF: usize = PHOFF + 56;
    const DATA: usize = SHOFF + 4 * 64;

    let strtab: &[u8] = b"\0hello\0world\0";
    let text: &[u8] = &[0xc3, 0x90, 0x90, 0x90];
    let shstrtab: &[u8] = b"\0.strtab\0.text\0.shstrtab\0";
    let strtab_off = DATA;
    let text_off = strtab_off + strtab.len();
    let shstrtab_off = text_off + text.len();

    let mut buf = vec![0u8; DATA];
    buf[..4].copy_from_slice(b"\x7fELF");
    buf[4] = 2; // ELFCLASS64
    buf[5] = 1; // ELFDATA2LSB
    buf[6] = 1; // EV_CURRENT
    put(&mut buf, 16, &2u16.to_le_bytes()); // ET_EXEC
    put(&mut buf, 18, &62u16.to_le_bytes()); // EM_X86_64
    put(&mut buf, 20, &1u32.to_le_bytes());
    put(&mut buf, 24, &0x40_1000u64.to_le_bytes());
    put(&mut buf, 32, &(PHOFF as u64).to_le_bytes());
    put(&mut buf, 40, &(SHOFF as u64).to_le_bytes());
    put(&mut buf, 52, &64u16.to_le_bytes());
    put(&mut buf, 54, &56u16.to_le_bytes());
    put(&mut buf, 56, &1u16.to_le_bytes());
    put(&mut buf, 58, &64u16.to_le_bytes());
    put(&mut buf, 60, &4u16.to_le_bytes());
    put(&mut buf, 62, &3u16.to_le_bytes());

    // PT_LOAD, R-X
    put(&mut buf, PHOFF, &1u32.to_le_bytes());
    put(&mut buf, PHOFF + 4, &5u32.to_le_bytes());
    put(&mut buf, PHOFF + 8, &(text_off as u64).to_le_bytes());
    put(&mut buf, PHOFF + 16, &0x40_1000u64.to_le_bytes());
    put(&mut buf, PHOFF + 24, &0x40_1000u64.to_le_bytes());
    put(&mut buf, PHOFF + 32, &(text.len() as u64).to_le_bytes());
    put(&mut buf, PHOFF + 40, &(text.len() as u64).to_le_bytes());
    put(&mut buf, PHOFF + 48, &0x1000u64.to_le_bytes());

    let sections: [(u32, u32, u64, usize, usize); 3] = [
        (1, 3, 0, strtab_off, strtab.len()),
        (9, 1, 0x6, text_off, text.len()),
        (15, 3, 0, shstrtab_off, shstrtab.len()),
    ];
    for (i, (name, ty, flags, offset, size)) in sections.into_iter().enumerate() {
        let at = SHOFF + (i + 1) * 64;
        put(&mut buf, at, &name.to_le_bytes());
        put(&mut buf, at + 4, &ty.to_le_bytes());
        put(&mut buf, at + 8, &flags.to_le_bytes());
        put(&mut buf, at + 24, &(offset as u64).to_le_bytes());
        put(&mut buf, at + 32, &(size as u64).to_le_bytes());
        put(&mut buf, at + 48, &1u64.to_le_bytes());
    }

    buf.extend_from_slice(strtab);
    buf.extend_from_slice(text);
    buf.extend_from_slice(shstrtab);
    buf
}

fn put(buf: &mut [u8], at: usize, bytes: &[u8]) {
    buf[at..at + bytes.len()].copy_from_slice(bytes);
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).expect("failed to write fixture");
    path
}

fn elfdump(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elfdump"))
        .args(args)
        .arg(file)
        .output()
        .expect("failed to execute elfdump")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_and_version() {
    let help = Command::new(env!("CARGO_BIN_EXE_elfdump"))
        .arg("--help")
        .output()
        .expect("failed to execute elfdump");
    assert!(help.status.success());
    assert!(stdout(&help).contains("Usage"));

    let version = Command::new(env!("CARGO_BIN_EXE_elfdump"))
        .arg("--version")
        .output()
        .expect("failed to execute elfdump");
    assert!(version.status.success());
    assert!(stdout(&version).starts_with("elfdump "));
}

#[test]
fn missing_file_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_elfdump"))
        .output()
        .expect("failed to execute elfdump");
    assert!(!output.status.success());
}

#[test]
fn header_is_shown_by_default() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample", &sample_elf());
    let output = elfdump(&[], &path);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("Elf Header\n"));
    assert!(out.contains("EI_CLASS"));
    assert!(out.contains("64-bit architecture"));
    assert!(out.contains("0x401000"));
    assert!(!out.contains("Program Headers"));
}

#[test]
fn all_parts_in_text() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample", &sample_elf());
    let output = elfdump(&["--all"], &path);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Program Headers"));
    assert!(out.contains("LOAD"));
    assert!(out.contains("R-X"));
    assert!(out.contains("Section Headers"));
    assert!(out.contains(".shstrtab"));
    assert!(out.contains("PROGBITS"));
    assert!(out.contains("hello"));
    assert!(out.contains("world"));
}

#[test]
fn json_output_parses() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "sample", &sample_elf());
    let output = elfdump(&["--format", "json", "--sections", "--strings"], &path);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert!(json.get("header").is_none());
    let names: Vec<_> = json["sections"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap_or_default().to_owned())
        .collect();
    assert_eq!(names, ["", ".strtab", ".text", ".shstrtab"]);

    let strtab = &json["strings"][0];
    assert_eq!(strtab["index"], 1);
    assert_eq!(strtab["strings"][0]["value"], "hello");
    assert_eq!(strtab["strings"][0]["offset"], 64 + 56 + 4 * 64 + 1);
}

#[test]
fn bad_magic_fails() {
    let dir = TempDir::new().unwrap();
    let mut data = sample_elf();
    data[0] = 0x7e;
    let path = write_file(&dir, "bad", &data);
    let output = elfdump(&[], &path);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ELF"));
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty", &[]);
    let output = elfdump(&[], &path);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("empty"));
}

#[test]
fn truncated_header_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "short", &sample_elf()[..40]);
    let output = elfdump(&[], &path);

    assert!(!output.status.success());
}

#[test]
fn truncated_section_table_reports_rows_and_succeeds() {
    let dir = TempDir::new().unwrap();
    // Cut the file inside the third section header.
    let data = sample_elf();
    let path = write_file(&dir, "cut", &data[..64 + 56 + 2 * 64 + 10]);
    let output = elfdump(&["--sections"], &path);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("4 entries"));
    assert!(out.contains("[  2] <error:"));
    assert!(out.contains("[  3] <error:"));
}

#[test]
fn elf32_header_decodes_but_tables_fail() {
    let dir = TempDir::new().unwrap();
    let mut data = sample_elf();
    data[4] = 1; // ELFCLASS32
    let path = write_file(&dir, "elf32", &data);

    let header_only = elfdump(&[], &path);
    assert!(header_only.status.success());
    assert!(stdout(&header_only).contains("32-bit architecture"));

    let all = elfdump(&["-a"], &path);
    assert!(!all.status.success());
    assert!(stdout(&all).contains("Elf Header"));
    assert!(stdout(&all).contains("error:"));
}

#[test]
fn quiet_hides_warnings() {
    let dir = TempDir::new().unwrap();
    let mut data = sample_elf();
    data[10] = 1; // EI_PAD
    let path = write_file(&dir, "pad", &data);

    let loud = elfdump(&[], &path);
    assert!(loud.status.success());
    assert!(stderr(&loud).contains("EI_PAD"));

    let quiet = elfdump(&["-q"], &path);
    assert!(quiet.status.success());
    assert!(stderr(&quiet).is_empty());
}
