//! End-to-end CLI tests using `assert_cmd`.
//!
//! These tests invoke the compiled binary inside a scratch directory and verify
//! exit codes, log output, and the sidecar files left behind.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use common::{page_marker, write_filing};

const SEPARATOR: &str = "============ page ==============";

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ovd_extractor").unwrap();
    cmd.current_dir(dir).env("RUST_LOG", "info");
    cmd
}

fn txt_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".txt"))
        .collect();
    names.sort();
    names
}

// ─── Help / version ─────────────────────────────────────────────────────

#[test]
fn test_help_lists_options() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--config"));
}

// ─── Argument validation ────────────────────────────────────────────────

#[test]
fn test_no_arguments_fails() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Se debe suministrar al menos un argumento"));
}

#[test]
fn test_file_and_all_are_exclusive() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("causa.pdf"), 20, &[3, 4, 5]);

    cmd(dir.path())
        .args(["--file", "causa.pdf", "--all"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("excluyentes"));
    assert!(txt_files(dir.path()).is_empty());
}

#[test]
fn test_parser_errors_exit_with_one() {
    let dir = tempdir().unwrap();
    for args in [&["-f"][..], &["--bogus"][..], &["--all", "--gap", "abc"][..]] {
        cmd(dir.path()).args(args).assert().code(1);
    }
}

#[test]
fn test_dir_requires_all() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("causa.pdf"), 20, &[3, 4, 5]);

    cmd(dir.path())
        .args(["--dir", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--dir solo puede usarse junto con --all"));
    cmd(dir.path())
        .args(["--file", "causa.pdf", "--dir", "."])
        .assert()
        .code(1);
    assert!(txt_files(dir.path()).is_empty());
}

#[test]
fn test_version_succeeds() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ovd_extractor"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    cmd(dir.path())
        .args(["-f", "no_existe.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("El archivo no existe"));
}

#[test]
fn test_non_pdf_file_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("informe.docx"), b"PK\x03\x04").unwrap();

    cmd(dir.path())
        .args(["--file", "informe.docx"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no es un pdf"));
    assert!(txt_files(dir.path()).is_empty());
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("carpeta.pdf")).unwrap();

    cmd(dir.path())
        .args(["--file", "carpeta.pdf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no es un archivo válido"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("causa.pdf"), 20, &[3, 4, 5]);
    fs::write(dir.path().join("ovd.json"), r#"{ "gap": 0 }"#).unwrap();

    cmd(dir.path())
        .args(["--file", "causa.pdf", "--config", "ovd.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuración inválida"));
    assert!(txt_files(dir.path()).is_empty());
}

// ─── Extraction ─────────────────────────────────────────────────────────

#[test]
fn test_single_file_extracts_report_pages() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("expediente.pdf"), 50, &[10, 11, 12, 13, 14]);

    // success in single-file mode is silent at the default log level
    cmd(dir.path())
        .env("RUST_LOG", "ovd_extractor=info")
        .args(["--file", "expediente.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let content = fs::read_to_string(dir.path().join("expediente.txt")).unwrap();
    let segments: Vec<&str> = content.split(SEPARATOR).skip(1).collect();
    assert_eq!(segments.len(), 5);
    for (segment, page) in segments.iter().zip(10..=14) {
        assert!(segment.contains(&page_marker(page)), "segment {:?} should be page {}", segment, page);
    }
}

#[test]
fn test_single_file_without_report_writes_nothing() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("causa.pdf"), 10, &[4]);

    cmd(dir.path())
        .args(["--file", "causa.pdf"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No se encontró ninguna página de la OVD"));
    assert!(txt_files(dir.path()).is_empty());
}

#[test]
fn test_corrupt_single_file_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roto.pdf"), b"not a pdf at all").unwrap();

    cmd(dir.path())
        .args(["--file", "roto.pdf"])
        .assert()
        .code(1);
    assert!(txt_files(dir.path()).is_empty());
}

#[test]
fn test_all_processes_every_pdf() {
    let dir = tempdir().unwrap();
    write_filing(&dir.path().join("uno.pdf"), 15, &[1, 2, 3]);
    write_filing(&dir.path().join("dos.pdf"), 15, &[7, 8, 9, 10]);
    write_filing(&dir.path().join("tres.pdf"), 15, &[]);
    fs::write(dir.path().join("roto.pdf"), b"garbage").unwrap();

    cmd(dir.path())
        .arg("--all")
        .assert()
        .success()
        .stderr(predicate::str::contains("procesando"))
        .stderr(predicate::str::contains("uno.pdf"));

    assert_eq!(txt_files(dir.path()), vec!["dos.txt", "uno.txt"]);
}

#[test]
fn test_all_with_other_directory_writes_to_working_directory() {
    let work = tempdir().unwrap();
    let input = tempdir().unwrap();
    write_filing(&input.path().join("causa.pdf"), 15, &[1, 2, 3]);

    cmd(work.path())
        .args(["--all", "--dir"])
        .arg(input.path())
        .assert()
        .success();

    assert_eq!(txt_files(work.path()), vec!["causa.txt"]);
    assert!(txt_files(input.path()).is_empty());
}

#[test]
fn test_all_fails_when_every_file_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("roto.pdf"), b"garbage").unwrap();

    cmd(dir.path()).arg("--all").assert().code(1);
}

#[test]
fn test_all_on_empty_directory_succeeds() {
    let dir = tempdir().unwrap();
    cmd(dir.path()).arg("-a").assert().success();
}

#[test]
fn test_max_distance_override() {
    let dir = tempdir().unwrap();
    // the generated anchors lack accents, one edit away from the defaults
    write_filing(&dir.path().join("causa.pdf"), 20, &[3, 4, 5]);

    cmd(dir.path())
        .args(["--file", "causa.pdf", "--max-distance", "0"])
        .assert()
        .success();
    assert!(txt_files(dir.path()).is_empty());

    cmd(dir.path())
        .args(["--file", "causa.pdf", "--max-distance", "1"])
        .assert()
        .success();
    assert_eq!(txt_files(dir.path()), vec!["causa.txt"]);
}
