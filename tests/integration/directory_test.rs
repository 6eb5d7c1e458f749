//! Integration tests for batch directory conversion

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <circle cx="12" cy="12" r="10" fill="#336699"/>
</svg>"##;

fn run_svgconv(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_svgconv"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run svgconv");

    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
        output.status.success(),
    )
}

fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

#[test]
fn test_icons_tree_converted_at_requested_size() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(source.join("icons/sub")).unwrap();
    fs::write(source.join("icons/a.svg"), ICON).unwrap();
    fs::write(source.join("icons/sub/b.svg"), ICON).unwrap();

    let target = root.path().join("out");
    let (stdout, stderr, success) = run_svgconv(&[
        source.to_str().unwrap(),
        target.to_str().unwrap(),
        "512",
    ]);

    assert!(success, "Command should succeed: stderr={}", stderr);
    assert!(stdout.contains("Found 2 SVG files"), "stdout: {}", stdout);
    assert!(stdout.contains("Successfully converted: 2 files"), "stdout: {}", stdout);
    assert!(!stdout.contains("Failed conversions"));

    assert!(target.join("icons").is_dir());
    assert!(target.join("icons/sub").is_dir());
    assert_eq!(png_dimensions(&target.join("icons/a.png")), (512, 512));
    assert_eq!(png_dimensions(&target.join("icons/sub/b.png")), (512, 512));

    let absolute = fs::canonicalize(&target).unwrap();
    assert!(stdout.contains(&format!("PNG files saved in: {}", absolute.display())));
}

#[test]
fn test_empty_directories_are_mirrored() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(source.join("empty/deeper")).unwrap();
    fs::write(source.join("one.svg"), ICON).unwrap();

    let target = root.path().join("out");
    let (_, stderr, success) =
        run_svgconv(&[source.to_str().unwrap(), target.to_str().unwrap(), "16"]);

    assert!(success, "stderr={}", stderr);
    assert!(target.join("empty/deeper").is_dir());
    assert!(target.join("one.png").is_file());
}

#[test]
fn test_rerun_is_byte_identical() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.svg"), ICON).unwrap();
    let target = root.path().join("out");
    let args = [source.to_str().unwrap(), target.to_str().unwrap(), "32"];

    assert!(run_svgconv(&args).2);
    let first = fs::read(target.join("a.png")).unwrap();

    assert!(run_svgconv(&args).2);
    let second = fs::read(target.join("a.png")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_new_file_increments_discovered_count() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.svg"), ICON).unwrap();
    let target = root.path().join("out");
    let args = [source.to_str().unwrap(), target.to_str().unwrap(), "32"];

    let (stdout, _, _) = run_svgconv(&args);
    assert!(stdout.contains("Found 1 SVG files"), "stdout: {}", stdout);
    let before = fs::read(target.join("a.png")).unwrap();

    fs::write(source.join("b.svg"), ICON).unwrap();
    let (stdout, _, _) = run_svgconv(&args);
    assert!(stdout.contains("Found 2 SVG files"), "stdout: {}", stdout);
    assert_eq!(fs::read(target.join("a.png")).unwrap(), before);
    assert!(target.join("b.png").exists());
}

#[test]
fn test_uppercase_extension_is_not_matched() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.svg"), ICON).unwrap();
    fs::write(source.join("B.SVG"), ICON).unwrap();
    let target = root.path().join("out");

    let (stdout, _, success) =
        run_svgconv(&[source.to_str().unwrap(), target.to_str().unwrap(), "8"]);

    assert!(success);
    assert!(stdout.contains("Found 1 SVG files"), "stdout: {}", stdout);
    assert!(!target.join("B.png").exists());
}

#[test]
fn test_target_that_is_a_file_fails_the_run() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.svg"), ICON).unwrap();
    let target = root.path().join("out");
    fs::write(&target, "not a directory").unwrap();

    let (_, stderr, success) =
        run_svgconv(&[source.to_str().unwrap(), target.to_str().unwrap(), "8"]);

    assert!(!success);
    assert!(stderr.contains("Failed to create directory"), "stderr: {}", stderr);
    assert_eq!(fs::read(&target).unwrap(), b"not a directory");
}

#[test]
fn test_unwritable_output_is_tallied() {
    let root = tempdir().unwrap();
    let source = root.path().join("src");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.svg"), ICON).unwrap();
    fs::write(source.join("b.svg"), ICON).unwrap();
    let target = root.path().join("out");
    fs::create_dir_all(target.join("a.png")).unwrap();

    let (stdout, stderr, success) =
        run_svgconv(&[source.to_str().unwrap(), target.to_str().unwrap(), "8"]);

    assert!(success, "stderr: {}", stderr);
    assert!(stderr.contains("Error converting"), "stderr: {}", stderr);
    assert!(stderr.contains("Failed conversions: 1 files"), "stderr: {}", stderr);
    assert!(stdout.contains("Successfully converted: 1 files"), "stdout: {}", stdout);
    assert_eq!(png_dimensions(&target.join("b.png")), (8, 8));
}
