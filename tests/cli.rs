use image::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_favicon-ico"))
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn converts_the_fixed_paths_and_prints_both() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("public")).unwrap();
    RgbaImage::from_pixel(64, 64, Rgba([200, 30, 40, 255]))
        .save(dir.path().join("public/favicon.png"))
        .unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("Successfully converted public/favicon.png to public/favicon.ico"),
        "stdout was: {stdout}"
    );

    let ico = fs::read(dir.path().join("public/favicon.ico")).unwrap();
    assert_eq!(&ico[..4], &[0, 0, 1, 0]);
    assert_eq!(u16::from_le_bytes([ico[4], ico[5]]), 4);
}

#[test]
fn missing_input_prints_an_error_and_still_exits_zero() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("Error converting favicon:"),
        "stdout was: {stdout}"
    );
    assert!(!dir.path().join("public/favicon.ico").exists());
}
