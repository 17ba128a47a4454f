// main.rsとエントリーポイントのテスト
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// 終了コード -1 は Unix では 255 として観測される
#[cfg(unix)]
const FATAL_EXIT_CODE: i32 = 255;
#[cfg(not(unix))]
const FATAL_EXIT_CODE: i32 = -1;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_qr_label"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

fn setup(dir: &Path, content: &str) {
    RgbImage::from_pixel(300, 300, Rgb([10, 10, 200]))
        .save(dir.join("logo.png"))
        .unwrap();
    fs::write(dir.join("input.txt"), content).unwrap();
}

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("qr_label"));
    assert!(stdout.contains("INPUT_FILE"));
    assert!(stdout.contains("THREAD_COUNT"));
}

#[test]
fn test_cli_version() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_arguments_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_in(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_invalid_thread_count_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path(), "abc\n");

    let output = run_in(temp_dir.path(), &["input.txt", "0"]);
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));

    let output = run_in(temp_dir.path(), &["input.txt", "two"]);
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    assert!(!temp_dir.path().join("abc.png").exists());
}

#[test]
fn test_missing_logo_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("input.txt"), "abc\n").unwrap();

    let output = run_in(temp_dir.path(), &["input.txt"]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("logo.png"));
}

#[test]
fn test_missing_input_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path(), "abc\n");

    let output = run_in(temp_dir.path(), &["nothing.txt", "2"]);

    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
}

#[test]
fn test_progress_and_completion_output() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path(), "abc\nxyz\n");

    let output = run_in(temp_dir.path(), &["input.txt", "1"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
    let expected = vec![
        format!(" 50% {}", "#".repeat(50)),
        format!("100% {}", "#".repeat(100)),
        "Finished 2 QRCode.".to_string(),
    ];
    assert_eq!(lines, expected);
    assert!(temp_dir.path().join("abc.png").exists());
    assert!(temp_dir.path().join("xyz.png").exists());
}

#[test]
fn test_quiet_mode_with_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    setup(temp_dir.path(), "abc\n");

    let output = run_in(
        temp_dir.path(),
        &["input.txt", "4", "--quiet", "--output-dir", "out"],
    );

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(temp_dir.path().join("out/abc.png").exists());
}
