#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Create a configured `smgen` command suitable for integration tests.
#[allow(dead_code)]
pub fn smgen_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("smgen"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a small file, creating parent directories as needed.
#[allow(dead_code)]
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, b"<html></html>\n").expect("write file");
}

/// Decompress a published `.gz` file.
#[allow(dead_code)]
pub fn gunzip(path: &Path) -> Vec<u8> {
    use std::io::Read as _;
    let mut decoder = flate2::read::GzDecoder::new(fs::File::open(path).expect("open gz"));
    let mut plain = Vec::new();
    decoder.read_to_end(&mut plain).expect("decode gz");
    plain
}
