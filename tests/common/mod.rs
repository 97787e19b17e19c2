#![allow(dead_code)]

use std::io::Write;

use camino::Utf8PathBuf;
use tempfile::NamedTempFile;

pub fn data_path(file: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file)
}

pub fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn temp_path(file: &NamedTempFile) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap()
}
