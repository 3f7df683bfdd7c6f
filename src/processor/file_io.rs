//! # File I/O Module
//!
//! Whole-file reads and writes used by the processor. Files are read as
//! UTF-8; anything else is reported as an error for that path.

use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the complete file content.
  ///
  /// # Errors
  ///
  /// Fails if the file cannot be opened or is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Overwrites the file in place with `content`.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_rejects_invalid_utf8() {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let path = temp_dir.path().join("binary.py");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

    let err = FileIO::read_full_content(&path).expect_err("invalid utf-8 must fail");
    assert!(err.to_string().contains("binary.py"));
  }
}
