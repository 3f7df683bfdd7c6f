//! # File Collector Module
//!
//! Recursive directory traversal yielding the source files to process.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::trace;
use walkdir::WalkDir;

/// File name suffix of the files that receive a notice.
pub const SOURCE_SUFFIX: &str = ".py";

/// Walks a directory tree and yields files whose name ends with the source
/// suffix.
///
/// There is no depth limit. Directory symlinks are not descended into;
/// symlinks pointing at regular files are yielded like regular files. The
/// order is whatever the filesystem enumeration returns.
pub struct FileCollector {
  suffix: String,
}

impl FileCollector {
  /// Creates a collector for [`SOURCE_SUFFIX`].
  pub fn new() -> Self {
    Self::with_suffix(SOURCE_SUFFIX)
  }

  pub fn with_suffix(suffix: impl Into<String>) -> Self {
    Self { suffix: suffix.into() }
  }

  /// Checks whether the file name of `path` ends with the suffix.
  pub fn matches(&self, path: &Path) -> bool {
    path
      .file_name()
      .is_some_and(|name| name.to_string_lossy().ends_with(self.suffix.as_str()))
  }

  /// Lazily traverses `dir`.
  ///
  /// Each item is either a matching file path or the error that stopped the
  /// walk at that point.
  pub fn walk<'a>(&'a self, dir: &Path) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    let root = dir.to_path_buf();
    WalkDir::new(dir).into_iter().filter_map(move |entry| {
      let entry = match entry.with_context(|| format!("Failed to walk directory: {}", root.display())) {
        Ok(entry) => entry,
        Err(e) => return Some(Err(e)),
      };

      let file_type = entry.file_type();
      let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
      if !is_file || !self.matches(entry.path()) {
        return None;
      }

      trace!("Found source file: {}", entry.path().display());
      Some(Ok(entry.into_path()))
    })
  }

  /// Collects every matching file under `dir`.
  pub fn traverse_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    self.walk(dir).collect()
  }
}

impl Default for FileCollector {
  fn default() -> Self {
    Self::new()
  }
}
