//! # Run Configuration
//!
//! Holds the immutable settings of a single run. There is no configuration
//! file: everything comes from the command line and is validated once, before
//! any traversal starts.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::detection::CopyrightInfo;
use crate::notice::NoticeData;

/// Errors raised while building a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid directory: {}", .0.display())]
  InvalidDirectory(PathBuf),
}

/// Optional year/holder that force existing notices to be rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeOverrides {
  pub year: Option<String>,
  pub holder: Option<String>,
}

impl NoticeOverrides {
  /// Creates overrides, treating empty strings as "not requested".
  pub fn new(year: Option<String>, holder: Option<String>) -> Self {
    Self {
      year: year.filter(|y| !y.is_empty()),
      holder: holder.filter(|h| !h.is_empty()),
    }
  }

  /// `true` when neither a year nor a holder override was requested.
  pub const fn is_empty(&self) -> bool {
    self.year.is_none() && self.holder.is_none()
  }

  /// Merges the overrides over an existing notice.
  ///
  /// Fields without an override keep their existing value; the existing
  /// holder has its trailing whitespace trimmed.
  pub fn apply(&self, existing: &CopyrightInfo) -> NoticeData {
    let year = self.year.clone().unwrap_or_else(|| existing.year.clone());
    let holder = self
      .holder
      .clone()
      .unwrap_or_else(|| existing.holder.trim_end().to_string());
    NoticeData { year, holder }
  }
}

/// Settings for one run over a directory tree.
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub directory: PathBuf,
  pub dry_run: bool,
  pub overrides: NoticeOverrides,

  /// Year and holder for files that have no notice yet.
  pub defaults: NoticeData,
}

impl RunConfig {
  /// Builds the configuration, checking that `directory` is an existing
  /// directory.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::InvalidDirectory`] if the path does not exist or
  /// is not a directory.
  pub fn new(
    directory: impl Into<PathBuf>,
    dry_run: bool,
    overrides: NoticeOverrides,
    defaults: NoticeData,
  ) -> Result<Self, ConfigError> {
    let directory = directory.into();
    validate_directory(&directory)?;
    Ok(Self {
      directory,
      dry_run,
      overrides,
      defaults,
    })
  }
}

fn validate_directory(path: &Path) -> Result<(), ConfigError> {
  if path.is_dir() {
    Ok(())
  } else {
    Err(ConfigError::InvalidDirectory(path.to_path_buf()))
  }
}
