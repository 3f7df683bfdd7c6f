//! # Processor Module
//!
//! This module contains the core functionality for walking a directory tree
//! and inserting or rewriting the copyright notice of each Python file.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Line splitting, line replacement and notice insertion
//! - [`file_collector`] - Recursive directory traversal and suffix filtering
//!
//! The [`Processor`] struct is the main entry point, orchestrating the
//! submodules. Files are handled strictly one after another: each is read,
//! transformed and (optionally) written back before the next is opened.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
pub use content_transformer::{
  LineEnding, insertion_block, join_with_replacement, line_terminator, replace_notice_line, split_lines,
};
pub use file_collector::{FileCollector, SOURCE_SUFFIX};
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::config::RunConfig;
use crate::detection::{DetectedNotice, NoticeDetector, RegexNoticeDetector};
use crate::preview::{NO_COPYRIGHT_PLACEHOLDER, PreviewRenderer};
use crate::report::{FileAction, ProcessingSummary};
use crate::verbose_log;

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub run_config: RunConfig,

  // Optional components
  pub preview: Option<PreviewRenderer>,
  pub notice_detector: Option<Box<dyn NoticeDetector>>,
  pub file_collector: Option<FileCollector>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with default components.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     preview: Some(PreviewRenderer::new(true)),
  ///     ..ProcessorConfig::new(run_config)
  /// }
  /// ```
  pub const fn new(run_config: RunConfig) -> Self {
    Self {
      run_config,
      preview: None,
      notice_detector: None,
      file_collector: None,
    }
  }
}

/// Processor for handling copyright notices in files.
///
/// For every file the processor:
/// - leaves it alone if it already has a notice and no override was requested
/// - rewrites the detected copyright line if an override was requested
/// - inserts a fresh notice at the top if none was found
///
/// In dry-run mode the change is printed instead of written.
pub struct Processor {
  run_config: RunConfig,

  /// Renderer for dry-run previews
  preview: PreviewRenderer,

  /// Detector for existing copyright lines
  notice_detector: Box<dyn NoticeDetector>,

  /// Directory traversal and suffix filtering
  file_collector: FileCollector,
}

impl Processor {
  /// Creates a new processor from `config`, filling in default components.
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      run_config: config.run_config,
      preview: config.preview.unwrap_or_default(),
      notice_detector: config
        .notice_detector
        .unwrap_or_else(|| Box::new(RegexNoticeDetector::new())),
      file_collector: config.file_collector.unwrap_or_default(),
    }
  }

  /// Processes the configured directory.
  ///
  /// # Errors
  ///
  /// Stops at the first traversal or file error. Files handled before the
  /// error keep their new content.
  pub fn process(&self) -> Result<ProcessingSummary> {
    self.process_directory(&self.run_config.directory)
  }

  /// Recursively processes every source file under `dir`.
  pub fn process_directory(&self, dir: &Path) -> Result<ProcessingSummary> {
    debug!("Scanning directory: {}", dir.display());
    let start_time = Instant::now();
    let mut summary = ProcessingSummary::new(self.run_config.dry_run);

    for path in self.file_collector.walk(dir) {
      let path = path?;
      let action = self.process_file(&path)?;
      summary.record(action);
    }

    summary.elapsed = start_time.elapsed();
    debug!(
      "Processed {} files in {}ms",
      summary.files_scanned,
      summary.elapsed.as_millis()
    );
    Ok(summary)
  }

  /// Processes a single file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read as UTF-8 or cannot be
  /// written back.
  pub fn process_file(&self, path: &Path) -> Result<FileAction> {
    verbose_log!("Processing file: {}", path.display());

    let content = FileIO::read_full_content(path)?;
    let lines = split_lines(&content);

    match self.notice_detector.find_notice(&lines) {
      Some(found) if self.run_config.overrides.is_empty() => {
        trace!(
          "Skipping: {} (notice on line {}, no overrides)",
          path.display(),
          found.index + 1
        );
        Ok(FileAction::Unchanged)
      }
      Some(found) => self.update_notice(path, &content, &lines, &found),
      None => self.insert_notice(path, &content, &lines),
    }
  }

  fn update_notice(&self, path: &Path, content: &str, lines: &[&str], found: &DetectedNotice) -> Result<FileAction> {
    let notice = self.run_config.overrides.apply(&found.info);
    let new_line = notice.render_line();

    let Some(old_line) = lines.get(found.index).copied() else {
      anyhow::bail!(
        "Detected notice on line {} of {} is out of range",
        found.index + 1,
        path.display()
      );
    };
    let replacement = replace_notice_line(old_line, found.offset, &new_line);
    let new_content = join_with_replacement(lines, found.index, &replacement);

    if self.run_config.dry_run {
      self.preview.display(path, old_line, &new_line, content, &new_content)?;
    } else {
      FileIO::write_file(path, &new_content)?;
      verbose_log!("Updated notice in: {}", path.display());
    }

    Ok(FileAction::Updated)
  }

  fn insert_notice(&self, path: &Path, content: &str, lines: &[&str]) -> Result<FileAction> {
    let notice = self.run_config.defaults.render();
    let block = insertion_block(&notice, LineEnding::detect(lines));
    let new_content = format!("{block}{content}");

    if self.run_config.dry_run {
      self
        .preview
        .display(path, NO_COPYRIGHT_PLACEHOLDER, &notice, content, &new_content)?;
    } else {
      FileIO::write_file(path, &new_content)?;
      verbose_log!("Inserted notice into: {}", path.display());
    }

    Ok(FileAction::Inserted)
  }
}
