//! # Report Module
//!
//! Per-file outcomes and the run summary built from them.

use std::fmt;
use std::time::Duration;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// A notice was already present and no override was requested.
  Unchanged,
  /// The existing copyright line was rewritten (or would be, in a dry run).
  Updated,
  /// A new notice was inserted at the top (or would be, in a dry run).
  Inserted,
}

/// Totals for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  pub files_scanned: usize,
  pub unchanged: usize,
  pub updated: usize,
  pub inserted: usize,
  pub elapsed: Duration,
  pub dry_run: bool,
}

impl ProcessingSummary {
  pub fn new(dry_run: bool) -> Self {
    Self {
      dry_run,
      ..Self::default()
    }
  }

  pub fn record(&mut self, action: FileAction) {
    self.files_scanned += 1;
    match action {
      FileAction::Unchanged => self.unchanged += 1,
      FileAction::Updated => self.updated += 1,
      FileAction::Inserted => self.inserted += 1,
    }
  }

  /// Number of files that were (or would be) modified.
  pub const fn changed(&self) -> usize {
    self.updated + self.inserted
  }
}

impl fmt::Display for ProcessingSummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let files_word = if self.files_scanned == 1 { "file" } else { "files" };
    let verb = if self.dry_run { "would be" } else { "were" };
    write!(
      f,
      "Scanned {} {} in {:.2}s: {} updated, {} inserted, {} unchanged ({} {} changed)",
      self.files_scanned,
      files_word,
      self.elapsed.as_secs_f64(),
      self.updated,
      self.inserted,
      self.unchanged,
      self.changed(),
      verb,
    )
  }
}
