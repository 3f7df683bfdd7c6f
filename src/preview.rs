//! # Preview Module
//!
//! Renders what a dry run would change. The short preview always goes to
//! stdout:
//!
//! ```text
//!
//! --- pkg/module.py
//! - Copyright 2019 Acme Corp
//! + Copyright 2024 Acme Corp
//! ```
//!
//! With `show_diff` enabled a full line diff of the file, built with
//! `similar`, is additionally written to stderr.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Stand-in for the old content when a file has no notice yet.
pub const NO_COPYRIGHT_PLACEHOLDER: &str = "(no copyright)";

/// Renders dry-run previews.
#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
  /// Whether to also print a full line diff to stderr
  pub show_diff: bool,
}

impl PreviewRenderer {
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Writes the short preview for `path` to `out`.
  ///
  /// `old` has its trailing whitespace stripped; `new` may span several
  /// lines.
  pub fn write_preview<W: Write>(&self, out: &mut W, path: &Path, old: &str, new: &str) -> io::Result<()> {
    let header = format!("--- {}", path.display());
    writeln!(out)?;
    writeln!(out, "{}", header.if_supports_color(Stream::Stdout, |h| h.bold()))?;
    writeln!(out, "- {}", old.trim_end())?;
    writeln!(out, "+ {}", new.trim_end())?;
    Ok(())
  }

  /// Writes a full line diff between `original` and `updated` to `out`.
  pub fn write_diff<W: Write>(&self, out: &mut W, path: &Path, original: &str, updated: &str) -> io::Result<()> {
    writeln!(out, "Diff for {}:", path.display())?;

    let diff = TextDiff::from_lines(original, updated);
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      let line = format!("{}{}", sign, change.value().trim_end_matches(['\r', '\n']));
      match change.tag() {
        ChangeTag::Delete => writeln!(out, "{}", line.if_supports_color(Stream::Stderr, |l| l.red()))?,
        ChangeTag::Insert => writeln!(out, "{}", line.if_supports_color(Stream::Stderr, |l| l.green()))?,
        ChangeTag::Equal => writeln!(out, "{}", line)?,
      }
    }
    Ok(())
  }

  /// Prints the preview to stdout and, if enabled, the diff to stderr.
  pub fn display(&self, path: &Path, old: &str, new: &str, original: &str, updated: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    self.write_preview(&mut stdout, path, old, new)?;
    stdout.flush()?;

    if self.show_diff {
      let mut stderr = io::stderr().lock();
      self.write_diff(&mut stderr, path, original, updated)?;
    }

    Ok(())
  }
}
