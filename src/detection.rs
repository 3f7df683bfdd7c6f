//! # Notice Detection Module
//!
//! This module contains the interface and default implementation for finding
//! an existing copyright notice in the leading lines of a file. The processor
//! only talks to the [`NoticeDetector`] trait, so the matching rules can be
//! swapped without touching it.

use std::sync::LazyLock;

use regex::Regex;

/// Number of leading lines inspected for an existing notice.
pub const HEADER_SCAN_LIMIT: usize = 15;

static COPYRIGHT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?i)copyright\s+(?P<year>\d{4})\s+(?P<holder>[^\r\n]+)").expect("copyright regex must compile")
});

/// Year and holder parsed from a copyright line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightInfo {
  pub year: String,

  /// Everything after the year token up to the line terminator. Trailing
  /// whitespace other than the terminator is kept; callers trim.
  pub holder: String,
}

/// A copyright line found inside the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedNotice {
  /// Index of the matching line.
  pub index: usize,

  /// Byte offset within the line where the match starts.
  pub offset: usize,

  pub info: CopyrightInfo,
}

/// Trait for notice detectors.
///
/// Implementations locate the first copyright line among the given lines.
/// Lines may still carry their `\n`, `\r\n` or `\r` terminators.
pub trait NoticeDetector: Send + Sync {
  /// Returns the first matching line within the detector's scan window, or
  /// `None` when there is none.
  fn find_notice(&self, lines: &[&str]) -> Option<DetectedNotice>;
}

/// Parses a single line, returning the match offset and the extracted info.
///
/// The search is unanchored and case-insensitive on the word "Copyright",
/// and requires a 4-digit year followed by whitespace and at least one holder
/// character. The line terminator is never part of the holder, so the result
/// does not depend on the file's line endings.
pub fn parse_copyright(line: &str) -> Option<(usize, CopyrightInfo)> {
  let body = line.trim_end_matches(['\r', '\n']);
  let caps = COPYRIGHT_REGEX.captures(body)?;
  let offset = caps.get(0)?.start();
  let year = caps.name("year")?.as_str().to_string();
  let holder = caps.name("holder")?.as_str().to_string();
  Some((offset, CopyrightInfo { year, holder }))
}

/// Default detector, matching `Copyright <year> <holder>` with a regex.
pub struct RegexNoticeDetector {
  scan_limit: usize,
}

impl RegexNoticeDetector {
  /// Creates a detector that scans [`HEADER_SCAN_LIMIT`] lines.
  pub const fn new() -> Self {
    Self::with_scan_limit(HEADER_SCAN_LIMIT)
  }

  /// Creates a detector with a custom scan window.
  pub const fn with_scan_limit(scan_limit: usize) -> Self {
    Self { scan_limit }
  }
}

impl Default for RegexNoticeDetector {
  fn default() -> Self {
    Self::new()
  }
}

impl NoticeDetector for RegexNoticeDetector {
  fn find_notice(&self, lines: &[&str]) -> Option<DetectedNotice> {
    lines
      .iter()
      .take(self.scan_limit)
      .enumerate()
      .find_map(|(index, line)| {
        parse_copyright(line).map(|(offset, info)| DetectedNotice { index, offset, info })
      })
  }
}
