//! # Notice Module
//!
//! Builds the triple-quoted copyright notice inserted at the top of Python
//! files:
//!
//! ```text
//! """
//! Copyright 2024 Acme
//! """
//! ```

/// Opening and closing delimiter of the notice block.
pub const NOTICE_DELIMITER: &str = "\"\"\"";

/// Year and holder used to render a notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeData {
  pub year: String,
  pub holder: String,
}

impl NoticeData {
  pub fn new(year: impl Into<String>, holder: impl Into<String>) -> Self {
    Self {
      year: year.into(),
      holder: holder.into(),
    }
  }

  /// Renders the full 3-line block. See [`build_notice`].
  pub fn render(&self) -> String {
    build_notice(&self.year, &self.holder)
  }

  /// Renders only the `Copyright {year} {holder}` line.
  pub fn render_line(&self) -> String {
    build_notice_line(&self.year, &self.holder)
  }
}

/// Renders the `Copyright {year} {holder}` line without a terminator.
pub fn build_notice_line(year: &str, holder: &str) -> String {
  format!("Copyright {year} {holder}")
}

/// Renders the delimiter, copyright line and closing delimiter joined by `\n`.
///
/// No trailing newline or blank separator is included.
pub fn build_notice(year: &str, holder: &str) -> String {
  format!("{NOTICE_DELIMITER}\n{}\n{NOTICE_DELIMITER}", build_notice_line(year, holder))
}
