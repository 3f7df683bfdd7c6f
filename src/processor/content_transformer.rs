//! # Content Transformer Module
//!
//! Line-level helpers for rewriting a file: splitting content into lines that
//! keep their terminators, replacing the detected copyright line, and building
//! the block inserted at the top of files without a notice.

/// Splits content into lines, each keeping its `\n`, `\r\n` or lone `\r`
/// terminator.
///
/// Joining the result gives back the original content byte-for-byte. The last
/// line has no terminator when the file does not end with a line break.
pub fn split_lines(content: &str) -> Vec<&str> {
  let bytes = content.as_bytes();
  let mut lines = Vec::new();
  let mut start = 0;

  for (i, byte) in bytes.iter().copied().enumerate() {
    let ends_line = match byte {
      b'\n' => true,
      b'\r' => bytes.get(i + 1) != Some(&b'\n'),
      _ => false,
    };
    if ends_line {
      lines.push(&content[start..=i]);
      start = i + 1;
    }
  }

  if start < content.len() {
    lines.push(&content[start..]);
  }
  lines
}

/// Returns the terminator carried by `line` (`"\r\n"`, `"\n"`, `"\r"` or `""`).
pub fn line_terminator(line: &str) -> &str {
  if line.ends_with("\r\n") {
    "\r\n"
  } else if line.ends_with('\n') {
    "\n"
  } else if line.ends_with('\r') {
    "\r"
  } else {
    ""
  }
}

/// Line ending used for inserted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
  Lf,
  CrLf,
  Cr,
}

impl LineEnding {
  /// Picks the ending of the first line, defaulting to `\n`.
  pub fn detect(lines: &[&str]) -> Self {
    match lines.first().map(|first| line_terminator(first)) {
      Some("\r\n") => LineEnding::CrLf,
      Some("\r") => LineEnding::Cr,
      _ => LineEnding::Lf,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      LineEnding::Lf => "\n",
      LineEnding::CrLf => "\r\n",
      LineEnding::Cr => "\r",
    }
  }
}

/// Rebuilds the detected line with `new_line` in place of the match.
///
/// Text before `offset` (indentation, a `#` marker, ...) and the original
/// terminator are kept.
pub fn replace_notice_line(line: &str, offset: usize, new_line: &str) -> String {
  let prefix = line.get(..offset).unwrap_or_default();
  format!("{}{}{}", prefix, new_line, line_terminator(line))
}

/// Terminates every line of `notice` and appends one blank separator line.
pub fn insertion_block(notice: &str, ending: LineEnding) -> String {
  let eol = ending.as_str();
  let mut block = String::with_capacity(notice.len() + 8);
  for line in notice.lines() {
    block.push_str(line);
    block.push_str(eol);
  }
  block.push_str(eol);
  block
}

/// Joins `lines`, substituting `replacement` for the line at `index`.
pub fn join_with_replacement(lines: &[&str], index: usize, replacement: &str) -> String {
  let mut content = String::with_capacity(lines.iter().map(|l| l.len()).sum::<usize>() + replacement.len());
  for (i, line) in lines.iter().enumerate() {
    if i == index {
      content.push_str(replacement);
    } else {
      content.push_str(line);
    }
  }
  content
}
