#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pynotice::config::{NoticeOverrides, RunConfig};
use pynotice::notice::NoticeData;
use pynotice::processor::{Processor, ProcessorConfig};
use walkdir::WalkDir;

/// A module with its notice on line index 2.
pub const LICENSED_MODULE: &str = "\"\"\"\nModule docs.\nCopyright 2019 Acme Corp\n\"\"\"\n\nimport os\n\n\ndef main():\n    return os.getcwd()\n";

pub const PLAIN_MODULE: &str = "import sys\n\nprint(sys.argv)\n";

/// Builds `total` lines of code with a copyright line at `index`.
pub fn module_with_notice_at(index: usize, total: usize) -> String {
  (0..total)
    .map(|i| {
      if i == index {
        "# Copyright 2019 Acme Corp\n".to_string()
      } else {
        format!("value_{i} = {i}\n")
      }
    })
    .collect()
}

/// Writes `content` to `dir/rel`, creating parent directories.
pub fn write_file(dir: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = dir.join(rel);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Raw bytes of every file under `dir`, keyed by path.
pub fn snapshot(dir: &Path) -> Result<BTreeMap<PathBuf, Vec<u8>>> {
  let mut files = BTreeMap::new();
  for entry in WalkDir::new(dir) {
    let entry = entry?;
    if entry.file_type().is_file() {
      files.insert(entry.path().to_path_buf(), fs::read(entry.path())?);
    }
  }
  Ok(files)
}

/// Creates a processor over `dir` with default year 2024 and holder Acme.
pub fn processor(dir: &Path, dry_run: bool, update_year: Option<&str>, update_holder: Option<&str>) -> Result<Processor> {
  let run_config = RunConfig::new(
    dir,
    dry_run,
    NoticeOverrides::new(update_year.map(str::to_string), update_holder.map(str::to_string)),
    NoticeData::new("2024", "Acme"),
  )?;
  Ok(Processor::new(ProcessorConfig::new(run_config)))
}
