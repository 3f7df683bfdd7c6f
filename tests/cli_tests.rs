mod common;

use std::fs;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use common::{LICENSED_MODULE, PLAIN_MODULE, snapshot, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

fn pynotice() -> Result<Command> {
  let mut cmd = Command::cargo_bin("pynotice")?;
  cmd.args(["--colors", "never"]);
  Ok(cmd)
}

#[test]
fn test_invalid_directory_exits_non_zero() -> Result<()> {
  let temp_dir = tempdir()?;
  let missing = temp_dir.path().join("does-not-exist");

  pynotice()?
    .arg(&missing)
    .args(["--year", "2024", "--holder", "Acme"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Invalid directory"));
  Ok(())
}

#[test]
fn test_file_argument_is_an_invalid_directory() -> Result<()> {
  let temp_dir = tempdir()?;
  let file = write_file(temp_dir.path(), "plain.py", PLAIN_MODULE)?;

  pynotice()?
    .arg(&file)
    .args(["--year", "2024", "--holder", "Acme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid directory"));

  assert_eq!(fs::read_to_string(&file)?, PLAIN_MODULE);
  Ok(())
}

#[test]
fn test_year_and_holder_are_required() -> Result<()> {
  let temp_dir = tempdir()?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--holder", "Acme"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--year"));

  pynotice()?
    .arg(temp_dir.path())
    .args(["--year", "2024"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--holder"));
  Ok(())
}

#[test]
fn test_inserts_notice_into_tree() -> Result<()> {
  let temp_dir = tempdir()?;
  let top = write_file(temp_dir.path(), "main.py", PLAIN_MODULE)?;
  let nested = write_file(temp_dir.path(), "pkg/sub/util.py", PLAIN_MODULE)?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  let expected = format!("\"\"\"\nCopyright 2024 Acme\n\"\"\"\n\n{PLAIN_MODULE}");
  assert_eq!(fs::read_to_string(&top)?, expected);
  assert_eq!(fs::read_to_string(&nested)?, expected);
  Ok(())
}

#[test]
fn test_update_year_flag_rewrites_existing_notice() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "licensed.py", LICENSED_MODULE)?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--update-year", "2024", "--year", "2024", "--holder", "Someone Else"])
    .assert()
    .success();

  assert_eq!(
    fs::read_to_string(&path)?,
    LICENSED_MODULE.replace("Copyright 2019 Acme Corp", "Copyright 2024 Acme Corp")
  );
  Ok(())
}

#[test]
fn test_dry_run_prints_insert_preview() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "plain.py", PLAIN_MODULE)?;

  let expected = format!(
    "\n--- {}\n- (no copyright)\n+ \"\"\"\nCopyright 2024 Acme\n\"\"\"\n",
    path.display()
  );

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stdout(expected);

  assert_eq!(fs::read_to_string(&path)?, PLAIN_MODULE);
  Ok(())
}

#[test]
fn test_dry_run_prints_update_preview() -> Result<()> {
  let temp_dir = tempdir()?;
  let path = write_file(temp_dir.path(), "licensed.py", LICENSED_MODULE)?;

  let expected = format!(
    "\n--- {}\n- Copyright 2019 Acme Corp\n+ Copyright 2019 New Co\n",
    path.display()
  );

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--update-holder", "New Co", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stdout(expected);

  assert_eq!(fs::read_to_string(&path)?, LICENSED_MODULE);
  Ok(())
}

#[test]
fn test_dry_run_is_silent_for_untouched_files() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "licensed.py", LICENSED_MODULE)?;
  let before = snapshot(temp_dir.path())?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

  assert_eq!(snapshot(temp_dir.path())?, before);
  Ok(())
}

#[test]
fn test_show_diff_writes_full_diff_to_stderr() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "plain.py", PLAIN_MODULE)?;
  let before = snapshot(temp_dir.path())?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--show-diff", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Diff for ").and(predicate::str::contains("+Copyright 2024 Acme")));

  assert_eq!(snapshot(temp_dir.path())?, before);
  Ok(())
}

#[test]
fn test_show_diff_requires_dry_run() -> Result<()> {
  let temp_dir = tempdir()?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--show-diff", "--year", "2024", "--holder", "Acme"])
    .assert()
    .failure();
  Ok(())
}

#[test]
fn test_summary_respects_quiet() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "plain.py", PLAIN_MODULE)?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Scanned 1 file"));

  pynotice()?
    .arg(temp_dir.path())
    .args(["--dry-run", "--quiet", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Scanned").not());
  Ok(())
}

#[test]
fn test_verbose_logs_each_file() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "plain.py", PLAIN_MODULE)?;

  pynotice()?
    .arg(temp_dir.path())
    .args(["-v", "--year", "2024", "--holder", "Acme"])
    .assert()
    .success()
    .stderr(predicate::str::contains("Processing file: ").and(predicate::str::contains("Inserted notice into: ")));
  Ok(())
}
