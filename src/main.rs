//! # pynotice
//!
//! A tool that inserts or rewrites the copyright notice of Python source files.

mod cli;

use anyhow::Result;

use crate::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
