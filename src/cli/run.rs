//! # Run Command
//!
//! Validates the arguments, builds the run configuration and drives the
//! processor over the target directory.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Args;
use pynotice::config::{NoticeOverrides, RunConfig};
use pynotice::info_log;
use pynotice::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use pynotice::notice::NoticeData;
use pynotice::preview::PreviewRenderer;
use pynotice::processor::{Processor, ProcessorConfig};
use tracing::{debug, info};

/// Arguments for a run
#[derive(Args, Debug)]
pub struct RunArgs {
  /// Directory to scan recursively for .py files
  pub directory: PathBuf,

  /// Preview changes instead of writing them
  #[arg(long)]
  pub dry_run: bool,

  /// Rewrite existing notices with this holder
  #[arg(long, value_name = "TEXT")]
  pub update_holder: Option<String>,

  /// Rewrite existing notices with this year
  #[arg(long, value_name = "TEXT")]
  pub update_year: Option<String>,

  /// Year used when inserting a new notice
  #[arg(long, value_name = "TEXT")]
  pub year: String,

  /// Holder used when inserting a new notice
  #[arg(long, value_name = "TEXT")]
  pub holder: String,

  /// Also print a full line diff of each change to stderr (dry run only)
  #[arg(long, requires = "dry_run")]
  pub show_diff: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and the dry-run preview
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    default_value_t = ColorMode::Auto,
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the tool with the given arguments
pub fn run(args: RunArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let overrides = NoticeOverrides::new(args.update_year, args.update_holder);
  let defaults = NoticeData::new(args.year, args.holder);

  let run_config = match RunConfig::new(args.directory, args.dry_run, overrides, defaults) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("ERROR: {e}");
      process::exit(1);
    }
  };

  debug!("Run configuration: {:?}", run_config);
  if run_config.dry_run {
    info!("Dry run: no files will be modified");
  }

  let processor = Processor::new(ProcessorConfig {
    preview: Some(PreviewRenderer::new(args.show_diff)),
    ..ProcessorConfig::new(run_config)
  });

  let summary = processor.process()?;
  info_log!("{summary}");

  Ok(())
}
