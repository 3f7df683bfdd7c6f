//! # pynotice
//!
//! A tool that walks a directory tree and makes sure every Python source file
//! starts with a triple-quoted copyright notice.
//!
//! For each `.py` file the first [`HEADER_SCAN_LIMIT`] lines are searched for
//! a `Copyright <year> <holder>` line. Files that already have one are left
//! alone unless an override year or holder is given, in which case that line
//! is rewritten. Files without one get a fresh notice at the top:
//!
//! ```text
//! """
//! Copyright 2024 Acme
//! """
//!
//! import os
//! ```
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use pynotice::config::{NoticeOverrides, RunConfig};
//! use pynotice::notice::NoticeData;
//! use pynotice::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let run_config = RunConfig::new(
//!         "src",
//!         false, // write changes
//!         NoticeOverrides::new(Some("2025".to_string()), None),
//!         NoticeData::new("2025", "Acme"),
//!     )?;
//!
//!     let processor = Processor::new(ProcessorConfig::new(run_config));
//!     let summary = processor.process()?;
//!     println!("{summary}");
//!
//!     Ok(())
//! }
//! ```
//!
//! The building blocks can also be used on their own.
//! [`FileCollector::traverse_directory`] lists the `.py` files under a
//! directory without touching them, and [`RegexNoticeDetector::with_scan_limit`]
//! builds a detector with a different window, which can be handed to
//! [`ProcessorConfig`] through its `notice_detector` field.
//!
//! ## Modules
//!
//! * [`processor`] - Directory traversal and per-file processing
//! * [`detection`] - Finding an existing copyright line
//! * [`notice`] - Rendering the notice block
//! * [`config`] - Run configuration
//! * [`preview`] - Dry-run output
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`HEADER_SCAN_LIMIT`]: crate::detection::HEADER_SCAN_LIMIT
//! [`FileCollector::traverse_directory`]: crate::processor::FileCollector::traverse_directory
//! [`RegexNoticeDetector::with_scan_limit`]: crate::detection::RegexNoticeDetector::with_scan_limit
//! [`ProcessorConfig`]: crate::processor::ProcessorConfig

pub mod config;
pub mod detection;
pub mod logging;
pub mod notice;
pub mod preview;
pub mod processor;
pub mod report;
