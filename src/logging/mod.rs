//! # Logging Module
//!
//! This module provides logging utilities for the pynotice tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Status logging with color support
//! - Structured `tracing` output initialized from the `-q` / `-v` flags
//!
//! Both macros write to stderr so that stdout only ever carries the dry-run
//! preview.
//!
//! ## Example
//!
//! ```rust
//! use pynotice::logging::{ColorMode, set_verbose};
//! use pynotice::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Let owo-colors decide based on TTY detection
//! ColorMode::Auto.apply();
//!
//! verbose_log!("Processing file: {}", "example.py");
//! info_log!("Inserted notice into {} files", 3);
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Uses the same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a status message to stderr unless quiet mode is enabled.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an [`info_log!`] message, colored when stderr supports it.
pub fn print_info_log(message: &str) {
  eprintln!("{}", message.if_supports_color(Stream::Stderr, |m| m.yellow()));
}
