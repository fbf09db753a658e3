//! A monitoring check that compares the load average against a per-processor
//! threshold, logs the process table when it's exceeded, and prints a single
//! status line for a monitoring harness to read.

#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

pub mod check;
pub mod collection;
pub mod constants;
pub mod options;

pub mod utils {
    pub mod error;
    pub mod general;
    pub mod logging;
}

pub use check::{CheckReport, Checker};
use options::CheckOptions;

/// Runs one check with the source picked by the configured profile.
pub fn run_check(options: &CheckOptions) -> CheckReport {
    let mut source = options.profile.source();
    Checker::new(options, source.as_mut()).run()
}
