//! Integration tests for loadcheck.

mod util;

mod invalid_config_tests;

#[cfg(target_os = "linux")]
mod check_tests;
#[cfg(target_os = "linux")]
mod valid_config_tests;
