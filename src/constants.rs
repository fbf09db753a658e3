/// The default allowed load per processor, as a fraction of one core.
pub const DEFAULT_PER_CORE_THRESHOLD: f64 = 0.08;

/// The default check identifier in the status line.
pub const DEFAULT_CHECK_NAME: &str = "CPU_Load";

pub const DEFAULT_LOCK_FILE_NAME: &str = "loadcheck.lock";

// Relative to the platform's config directory.
pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "loadcheck/loadcheck.toml";

/// The number of decimal places the threshold is rounded to.
pub const THRESHOLD_PRECISION: u32 = 2;
