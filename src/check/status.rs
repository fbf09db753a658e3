//! Check statuses and the single line a monitoring harness reads back.

use std::fmt;

/// The result of a check, using the conventional monitoring plugin codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Unknown,
}

impl CheckStatus {
    /// The numeric status code embedded in the check line.
    pub fn code(&self) -> u8 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Unknown => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The final line of a run, formatted as
/// `<code> <check_name> - <LABEL> - <summary>, Load: <load>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckLine {
    pub status: CheckStatus,
    pub check_name: String,
    pub summary: String,
    pub load: Option<f64>,
}

impl fmt::Display for CheckLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} - {}, Load: ",
            self.status.code(),
            self.check_name,
            self.status.label(),
            self.summary
        )?;

        match self.load {
            Some(load) => write!(f, "{load:.2}"),
            None => f.write_str("n/a"),
        }
    }
}
