//! Diagnostic logging. This is separate from the check's own log file, and never
//! touches it.

use std::io;

/// Sets up the global logger. Verbose runs print everything from debug up to stdout;
/// otherwise only warnings and errors are printed, to stderr.
pub fn init_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let dispatch = fern::Dispatch::new().format(|out, message, record| {
        let offset = time::OffsetDateTime::now_utc();

        out.finish(format_args!(
            "{}[{}][{}] {}",
            offset
                .format(&time::macros::format_description!(
                    // The weird "[[[" is because we need to escape a bracket ("[[") to show one "[".
                    // See https://time-rs.github.io/book/api/format-description.html
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:3]]"
                ))
                .unwrap_or_default(),
            record.target(),
            record.level(),
            message
        ))
    });

    let dispatch = if verbose {
        dispatch
            .level(log::LevelFilter::Debug)
            .chain(io::stdout())
    } else {
        dispatch.level(log::LevelFilter::Warn).chain(io::stderr())
    };

    dispatch.apply()
}
