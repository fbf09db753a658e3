#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use loadcheck::{
    check::status::{CheckLine, CheckStatus},
    constants::DEFAULT_CHECK_NAME,
    options::{args, init_options},
    run_check,
    utils::logging::init_logger,
};

/// The exit code for runs that couldn't start, e.g. due to bad options.
const SETUP_FAILURE_EXIT_CODE: u8 = 3;

fn main() -> ExitCode {
    let args = args::get_args();

    match try_main(&args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("Error: {err:#}");

            // The harness still expects exactly one status line.
            let line = CheckLine {
                status: CheckStatus::Unknown,
                check_name: DEFAULT_CHECK_NAME.to_string(),
                summary: format!("{err:#}"),
                load: None,
            };
            println!("{line}");

            ExitCode::from(SETUP_FAILURE_EXIT_CODE)
        }
    }
}

fn try_main(args: &args::LoadcheckArgs) -> Result<u8> {
    init_logger(args.general_args.verbose).context("Unable to set up logging.")?;

    let options = init_options(args)
        .context("Unable to resolve options from the config file and arguments.")?;

    let report = run_check(&options);
    println!("{}", report.line);

    Ok(report.exit_code)
}
