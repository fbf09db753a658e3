// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself. It is pulled in with `include!`, so it can't have inner doc comments.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "loadcheck [OPTIONS]";

/// The arguments for loadcheck.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct LoadcheckArgs {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub path_args: PathArgs,

    #[command(flatten)]
    pub other_args: OtherArgs,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    Unlike the default location, a file given here must exist."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        value_name = "PROFILE",
        value_parser = ["auto", "proc", "profiler"],
        help = "Sets how load and processor counts are sampled.",
        long_help = indoc! {
            "Sets how load and processor counts are sampled. Defaults to 'auto'.

            - proc: reads the kernel's /proc/loadavg and counts logical processors.
            - profiler: asks the system for its load average and counts physical cores.
            - auto: uses 'proc' if /proc/loadavg exists, otherwise 'profiler'."
        }
    )]
    pub profile: Option<String>,

    #[arg(
        short = 'r',
        long,
        value_name = "RATE",
        help = "Sets the allowed load per processor.",
        long_help = "Sets the allowed load per processor, as a fraction of one core. The check warns when \
                    the load average exceeds this rate times the processor count. Defaults to 0.08."
    )]
    pub rate: Option<String>,

    #[arg(
        short = 'v',
        long,
        help = "Prints diagnostic output.",
        long_help = "Prints diagnostic output to stdout alongside the final status line. This does not \
                    change what is written to the log file."
    )]
    pub verbose: bool,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Path Options")]
pub struct PathArgs {
    #[arg(
        long = "lock_file",
        value_name = "PATH",
        help = "Sets the location of the lock file.",
        long_help = "Sets the location of the lock file. Only one check may hold it at a time; if it already \
                    exists the check aborts. Defaults to a file in the system temporary directory."
    )]
    pub lock_file: Option<String>,

    #[arg(
        long = "log_file",
        value_name = "PATH",
        help = "Sets the location of the log file.",
        long_help = "Sets the location of the append-only log file that records load warnings, process \
                    snapshots, and aborted runs. The default depends on the profile."
    )]
    pub log_file: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options")]
pub struct OtherArgs {
    #[arg(short='h', long, action=ArgAction::Help, help="Prints help info (for more details use `--help`.")]
    help: (),

    #[arg(short='V', long, action=ArgAction::Version, help="Prints version information.")]
    version: (),
}

/// Returns a [`Command`] based on loadcheck's args.
pub fn build_cmd() -> Command {
    LoadcheckArgs::command()
}

/// Returns the parsed [`LoadcheckArgs`].
pub fn get_args() -> LoadcheckArgs {
    LoadcheckArgs::parse()
}
