//! General build script used by loadcheck to generate completion files and a manpage.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> io::Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!(
                "Failed to create a directory at location {dir:?}, encountered error {err:?}.  Aborting...",
            );
        }
    }

    res
}

fn generate_artifacts() -> io::Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/loadcheck/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/loadcheck/manpage/";

    let completion_out_dir = PathBuf::from(COMPLETION_DIR);
    let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

    create_dir(&completion_out_dir)?;
    create_dir(&manpage_out_dir)?;

    // Generate completions
    let mut cmd = build_cmd();
    generate_to(Shell::Bash, &mut cmd, "loadcheck", &completion_out_dir)?;
    generate_to(Shell::Zsh, &mut cmd, "loadcheck", &completion_out_dir)?;
    generate_to(Shell::Fish, &mut cmd, "loadcheck", &completion_out_dir)?;

    // Generate manpage
    let cmd = cmd.name("loadcheck");
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(manpage_out_dir.join("loadcheck.1"), buffer)?;

    Ok(())
}

fn main() -> io::Result<()> {
    match env::var_os("LOADCHECK_GENERATE") {
        Some(var) if !var.is_empty() => generate_artifacts()?,
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=LOADCHECK_GENERATE");

    Ok(())
}
