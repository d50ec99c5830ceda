//! Generate the man page and shell completions from the CLI definitions.

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::Shell;

#[path = "src/cli_args.rs"]
#[allow(dead_code)]
mod cli_args;

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or(io::ErrorKind::NotFound)?);
    let mut cmd = cli_args::Cli::command();

    let mut man = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut man)?;
    fs::write(out_dir.join("serptune.1"), man)?;

    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        clap_complete::generate_to(shell, &mut cmd, "serptune", &out_dir)?;
    }

    Ok(())
}
