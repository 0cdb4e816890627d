//! An extremely simple `ls`: prints the non-hidden entries of each directory, sorted byte-wise, in
//! columns fitted to the terminal.

use std::process::ExitCode;

use cassava::{fs, strings, term};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cassava-ls")]
#[command(about = "List directory contents in columns")]
struct Cli {
    /// Directories to list
    #[arg(default_value = ".")]
    paths: Vec<String>,
}

fn list(path: &str) -> Result<(), fs::ListError> {
    let entries = fs::get_filenames_filter_regex(path, "^[^.].*")?;
    if entries.is_empty() {
        return Ok(());
    }

    let mut array = entries.to_array();
    strings::sort(&mut array);
    if let Err(error) = term::print_columns(&array) {
        log::warn!("failed to print '{path}': {error}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut status = ExitCode::SUCCESS;
    for path in &cli.paths {
        if let Err(error) = list(path) {
            eprintln!("Error: cannot read '{path}': {error}");
            status = ExitCode::FAILURE;
        }
    }
    status
}
