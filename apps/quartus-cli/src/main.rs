use std::io;
use std::process::ExitCode;

use clap::Parser;

use haddoc2_quartus_cli::{run, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::error!("Cannot determine working directory: {}", e);
            eprintln!("Error: cannot determine working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout().lock();
    match run(&cli, &cwd, &mut stdout) {
        Ok(outcome) => ExitCode::from(outcome.exit_status()),
        Err(e) => {
            log::error!("Project generation failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
