//! # Haddoc2 Quartus CLI
//!
//! Argument handling for the `quartus` binary. The working directory is
//! passed in explicitly so runs can be exercised without touching the
//! process-wide current directory.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use haddoc2_quartus_io::{EmitError, GenerationReport, ProjectFileEmitter, ProjectPaths};

pub const ARGUMENT_ERROR: &str = "Not enought arguments";
pub const USAGE: &str = "Usage: quartus <hdl_directory>";

/// Exit status when the argument count is wrong.
pub const USAGE_EXIT_STATUS: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "quartus",
    version,
    about = "Generate the Cyclone V Quartus project for a Haddoc2 network"
)]
pub struct Cli {
    /// Print a JSON generation report instead of progress lines.
    #[arg(long)]
    pub json: bool,

    /// Directory that receives cnn_process.qsf and cnn_process.qpf.
    #[arg(value_name = "HDL_DIRECTORY")]
    pub directories: Vec<PathBuf>,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Failed to serialize generation report: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug)]
pub enum RunOutcome {
    Generated(GenerationReport),
    /// Wrong number of directories; usage was printed and nothing written.
    Usage,
}

impl RunOutcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            RunOutcome::Generated(_) => 0,
            RunOutcome::Usage => USAGE_EXIT_STATUS,
        }
    }
}

/// Generate the project described by `cli`, resolving paths against `cwd`.
pub fn run(cli: &Cli, cwd: &Path, out: &mut dyn Write) -> Result<RunOutcome, CliError> {
    let output_dir = match cli.directories.as_slice() {
        [dir] => dir,
        dirs => {
            log::warn!("Expected exactly one output directory, got {}", dirs.len());
            writeln!(out, "{}", ARGUMENT_ERROR)?;
            writeln!(out, "{}", USAGE)?;
            return Ok(RunOutcome::Usage);
        }
    };

    let paths = ProjectPaths::from_working_dir(cwd, output_dir);
    log::info!(
        "Haddoc2 library {} | generated HDL {} | output {}",
        paths.library_dir,
        paths.top_level_dir,
        paths.output_dir.display()
    );

    let report = if cli.json {
        let report = ProjectFileEmitter::new(io::sink()).generate(&paths)?;
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        report
    } else {
        ProjectFileEmitter::new(&mut *out).generate(&paths)?
    };

    Ok(RunOutcome::Generated(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quartus").chain(args.iter().copied())).unwrap()
    }

    fn dir_is_empty(path: &Path) -> bool {
        fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn test_generates_into_relative_dir() {
        let cwd = tempdir().unwrap();
        let mut out = Vec::new();

        let outcome = run(&parse(&["build/output"]), cwd.path(), &mut out).unwrap();
        assert_eq!(outcome.exit_status(), 0);

        let dir = cwd.path().join("build").join("output");
        let qsf = fs::read_to_string(dir.join("cnn_process.qsf")).unwrap();
        let qpf = fs::read_to_string(dir.join("cnn_process.qpf")).unwrap();
        assert!(qsf
            .lines()
            .any(|l| l == "set_global_assignment -name DEVICE 5CSEMA5F31C6"));
        assert!(qpf.contains("PROJECT_REVISION = \"cnn_process\""));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("Haddoc2 Quartus Project Generator:\n"));
        assert!(printed.ends_with("Successfully generated quartus project\n"));
    }

    #[test]
    fn test_no_arguments_prints_usage() {
        let cwd = tempdir().unwrap();
        let mut out = Vec::new();

        let outcome = run(&parse(&[]), cwd.path(), &mut out).unwrap();
        assert!(matches!(outcome, RunOutcome::Usage));
        assert_eq!(outcome.exit_status(), USAGE_EXIT_STATUS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n{}\n", ARGUMENT_ERROR, USAGE)
        );
        assert!(dir_is_empty(cwd.path()));
    }

    #[test]
    fn test_two_arguments_write_nothing() {
        let cwd = tempdir().unwrap();
        let mut out = Vec::new();

        let outcome = run(&parse(&["a", "b"]), cwd.path(), &mut out).unwrap();
        assert!(matches!(outcome, RunOutcome::Usage));
        assert!(!cwd.path().join("a").exists());
        assert!(!cwd.path().join("b").exists());
        assert!(dir_is_empty(cwd.path()));
    }

    #[test]
    fn test_json_report() {
        let cwd = tempdir().unwrap();
        let mut out = Vec::new();

        run(&parse(&["--json", "q"]), cwd.path(), &mut out).unwrap();

        let report: GenerationReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.settings_file, cwd.path().join("q").join("cnn_process.qsf"));
        assert_eq!(report.project_file, cwd.path().join("q").join("cnn_process.qpf"));
        assert_eq!(report.source_count, 18);
    }

    #[test]
    fn test_filesystem_error_propagates() {
        let cwd = tempdir().unwrap();
        fs::write(cwd.path().join("taken"), "").unwrap();
        let mut out = Vec::new();

        let err = run(&parse(&["taken"]), cwd.path(), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Emit(EmitError::CreateDir { .. })));
    }
}
