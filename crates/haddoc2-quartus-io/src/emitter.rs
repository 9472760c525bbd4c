//! Writes the Quartus settings and project files for a generated network.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use haddoc2_quartus_core::{ProjectFile, SettingsFile};

use crate::paths::ProjectPaths;
use crate::qpf::QpfWriter;
use crate::qsf::QsfWriter;

pub const SETTINGS_FILE_NAME: &str = "cnn_process.qsf";
pub const PROJECT_FILE_NAME: &str = "cnn_process.qpf";

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write progress output: {0}")]
    Progress(#[source] io::Error),
}

// ── Report ────────────────────────────────────────────────────────────

/// Summary of one successful `generate_project` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub settings_file: PathBuf,
    pub project_file: PathBuf,
    pub settings_bytes: u64,
    pub project_bytes: u64,
    /// Number of `VHDL_FILE` entries in the settings file.
    pub source_count: usize,
}

// ── Emitter ───────────────────────────────────────────────────────────

/// Emits the `cnn_process` Quartus project, reporting progress to `progress`.
pub struct ProjectFileEmitter<W: Write> {
    progress: W,
    settings: SettingsFile,
    project: ProjectFile,
}

impl ProjectFileEmitter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ProjectFileEmitter<W> {
    pub fn new(progress: W) -> Self {
        Self {
            progress,
            settings: SettingsFile::cnn_process(),
            project: ProjectFile::cnn_process(),
        }
    }

    /// Write the `.qsf` to `path`, truncating any existing file.
    ///
    /// The library and top-level directories are accepted for interface
    /// compatibility; every source path in the file is a fixed relative path.
    pub fn write_settings_file(
        &self,
        path: &Path,
        library_dir: &str,
        top_level_dir: &str,
    ) -> Result<u64, EmitError> {
        log::debug!(
            "Settings file ignores library dir {} and top-level dir {}",
            library_dir,
            top_level_dir
        );
        let bytes = write_with(path, |w| QsfWriter::new(w).write(&self.settings))?;
        log::info!("Wrote settings file {} ({} bytes)", path.display(), bytes);
        Ok(bytes)
    }

    /// Write the `.qpf` to `path`, truncating any existing file.
    pub fn write_project_file(&self, path: &Path) -> Result<u64, EmitError> {
        let bytes = write_with(path, |w| QpfWriter::new(w).write(&self.project))?;
        log::info!("Wrote project file {} ({} bytes)", path.display(), bytes);
        Ok(bytes)
    }

    /// Create `output_dir` if needed and write both project files into it.
    pub fn generate_project(
        &mut self,
        library_dir: &str,
        top_level_dir: &str,
        output_dir: &Path,
    ) -> Result<GenerationReport, EmitError> {
        fs::create_dir_all(output_dir).map_err(|source| EmitError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let settings_file = output_dir.join(SETTINGS_FILE_NAME);
        let project_file = output_dir.join(PROJECT_FILE_NAME);

        self.progress_line("Haddoc2 Quartus Project Generator:")?;
        self.progress_line(&format!("\tQSF File: {}", settings_file.display()))?;
        self.progress_line(&format!("\tQPF File: {}", project_file.display()))?;

        let settings_bytes = self.write_settings_file(&settings_file, library_dir, top_level_dir)?;
        let project_bytes = self.write_project_file(&project_file)?;

        self.progress_line("Successfully generated quartus project")?;

        Ok(GenerationReport {
            output_dir: output_dir.to_path_buf(),
            settings_file,
            project_file,
            settings_bytes,
            project_bytes,
            source_count: self.settings.vhdl_files().len(),
        })
    }

    pub fn generate(&mut self, paths: &ProjectPaths) -> Result<GenerationReport, EmitError> {
        self.generate_project(&paths.library_dir, &paths.top_level_dir, &paths.output_dir)
    }

    pub fn into_progress(self) -> W {
        self.progress
    }

    fn progress_line(&mut self, line: &str) -> Result<(), EmitError> {
        writeln!(self.progress, "{}", line).map_err(EmitError::Progress)
    }
}

/// Create `path` and hand a buffered writer to `body`. The file is closed
/// when this returns, whether or not `body` succeeded.
fn write_with<F>(path: &Path, body: F) -> Result<u64, EmitError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<u64>,
{
    let wrap = |source| EmitError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    body(&mut writer).map_err(wrap)
}

// ── Convenience functions (progress on stdout) ───────────────────────

pub fn write_settings_file(
    path: &Path,
    library_dir: &str,
    top_level_dir: &str,
) -> Result<u64, EmitError> {
    ProjectFileEmitter::stdout().write_settings_file(path, library_dir, top_level_dir)
}

pub fn write_project_file(path: &Path) -> Result<u64, EmitError> {
    ProjectFileEmitter::stdout().write_project_file(path)
}

pub fn generate_project(
    library_dir: &str,
    top_level_dir: &str,
    output_dir: &Path,
) -> Result<GenerationReport, EmitError> {
    ProjectFileEmitter::stdout().generate_project(library_dir, top_level_dir, output_dir)
}
