//! # Haddoc2 Quartus I/O
//!
//! Writers for the Quartus Settings File (`.qsf`) and Quartus Project File
//! (`.qpf`), and the emitter that lays both out in an output directory.

pub mod qsf;
pub mod qpf;
pub mod paths;
pub mod emitter;

pub use qsf::QsfWriter;
pub use qpf::QpfWriter;
pub use paths::ProjectPaths;
pub use emitter::{
    generate_project, write_project_file, write_settings_file, EmitError, GenerationReport,
    ProjectFileEmitter, PROJECT_FILE_NAME, SETTINGS_FILE_NAME,
};
