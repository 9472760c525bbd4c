//! # Haddoc2 Quartus Core
//!
//! In-memory model of the Quartus project generated for a Haddoc2 network:
//! QSF assignments, the Cyclone V device target, the VHDL source manifest,
//! and the project descriptor. Everything here renders to text; writing
//! files is left to `haddoc2-quartus-io`.

pub mod assignment;
pub mod device;
pub mod manifest;
pub mod settings;
pub mod project;

pub use assignment::{Assignment, AssignmentScope};
pub use device::DeviceTarget;
pub use manifest::{SourceFile, SourceKind, SourceManifest};
pub use settings::{SettingsFile, TOP_LEVEL_ENTITY};
pub use project::{ProjectFile, QUARTUS_VERSION};
