use serde::{Deserialize, Serialize};

use crate::settings::TOP_LEVEL_ENTITY;

/// Quartus release written into generated `.qpf` files.
pub const QUARTUS_VERSION: &str = "18.0";

/// Contents of a Quartus Project File (`.qpf`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub quartus_version: String,
    /// Active revision; Quartus loads `<revision>.qsf` next to the `.qpf`.
    pub revision: String,
}

impl ProjectFile {
    pub fn new(quartus_version: &str, revision: &str) -> Self {
        Self {
            quartus_version: quartus_version.to_string(),
            revision: revision.to_string(),
        }
    }

    pub fn cnn_process() -> Self {
        Self::new(QUARTUS_VERSION, TOP_LEVEL_ENTITY)
    }

    pub fn render(&self) -> String {
        format!(
            "QUARTUS_VERSION = \"{}\"\nPROJECT_REVISION = \"{}\"\n",
            self.quartus_version, self.revision
        )
    }
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self::cnn_process()
    }
}
