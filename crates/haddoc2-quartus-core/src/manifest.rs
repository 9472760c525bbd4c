use serde::{Deserialize, Serialize};

/// Directory of generated VHDL, relative to the Quartus project directory.
pub const GENERATED_HDL_DIR: &str = "../hdl_generated";
/// Directory of the Haddoc2 IP library, relative to the Quartus project directory.
pub const LIBRARY_HDL_DIR: &str = "../../lib/hdl";

/// Files produced by the Haddoc2 code generator for one network.
const GENERATED_SOURCES: [&str; 3] = ["bitwidths.vhd", "params.vhd", "cnn_process.vhd"];

/// Haddoc2 IP library, in compilation order.
const LIBRARY_SOURCES: [&str; 15] = [
    "cnn_types.vhd",
    "InputLayer.vhd",
    "DisplayLayer.vhd",
    "ConvLayer.vhd",
    "MCM.vhd",
    "MOA.vhd",
    "DotProduct.vhd",
    "myTaps.vhd",
    "NeighExtractor.vhd",
    "TensorExtractor.vhd",
    "TanhLayer.vhd",
    "PoolLayer.vhd",
    "poolV.vhd",
    "poolH.vhd",
    "maxPool.vhd",
];

/// Where a VHDL source comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    Generated,
    Library,
}

impl SourceKind {
    pub fn base_dir(&self) -> &'static str {
        match self {
            SourceKind::Generated => GENERATED_HDL_DIR,
            SourceKind::Library => LIBRARY_HDL_DIR,
        }
    }
}

/// One VHDL file listed in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub kind: SourceKind,
    pub file_name: String,
}

impl SourceFile {
    pub fn new(kind: SourceKind, file_name: &str) -> Self {
        Self {
            kind,
            file_name: file_name.to_string(),
        }
    }

    /// Path as written into the `VHDL_FILE` assignment.
    pub fn relative_path(&self) -> String {
        format!("{}/{}", self.kind.base_dir(), self.file_name)
    }
}

/// Ordered list of VHDL sources compiled by the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceManifest {
    sources: Vec<SourceFile>,
}

impl SourceManifest {
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Generated network files followed by the full IP library.
    pub fn cnn_process() -> Self {
        let mut manifest = Self::new();
        for name in GENERATED_SOURCES {
            manifest.add(SourceFile::new(SourceKind::Generated, name));
        }
        for name in LIBRARY_SOURCES {
            manifest.add(SourceFile::new(SourceKind::Library, name));
        }
        manifest
    }

    pub fn add(&mut self, source: SourceFile) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn of_kind(&self, kind: SourceKind) -> impl Iterator<Item = &SourceFile> {
        self.sources.iter().filter(move |s| s.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnn_process_manifest_order() {
        let m = SourceManifest::cnn_process();
        assert_eq!(m.len(), 18);
        assert_eq!(m.of_kind(SourceKind::Generated).count(), 3);
        assert_eq!(m.of_kind(SourceKind::Library).count(), 15);

        // Generated sources come before the library.
        let first_library = m
            .sources()
            .iter()
            .position(|s| s.kind == SourceKind::Library)
            .unwrap();
        assert!(m.sources()[first_library..]
            .iter()
            .all(|s| s.kind == SourceKind::Library));

        assert_eq!(m.sources()[0].relative_path(), "../hdl_generated/bitwidths.vhd");
        assert_eq!(m.sources()[17].relative_path(), "../../lib/hdl/maxPool.vhd");
    }

    #[test]
    fn test_empty_manifest() {
        let m = SourceManifest::default();
        assert!(m.is_empty());
    }
}
