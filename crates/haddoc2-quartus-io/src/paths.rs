use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directories a generation run works with.
///
/// `library_dir` and `top_level_dir` are derived from the working directory
/// the generator is launched from (the Haddoc2 network directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPaths {
    pub library_dir: String,
    pub top_level_dir: String,
    pub output_dir: PathBuf,
}

impl ProjectPaths {
    /// Derive paths from `cwd`. A relative `output_dir` is resolved against `cwd`.
    pub fn from_working_dir(cwd: &Path, output_dir: &Path) -> Self {
        let cwd_str = normalize_separators(cwd);
        Self {
            library_dir: format!("{}/../lib/hdl", cwd_str),
            top_level_dir: format!("{}/hdl_generated", cwd_str),
            output_dir: cwd.join(output_dir),
        }
    }
}

/// Render a path with `/` separators only.
pub fn normalize_separators(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_working_dir() {
        let paths = ProjectPaths::from_working_dir(Path::new("/work/lenet"), Path::new("quartus"));
        assert_eq!(paths.library_dir, "/work/lenet/../lib/hdl");
        assert_eq!(paths.top_level_dir, "/work/lenet/hdl_generated");
        assert_eq!(paths.output_dir, PathBuf::from("/work/lenet/quartus"));
    }

    #[test]
    fn test_absolute_output_dir_is_kept() {
        let paths = ProjectPaths::from_working_dir(Path::new("/work"), Path::new("/tmp/out"));
        assert_eq!(paths.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_backslashes_normalized() {
        assert_eq!(
            normalize_separators(Path::new(r"C:\haddoc2\lenet")),
            "C:/haddoc2/lenet"
        );
        let paths = ProjectPaths::from_working_dir(Path::new(r"C:\haddoc2\lenet"), Path::new("q"));
        assert_eq!(paths.top_level_dir, "C:/haddoc2/lenet/hdl_generated");
    }
}
