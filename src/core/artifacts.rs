//! Build artifact layout of a compiled zkllvm-template project.

use std::path::{Path, PathBuf};

use tracing::error;

/// Paths to the files a compiled template project must contain.
///
/// Layout under the template root:
/// - `build/src/<circuit>.ll`   intermediate representation
/// - `build/src/<circuit>.crct` circuit description
/// - `build/src/<circuit>.tbl`  assignment table
/// - `src/main-input.json`      public input for the assigner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub root: PathBuf,
    pub ir: PathBuf,
    pub circuit: PathBuf,
    pub table: PathBuf,
    pub input_json: PathBuf,
}

impl BuildArtifacts {
    pub fn new(root: impl Into<PathBuf>, circuit_name: &str) -> Self {
        let root = root.into();
        let build_src = root.join("build").join("src");
        BuildArtifacts {
            ir: build_src.join(format!("{circuit_name}.ll")),
            circuit: build_src.join(format!("{circuit_name}.crct")),
            table: build_src.join(format!("{circuit_name}.tbl")),
            input_json: root.join("src").join("main-input.json"),
            root,
        }
    }

    /// The three files every measurement step depends on.
    pub fn required(&self) -> [&Path; 3] {
        [&self.ir, &self.circuit, &self.table]
    }

    /// File names of the required artifacts that do not exist.
    pub fn missing(&self) -> Vec<String> {
        self.required()
            .into_iter()
            .filter(|p| !p.exists())
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect()
    }

    /// Check that all required artifacts exist, logging the missing ones.
    pub fn verify(&self) -> bool {
        let missing = self.missing();
        if missing.is_empty() {
            return true;
        }
        error!("Missing required build files: {}", missing.join(", "));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_layout() {
        let a = BuildArtifacts::new("/work/zkllvm-template", "template");
        assert_eq!(a.ir, PathBuf::from("/work/zkllvm-template/build/src/template.ll"));
        assert_eq!(a.circuit, PathBuf::from("/work/zkllvm-template/build/src/template.crct"));
        assert_eq!(a.table, PathBuf::from("/work/zkllvm-template/build/src/template.tbl"));
        assert_eq!(a.input_json, PathBuf::from("/work/zkllvm-template/src/main-input.json"));
    }

    #[test]
    fn test_all_missing_named() {
        let dir = tempdir().unwrap();
        let a = BuildArtifacts::new(dir.path(), "template");
        assert!(!a.verify());
        assert_eq!(a.missing(), vec!["template.ll", "template.crct", "template.tbl"]);
    }

    #[test]
    fn test_subset_missing() {
        let dir = tempdir().unwrap();
        let a = BuildArtifacts::new(dir.path(), "template");
        touch(&a.circuit);
        assert!(!a.verify());
        assert_eq!(a.missing(), vec!["template.ll", "template.tbl"]);
    }

    #[test]
    fn test_all_present() {
        let dir = tempdir().unwrap();
        let a = BuildArtifacts::new(dir.path(), "template");
        for p in a.required() {
            touch(p);
        }
        assert!(a.missing().is_empty());
        assert!(a.verify());
    }
}
