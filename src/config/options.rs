// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Where a build reads from and writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Project root; photo paths in the output are relative to it.
    pub root: PathBuf,
    pub excel_dir: PathBuf,
    pub photos_dir: PathBuf,
    pub output: PathBuf,
    /// Compare the output against the standalone HTML page after writing.
    pub verify: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_root(".")
    }
}

impl BuildOptions {
    /// Standard layout under `root`: `excel/`, `photos/`, `data.json`.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            excel_dir: root.join(EXCEL_DIR),
            photos_dir: root.join(PHOTOS_DIR),
            output: root.join(OUTPUT_FILE),
            root,
            verify: false,
            log_file: None,
        }
    }

    pub fn with_excel_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excel_dir = dir.into();
        self
    }

    pub fn with_photos_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.photos_dir = dir.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_hangs_off_the_root() {
        let opts = BuildOptions::from_root("/srv/phg");
        assert_eq!(opts.excel_dir, PathBuf::from("/srv/phg/excel"));
        assert_eq!(opts.photos_dir, PathBuf::from("/srv/phg/photos"));
        assert_eq!(opts.output, PathBuf::from("/srv/phg/data.json"));
        assert!(!opts.verify);
    }

    #[test]
    fn overrides_keep_the_root() {
        let opts = BuildOptions::from_root("site").with_output("dist/data.json");
        assert_eq!(opts.root, PathBuf::from("site"));
        assert_eq!(opts.output, PathBuf::from("dist/data.json"));
        assert_eq!(opts.photos_dir, PathBuf::from("site/photos"));
    }
}
