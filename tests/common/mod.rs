// tests/common/mod.rs
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use phg_catalog::core::Cell;
use phg_catalog::photos::PhotoFs;
use phg_catalog::workbook::Sheet;

/// Build one row from mixed literals: `row![12, "Granit Noir", Cell::Empty]`.
macro_rules! row {
    ($($v:expr),* $(,)?) => {
        vec![$(phg_catalog::core::Cell::from($v)),*]
    };
}

pub fn sheet(name: &str, rows: Vec<Vec<Cell>>) -> Sheet {
    Sheet::new(name, rows)
}

/// Photo tree held in memory.
#[derive(Default)]
pub struct MemFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeSet<PathBuf>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file and all its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.borrow_mut().insert(dir.to_path_buf());
            parent = dir.parent();
        }
        self.files.borrow_mut().insert(path);
        self
    }

    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.dirs.borrow_mut().insert(path.as_ref().to_path_buf());
        self
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }
}

impl PhotoFs for MemFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .files
            .borrow()
            .iter()
            .filter(|f| f.parent() == Some(dir))
            .filter_map(|f| f.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        self.dirs.borrow_mut().insert(dir.to_path_buf());
        Ok(())
    }
}
