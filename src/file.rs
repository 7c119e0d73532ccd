// src/file.rs

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::warn;

use crate::catalog::CatalogDocument;
use crate::config::consts::{LOCK_FILE_PREFIX, WORKBOOK_EXT};
use crate::error::{BuildError, Result};

/// Pick the workbook in `excel_dir`: the first `.xlsx` that is not an Office
/// lock file (`~$...`). Several candidates only warn.
pub fn find_workbook(excel_dir: &Path) -> Result<PathBuf> {
    if !excel_dir.is_dir() {
        return Err(BuildError::MissingInputDir(excel_dir.to_path_buf()));
    }

    let mut candidates = Vec::new();
    for entry in fs::read_dir(excel_dir).map_err(|e| BuildError::io(excel_dir, e))? {
        let entry = entry.map_err(|e| BuildError::io(excel_dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_workbook_name(&name) {
            candidates.push(name);
        }
    }

    let Some(first) = candidates.first() else {
        return Err(BuildError::NoWorkbook(excel_dir.to_path_buf()));
    };
    if candidates.len() > 1 {
        warn!("{} .xlsx files found, using {first}", candidates.len());
    }
    Ok(excel_dir.join(first))
}

pub fn is_workbook_name(name: &str) -> bool {
    name.ends_with(WORKBOOK_EXT) && !name.starts_with(LOCK_FILE_PREFIX)
}

/// Serialize `doc` next to `path` and rename it into place, so readers never
/// see a half-written file. Returns the size written.
pub fn write_json_atomic(path: &Path, doc: &CatalogDocument) -> Result<u64> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_directory(parent)?;

    let tmp = NamedTempFile::new_in(parent).map_err(|e| BuildError::io(parent, e))?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        doc.write_pretty(&mut out)?;
        out.flush().map_err(|e| BuildError::io(tmp.path(), e))?;
    }
    let bytes = tmp
        .as_file()
        .metadata()
        .map_err(|e| BuildError::io(tmp.path(), e))?
        .len();
    tmp.persist(path).map_err(|e| BuildError::io(path, e.error))?;
    Ok(bytes)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(BuildError::io(
            dir,
            std::io::Error::other(format!("path exists but is not a directory: {}", dir.display())),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_files_are_not_workbooks() {
        assert!(is_workbook_name("Tarifs 2025.xlsx"));
        assert!(!is_workbook_name("~$Tarifs 2025.xlsx"));
        assert!(!is_workbook_name("Tarifs.xls"));
        assert!(!is_workbook_name("notes.txt"));
    }
}
