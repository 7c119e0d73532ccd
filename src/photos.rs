// src/photos.rs
//! Photo lookup by naming convention, and the photo-directory post-pass.
//!
//! Layout: `<photos>/<subdir>/<base>.{jpg,jpeg,png}`. Extensions are tried in
//! that order with an exact-case match; a missing directory or file simply
//! means "no photo".
//!
//! All filesystem access goes through [`PhotoFs`] so readers stay testable
//! without touching the disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::consts::{BASE_PHOTO_SUBDIRS, PHOTO_EXTENSIONS};

/// The filesystem operations the photo layer needs.
pub trait PhotoFs {
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;
    /// File names (not paths) of the regular files in `dir`.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;
}

/// The real filesystem.
pub struct OsFs;

impl PhotoFs for OsFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }
}

/// Resolves photo base names to project-relative paths.
pub struct PhotoResolver<'a> {
    fs: &'a dyn PhotoFs,
    root: PathBuf,
    photos_dir: PathBuf,
}

impl<'a> PhotoResolver<'a> {
    pub fn new(fs: &'a dyn PhotoFs, root: impl Into<PathBuf>, photos_dir: impl Into<PathBuf>) -> Self {
        Self { fs, root: root.into(), photos_dir: photos_dir.into() }
    }

    /// First of `<base>.jpg`, `<base>.jpeg`, `<base>.png` found in `subdir`,
    /// as a `/`-separated path relative to the project root.
    pub fn find(&self, subdir: &str, base_name: &str) -> Option<String> {
        let dir = self.photos_dir.join(subdir);
        if !self.fs.is_dir(&dir) {
            return None;
        }
        PHOTO_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{base_name}{ext}")))
            .find(|path| self.fs.is_file(path))
            .map(|path| relative_slash_path(&self.root, &path))
    }
}

/// `path` relative to `root`, joined with `/` on every platform.
/// Paths outside `root` are returned whole, with `\` turned into `/`.
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// State of one photo subdirectory after the post-pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirState {
    Photos(usize),
    Empty,
    Created,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoDirStatus {
    pub subdir: String,
    pub state: DirState,
}

/// The standard subdirectories followed by any extra product subdirectories,
/// without duplicates.
pub fn expected_subdirs<I, S>(product_subdirs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = BASE_PHOTO_SUBDIRS.iter().map(|s| s.to_string()).collect();
    for sub in product_subdirs {
        let sub = sub.into();
        if !out.contains(&sub) {
            out.push(sub);
        }
    }
    out
}

/// Count the photos of each subdirectory and create the missing ones empty.
pub fn survey_and_create(
    fs: &dyn PhotoFs,
    photos_dir: &Path,
    subdirs: &[String],
) -> io::Result<Vec<PhotoDirStatus>> {
    let mut out = Vec::with_capacity(subdirs.len());
    for subdir in subdirs {
        let path = photos_dir.join(subdir);
        let state = if fs.is_dir(&path) {
            let count = fs.list_files(&path)?.iter().filter(|n| is_photo_file(n)).count();
            if count > 0 {
                info!("{subdir}/: {count} photo(s)");
                DirState::Photos(count)
            } else {
                info!("{subdir}/: empty");
                DirState::Empty
            }
        } else {
            warn!("{subdir}/: missing, creating {}", path.display());
            fs.create_dir_all(&path)?;
            DirState::Created
        };
        out.push(PhotoDirStatus { subdir: subdir.clone(), state });
    }
    Ok(out)
}

fn is_photo_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    !name.starts_with('.') && PHOTO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
