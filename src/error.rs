// src/error.rs
//! Fatal errors of a build run.
//!
//! Only configuration and I/O problems are errors. Row-level gaps in the
//! workbook (missing reference, missing price, ...) are skipped by the readers
//! and never surface here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    /// The directory expected to hold the workbook does not exist.
    #[error("input directory not found: {}", .0.display())]
    MissingInputDir(PathBuf),

    /// The input directory holds no `.xlsx` file.
    #[error("no .xlsx workbook found in {}", .0.display())]
    NoWorkbook(PathBuf),

    #[error("cannot read workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl BuildError {
    /// True for errors caused by the project layout rather than by I/O.
    pub fn is_configuration(&self) -> bool {
        matches!(self, BuildError::MissingInputDir(_) | BuildError::NoWorkbook(_))
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BuildError::Io { path: path.into(), source }
    }
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
