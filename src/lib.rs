// src/lib.rs
//! Builds the storefront `data.json` from the price workbook and the photo tree.
//!
//! Call chain:
//! ```text
//! cli → runner::run → file::find_workbook → workbook::Workbook::open
//!                   → runner::assemble → tabs + specs::* (+ photos::PhotoResolver)
//!                   → file::write_json_atomic → photos::survey_and_create
//!                   → (optional) verify::verify_output
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod photos;
pub mod runner;
pub mod specs;
pub mod tabs;
pub mod verify;
pub mod workbook;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{BuildError, Result};
