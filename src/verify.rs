// src/verify.rs
//! Compare a generated document with the `const DATA = {...};` literal embedded
//! in a standalone HTML page of the storefront.
//!
//! The comparison is informational: it never changes the written file and its
//! failures are reported as [`VerifyError`], separate from build errors.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

static EMBEDDED_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)const DATA = (\{.*?\});\s*\n").expect("static regex"));

const STANDALONE_MARKER: &str = "standalone";
const MONUMENTS_KEY: &str = "monuments";
const PHOTO_KEY: &str = "photo";

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("no standalone HTML page in {}", .0.display())]
    NoStandaloneHtml(PathBuf),

    #[error("no `const DATA = {{...}};` block in the HTML page")]
    NoEmbeddedData,

    #[error("cannot parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not a JSON object")]
    NotAnObject(&'static str),
}

/// First `*.html` in `root` whose name contains `standalone`, any case.
pub fn find_standalone_html(root: &Path) -> Result<PathBuf, VerifyError> {
    let io_err = |source| VerifyError::Io { path: root.to_path_buf(), source };
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".html") && name.to_lowercase().contains(STANDALONE_MARKER) {
            return Ok(entry.path());
        }
    }
    Err(VerifyError::NoStandaloneHtml(root.to_path_buf()))
}

pub fn extract_embedded_data(html: &str) -> Result<Value, VerifyError> {
    let caps = EMBEDDED_DATA.captures(html).ok_or(VerifyError::NoEmbeddedData)?;
    Ok(serde_json::from_str(&caps[1])?)
}

/// Collection sizes of one key present on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizeCheck {
    pub key: String,
    pub kind: CollectionKind,
    pub old: usize,
    pub new: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionKind {
    List,
    Map,
}

impl SizeCheck {
    pub fn matches(&self) -> bool {
        self.old == self.new
    }
}

/// Key-level comparison of the first monument.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonumentCheck {
    pub old_keys: BTreeSet<String>,
    pub new_keys: BTreeSet<String>,
    pub identical_values: usize,
}

impl MonumentCheck {
    pub fn same_keys(&self) -> bool {
        self.old_keys == self.new_keys
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerifyReport {
    pub missing_keys: BTreeSet<String>,
    pub added_keys: BTreeSet<String>,
    pub sizes: Vec<SizeCheck>,
    pub first_monument: Option<MonumentCheck>,
}

impl VerifyReport {
    /// No missing key and no size mismatch. Added keys are tolerated.
    pub fn is_consistent(&self) -> bool {
        self.missing_keys.is_empty()
            && self.sizes.iter().all(SizeCheck::matches)
            && self.first_monument.as_ref().is_none_or(MonumentCheck::same_keys)
    }
}

pub fn compare(old: &Map<String, Value>, new: &Map<String, Value>) -> VerifyReport {
    let old_keys: BTreeSet<&String> = old.keys().collect();
    let new_keys: BTreeSet<&String> = new.keys().collect();

    let mut report = VerifyReport {
        missing_keys: old_keys.difference(&new_keys).map(|k| k.to_string()).collect(),
        added_keys: new_keys.difference(&old_keys).map(|k| k.to_string()).collect(),
        ..Default::default()
    };

    for key in old_keys.intersection(&new_keys) {
        let check = match (&old[key.as_str()], &new[key.as_str()]) {
            (Value::Array(a), Value::Array(b)) => Some((CollectionKind::List, a.len(), b.len())),
            (Value::Object(a), Value::Object(b)) => Some((CollectionKind::Map, a.len(), b.len())),
            _ => None,
        };
        if let Some((kind, old_len, new_len)) = check {
            report.sizes.push(SizeCheck { key: key.to_string(), kind, old: old_len, new: new_len });
        }
    }

    report.first_monument = first_monuments(old, new).map(|(o, n)| {
        let old_keys: BTreeSet<String> = o.keys().cloned().collect();
        let new_keys: BTreeSet<String> = n.keys().filter(|k| *k != PHOTO_KEY).cloned().collect();
        let identical_values = old_keys.iter().filter(|k| o.get(*k) == n.get(*k)).count();
        MonumentCheck { old_keys, new_keys, identical_values }
    });

    report
}

fn first_monuments<'a>(
    old: &'a Map<String, Value>,
    new: &'a Map<String, Value>,
) -> Option<(&'a Map<String, Value>, &'a Map<String, Value>)> {
    let o = old.get(MONUMENTS_KEY)?.as_array()?.first()?.as_object()?;
    let n = new.get(MONUMENTS_KEY)?.as_array()?.first()?.as_object()?;
    Some((o, n))
}

/// Locate the standalone page under `root` and compare it with the JSON file
/// at `output`.
pub fn verify_output(root: &Path, output: &Path) -> Result<(PathBuf, VerifyReport), VerifyError> {
    let html_path = find_standalone_html(root)?;
    let html = read(&html_path)?;
    let generated = read(output)?;

    let old = extract_embedded_data(&html)?;
    let new: Value = serde_json::from_str(&generated)?;
    let old = old.as_object().ok_or(VerifyError::NotAnObject("embedded DATA"))?;
    let new = new.as_object().ok_or(VerifyError::NotAnObject("generated document"))?;

    Ok((html_path, compare(old, new)))
}

fn read(path: &Path) -> Result<String, VerifyError> {
    fs::read_to_string(path).map_err(|source| VerifyError::Io { path: path.to_path_buf(), source })
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.missing_keys.is_empty() && self.added_keys.is_empty() {
            writeln!(f, "  ok   same top-level keys")?;
        } else {
            if !self.missing_keys.is_empty() {
                writeln!(f, "  FAIL missing keys: {:?}", self.missing_keys)?;
            }
            if !self.added_keys.is_empty() {
                writeln!(f, "  info added keys: {:?}", self.added_keys)?;
            }
        }

        for s in &self.sizes {
            let unit = match s.kind {
                CollectionKind::List => "items",
                CollectionKind::Map => "entries",
            };
            if s.matches() {
                writeln!(f, "  ok   {}: {} {unit}", s.key, s.old)?;
            } else {
                writeln!(f, "  FAIL {}: HTML={}, JSON={}", s.key, s.old, s.new)?;
            }
        }

        if let Some(m) = &self.first_monument {
            if m.same_keys() {
                writeln!(f, "  ok   monument structure: same keys")?;
            } else {
                writeln!(f, "  FAIL monument structure differs: HTML={:?}, JSON={:?}", m.old_keys, m.new_keys)?;
            }
            writeln!(
                f,
                "  info first monument: {}/{} identical values",
                m.identical_values,
                m.old_keys.len()
            )?;
        }
        Ok(())
    }
}
