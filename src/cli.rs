// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use crate::config::BuildOptions;
use crate::photos::{DirState, OsFs};

/// Generate data.json from the price workbook and the photo tree.
#[derive(Debug, Parser)]
#[command(name = "phg_catalog", version, about)]
pub struct Args {
    /// Project root: holds excel/, photos/ and receives data.json
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Workbook directory (default: <root>/excel)
    #[arg(long)]
    pub excel_dir: Option<PathBuf>,

    /// Photo tree (default: <root>/photos)
    #[arg(long)]
    pub photos_dir: Option<PathBuf>,

    /// Output file (default: <root>/data.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compare the result with the standalone HTML page in <root>
    #[arg(long)]
    pub verify: bool,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_options(self) -> BuildOptions {
        let mut opts = BuildOptions::from_root(&self.root);
        if let Some(dir) = self.excel_dir {
            opts = opts.with_excel_dir(dir);
        }
        if let Some(dir) = self.photos_dir {
            opts = opts.with_photos_dir(dir);
        }
        if let Some(path) = self.output {
            opts = opts.with_output(path);
        }
        opts.verify = self.verify;
        opts.log_file = self.log_file;
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let verbose = args.verbose;
    let opts = args.into_options();

    crate::log::init(verbose, opts.log_file.as_deref()).wrap_err("cannot initialise logging")?;

    let summary = crate::runner::run(&opts, &OsFs)
        .wrap_err_with(|| format!("build failed (project root {})", opts.root.display()))?;

    let created = summary
        .photo_dirs
        .iter()
        .filter(|d| d.state == DirState::Created)
        .count();
    info!(
        "Done: {} -> {} ({} photo dirs, {} created)",
        summary.workbook.display(),
        summary.output.display(),
        summary.photo_dirs.len(),
        created
    );

    if opts.verify {
        match crate::verify::verify_output(&opts.root, &summary.output) {
            Ok((html, report)) => {
                info!("Verification against {}:\n{report}", html.display());
                if !report.is_consistent() {
                    warn!("generated document differs from the standalone page");
                }
            }
            Err(e) => warn!("verification skipped: {e}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_follow_the_root() {
        let opts = Args::parse_from(["phg_catalog", "--root", "site"]).into_options();
        assert_eq!(opts.excel_dir, Path::new("site").join("excel"));
        assert_eq!(opts.output, Path::new("site").join("data.json"));
        assert!(!opts.verify);
    }

    #[test]
    fn explicit_paths_override_the_root() {
        let opts = Args::parse_from([
            "phg_catalog",
            "--root",
            "site",
            "--photos-dir",
            "/media/photos",
            "-o",
            "out.json",
            "--verify",
        ])
        .into_options();
        assert_eq!(opts.photos_dir, Path::new("/media/photos"));
        assert_eq!(opts.output, Path::new("out.json"));
        assert!(opts.verify);
    }
}
