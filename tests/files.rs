// tests/files.rs
use std::fs;

use phg_catalog::catalog::CatalogDocument;
use phg_catalog::config::BuildOptions;
use phg_catalog::file::{find_workbook, write_json_atomic};
use phg_catalog::photos::{expected_subdirs, survey_and_create, DirState, OsFs};
use phg_catalog::runner;
use phg_catalog::verify::verify_output;
use phg_catalog::BuildError;
use tempfile::tempdir;

#[test]
fn missing_excel_dir_is_a_configuration_error() {
    let tmp = tempdir().unwrap();
    let err = find_workbook(&tmp.path().join("excel")).unwrap_err();
    assert!(matches!(err, BuildError::MissingInputDir(_)));
    assert!(err.is_configuration());
}

#[test]
fn lock_files_do_not_count_as_workbooks() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("~$Tarifs.xlsx"), b"").unwrap();
    fs::write(tmp.path().join("notes.txt"), b"").unwrap();
    assert!(matches!(find_workbook(tmp.path()), Err(BuildError::NoWorkbook(_))));

    fs::write(tmp.path().join("Tarifs.xlsx"), b"").unwrap();
    assert_eq!(find_workbook(tmp.path()).unwrap(), tmp.path().join("Tarifs.xlsx"));
}

#[test]
fn run_stops_before_writing_when_excel_dir_is_missing() {
    let tmp = tempdir().unwrap();
    let opts = BuildOptions::from_root(tmp.path());
    let err = runner::run(&opts, &OsFs).err().unwrap();
    assert!(err.is_configuration());
    assert!(!opts.output.exists());
}

#[test]
fn output_is_written_whole_and_replaces_the_old_file() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("dist").join("data.json");
    fs::create_dir_all(out.parent().unwrap()).unwrap();
    fs::write(&out, "stale").unwrap();

    let bytes = write_json_atomic(&out, &CatalogDocument::default()).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(bytes as usize, text.len());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value["granits"].as_array().unwrap().is_empty());

    // no temp file left next to the output
    assert_eq!(fs::read_dir(out.parent().unwrap()).unwrap().count(), 1);
}

#[test]
fn photo_dirs_are_counted_or_created() {
    let tmp = tempdir().unwrap();
    let photos = tmp.path().join("photos");
    fs::create_dir_all(photos.join("monuments")).unwrap();
    fs::write(photos.join("monuments").join("A.JPG"), b"").unwrap();
    fs::write(photos.join("monuments").join(".B.jpg"), b"").unwrap();
    fs::write(photos.join("monuments").join("readme.txt"), b"").unwrap();
    fs::create_dir_all(photos.join("granits")).unwrap();

    let subdirs = expected_subdirs(["monuments", "plaques"]);
    let status = survey_and_create(&OsFs, &photos, &subdirs).unwrap();

    let state = |name: &str| status.iter().find(|s| s.subdir == name).map(|s| s.state.clone());
    assert_eq!(state("monuments"), Some(DirState::Photos(1)));
    assert_eq!(state("granits"), Some(DirState::Empty));
    assert_eq!(state("urnes"), Some(DirState::Created));
    assert_eq!(state("plaques"), Some(DirState::Created));
    assert!(photos.join("plaques").is_dir());
    assert!(photos.join("lithos").is_dir());
}

#[test]
fn verification_reads_the_standalone_page() {
    let tmp = tempdir().unwrap();
    fs::write(
        tmp.path().join("Catalogue-Standalone.html"),
        "<script>\nconst DATA = {\"granits\": [1, 2], \"poids\": {}};\n</script>\n",
    )
    .unwrap();
    let out = tmp.path().join("data.json");
    write_json_atomic(&out, &CatalogDocument::default()).unwrap();

    let (html, report) = verify_output(tmp.path(), &out).unwrap();
    assert!(html.ends_with("Catalogue-Standalone.html"));
    assert!(report.missing_keys.is_empty());
    assert!(report.added_keys.contains("types"));
    assert!(!report.is_consistent());
}
