// src/runner.rs
use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    catalog::{CatalogDocument, ProductItem},
    config::{
        consts::{EXPECTED_PRODUCT_KEYS, STRUCTURAL_KEYS, TAB_GRANITS, TAB_LISTES, TAB_POIDS, TAB_TARIFS, TAB_ZONES},
        BuildOptions,
    },
    error::Result,
    file,
    photos::{self, PhotoDirStatus, PhotoFs, PhotoResolver},
    specs,
    tabs::{ProductKind, ProductTab, TabPlan},
    workbook::{Sheet, Workbook},
};

/// What a run produced.
pub struct RunSummary {
    pub workbook: PathBuf,
    pub output: PathBuf,
    pub bytes_written: u64,
    pub document: CatalogDocument,
    pub photo_dirs: Vec<PhotoDirStatus>,
}

/// Full build: find and load the workbook, assemble, write the document
/// atomically, then survey (and create) the photo directories.
pub fn run(options: &BuildOptions, fs: &dyn PhotoFs) -> Result<RunSummary> {
    let workbook_path = file::find_workbook(&options.excel_dir)?;
    info!("Workbook: {}", workbook_path.display());
    info!("Photos: {}", options.photos_dir.display());

    let workbook = Workbook::open(&workbook_path)?;
    let plan = TabPlan::from_workbook(&workbook);
    let resolver = PhotoResolver::new(fs, &options.root, &options.photos_dir);
    let document = assemble_plan(&workbook, &plan, &resolver);

    let bytes_written = file::write_json_atomic(&options.output, &document)?;
    info!("Wrote {} ({} KB)", options.output.display(), bytes_written / 1024);

    let subdirs = photos::expected_subdirs(plan.product_subdirs());
    let photo_dirs = photos::survey_and_create(fs, &options.photos_dir, &subdirs)
        .map_err(|e| crate::BuildError::io(&options.photos_dir, e))?;

    Ok(RunSummary {
        workbook: workbook_path,
        output: options.output.clone(),
        bytes_written,
        document,
        photo_dirs,
    })
}

/// Read one in-memory workbook into the output document.
pub fn assemble(workbook: &Workbook, photos: &PhotoResolver) -> CatalogDocument {
    assemble_plan(workbook, &TabPlan::from_workbook(workbook), photos)
}

pub fn assemble_plan(workbook: &Workbook, plan: &TabPlan, photos: &PhotoResolver) -> CatalogDocument {
    let mut doc = CatalogDocument::default();

    /* ---------------- Structural tabs ---------------- */

    if let Some(sheet) = structural(workbook, TAB_GRANITS) {
        doc.granits = specs::granits::read(sheet, photos);
        let with_photo = doc.granits.iter().filter(|g| g.photo.is_some()).count();
        info!("{} stones ({} with photo)", doc.granits.len(), with_photo);
    }
    if let Some(sheet) = structural(workbook, TAB_POIDS) {
        doc.poids = specs::poids::read(sheet);
        info!("{} weights", doc.poids.len());
    }
    if let Some(sheet) = structural(workbook, TAB_ZONES) {
        doc.zones_transport = specs::transport::read_zones(sheet);
        info!("{} departments mapped to zones", doc.zones_transport.len());
    }
    if let Some(sheet) = structural(workbook, TAB_TARIFS) {
        doc.tarifs_transport = specs::transport::read_tariffs(sheet);
        info!("{} transport tariffs", doc.tarifs_transport.len());
    }
    if let Some(sheet) = structural(workbook, TAB_LISTES) {
        let lists = specs::listes::read(sheet);
        info!("{} departments, types: {:?}", lists.departments.len(), lists.types);
        info!("monument lines: {:?}", lists.monument_lines);
        info!("accessory lines: {:?}", lists.accessory_lines);
        doc.departements = lists.departments;
        doc.types = lists.types;
        doc.lignes_monument = lists.monument_lines;
        doc.lignes_accessoire = lists.accessory_lines;
    }

    /* ---------------- Product tabs ---------------- */

    info!(
        "Product tabs: {:?}",
        plan.products.iter().map(|t| t.sheet.as_str()).collect::<Vec<_>>()
    );
    for tab in &plan.products {
        let Some(sheet) = workbook.sheet(&tab.sheet) else { continue };
        let key = tab.kind.key();
        if STRUCTURAL_KEYS.contains(&key.as_str()) {
            warn!("{}: key '{key}' is reserved for structural data, tab skipped", tab.sheet);
            continue;
        }
        let items = read_product_tab(sheet, tab, photos);
        log_product_counts(tab, &items);
        doc.products.insert(key, items);
    }

    for key in EXPECTED_PRODUCT_KEYS {
        if !doc.products.contains_key(key) {
            warn!("{key}: tab empty or missing");
            doc.products.insert(key.to_string(), Vec::new());
        }
    }

    doc
}

fn structural<'a>(workbook: &'a Workbook, name: &str) -> Option<&'a Sheet> {
    let sheet = workbook.sheet(name);
    if sheet.is_none() {
        warn!("structural tab '{name}' not found, left empty");
    }
    sheet
}

fn read_product_tab(sheet: &Sheet, tab: &ProductTab, photos: &PhotoResolver) -> Vec<ProductItem> {
    match &tab.kind {
        ProductKind::Monument => specs::monuments::read(sheet, photos)
            .into_iter()
            .map(ProductItem::Monument)
            .collect(),
        ProductKind::Semelle => specs::semelles::read(sheet).into_iter().map(ProductItem::Semelle).collect(),
        ProductKind::Accessoire => specs::accessoires::read(sheet, photos)
            .into_iter()
            .map(ProductItem::Accessoire)
            .collect(),
        ProductKind::Gravure => specs::gravures::read(sheet).into_iter().map(ProductItem::Gravure).collect(),
        ProductKind::Generic(_) => specs::generic::read(sheet, &tab.kind.photo_subdir(), photos)
            .into_iter()
            .map(ProductItem::Generic)
            .collect(),
    }
}

fn log_product_counts(tab: &ProductTab, items: &[ProductItem]) {
    match tab.kind {
        ProductKind::Monument | ProductKind::Accessoire => {
            let refs: HashSet<&str> = items.iter().filter_map(ProductItem::reference).collect();
            let with_photo = items.iter().filter(|i| i.photo().is_some()).count();
            info!(
                "{} (type {}): {} rows ({} unique refs, {} rows with photo)",
                tab.sheet,
                tab.kind.type_name(),
                items.len(),
                refs.len(),
                with_photo
            );
        }
        ProductKind::Generic(_) => {
            info!("{} (type {}): {} rows (generic reader)", tab.sheet, tab.kind.type_name(), items.len());
        }
        _ => info!("{} (type {}): {} rows", tab.sheet, tab.kind.type_name(), items.len()),
    }
}
