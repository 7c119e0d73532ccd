// src/config/consts.rs

// Project layout, relative to the project root
pub const EXCEL_DIR: &str = "excel";
pub const PHOTOS_DIR: &str = "photos";
pub const OUTPUT_FILE: &str = "data.json";
pub const WORKBOOK_EXT: &str = ".xlsx";
pub const LOCK_FILE_PREFIX: char = '~';

// Structural tabs (may be hidden in the workbook)
pub const TAB_GRANITS: &str = "GRANITS";
pub const TAB_POIDS: &str = "Poids";
pub const TAB_TARIFS: &str = "Tarif TFranco";
pub const TAB_ZONES: &str = "Zone.TFranco";
pub const TAB_LISTES: &str = "LISTES";

pub const FIXED_TABS: [&str; 5] = [TAB_GRANITS, TAB_POIDS, TAB_TARIFS, TAB_ZONES, TAB_LISTES];

pub const IGNORED_TABS: [&str; 4] = [
    "Mode opératoire",
    "CALCUL PRIX ACHAT €",
    "CALCUL PRIX FAMILLE €",
    "(Semelles.Monument.€HT)",
];

// Product tabs: "<Type>.PrixAdh.€HT"
pub const PRODUCT_TAB_PATTERN: &str = r"^.+\.PrixAdh\.€HT$";

// Photos
pub const PHOTO_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];
pub const STONE_PHOTO_SUBDIR: &str = "granits";
pub const BASE_PHOTO_SUBDIRS: [&str; 6] =
    ["monuments", "accessoires", "granits", "gravures", "lithos", "urnes"];

// Document
pub const EXPECTED_PRODUCT_KEYS: [&str; 6] =
    ["monuments", "semelles", "accessoires", "gravures", "lithos", "urnes"];
pub const STRUCTURAL_KEYS: [&str; 8] = [
    "granits",
    "poids",
    "zones_transport",
    "tarifs_transport",
    "departements",
    "types",
    "lignes_monument",
    "lignes_accessoire",
];
pub const TYPE_ORDER: [&str; 6] = ["Monument", "Semelle", "Accessoire", "Urne", "Gravure", "Litho"];

// Display precision
pub const PRICE_DECIMALS: usize = 2;
pub const WEIGHT_DECIMALS: usize = 3;
