// src/tabs.rs
//! Tab classification.
//!
//! Structural tabs have fixed names and are read by name whatever their
//! visibility. Product tabs are discovered: any visible tab named
//! `<Type>.PrixAdh.€HT` that is not parenthesised (the workbook's convention
//! for archived tabs) and not on the ignore list.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::consts::{FIXED_TABS, IGNORED_TABS, PRODUCT_TAB_PATTERN};
use crate::workbook::Workbook;

static PRODUCT_TAB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRODUCT_TAB_PATTERN).expect("static regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabRole {
    Structural,
    Ignored,
    Product,
    /// Anything else: unrelated tabs, hidden or parenthesised product tabs.
    Other,
}

pub fn classify_tab(name: &str, visible: bool) -> TabRole {
    if IGNORED_TABS.contains(&name) {
        return TabRole::Ignored;
    }
    if FIXED_TABS.contains(&name) {
        return TabRole::Structural;
    }
    if !PRODUCT_TAB.is_match(name) {
        return TabRole::Other;
    }
    if name.starts_with('(') && name.ends_with(')') {
        return TabRole::Other;
    }
    if !visible {
        return TabRole::Other;
    }
    TabRole::Product
}

/// `"Monument.PrixAdh.€HT"` → `"Monument"`, `"Accessoires.PrixAdh.€HT"` →
/// `"Accessoire"`. `"Poids"` keeps its final `s`.
pub fn extract_product_type(tab_name: &str) -> &str {
    let base = tab_name.split('.').next().unwrap_or(tab_name);
    match base.strip_suffix('s') {
        Some(singular) if base != "Poids" => singular,
        _ => base,
    }
}

/// Which reader handles a product type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProductKind {
    Monument,
    Semelle,
    Accessoire,
    Gravure,
    Generic(String),
}

impl ProductKind {
    pub fn from_type(product_type: &str) -> Self {
        match product_type {
            "Monument" => ProductKind::Monument,
            "Semelle" => ProductKind::Semelle,
            "Accessoire" => ProductKind::Accessoire,
            "Gravure" => ProductKind::Gravure,
            other => ProductKind::Generic(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            ProductKind::Monument => "Monument",
            ProductKind::Semelle => "Semelle",
            ProductKind::Accessoire => "Accessoire",
            ProductKind::Gravure => "Gravure",
            ProductKind::Generic(t) => t,
        }
    }

    /// Document key for the item list.
    pub fn key(&self) -> String {
        match self {
            ProductKind::Monument => "monuments".to_string(),
            ProductKind::Semelle => "semelles".to_string(),
            ProductKind::Accessoire => "accessoires".to_string(),
            ProductKind::Gravure => "gravures".to_string(),
            ProductKind::Generic(t) => plural_lower(t),
        }
    }

    /// Photo subdirectory for this type (always lowercase + `s`).
    pub fn photo_subdir(&self) -> String {
        plural_lower(self.type_name())
    }
}

fn plural_lower(product_type: &str) -> String {
    format!("{}s", product_type.to_lowercase())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductTab {
    pub sheet: String,
    pub kind: ProductKind,
}

/// Every tab of a workbook sorted by role, each list in workbook order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabPlan {
    pub structural: Vec<String>,
    pub ignored: Vec<String>,
    pub products: Vec<ProductTab>,
    pub other: Vec<String>,
}

impl TabPlan {
    pub fn classify<'a, I>(sheets: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut plan = TabPlan::default();
        for (name, visible) in sheets {
            match classify_tab(name, visible) {
                TabRole::Structural => plan.structural.push(name.to_string()),
                TabRole::Ignored => plan.ignored.push(name.to_string()),
                TabRole::Other => plan.other.push(name.to_string()),
                TabRole::Product => plan.products.push(ProductTab {
                    sheet: name.to_string(),
                    kind: ProductKind::from_type(extract_product_type(name)),
                }),
            }
        }
        plan
    }

    pub fn from_workbook(workbook: &Workbook) -> Self {
        Self::classify(workbook.sheets().iter().map(|s| (s.name(), s.is_visible())))
    }

    pub fn product_subdirs(&self) -> Vec<String> {
        self.products.iter().map(|t| t.kind.photo_subdir()).collect()
    }
}
