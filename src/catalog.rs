// src/catalog.rs
//! The output document and its records.
//!
//! Field names are the JSON keys the storefront page reads, so they stay in
//! French. Key order follows declaration order; list keys of product types
//! follow workbook tab order.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

pub use crate::core::Amount;

/// A stone code: numeric in practice, kept as text when the cell is not.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StoneCode {
    Number(i64),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoneEntry {
    pub code: StoneCode,
    pub nom: String,
    pub origine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransportTariff {
    pub zone: String,
    #[serde(rename = "0_3T")]
    pub up_to_3t: i64,
    #[serde(rename = "3_5T")]
    pub up_to_5t: i64,
    #[serde(rename = "5_8T")]
    pub up_to_8t: i64,
    #[serde(rename = "8_10T")]
    pub up_to_10t: i64,
    #[serde(rename = "10_15T")]
    pub up_to_15t: i64,
    pub minimum: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepartmentZone {
    pub departement: String,
    pub zone: String,
}

/// The `LISTES` tab, projected four ways.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListsBundle {
    pub types: Vec<String>,
    pub monument_lines: Vec<String>,
    pub accessory_lines: Vec<String>,
    pub departments: Vec<DepartmentZone>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonumentItem {
    pub ligne: String,
    pub reference: String,
    pub origine: String,
    pub code_granit: i64,
    pub granit: String,
    pub prix_ht: Amount,
    pub avec_semelle_130x230: Option<Amount>,
    pub avec_semelle_140x240: Option<Amount>,
    pub avec_semelle_150x250: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SemelleItem {
    pub reference: String,
    pub origine: String,
    pub code_granit: i64,
    pub granit: String,
    pub prix_ht: Amount,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessoireItem {
    #[serde(rename = "type")]
    pub sub_type: String,
    pub reference: String,
    pub origine: String,
    pub code_granit: i64,
    pub granit: String,
    pub prix_ht: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GravureItem {
    pub reference: String,
    pub prix_caractere_ht: Amount,
}

/// Item of a product type without a dedicated reader: only the fields its
/// header row let us recognise are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GenericItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_granit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix_caractere_ht: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prix_ht: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl GenericItem {
    /// True when no column matched.
    pub fn is_empty(&self) -> bool {
        *self == GenericItem::default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProductItem {
    Monument(MonumentItem),
    Semelle(SemelleItem),
    Accessoire(AccessoireItem),
    Gravure(GravureItem),
    Generic(GenericItem),
}

impl ProductItem {
    pub fn reference(&self) -> Option<&str> {
        match self {
            ProductItem::Monument(m) => Some(&m.reference),
            ProductItem::Semelle(s) => Some(&s.reference),
            ProductItem::Accessoire(a) => Some(&a.reference),
            ProductItem::Gravure(g) => Some(&g.reference),
            ProductItem::Generic(g) => g.reference.as_deref(),
        }
    }

    pub fn photo(&self) -> Option<&str> {
        match self {
            ProductItem::Monument(m) => m.photo.as_deref(),
            ProductItem::Accessoire(a) => a.photo.as_deref(),
            ProductItem::Generic(g) => g.photo.as_deref(),
            ProductItem::Semelle(_) | ProductItem::Gravure(_) => None,
        }
    }
}

/// The whole `data.json`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CatalogDocument {
    pub granits: Vec<StoneEntry>,
    #[serde(flatten)]
    pub products: IndexMap<String, Vec<ProductItem>>,
    pub poids: IndexMap<String, Amount>,
    pub zones_transport: IndexMap<String, String>,
    pub tarifs_transport: Vec<TransportTariff>,
    pub departements: Vec<DepartmentZone>,
    pub types: Vec<String>,
    pub lignes_monument: Vec<String>,
    pub lignes_accessoire: Vec<String>,
}

impl CatalogDocument {
    pub fn products(&self, key: &str) -> Option<&[ProductItem]> {
        self.products.get(key).map(Vec::as_slice)
    }

    /// Pretty JSON (2-space indent), non-ASCII written as-is.
    pub fn write_pretty<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
