// src/specs/accessoires.rs
//! Accessory tab.
//!
//! B sub-type, C reference, D origin, E stone code, F stone name, G price HT.
//! Column A is unused. Photo by normalised reference in `accessoires/`.

use tracing::debug;

use super::required_price;
use crate::catalog::AccessoireItem;
use crate::core::normalize::normalize_reference;
use crate::photos::PhotoResolver;
use crate::workbook::Sheet;

const COL_SUB_TYPE: usize = 1;
const COL_REFERENCE: usize = 2;
const COL_ORIGIN: usize = 3;
const COL_STONE_CODE: usize = 4;
const COL_STONE_NAME: usize = 5;
const COL_PRICE: usize = 6;

pub const PHOTO_SUBDIR: &str = "accessoires";

pub fn read(sheet: &Sheet, photos: &PhotoResolver) -> Vec<AccessoireItem> {
    let mut items = Vec::new();
    for row in sheet.data_rows() {
        let reference = row.get(COL_REFERENCE);
        if !reference.is_truthy() {
            continue;
        }
        let Some(prix_ht) = required_price(row.get(COL_PRICE)) else {
            debug!(sheet = sheet.name(), reference = ?reference.text(), "no usable price, row skipped");
            continue;
        };
        let reference = reference.text_or_empty();

        items.push(AccessoireItem {
            sub_type: row.get(COL_SUB_TYPE).text_or_empty(),
            photo: photos.find(PHOTO_SUBDIR, &normalize_reference(&reference)),
            reference,
            origine: row.get(COL_ORIGIN).text_or_empty(),
            code_granit: row.get(COL_STONE_CODE).integer_or_zero(),
            granit: row.get(COL_STONE_NAME).text_or_empty(),
            prix_ht,
        });
    }
    items
}
