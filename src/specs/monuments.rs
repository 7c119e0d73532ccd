// src/specs/monuments.rs
//! Monument tab.
//!
//! | Col | Content                       |
//! |-----|-------------------------------|
//! | A   | line (`Ligne`)                |
//! | B   | reference                     |
//! | C   | origin (`I/C`)                |
//! | D   | stone code                    |
//! | E   | stone name                    |
//! | F   | price HT                      |
//! | G–I | price with base 130x230, 140x240, 150x250 |
//!
//! One photo per reference, shared by every stone variant of it.

use tracing::debug;

use super::{optional_price, required_price};
use crate::catalog::MonumentItem;
use crate::core::normalize::normalize_reference;
use crate::photos::PhotoResolver;
use crate::workbook::Sheet;

const COL_LINE: usize = 0;
const COL_REFERENCE: usize = 1;
const COL_ORIGIN: usize = 2;
const COL_STONE_CODE: usize = 3;
const COL_STONE_NAME: usize = 4;
const COL_PRICE: usize = 5;
const COL_BASE_130X230: usize = 6;
const COL_BASE_140X240: usize = 7;
const COL_BASE_150X250: usize = 8;

pub const PHOTO_SUBDIR: &str = "monuments";

pub fn read(sheet: &Sheet, photos: &PhotoResolver) -> Vec<MonumentItem> {
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

        items.push(MonumentItem {
            ligne: row.get(COL_LINE).text_or_empty(),
            photo: photos.find(PHOTO_SUBDIR, &normalize_reference(&reference)),
            reference,
            origine: row.get(COL_ORIGIN).text_or_empty(),
            code_granit: row.get(COL_STONE_CODE).integer_or_zero(),
            granit: row.get(COL_STONE_NAME).text_or_empty(),
            prix_ht,
            avec_semelle_130x230: optional_price(row.get(COL_BASE_130X230)),
            avec_semelle_140x240: optional_price(row.get(COL_BASE_140X240)),
            avec_semelle_150x250: optional_price(row.get(COL_BASE_150X250)),
        });
    }
    items
}
