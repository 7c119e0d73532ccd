// src/specs/semelles.rs
//! Base-support (semelle) tab: B reference, C origin, D stone code,
//! E stone name, F price HT. Column A is unused. No photos.

use tracing::debug;

use super::required_price;
use crate::catalog::SemelleItem;
use crate::workbook::Sheet;

const COL_REFERENCE: usize = 1;
const COL_ORIGIN: usize = 2;
const COL_STONE_CODE: usize = 3;
const COL_STONE_NAME: usize = 4;
const COL_PRICE: usize = 5;

pub fn read(sheet: &Sheet) -> Vec<SemelleItem> {
    sheet
        .data_rows()
        .filter_map(|row| {
            let reference = row.get(COL_REFERENCE);
            if !reference.is_truthy() {
                return None;
            }
            let Some(prix_ht) = required_price(row.get(COL_PRICE)) else {
                debug!(sheet = sheet.name(), reference = ?reference.text(), "no usable price, row skipped");
                return None;
            };
            Some(SemelleItem {
                reference: reference.text_or_empty(),
                origine: row.get(COL_ORIGIN).text_or_empty(),
                code_granit: row.get(COL_STONE_CODE).integer_or_zero(),
                granit: row.get(COL_STONE_NAME).text_or_empty(),
                prix_ht,
            })
        })
        .collect()
}
