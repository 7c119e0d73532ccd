// src/specs/gravures.rs
//! Engraving tab: B reference, C price per character HT.

use super::required_price;
use crate::catalog::GravureItem;
use crate::workbook::Sheet;

const COL_REFERENCE: usize = 1;
const COL_PRICE_PER_CHAR: usize = 2;

pub fn read(sheet: &Sheet) -> Vec<GravureItem> {
    sheet
        .data_rows()
        .filter(|row| row.get(COL_REFERENCE).is_truthy())
        .filter_map(|row| {
            Some(GravureItem {
                reference: row.get(COL_REFERENCE).text_or_empty(),
                prix_caractere_ht: required_price(row.get(COL_PRICE_PER_CHAR))?,
            })
        })
        .collect()
}
