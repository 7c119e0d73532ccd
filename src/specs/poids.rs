// src/specs/poids.rs
//! `Poids` tab: B reference, C weight in tonnes.
//! A reference listed twice keeps its last weight.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::consts::WEIGHT_DECIMALS;
use crate::core::Amount;
use crate::core::normalize::normalize_number;
use crate::workbook::Sheet;

const COL_REFERENCE: usize = 1;
const COL_WEIGHT: usize = 2;

pub fn read(sheet: &Sheet) -> IndexMap<String, Amount> {
    let mut weights = IndexMap::new();
    for row in sheet.data_rows() {
        let reference = row.get(COL_REFERENCE);
        let weight = row.get(COL_WEIGHT);
        if !reference.is_truthy() || weight.is_empty() {
            continue;
        }
        let tonnes = if weight.is_truthy() {
            match normalize_number(weight.number(), WEIGHT_DECIMALS) {
                Some(t) => t,
                None => {
                    debug!(reference = ?reference.text(), "weight is not a number, row skipped");
                    continue;
                }
            }
        } else {
            Amount::Int(0)
        };
        weights.insert(reference.text_or_empty(), tonnes);
    }
    weights
}
