// src/specs/transport.rs
//! Transport tabs.
//!
//! - `Zone.TFranco`: columns A–F are Zone 1..Zone 6, each cell below the header
//!   is a department of that zone. A department listed twice keeps its last
//!   zone (the `LISTES` department table keeps the first one instead).
//! - `Tarif TFranco`: one row per zone, A starting with `Zone`, then five
//!   weight-bracket prices and a minimum, all integers.

use indexmap::IndexMap;

use super::department_code;
use crate::catalog::TransportTariff;
use crate::workbook::Sheet;

const ZONE_COLUMNS: usize = 6;

const COL_ZONE: usize = 0;
const COL_UP_TO_3T: usize = 1;
const COL_UP_TO_5T: usize = 2;
const COL_UP_TO_8T: usize = 3;
const COL_UP_TO_10T: usize = 4;
const COL_UP_TO_15T: usize = 5;
const COL_MINIMUM: usize = 6;

pub fn read_zones(sheet: &Sheet) -> IndexMap<String, String> {
    let mut zones = IndexMap::new();
    for row in sheet.data_rows() {
        for col in 0..ZONE_COLUMNS {
            if let Some(dept) = department_code(row.get(col)) {
                zones.insert(dept, format!("Zone {}", col + 1));
            }
        }
    }
    zones
}

pub fn read_tariffs(sheet: &Sheet) -> Vec<TransportTariff> {
    sheet
        .data_rows()
        .filter_map(|row| {
            let zone = row.get(COL_ZONE).text().filter(|z| z.starts_with("Zone"))?;
            Some(TransportTariff {
                zone,
                up_to_3t: row.get(COL_UP_TO_3T).integer_or_zero(),
                up_to_5t: row.get(COL_UP_TO_5T).integer_or_zero(),
                up_to_8t: row.get(COL_UP_TO_8T).integer_or_zero(),
                up_to_10t: row.get(COL_UP_TO_10T).integer_or_zero(),
                up_to_15t: row.get(COL_UP_TO_15T).integer_or_zero(),
                minimum: row.get(COL_MINIMUM).integer_or_zero(),
            })
        })
        .collect()
}
