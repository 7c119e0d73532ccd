// src/specs/listes.rs
//! `LISTES` tab: A department, B zone, C product type, D monument line,
//! E accessory line. The columns are independent lists that happen to share
//! rows, so each is accumulated on its own:
//!
//! - types: a set, ordered canonically at the end;
//! - lines: first-seen order, no duplicates;
//! - departments: first zone seen for a department wins.

use std::collections::{BTreeSet, HashSet};

use crate::catalog::{DepartmentZone, ListsBundle};
use crate::config::consts::TYPE_ORDER;
use crate::workbook::Sheet;

use super::department_code;

const COL_DEPARTMENT: usize = 0;
const COL_ZONE: usize = 1;
const COL_TYPE: usize = 2;
const COL_MONUMENT_LINE: usize = 3;
const COL_ACCESSORY_LINE: usize = 4;

pub fn read(sheet: &Sheet) -> ListsBundle {
    let mut types: BTreeSet<String> = BTreeSet::new();
    let mut bundle = ListsBundle::default();
    let mut seen_departments: HashSet<String> = HashSet::new();

    for row in sheet.data_rows() {
        if row.get(COL_TYPE).is_truthy() {
            types.insert(row.get(COL_TYPE).text_or_empty());
        }
        push_unique(&mut bundle.monument_lines, row.get(COL_MONUMENT_LINE).text_or_empty());
        push_unique(&mut bundle.accessory_lines, row.get(COL_ACCESSORY_LINE).text_or_empty());

        let zone = row.get(COL_ZONE);
        if let (Some(departement), true) = (department_code(row.get(COL_DEPARTMENT)), zone.is_truthy()) {
            if seen_departments.insert(departement.clone()) {
                bundle.departments.push(DepartmentZone { departement, zone: zone.text_or_empty() });
            }
        }
    }

    bundle.types = order_types(&types);
    bundle
}

/// Canonical types first (only those present), then the rest alphabetically.
pub fn order_types(types: &BTreeSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = TYPE_ORDER
        .iter()
        .filter(|t| types.contains(**t))
        .map(|t| t.to_string())
        .collect();
    ordered.extend(types.iter().filter(|t| !TYPE_ORDER.contains(&t.as_str())).cloned());
    ordered
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_types_come_first() {
        let types: BTreeSet<String> =
            ["Plaque", "Gravure", "Monument", "Bougie"].iter().map(|s| s.to_string()).collect();
        assert_eq!(order_types(&types), vec!["Monument", "Gravure", "Bougie", "Plaque"]);
    }
}
