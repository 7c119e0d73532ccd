// src/specs/granits.rs
//! `GRANITS` tab: A code, B name, C origin.
//!
//! Photos live in `granits/` under the slug of code and name
//! (`12-granit-noir.jpg`).

use crate::catalog::{StoneCode, StoneEntry};
use crate::config::consts::STONE_PHOTO_SUBDIR;
use crate::core::Cell;
use crate::core::normalize::slugify_stone_name;
use crate::photos::PhotoResolver;
use crate::workbook::Sheet;

const COL_CODE: usize = 0;
const COL_NAME: usize = 1;
const COL_ORIGIN: usize = 2;

pub fn read(sheet: &Sheet, photos: &PhotoResolver) -> Vec<StoneEntry> {
    let mut stones = Vec::new();
    for row in sheet.data_rows() {
        let code = row.get(COL_CODE);
        let name = row.get(COL_NAME);
        let (Some(code_text), true) = (code.text(), name.is_truthy()) else {
            continue;
        };
        let nom = name.text_or_empty();
        let slug = slugify_stone_name(&code_text, &nom);

        stones.push(StoneEntry {
            code: stone_code(code, code_text),
            photo: photos.find(STONE_PHOTO_SUBDIR, &slug),
            nom,
            origine: row.get(COL_ORIGIN).text_or_empty(),
        });
    }
    stones
}

fn stone_code(cell: &Cell, text: String) -> StoneCode {
    match cell {
        Cell::Number(n) => StoneCode::Number(n.trunc() as i64),
        Cell::Bool(b) => StoneCode::Number(i64::from(*b)),
        _ => StoneCode::Text(text),
    }
}
