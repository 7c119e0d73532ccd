// src/specs/mod.rs
//! # Sheet “specs”
//!
//! One module per tab layout. Each spec knows *where the data lives* in its
//! sheet (named column constants, data from row 2) and *which rows count*.
//!
//! ## What lives here
//! - **Product readers**: `monuments`, `semelles`, `accessoires`, `gravures`,
//!   and `generic` for any other `<Type>.PrixAdh.€HT` tab (columns inferred
//!   from the header row).
//! - **Structural readers**: `granits`, `poids`, `transport` (zones and
//!   tariffs), `listes`.
//! - **Photo attachment** through `photos::PhotoResolver`.
//!
//! ## What does **not** live here
//! - Tab discovery and dispatch (`tabs`, `runner::assemble`).
//! - File discovery, output writing, directory creation.
//!
//! ## Conventions
//! - Rows missing a required field are skipped quietly (`debug!` only); they
//!   show up in the per-tab counts, never as errors.
//! - Specialised product readers need a reference *and* a price; the generic
//!   reader keeps any row where at least one column was recognised.
//! - Text fields default to `""`, stone codes to `0`, falsy prices to `0`.

pub mod accessoires;
pub mod generic;
pub mod gravures;
pub mod granits;
pub mod listes;
pub mod monuments;
pub mod poids;
pub mod semelles;
pub mod transport;

use crate::config::consts::PRICE_DECIMALS;
use crate::core::normalize::{normalize_number, pad_department};
use crate::core::{Amount, Cell};

/// Required price: `None` when the cell is empty or not a number.
/// A falsy price (0) is kept as `0`.
pub(crate) fn required_price(cell: &Cell) -> Option<Amount> {
    if cell.is_empty() {
        return None;
    }
    if !cell.is_truthy() {
        return Some(Amount::Int(0));
    }
    normalize_number(cell.number(), PRICE_DECIMALS)
}

/// Nullable price: `None` when empty or not a number.
pub(crate) fn optional_price(cell: &Cell) -> Option<Amount> {
    normalize_number(cell.number(), PRICE_DECIMALS)
}

/// Price of a recognised column: `0` when falsy or not a number.
pub(crate) fn price_or_zero(cell: &Cell) -> Amount {
    if cell.is_truthy() { optional_price(cell).unwrap_or_default() } else { Amount::Int(0) }
}

/// Department code of a cell: numbers lose their fraction, single digits are
/// zero-padded.
pub(crate) fn department_code(cell: &Cell) -> Option<String> {
    let raw = match cell {
        Cell::Empty => return None,
        Cell::Number(n) => (n.trunc() as i64).to_string(),
        Cell::Bool(b) => i64::from(*b).to_string(),
        Cell::Text(s) => s.clone(),
    };
    Some(pad_department(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_price_distinguishes_missing_from_zero() {
        assert_eq!(required_price(&Cell::Empty), None);
        assert_eq!(required_price(&Cell::from(0)), Some(Amount::Int(0)));
        assert_eq!(required_price(&Cell::from("sur devis")), None);
        assert_eq!(required_price(&Cell::from(1250.456)), Some(Amount::Decimal(1250.46)));
    }

    #[test]
    fn department_codes_from_numbers_and_text() {
        assert_eq!(department_code(&Cell::from(5.0)).as_deref(), Some("05"));
        assert_eq!(department_code(&Cell::from(75)).as_deref(), Some("75"));
        assert_eq!(department_code(&Cell::from("2A")).as_deref(), Some("2A"));
        assert_eq!(department_code(&Cell::Empty), None);
    }
}
