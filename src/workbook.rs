// src/workbook.rs
//! In-memory workbook.
//!
//! The whole file is read up front with `calamine`; readers then work on plain
//! `Cell` grids addressed by absolute (0-based) row and column, so row 1 of the
//! spreadsheet is index 0 whatever the used range of the sheet is.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, SheetType, SheetVisible};
use tracing::debug;

use crate::core::Cell;
use crate::error::{BuildError, Result};

static EMPTY_CELL: Cell = Cell::Empty;

#[derive(Clone, Debug, PartialEq)]
pub struct Sheet {
    name: String,
    visible: bool,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// A visible sheet; `rows[0]` is the header row.
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { name: name.into(), visible: true, rows }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Cells of row 1.
    pub fn header(&self) -> &[Cell] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows from row 2 on.
    pub fn data_rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().skip(1).map(|cells| Row { cells })
    }
}

/// One worksheet row; out-of-range columns read as empty.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    pub fn get(&self, col: usize) -> &'a Cell {
        self.cells.get(col).unwrap_or(&EMPTY_CELL)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn from_sheets(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// Load every worksheet of `path`, in workbook order.
    /// Chart sheets and other non-grid sheets are left out.
    pub fn open(path: &Path) -> Result<Self> {
        let wrap = |source| BuildError::Workbook { path: path.to_path_buf(), source };

        let mut book = open_workbook_auto(path).map_err(wrap)?;
        let metadata = book.sheets_metadata().to_vec();

        let mut sheets = Vec::with_capacity(metadata.len());
        for meta in metadata {
            if !matches!(meta.typ, SheetType::WorkSheet) {
                debug!(sheet = %meta.name, "skipping non-worksheet tab");
                continue;
            }
            let range = book.worksheet_range(&meta.name).map_err(wrap)?;

            let mut rows: Vec<Vec<Cell>> = Vec::new();
            if let Some((r0, c0)) = range.start() {
                for (r, c, data) in range.used_cells() {
                    let (row, col) = (r0 as usize + r, c0 as usize + c);
                    if rows.len() <= row {
                        rows.resize_with(row + 1, Vec::new);
                    }
                    let line = &mut rows[row];
                    if line.len() <= col {
                        line.resize(col + 1, Cell::Empty);
                    }
                    line[col] = cell_from_data(data);
                }
            }

            sheets.push(Sheet {
                visible: matches!(meta.visible, SheetVisible::Visible),
                name: meta.name,
                rows,
            });
        }
        Ok(Self { sheets })
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::text_cell(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_past_the_edge_read_empty() {
        let sheet = Sheet::new("T", vec![vec!["H".into()], vec!["a".into(), 2.into()]]);
        let row = sheet.data_rows().next().expect("one data row");
        assert_eq!(row.get(1), &Cell::Number(2.0));
        assert_eq!(row.get(9), &Cell::Empty);
    }

    #[test]
    fn blank_rows_are_detected() {
        let sheet = Sheet::new("T", vec![vec![], vec![Cell::Empty, Cell::Empty]]);
        assert!(sheet.data_rows().all(|r| r.is_blank()));
    }

    #[test]
    fn error_cells_become_empty() {
        assert_eq!(cell_from_data(&Data::String("  ".into())), Cell::Empty);
        assert_eq!(cell_from_data(&Data::Int(4)), Cell::Number(4.0));
    }
}
