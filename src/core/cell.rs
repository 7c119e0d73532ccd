// src/core/cell.rs
//! Cell values as the readers see them.
//!
//! Text is trimmed on the way in and blank text becomes `Empty`, so "present"
//! always means "has a non-blank value". The coercions below mirror the loose
//! typing of the price workbook: numbers typed as text still count as numbers,
//! and whole floats print without a trailing `.0`.

/// Largest float that still converts to `i64` without losing integer precision.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Build a text cell; blank text collapses to `Empty`.
    pub fn text_cell(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() { Cell::Empty } else { Cell::Text(t.to_string()) }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Loose truthiness: empty, zero and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Text(s) => !s.is_empty(),
            Cell::Number(n) => *n != 0.0,
            Cell::Bool(b) => *b,
        }
    }

    /// Display text of a present value.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(number_text(*n)),
            Cell::Bool(true) => Some("True".to_string()),
            Cell::Bool(false) => Some("False".to_string()),
        }
    }

    /// Display text when truthy, `""` otherwise.
    pub fn text_or_empty(&self) -> String {
        if self.is_truthy() { self.text().unwrap_or_default() } else { String::new() }
    }

    /// Numeric value, parsing numeric-looking text.
    pub fn number(&self) -> Option<f64> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => s.parse::<f64>().ok(),
            Cell::Number(n) => Some(*n),
            Cell::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Integer value truncated toward zero; `0` when falsy or not numeric.
    pub fn integer_or_zero(&self) -> i64 {
        if !self.is_truthy() {
            return 0;
        }
        if let Cell::Text(s) = self {
            if let Ok(i) = s.parse::<i64>() {
                return i;
            }
        }
        match self.number() {
            Some(n) if n.is_finite() && n.abs() < MAX_EXACT_INT => n.trunc() as i64,
            _ => 0,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::text_cell(s)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::text_cell(&s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl From<i32> for Cell {
    fn from(n: i32) -> Self {
        Cell::Number(f64::from(n))
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Empty, Into::into)
    }
}

/// Whole floats print as integers ("12", not "12.0").
fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}
