// src/core/normalize.rs
//! Canonical forms for raw cell text: display numbers, reference codes,
//! stone photo slugs and department codes. Pure functions.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// 2^63: every whole `f64` below it converts to `i64` exactly.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A display number: integer when the rounded value is whole, decimal otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Int(i64),
    Decimal(f64),
}

impl Amount {
    pub fn as_f64(self) -> f64 {
        match self {
            Amount::Int(i) => i as f64,
            Amount::Decimal(f) => f,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Int(0)
    }
}

/// Round to `decimals` places and collapse whole results to integers.
///
/// Rounding works on the exact binary value, ties to even: `12.005` at 2
/// places is `12.01` (the stored double sits just above the midpoint) and
/// `0.125` is `0.12` (an exact tie).
///
/// Whole results within the `i64` range become [`Amount::Int`]; larger ones
/// stay decimal. Non-finite input yields `None`.
pub fn normalize_number(raw: Option<f64>, decimals: usize) -> Option<Amount> {
    let raw = raw?;
    if !raw.is_finite() {
        return None;
    }
    let rounded: f64 = format!("{:.*}", decimals, raw).parse().ok()?;
    if rounded.fract() == 0.0 && rounded.abs() < I64_LIMIT {
        Some(Amount::Int(rounded as i64))
    } else {
        Some(Amount::Decimal(rounded))
    }
}

static HYPHEN_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").expect("static regex"));

/// `"PHGA - CL - A"` → `"PHGA-CL-A"`. Other whitespace is left alone.
pub fn normalize_reference(raw: &str) -> String {
    let t = raw.trim();
    if t.is_empty() {
        return String::new();
    }
    HYPHEN_WS.replace_all(t, "-").into_owned()
}

static ELIDED_ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[dlnqsj]['’‘`]").expect("static regex"));
static APOSTROPHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"['’‘`]").expect("static regex"));
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s/\\]+").expect("static regex"));
static NOT_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("static regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));

/// Photo file stem for a stone: `(31, "Feuille d'automne chinois")` →
/// `"31-feuille-automne-chinois"`.
///
/// This is a lookup key: distinct names that slug identically share a photo.
pub fn slugify_stone_name(code: impl Display, name: &str) -> String {
    if name.is_empty() {
        return code.to_string();
    }
    let lower = name.to_lowercase();
    let bare: String = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let s = ELIDED_ARTICLE.replace_all(&bare, "");
    let s = APOSTROPHES.replace_all(&s, "");
    let s = SEPARATORS.replace_all(&s, "-");
    let s = NOT_SLUG.replace_all(&s, "");
    let s = HYPHEN_RUNS.replace_all(&s, "-");
    format!("{code}-{}", s.trim_matches('-'))
}

/// Zero-pad single-digit department codes (`"5"` → `"05"`); anything else
/// (`"75"`, `"2A"`, `"971"`) is returned unchanged.
pub fn pad_department(raw: &str) -> String {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => format!("0{c}"),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_accents_and_articles() {
        assert_eq!(slugify_stone_name(7, "Rose de la Clarté"), "7-rose-de-la-clarte");
        assert_eq!(slugify_stone_name(9, "Vert d’Olive"), "9-vert-olive");
        assert_eq!(slugify_stone_name(3, "Noir / Gris"), "3-noir-gris");
    }

    #[test]
    fn slug_without_name_is_the_code() {
        assert_eq!(slugify_stone_name(12, ""), "12");
    }

    #[test]
    fn slug_drops_punctuation() {
        assert_eq!(slugify_stone_name(4, "Bleu (extra) n°1"), "4-bleu-extra-n1");
    }

    #[test]
    fn departments_pad_single_digits_only() {
        assert_eq!(pad_department("5"), "05");
        assert_eq!(pad_department("75"), "75");
        assert_eq!(pad_department("2A"), "2A");
        assert_eq!(pad_department("A"), "A");
    }
}
