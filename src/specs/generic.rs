// src/specs/generic.rs
//! Fallback reader for product types without a dedicated layout
//! (urns, lithographs, future categories).
//!
//! Row 1 is read as headers (trimmed, lowercased) and each column is mapped
//! through [`HEADER_RULES`]: the first rule whose predicate accepts the header
//! decides the field. Order matters, e.g. "Code granit" must hit the code rule
//! before the stone-name rule, and "Prix caractère" the per-character rule
//! before the plain price rule.

use tracing::debug;

use super::price_or_zero;
use crate::catalog::GenericItem;
use crate::core::Cell;
use crate::core::normalize::normalize_reference;
use crate::photos::PhotoResolver;
use crate::workbook::Sheet;

pub struct HeaderRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub apply: fn(&mut GenericItem, &Cell),
}

pub const HEADER_RULES: &[HeaderRule] = &[
    HeaderRule {
        name: "reference",
        matches: |h| h.contains("référence") || h.contains("reference"),
        apply: |item, v| item.reference = v.text(),
    },
    HeaderRule {
        name: "type",
        matches: |h| h.contains("type"),
        apply: |item, v| item.sub_type = v.text(),
    },
    HeaderRule {
        name: "ligne",
        matches: |h| h.contains("ligne"),
        apply: |item, v| item.ligne = v.text(),
    },
    HeaderRule {
        name: "origine",
        matches: |h| h == "i/c" || h == "origine",
        apply: |item, v| item.origine = v.text(),
    },
    HeaderRule {
        name: "code_granit",
        matches: |h| h.contains("code") && h.contains("granit"),
        apply: |item, v| item.code_granit = Some(v.integer_or_zero()),
    },
    HeaderRule {
        name: "code_granit",
        matches: |h| h.contains("code"),
        apply: |item, v| item.code_granit = Some(v.integer_or_zero()),
    },
    HeaderRule {
        name: "granit",
        matches: |h| h.contains("granit"),
        apply: |item, v| item.granit = v.text(),
    },
    HeaderRule {
        name: "prix_caractere_ht",
        matches: |h| h.contains("caractère") || h.contains("caractere"),
        apply: |item, v| item.prix_caractere_ht = Some(price_or_zero(v)),
    },
    HeaderRule {
        name: "prix_ht",
        matches: |h| h.contains("prix"),
        apply: |item, v| item.prix_ht = Some(price_or_zero(v)),
    },
];

/// First rule accepting `header` (already trimmed and lowercased).
pub fn rule_for(header: &str) -> Option<&'static HeaderRule> {
    HEADER_RULES.iter().find(|rule| (rule.matches)(header))
}

/// Photos are looked up in `photo_subdir` (see `tabs::ProductKind::photo_subdir`).
pub fn read(sheet: &Sheet, photo_subdir: &str, photos: &PhotoResolver) -> Vec<GenericItem> {
    let rules: Vec<Option<&HeaderRule>> = sheet
        .header()
        .iter()
        .map(|h| h.text().map(|t| t.trim().to_lowercase()).unwrap_or_default())
        .map(|h| rule_for(&h))
        .collect();
    debug!(
        sheet = sheet.name(),
        columns = ?rules.iter().map(|r| r.map(|r| r.name)).collect::<Vec<_>>(),
        "generic header mapping"
    );

    let mut items = Vec::new();

    for row in sheet.data_rows() {
        if row.is_blank() {
            continue;
        }
        let mut item = GenericItem::default();
        for (col, rule) in rules.iter().enumerate() {
            let value = row.get(col);
            if value.is_empty() {
                continue;
            }
            if let Some(rule) = rule {
                (rule.apply)(&mut item, value);
            }
        }
        if item.is_empty() {
            continue;
        }
        if let Some(reference) = item.reference.as_deref().filter(|r| !r.is_empty()) {
            item.photo = photos.find(photo_subdir, &normalize_reference(reference));
        }
        items.push(item);
    }
    items
}
