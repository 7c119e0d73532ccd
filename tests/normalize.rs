// tests/normalize.rs
use phg_catalog::core::Amount;
use phg_catalog::core::normalize::{normalize_number, normalize_reference, pad_department, slugify_stone_name};

#[test]
fn prices_round_to_two_places() {
    assert_eq!(normalize_number(Some(12.3456), 2), Some(Amount::Decimal(12.35)));
    assert_eq!(normalize_number(Some(1450.5), 2), Some(Amount::Decimal(1450.5)));
}

#[test]
fn whole_values_become_integers() {
    assert_eq!(normalize_number(Some(12.0), 2), Some(Amount::Int(12)));
    assert_eq!(normalize_number(Some(12.001), 2), Some(Amount::Int(12)));
    assert_eq!(normalize_number(Some(-3.0), 3), Some(Amount::Int(-3)));
}

#[test]
fn rounding_uses_the_stored_binary_value() {
    // 12.005 is stored as 12.00500000000000078...
    assert_eq!(normalize_number(Some(12.005), 2), Some(Amount::Decimal(12.01)));
    // 2.675 is stored as 2.67499999999999982...
    assert_eq!(normalize_number(Some(2.675), 2), Some(Amount::Decimal(2.67)));
}

#[test]
fn exact_ties_round_to_even() {
    assert_eq!(normalize_number(Some(0.125), 2), Some(Amount::Decimal(0.12)));
    assert_eq!(normalize_number(Some(0.375), 2), Some(Amount::Decimal(0.38)));
    assert_eq!(normalize_number(Some(2.5), 0), Some(Amount::Int(2)));
}

#[test]
fn large_whole_values_stay_integers() {
    assert_eq!(normalize_number(Some(1e18), 2), Some(Amount::Int(1_000_000_000_000_000_000)));
    assert_eq!(normalize_number(Some(9_007_199_254_740_994.0), 2), Some(Amount::Int(9_007_199_254_740_994)));
    let json = serde_json::to_string(&normalize_number(Some(1e18), 2)).unwrap();
    assert_eq!(json, "1000000000000000000");
}

#[test]
fn weights_keep_three_places() {
    assert_eq!(normalize_number(Some(1.23456), 3), Some(Amount::Decimal(1.235)));
}

#[test]
fn missing_or_non_finite_numbers_are_none() {
    assert_eq!(normalize_number(None, 2), None);
    assert_eq!(normalize_number(Some(f64::NAN), 2), None);
    assert_eq!(normalize_number(Some(f64::INFINITY), 2), None);
}

#[test]
fn normalizing_twice_changes_nothing() {
    for raw in [0.1 + 0.2, 99.999, 12.345678, 7.0, 1e-9, 250_000.125] {
        let once = normalize_number(Some(raw), 2).unwrap();
        let twice = normalize_number(Some(once.as_f64()), 2).unwrap();
        assert_eq!(once, twice, "raw = {raw}");
    }
}

#[test]
fn references_lose_spaces_around_hyphens() {
    assert_eq!(normalize_reference("PHGA - CL - A"), "PHGA-CL-A");
    assert_eq!(normalize_reference("  M 12 -B "), "M 12-B");
    assert_eq!(normalize_reference("   "), "");
}

#[test]
fn stone_slugs() {
    assert_eq!(slugify_stone_name(31, "Feuille d'automne chinois"), "31-feuille-automne-chinois");
    assert_eq!(slugify_stone_name(12, "Granit Noir"), "12-granit-noir");
    assert_eq!(slugify_stone_name("8", "Impala l’Africain"), "8-impala-africain");
    assert_eq!(slugify_stone_name(5, "  Bleu  Azul\\Platino "), "5-bleu-azul-platino");
}

#[test]
fn departments_are_zero_padded() {
    assert_eq!(pad_department("5"), "05");
    assert_eq!(pad_department("75"), "75");
    assert_eq!(pad_department("2A"), "2A");
}
