// tests/tabs.rs
use phg_catalog::tabs::{classify_tab, extract_product_type, ProductKind, TabPlan, TabRole};

#[test]
fn product_type_comes_from_the_tab_name() {
    assert_eq!(extract_product_type("Monument.PrixAdh.€HT"), "Monument");
    assert_eq!(extract_product_type("Accessoires.PrixAdh.€HT"), "Accessoire");
    assert_eq!(extract_product_type("Urnes.PrixAdh.€HT"), "Urne");
    assert_eq!(extract_product_type("Poids"), "Poids");
}

#[test]
fn roles() {
    assert_eq!(classify_tab("GRANITS", false), TabRole::Structural);
    assert_eq!(classify_tab("Mode opératoire", true), TabRole::Ignored);
    assert_eq!(classify_tab("Gravures.PrixAdh.€HT", true), TabRole::Product);
    assert_eq!(classify_tab("Brouillon", true), TabRole::Other);
}

#[test]
fn parenthesised_and_hidden_tabs_are_not_products() {
    assert_eq!(classify_tab("(Archive.PrixAdh.€HT)", true), TabRole::Other);
    assert_eq!(classify_tab("Urnes.PrixAdh.€HT", false), TabRole::Other);
}

#[test]
fn plan_keeps_workbook_order() {
    let plan = TabPlan::classify([
        ("Mode opératoire", true),
        ("Urnes.PrixAdh.€HT", true),
        ("GRANITS", true),
        ("Monument.PrixAdh.€HT", true),
        ("Lithos.PrixAdh.€HT", false),
        ("Accessoires.PrixAdh.€HT", true),
    ]);

    let kinds: Vec<&ProductKind> = plan.products.iter().map(|t| &t.kind).collect();
    assert_eq!(
        kinds,
        [&ProductKind::Generic("Urne".into()), &ProductKind::Monument, &ProductKind::Accessoire]
    );
    assert_eq!(plan.structural, ["GRANITS"]);
    assert_eq!(plan.ignored, ["Mode opératoire"]);
    assert_eq!(plan.other, ["Lithos.PrixAdh.€HT"]);
    assert_eq!(plan.product_subdirs(), ["urnes", "monuments", "accessoires"]);
}

#[test]
fn document_keys() {
    assert_eq!(ProductKind::from_type("Monument").key(), "monuments");
    assert_eq!(ProductKind::from_type("Semelle").key(), "semelles");
    assert_eq!(ProductKind::from_type("Plaque").key(), "plaques");
    assert_eq!(ProductKind::from_type("Plaque").photo_subdir(), "plaques");
}
