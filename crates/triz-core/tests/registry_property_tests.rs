use proptest::prelude::*;
use triz_core::constants::{MATRIX_SEED, UNKNOWN_PRINCIPLE};
use triz_core::{default_principles, ParameterRegistry, PrincipleCatalog, PrincipleDraft, TrizEngine};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,16}").unwrap()
}

fn padded_name() -> impl Strategy<Value = String> {
    (name(), "[ ]{0,3}", "[ ]{0,3}").prop_map(|(n, l, r)| format!("{l}{n}{r}"))
}

proptest! {
    #[test]
    fn parameter_add_is_idempotent(raw in padded_name()) {
        let mut once = ParameterRegistry::new();
        let after_once = once.add(&raw);

        let mut twice = ParameterRegistry::new();
        twice.add(&raw);
        let after_twice = twice.add(&raw);

        prop_assert_eq!(after_once, after_twice);
    }

    #[test]
    fn parameter_case_variants_never_duplicate(raw in name()) {
        let mut registry = ParameterRegistry::new();
        registry.add(&raw);
        let before = registry.list_all();
        registry.add(&raw.to_uppercase());
        registry.add(&raw.to_lowercase());
        prop_assert_eq!(registry.list_all(), before);

        let lowered: Vec<String> = registry.list_all().iter().map(|p| p.to_lowercase()).collect();
        let mut unique = lowered.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), lowered.len());
    }

    #[test]
    fn custom_principle_ids_strictly_increase(count in 1usize..12) {
        let mut catalog = PrincipleCatalog::new();
        let mut last = 40;
        for i in 0..count {
            let p = catalog
                .add(PrincipleDraft::new(format!("Custom principle {i}"), "generated"))
                .unwrap();
            prop_assert!(p.id > last);
            last = p.id;
        }
        prop_assert_eq!(catalog.custom().len(), count);
    }

    #[test]
    fn principle_case_variants_return_the_stored_entry(raw in name()) {
        let mut catalog = PrincipleCatalog::new();
        let first = catalog.add(PrincipleDraft::new(raw.clone(), "first")).unwrap();
        let again = catalog.add(PrincipleDraft::new(raw.to_uppercase(), "second")).unwrap();
        prop_assert_eq!(first, again);
    }

    #[test]
    fn unmapped_pairs_get_defaults(a in name(), b in name()) {
        let engine = TrizEngine::new();
        let improving = format!("zz {a}");
        let worsening = format!("zz {b}");
        prop_assert_eq!(engine.suggest_principles(&improving, &worsening), default_principles());
    }
}

#[test]
fn seeded_cells_resolve_to_catalog_names_in_id_order() {
    let engine = TrizEngine::new();
    for (improving, worsening, ids) in MATRIX_SEED {
        let names = engine.suggest_principles(improving, worsening);
        let expected: Vec<String> = ids
            .iter()
            .filter_map(|id| engine.principles().get_by_id(*id))
            .map(|p| p.name.clone())
            .filter(|n| n != UNKNOWN_PRINCIPLE)
            .collect();
        assert_eq!(names, expected, "{improving} / {worsening}");
        assert!(!names.is_empty());
    }
}
