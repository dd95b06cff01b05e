//! Integration tests for the match/BOM/box-code pipeline against the
//! built-in Module 1 catalog.

use voltrix_core::bom::export::{bom_to_csv, parse_bom_csv};
use voltrix_core::bom::generate_bom;
use voltrix_core::boxcode::{generate_box_code, BoardSpecs, SectionSpecs};
use voltrix_core::error::VoltrixError;
use voltrix_core::matching::outcome::MatchStatus;
use voltrix_core::memory::{FilePatternStore, PatternMemory, PatternSource};
use voltrix_core::model::{BreakerCount, FeatureRecord};
use voltrix_core::{load_builtin, match_features, match_text};

// ---------------------------------------------------------------------------
// Matching: vacuous, exact, and closest-match outcomes
// ---------------------------------------------------------------------------

#[test]
fn unconstrained_query_is_ambiguous_across_whole_catalog() {
    let catalog = load_builtin().unwrap();

    let report = match_features(FeatureRecord::default(), &catalog).unwrap();

    // Every entry vacuously satisfies an all-None query.
    assert_eq!(report.status, MatchStatus::Ambiguous);
    assert_eq!(report.matched_assemblies.len(), 10);
    assert_eq!(report.matched_assemblies, catalog.ids());
    assert!(report.bom.is_none());
}

#[test]
fn every_assembly_exactly_matches_its_own_specs() {
    let catalog = load_builtin().unwrap();

    for record in catalog.assemblies() {
        let features = FeatureRecord {
            height: Some(record.specs.height.clone()),
            width: Some(record.specs.width.clone()),
            depth: Some(record.specs.depth.clone()),
            breaker_type: Some(record.specs.breaker_type.clone()),
            breaker_quantity: match record.specs.breaker_quantity {
                BreakerCount::Count(n) => Some(n),
                BreakerCount::Multiple => None,
            },
            mount: Some(record.specs.mount),
            access: Some(record.specs.access),
        };

        let report = match_features(features, &catalog).unwrap();
        assert_eq!(
            report.status,
            MatchStatus::ExactMatch,
            "specs of {} did not round-trip",
            record.id
        );
        assert_eq!(report.matched_assemblies, [record.id.clone()]);

        let bom = report.bom.expect("exact match must carry a BOM");
        assert_eq!(bom.assembly_number, record.id);
    }
}

#[test]
fn no_match_ranks_closest_with_declaration_order_tie_break() {
    let catalog = load_builtin().unwrap();

    // Dimensions and breaker of section 101, but a drawout/front-and-rear
    // combination no 90x40x60 entry carries: nothing passes the filter.
    let report = match_text(
        "90H x 40W x 60D, Emax 6.2, drawout, front and rear access",
        &catalog,
    )
    .unwrap();

    assert_eq!(report.status, MatchStatus::NoMatch);
    assert!(report.matched_assemblies.is_empty());
    assert!(report.bom.is_none());
    assert_eq!(report.candidates.len(), 3);

    // Three dimensions plus a compatible breaker family: 3+3+3+2.
    assert_eq!(report.candidates[0].id, "123456-0100-101");
    assert_eq!(report.candidates[0].score, 11);
    assert_eq!(report.candidates[1].id, "123456-0100-201");
    assert_eq!(report.candidates[1].score, 11);
    assert!(report.candidates[2].score < 11);
}

#[test]
fn free_text_exact_match_populates_bom() {
    let catalog = load_builtin().unwrap();

    let report = match_text(
        "90H x 40W x 60D, Emax 6.2, fixed, front and rear access",
        &catalog,
    )
    .unwrap();

    assert_eq!(report.status, MatchStatus::ExactMatch);
    assert_eq!(report.matched_assemblies, ["123456-0100-101"]);
    assert_eq!(report.extracted_features.height.as_deref(), Some("90"));

    let bom = report.bom.unwrap();
    assert_eq!(bom.total_parts, bom.components.len());
}

// ---------------------------------------------------------------------------
// BOM generation and the flat CSV form
// ---------------------------------------------------------------------------

#[test]
fn bom_totals_agree_for_every_assembly() {
    let catalog = load_builtin().unwrap();

    for id in catalog.ids() {
        let bom = generate_bom(&catalog, &id).unwrap();
        assert_eq!(bom.total_parts, bom.components.len(), "{id}");
        assert!(bom.total_parts > 0, "{id}");
    }
}

#[test]
fn unknown_assembly_error_lists_whole_catalog() {
    let catalog = load_builtin().unwrap();

    let err = generate_bom(&catalog, "nonexistent-id").unwrap_err();
    match err {
        VoltrixError::UnknownAssembly { id, available } => {
            assert_eq!(id, "nonexistent-id");
            assert_eq!(available, catalog.ids());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn csv_round_trip_preserves_components_but_drops_sequence() {
    let catalog = load_builtin().unwrap();
    let bom = generate_bom(&catalog, "123456-0100-101").unwrap();

    let rows = parse_bom_csv(&bom_to_csv(&bom)).unwrap();

    assert_eq!(rows.len(), bom.components.len());
    for (row, component) in rows.iter().zip(&bom.components) {
        assert_eq!(row.part_number, component.part_number);
        // Commas in descriptions become semicolons on the way out.
        assert_eq!(row.description, component.description.replace(',', ";"));
        assert_eq!(row.quantity, component.quantity);
    }
}

// ---------------------------------------------------------------------------
// Box identifier generation
// ---------------------------------------------------------------------------

#[test]
fn abb_drawout_seismic_section_codes() {
    let section = SectionSpecs {
        height: Some("72".into()),
        width: Some("42".into()),
        depth: Some("56".into()),
        breaker_manufacturer: Some("ABB".into()),
        mounting_type: Some("Drawout".into()),
    };
    let board = BoardSpecs {
        seismic_inclusions: Some("seismic bracing required".into()),
        ..BoardSpecs::default()
    };

    let code = generate_box_code(&section, &board);

    assert_eq!(code.front_cornerpost, 'D');
    assert_eq!(code.seismic, 'S');
    assert_eq!(code.to_string(), "APBXADCDDLS-G01-99");
}

// ---------------------------------------------------------------------------
// Pattern memory alongside matching
// ---------------------------------------------------------------------------

#[test]
fn exact_match_recorded_twice_reinforces_one_pattern() {
    let catalog = load_builtin().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let memory = PatternMemory::new(Box::new(FilePatternStore::new(
        dir.path().join("patterns.json"),
    )));

    for _ in 0..2 {
        let report = match_text("90H x 40W x 60D, Emax 6.2, fixed, rear access", &catalog)
            .unwrap();
        assert_eq!(report.status, MatchStatus::ExactMatch);
        memory
            .record(
                &report.extracted_features,
                &report.matched_assemblies[0],
                PatternSource::Text,
            )
            .unwrap();
    }

    let stored = memory.all().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].match_count, 2);
    assert_eq!(stored[0].box_identifier, "123456-0100-101");

    let suggestion = memory
        .suggest(&match_text("90H x 40W x 60D, Emax 6.2, fixed, rear access", &catalog)
            .unwrap()
            .extracted_features)
        .unwrap()
        .expect("stored pattern should be suggested");
    assert_eq!(suggestion.box_identifier, "123456-0100-101");
}
