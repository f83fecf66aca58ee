//! End-to-end validation runs against on-disk data directories.

use gamedata_core::defect::DefectLog;
use gamedata_core::validate::check_unique_ids;
use gamedata_test_utils::data_dir::TestDataDir;
use gamedata_test_utils::fixtures::strategies::id_lists;
use gamedata_test_utils::fixtures::{
    valid_character, valid_enemy, valid_item, valid_weapon, with_field,
};
use gamedata_tools::config::DataLayout;
use gamedata_tools::report::{run_validation, ValidationReport};
use proptest::prelude::*;
use serde_json::json;

fn validate(dir: &TestDataDir) -> ValidationReport {
    run_validation(&DataLayout::new(dir.path()))
}

fn lines(report: &ValidationReport) -> Vec<String> {
    report.defects().map(|d| d.message.clone()).collect()
}

/// The archer/bow data set: one weapon, one character, no items or enemies.
fn archer_data_dir(weapon_ref: &str) -> TestDataDir {
    let dir = TestDataDir::with_empty_documents();
    dir.write_raw(
        "weapons.json",
        r#"{"weapons":[{"id":"bow","name":"Bow","type":"ranged","rarity":"common","cooldown":1,"damage":5,"range":10,"projectile_speed":20}]}"#,
    );
    dir.write_raw(
        "characters.json",
        &format!(
            r#"{{"characters":[{{"id":"archer","name":"Archer","portrait":"archer.png","weapon":"{weapon_ref}","rule":"r1","ultimate":"u1"}}]}}"#
        ),
    );
    dir
}

// ==========================================================================
// Scenarios
// ==========================================================================

#[test]
fn test_clean_data_passes() {
    let report = validate(&archer_data_dir("bow"));
    assert!(report.is_ok(), "{}", report.render());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.render(), "Data validation OK\n");
}

#[test]
fn test_undefined_weapon_fails_with_one_defect() {
    let report = validate(&archer_data_dir("sword"));
    assert_eq!(report.exit_code(), 1);

    let rendered = report.render();
    let defect_lines: Vec<_> = rendered.lines().skip(1).collect();
    assert!(rendered.starts_with("Data validation failed:\n"));
    assert_eq!(defect_lines.len(), 1, "{rendered}");
    assert!(defect_lines[0].starts_with("- "));
    assert!(defect_lines[0].contains("weapon 'sword' not found"));
}

#[test]
fn test_all_documents_empty_is_ok() {
    let dir = TestDataDir::with_empty_documents();
    assert!(validate(&dir).is_ok());
}

// ==========================================================================
// Load failures
// ==========================================================================

#[test]
fn test_corrupt_document_is_isolated() {
    let dir = TestDataDir::with_empty_documents();
    dir.write_raw("items.json", "{ not json");
    dir.write_document("enemies", vec![json!({"id": "bat"})]);

    let report = validate(&dir);
    let defects: Vec<_> = report.defects().collect();

    assert!(defects[0].location.ends_with("items.json"));
    assert!(defects[0].message.starts_with("failed to load: "));
    assert_eq!(
        defects.iter().filter(|d| d.location.contains("items.json")).count(),
        1
    );
    // Sibling documents are still checked.
    assert!(defects.iter().any(|d| d.message == "missing 'hp'"));
}

#[test]
fn test_missing_document_reported_once() {
    let dir = TestDataDir::with_empty_documents();
    std::fs::remove_file(dir.path().join("enemies.json")).unwrap();

    let report = validate(&dir);
    let defects: Vec<_> = report.defects().collect();
    assert_eq!(defects.len(), 1);
    assert!(defects[0].location.ends_with("enemies.json"));
    assert!(defects[0].message.starts_with("failed to load: "));
}

#[test]
fn test_unloadable_weapons_breaks_every_weapon_reference() {
    let dir = archer_data_dir("bow");
    dir.write_raw("weapons.json", "");

    let messages = lines(&validate(&dir));
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].starts_with("failed to load: "));
    assert_eq!(messages[1], "weapon 'bow' not found in weapons.json");
}

// ==========================================================================
// Ordering and accumulation
// ==========================================================================

#[test]
fn test_defects_follow_document_order() {
    let dir = TestDataDir::new();
    dir.write_raw("weapons.json", "{}");
    dir.write_raw("items.json", "{}");
    dir.write_raw("enemies.json", "{}");
    dir.write_raw("characters.json", "{}");

    assert_eq!(
        lines(&validate(&dir)),
        [
            "missing 'weapons'",
            "missing 'items'",
            "missing 'enemies'",
            "missing 'characters'",
        ]
    );
}

#[test]
fn test_every_defect_across_documents_is_reported() {
    let dir = TestDataDir::new();
    dir.write_document(
        "weapons",
        vec![
            valid_weapon("bow"),
            with_field(valid_weapon("bow"), "scales", json!(["poison"])),
        ],
    );
    dir.write_document(
        "items",
        vec![with_field(valid_item("ring"), "stats", json!({"luck": 2}))],
    );
    dir.write_document(
        "enemies",
        vec![with_field(valid_enemy("bat"), "speed", json!(false))],
    );
    dir.write_document(
        "characters",
        vec![valid_character("archer", "bow"), valid_character("archer", "axe")],
    );

    assert_eq!(
        lines(&validate(&dir)),
        [
            "duplicate id 'bow'",
            "unknown scale 'poison'",
            "unknown stat 'luck'",
            "'speed' must be a number",
            "duplicate id 'archer'",
            "weapon 'axe' not found in weapons.json",
        ]
    );
}

// ==========================================================================
// Properties
// ==========================================================================

proptest! {
    #[test]
    fn prop_only_repeat_occurrences_are_duplicates(ids in id_lists()) {
        let entries: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
        let mut log = DefectLog::new();
        check_unique_ids(&entries, "data/items.json", &mut log);

        let mut expected = Vec::new();
        for (idx, id) in ids.iter().enumerate() {
            if ids[..idx].contains(id) {
                expected.push(format!("data/items.json[{idx}]: duplicate id '{id}'"));
            }
        }
        let actual: Vec<_> = log.iter().map(ToString::to_string).collect();
        prop_assert_eq!(actual, expected);
    }
}
