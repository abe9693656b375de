//! Persistence integration tests: record files on disk

use std::fs;

use npc_arena::entity::{Npc, NpcRef, Variant};
use npc_arena::world::{load_file, save_file, PopulationGenerator};

#[test]
fn test_load_file_with_multiple_npcs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("npcs.txt");
    fs::write(
        &path,
        "Toad Toad_Ivan 100 200\n\
         Dragon Dragon_Petr 300 400\n\
         Knight Knight_Vasya 500 100\n\
         Toad Toad_Masha 150 250\n\
         Dragon Dragon_Olya 350 450\n\
         Knight Knight_Kolya 400 300\n",
    )
    .unwrap();

    let report = load_file(&path).unwrap();

    assert_eq!(report.skipped, 0);
    let loaded: Vec<(Variant, &str, i32, i32)> = report
        .npcs
        .iter()
        .map(|n| (n.variant(), n.name(), n.x(), n.y()))
        .collect();
    assert_eq!(
        loaded,
        vec![
            (Variant::Toad, "Toad_Ivan", 100, 200),
            (Variant::Dragon, "Dragon_Petr", 300, 400),
            (Variant::Knight, "Knight_Vasya", 500, 100),
            (Variant::Toad, "Toad_Masha", 150, 250),
            (Variant::Dragon, "Dragon_Olya", 350, 450),
            (Variant::Knight, "Knight_Kolya", 400, 300),
        ]
    );
}

#[test]
fn test_seven_lines_three_bad() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(
        &path,
        "Toad ValidToad1 10 20\n\
         InvalidType WrongNPC 30 40\n\
         Dragon ValidDragon1 50 60\n\
         Knight OnlyName\n\
         Toad ValidToad2 70 80\n\
         Wrong Wrong Wrong Wrong\n\
         Knight ValidKnight1 90 100\n",
    )
    .unwrap();

    let report = load_file(&path).unwrap();

    assert_eq!(report.npcs.len(), 4);
    assert_eq!(report.skipped, 3);
    assert_eq!(report.npcs[3].name(), "ValidKnight1");
}

#[test]
fn test_out_of_range_line_does_not_abort_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("range.txt");
    fs::write(&path, "Knight Far 600 300\nKnight Near 400 300\n").unwrap();

    let report = load_file(&path).unwrap();

    assert_eq!(report.npcs.len(), 1);
    assert_eq!(report.npcs[0].name(), "Near");
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_save_and_reload_preserves_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.txt");
    let original: Vec<NpcRef> = vec![
        Npc::spawn(Variant::Toad, "TestToad1", 11, 22).unwrap(),
        Npc::spawn(Variant::Dragon, "TestDragon1", 33, 44).unwrap(),
        Npc::spawn(Variant::Knight, "TestKnight1", 55, 66).unwrap(),
        Npc::spawn(Variant::Toad, "TestToad2", 77, 88).unwrap(),
        Npc::spawn(Variant::Dragon, "TestDragon2", 99, 111).unwrap(),
    ];

    save_file(&path, &original).unwrap();
    let reloaded = load_file(&path).unwrap().npcs;

    assert_eq!(reloaded.len(), original.len());
    for (before, after) in original.iter().zip(&reloaded) {
        assert_eq!(before.variant(), after.variant());
        assert_eq!(before.name(), after.name());
        assert_eq!(before.position(), after.position());
    }
}

#[test]
fn test_generated_population_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.txt");
    let population = PopulationGenerator::with_seed(2024).generate(30).unwrap();

    save_file(&path, &population).unwrap();
    let report = load_file(&path).unwrap();

    assert_eq!(report.skipped, 0);
    assert_eq!(report.npcs.len(), 30);
    assert!(report.npcs.iter().zip(&population).all(|(a, b)| a.name() == b.name()));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_file(&dir.path().join("nope.txt")).is_err());
}
