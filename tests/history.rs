//! 계산 이력 저장소 테스트.
use std::fs;

use solution_prep_toolbox::config::{effective_data_dir, Config};
use solution_prep_toolbox::history::{HistoryRecord, HistoryStore};
use solution_prep_toolbox::solution::{
    compute_stock_solution, compute_working_solution, StockSolutionInput, WorkingSolutionInput,
};
use solution_prep_toolbox::units::{ConcentrationUnit, VolumeUnit};

fn stock_record(compound: &str) -> HistoryRecord {
    let input = StockSolutionInput {
        compound: compound.to_string(),
        molecular_weight_g_per_mol: 466.54,
        target_concentration: 10.0,
        concentration_unit: ConcentrationUnit::MilliMolar,
        target_volume: 1.0,
        volume_unit: VolumeUnit::Milliliter,
        solvent: "DMSO".to_string(),
    };
    let result = compute_stock_solution(&input).expect("stock calc");
    HistoryRecord::stock(input, result)
}

fn working_record(compound: &str) -> HistoryRecord {
    let input = WorkingSolutionInput {
        compound: compound.to_string(),
        stock_concentration: 10.0,
        stock_concentration_unit: ConcentrationUnit::MilliMolar,
        target_concentration: 1.0,
        target_concentration_unit: ConcentrationUnit::MicroMolar,
        target_volume: 10.0,
        volume_unit: VolumeUnit::Milliliter,
        solvent: "PBS".to_string(),
    };
    let result = compute_working_solution(&input).expect("dilution");
    HistoryRecord::working(input, result)
}

#[test]
fn open_initializes_empty_history() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path().join("data")).expect("open");
    assert!(store.path().exists());
    assert_eq!(store.count().expect("count"), 0);
    assert!(store.list_all().expect("list").is_empty());
}

#[test]
fn append_then_read_back_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");

    let record = stock_record("Rapamycin");
    store.append(&record).expect("append");

    let listed = store.list_all().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], record);
}

#[test]
fn list_all_is_newest_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");

    store.append(&stock_record("first")).expect("append");
    store.append(&working_record("second")).expect("append");
    store.append(&stock_record("third")).expect("append");

    let listed = store.list_all().expect("list");
    let compounds: Vec<&str> = listed.iter().map(|r| r.compound()).collect();
    assert_eq!(compounds, vec!["third", "second", "first"]);
    assert_eq!(store.count().expect("count"), 3);
}

#[test]
fn corrupt_file_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");
    store.append(&stock_record("doomed")).expect("append");

    fs::write(store.path(), "{ not json").expect("corrupt");
    assert!(store.list_all().expect("list").is_empty());

    // 손상 후에도 다시 기록 가능
    store.append(&stock_record("fresh")).expect("append");
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn clear_leaves_a_backup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");
    store.append(&stock_record("kept")).expect("append");

    let backup = store.clear().expect("clear").expect("backup path");
    assert!(backup.exists());
    assert_eq!(store.count().expect("count"), 0);

    let backup_json = fs::read_to_string(backup).expect("read backup");
    assert!(backup_json.contains("kept"));
}

#[test]
fn clear_on_empty_history_makes_no_backup() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");
    assert!(store.clear().expect("clear").is_none());
}

#[test]
fn cli_data_dir_override_leaves_config_untouched() {
    let cfg = Config::default();
    assert_eq!(effective_data_dir(&cfg, Some("elsewhere")), "elsewhere");
    assert_eq!(effective_data_dir(&cfg, None), "data");
    // 일회성 override는 설정에 기록되지 않는다
    assert_eq!(cfg.data_dir, "data");
}

#[test]
fn schema_uses_stable_calculator_tags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = HistoryStore::open(dir.path()).expect("open");
    store.append(&stock_record("a")).expect("append");
    store.append(&working_record("b")).expect("append");

    let raw = fs::read_to_string(store.path()).expect("read");
    assert!(raw.contains("\"calculator_type\": \"stock\""));
    assert!(raw.contains("\"calculator_type\": \"working\""));
    assert!(raw.contains("\"timestamp\""));
}
