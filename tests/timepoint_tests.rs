use motif_cascade::config::Config;
use motif_cascade::error::CascadeError;
use motif_cascade::timepoints::{ensure_inputs_ready, extract_time, infer_timepoints};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("motif_cascade_{}", name));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_extract_time() {
    assert_eq!(extract_time("Motif_15min.xls").unwrap(), 15);
    assert_eq!(extract_time("5.tsv").unwrap(), 5);

    // first digit run wins
    assert_eq!(extract_time("Motif_120min_rep2.txt").unwrap(), 120);

    let result = extract_time("Motif_final.xls");
    assert!(matches!(result, Err(CascadeError::InvalidInput(_))));
}

#[test]
fn test_infer_timepoints_sorted_and_deduped() {
    let dir = scratch_dir("infer");
    fs::write(dir.join("Motif_30min.xls"), "Class\tPValue\n").unwrap();
    fs::write(dir.join("Motif_5min.xls"), "Class\tPValue\n").unwrap();
    fs::write(dir.join("Motif_5min_rep2.tsv"), "Class\tPValue\n").unwrap();
    fs::write(dir.join("notes.pdf"), "not a motif table").unwrap();

    let times = infer_timepoints(&dir).unwrap();
    let minutes: Vec<u32> = times.iter().map(|t| t.0).collect();
    assert_eq!(minutes, vec![5, 30]);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_empty_dir_is_input_error() {
    let dir = scratch_dir("infer_empty");

    let result = infer_timepoints(&dir);
    assert!(matches!(result, Err(CascadeError::InvalidInput(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_filename_without_digits_fails_before_any_load() {
    let dir = scratch_dir("no_digits");
    fs::write(dir.join("Motif_final.xls"), "Class\tPValue\nAP2\t0.01\n").unwrap();

    let result = infer_timepoints(&dir);
    assert!(matches!(result, Err(CascadeError::InvalidInput(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_ensure_inputs_ready() {
    let dir = scratch_dir("ready");
    let mut config = Config::default();

    config.motif_dir = dir.join("missing");
    assert!(matches!(
        ensure_inputs_ready(&config),
        Err(CascadeError::InvalidInput(_))
    ));

    config.motif_dir = dir.clone();
    assert!(matches!(
        ensure_inputs_ready(&config),
        Err(CascadeError::InvalidInput(_))
    ));

    fs::write(dir.join("Motif_5min.xls"), "Class\tPValue\nAP2\t0.01\n").unwrap();
    assert!(ensure_inputs_ready(&config).is_ok());

    fs::remove_dir_all(&dir).unwrap();
}
