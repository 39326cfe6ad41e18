use crate::config::Config;
use crate::error::{CascadeError, Result};
use crate::types::Timepoint;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions recognized as motif enrichment tables (all tab-separated)
const TABLE_EXTENSIONS: [&str; 3] = ["xls", "txt", "tsv"];

/// Checks that the input directory exists and is not empty.
///
/// This is the caller-facing precondition before running the pipeline; it
/// never creates directories and never blocks.
///
/// # Errors
/// * Returns `CascadeError::InvalidInput` if the directory is missing or empty
pub fn ensure_inputs_ready(config: &Config) -> Result<()> {
    if !config.motif_dir.is_dir() {
        return Err(CascadeError::invalid_input(format!(
            "input directory '{}' does not exist; create it and add motif tables \
             (filenames must embed a timepoint, e.g. Motif_15min.xls)",
            config.motif_dir.display()
        )));
    }

    if fs::read_dir(&config.motif_dir)?.next().is_none() {
        return Err(CascadeError::invalid_input(format!(
            "input directory '{}' is empty",
            config.motif_dir.display()
        )));
    }

    Ok(())
}

fn is_motif_table(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| TABLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
}

/// Lists the motif table files in a directory, sorted by path so downstream
/// processing order is deterministic.
pub fn motif_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_motif_table(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Extract numeric time from a filename.
/// Example: Motif_15min.xls -> 15
///
/// The first contiguous run of digits wins.
///
/// # Errors
/// * Returns `CascadeError::InvalidInput` if the filename contains no digits
pub fn extract_time(filename: &str) -> Result<u32> {
    let digits = Regex::new(r"(\d+)").expect("invalid regex");
    let captures = digits.captures(filename).ok_or_else(|| {
        CascadeError::invalid_input(format!("no timepoint found in filename: {}", filename))
    })?;

    captures[1].parse::<u32>().map_err(|e| {
        CascadeError::invalid_input(format!("bad timepoint in filename {}: {}", filename, e))
    })
}

/// Timepoint embedded in a file's name
pub fn timepoint_of(path: &Path) -> Result<Timepoint> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            CascadeError::invalid_input(format!("unreadable filename: {}", path.display()))
        })?;

    Ok(Timepoint(extract_time(name)?))
}

/// Infers the sorted set of distinct timepoints from the motif filenames in
/// `dir`.
///
/// Multiple files may share a timepoint (replicates); duplicates collapse to
/// a single entry here and are pooled into one column by the loader.
///
/// # Errors
/// * Returns `CascadeError::InvalidInput` if no motif table files are found,
///   or if any matching file has no digits in its name
pub fn infer_timepoints(dir: &Path) -> Result<Vec<Timepoint>> {
    let files = motif_files(dir)?;
    if files.is_empty() {
        return Err(CascadeError::invalid_input(format!(
            "no motif tables (.xls/.txt/.tsv) found in '{}'",
            dir.display()
        )));
    }

    let mut times = BTreeSet::new();
    for path in &files {
        times.insert(timepoint_of(path)?);
    }

    Ok(times.into_iter().collect())
}
