use crate::error::{CascadeError, Result};
use crate::timepoints::{motif_files, timepoint_of};
use crate::types::{SignalTable, Timepoint};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;

/// Reads one motif table and reduces it to the strongest observation per
/// class (minimum p-value). The table must be tab-separated with a header
/// containing at least `Class` and `PValue` columns; anything else in the
/// file is ignored.
fn load_class_pvalues(path: &Path) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_separator(b'\t')
        .finish()
        .and_then(|lf| lf.collect())
        .map_err(|e| {
            CascadeError::data(format!("failed to parse '{}': {}", path.display(), e))
        })?;

    for required in ["Class", "PValue"] {
        if df.column(required).is_err() {
            return Err(CascadeError::data(format!(
                "'{}' is missing required column '{}'",
                path.display(),
                required
            )));
        }
    }

    let reduced = df
        .lazy()
        .select([
            col("Class").cast(DataType::String),
            col("PValue").cast(DataType::Float64),
        ])
        .group_by([col("Class")])
        .agg([col("PValue").min()])
        .collect()?;

    // -log10 is undefined at or below zero; fail rather than clamp
    if let Some(min_p) = reduced.column("PValue")?.f64()?.min() {
        if min_p <= 0.0 {
            return Err(CascadeError::data(format!(
                "non-positive p-value {} in '{}'",
                min_p,
                path.display()
            )));
        }
    }

    Ok(reduced)
}

/// Loads every motif table under `dir` and merges them into one wide signal
/// table.
///
/// Each file is reduced to its per-class minimum p-value; files sharing a
/// timepoint are pooled and reduced again, so the strongest replicate wins.
/// Signals are `-log10(p)`, one column per timepoint named after it. The
/// per-timepoint columns are outer-joined on `Class` in ascending time order
/// and gaps are filled with 0 (a class not detected at a timepoint carries
/// minimal signal, not missing data).
///
/// # Arguments
/// * `dir` - Directory containing the motif table files
/// * `timepoints` - Ascending timepoints inferred from the filenames
///
/// # Returns
/// * `Result<SignalTable>` - One row per class seen at any timepoint, one
///   `f64` column per timepoint
///
/// # Errors
/// * Returns `CascadeError::DataError` for unparseable files, missing
///   required columns, non-positive p-values, or an empty merge result
/// * Returns `CascadeError::InvalidInput` if there is nothing to merge
pub fn load_motif_tables(dir: &Path, timepoints: &[Timepoint]) -> Result<SignalTable> {
    let mut pooled: BTreeMap<Timepoint, DataFrame> = BTreeMap::new();
    for path in motif_files(dir)? {
        let t = timepoint_of(&path)?;
        let reduced = load_class_pvalues(&path)?;
        match pooled.remove(&t) {
            Some(prev) => {
                pooled.insert(t, prev.vstack(&reduced)?);
            }
            None => {
                pooled.insert(t, reduced);
            }
        }
    }

    let mut signal_by_time: BTreeMap<Timepoint, DataFrame> = BTreeMap::new();
    for (t, observations) in pooled {
        let signal = observations
            .lazy()
            .group_by([col("Class")])
            .agg([col("PValue").min()])
            .select([
                col("Class"),
                (-col("PValue").log(10.0)).alias(t.column_name()),
            ])
            .collect()?;
        signal_by_time.insert(t, signal);
    }

    let mut order = timepoints.iter();
    let first = order
        .next()
        .ok_or_else(|| CascadeError::invalid_input("no timepoints to merge"))?;
    let mut merged = signal_by_time
        .remove(first)
        .ok_or_else(|| {
            CascadeError::invalid_input(format!("no motif table for timepoint {}", first))
        })?
        .lazy();

    for t in order {
        let table = signal_by_time.remove(t).ok_or_else(|| {
            CascadeError::invalid_input(format!("no motif table for timepoint {}", t))
        })?;
        merged = merged.join(
            table.lazy(),
            [col("Class")],
            [col("Class")],
            JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns),
        );
    }

    let fills: Vec<Expr> = timepoints
        .iter()
        .map(|t| col(t.column_name()).fill_null(lit(0.0)))
        .collect();
    let merged = merged.with_columns(fills).collect()?;

    if merged.height() == 0 {
        return Err(CascadeError::data("no motif classes found in input tables"));
    }

    Ok(merged)
}
