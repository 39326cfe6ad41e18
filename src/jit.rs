use crate::error::{CascadeError, Result};
use crate::types::{SignalTable, Timepoint};
use polars::prelude::*;

/// Annotates the merged table with each motif's activation time and sorts it
/// into the temporal cascade.
///
/// For every row, `peak_val` is the maximum signal over the timepoint columns
/// and `JIT_time` is the timepoint achieving it. The argmax walks the columns
/// in ascending time order with a strict comparison, so ties break toward the
/// earliest timepoint. Rows are then sorted by `JIT_time` ascending and
/// `peak_val` descending.
pub fn compute_jit(merged: SignalTable, timepoints: &[Timepoint]) -> Result<SignalTable> {
    if timepoints.is_empty() {
        return Err(CascadeError::invalid_input("no timepoints to analyze"));
    }

    let mut signal_cols: Vec<Vec<f64>> = Vec::with_capacity(timepoints.len());
    for t in timepoints {
        let name = t.column_name();
        let values: Vec<f64> = merged
            .column(name.as_str())?
            .f64()?
            .into_no_null_iter()
            .collect();
        signal_cols.push(values);
    }

    let n_rows = merged.height();
    let mut jit_times: Vec<u32> = Vec::with_capacity(n_rows);
    let mut peak_vals: Vec<f64> = Vec::with_capacity(n_rows);

    for row in 0..n_rows {
        let mut best = 0;
        for (idx, column) in signal_cols.iter().enumerate().skip(1) {
            if column[row] > signal_cols[best][row] {
                best = idx;
            }
        }
        jit_times.push(timepoints[best].0);
        peak_vals.push(signal_cols[best][row]);
    }

    let annotated = merged.hstack(&[
        Column::new("JIT_time".into(), jit_times),
        Column::new("peak_val".into(), peak_vals),
    ])?;

    let cascade = annotated.sort(
        ["JIT_time", "peak_val"],
        SortMultipleOptions::default().with_order_descending_multi([false, true]),
    )?;

    Ok(cascade)
}
