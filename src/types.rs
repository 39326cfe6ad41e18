use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A merged enrichment table: one row per motif class, one signal column per timepoint
pub type SignalTable = DataFrame;

/// An experiment timepoint (e.g. minutes after induction).
/// Owns its column and axis labels so sorting and tie-breaks stay numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timepoint(pub u32);

impl Timepoint {
    /// Name of this timepoint's column in the merged table
    pub fn column_name(&self) -> String {
        self.0.to_string()
    }

    /// Axis label with a unit suffix, e.g. "15 min"
    pub fn axis_label(&self, unit: &str) -> String {
        format!("{} {}", self.0, unit)
    }
}

impl fmt::Display for Timepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
