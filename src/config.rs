use crate::heatmap::Colormap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Run configuration, constructed once at startup and passed to each stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for motif enrichment tables
    pub motif_dir: PathBuf,
    /// Directory the figure is written into
    pub out_dir: PathBuf,
    /// Figure file name
    pub out_fig: String,
    /// Unit suffix for timepoint axis labels
    pub time_unit: String,
    /// Palette for the heatmap cells
    pub colormap: Colormap,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            motif_dir: PathBuf::from("motif"),
            out_dir: PathBuf::from("jit_output"),
            out_fig: "JIT_motif.png".to_string(),
            time_unit: "min".to_string(),
            colormap: Colormap::Blues,
        }
    }
}
