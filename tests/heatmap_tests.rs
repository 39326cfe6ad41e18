use motif_cascade::config::Config;
use motif_cascade::heatmap::{render_heatmap, Colormap};
use motif_cascade::jit::compute_jit;
use motif_cascade::types::Timepoint;
use polars::prelude::*;
use std::fs;

#[test]
fn test_render_writes_figure() {
    let timepoints = [Timepoint(5), Timepoint(10), Timepoint(30)];
    let merged = df!(
        "Class" => ["AP2", "MYB", "WRKY"],
        "5" => [2.0, 0.0, 1.2],
        "10" => [4.0, 1.3, 0.4],
        "30" => [0.5, 2.2, 0.0],
    )
    .unwrap();
    let cascade = compute_jit(merged, &timepoints).unwrap();

    let mut config = Config::default();
    config.out_dir = std::env::temp_dir().join("motif_cascade_render");
    config.out_fig = "cascade.png".to_string();

    let out_path = render_heatmap(&cascade, &timepoints, &config).unwrap();
    assert!(out_path.exists());
    assert!(fs::metadata(&out_path).unwrap().len() > 0);

    fs::remove_dir_all(&config.out_dir).unwrap();
}

#[test]
fn test_colormap_sample_endpoints() {
    let low = Colormap::Blues.sample(0.0);
    let high = Colormap::Blues.sample(1.0);
    assert_eq!((low.0, low.1, low.2), (247, 251, 255));
    assert_eq!((high.0, high.1, high.2), (8, 48, 107));

    // out-of-range intensities clamp
    let clamped = Colormap::Blues.sample(2.0);
    assert_eq!((clamped.0, clamped.1, clamped.2), (8, 48, 107));
}
