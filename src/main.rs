use motif_cascade::config::Config;
use motif_cascade::error::CascadeError;
use motif_cascade::heatmap::render_heatmap;
use motif_cascade::jit::compute_jit;
use motif_cascade::tables::load_motif_tables;
use motif_cascade::timepoints::{ensure_inputs_ready, infer_timepoints};

fn main() -> Result<(), CascadeError> {
    let start_time = std::time::Instant::now();
    let config = Config::default();

    println!("Running JIT motif analysis (auto time inference)");
    ensure_inputs_ready(&config)?;

    let timepoints = infer_timepoints(&config.motif_dir)?;
    let minutes: Vec<u32> = timepoints.iter().map(|t| t.0).collect();
    println!("Detected timepoints: {:?}", minutes);

    let merged = load_motif_tables(&config.motif_dir, &timepoints)?;
    println!(
        "{} motif classes across {} timepoints",
        merged.height(),
        timepoints.len()
    );

    let cascade = compute_jit(merged, &timepoints)?;
    let out_path = render_heatmap(&cascade, &timepoints, &config)?;
    println!("Plot saved to: {}", out_path.display());

    let elapsed = start_time.elapsed();
    println!("Total execution time: {:.4} seconds", elapsed.as_secs_f64());

    Ok(())
}
