use crate::config::Config;
use crate::error::{CascadeError, Result};
use crate::types::{SignalTable, Timepoint};
use ndarray::Array2;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CELL_WIDTH: i32 = 50;
const CELL_HEIGHT: i32 = 30;
const LEFT_MARGIN: i32 = 160;
const RIGHT_MARGIN: i32 = 120;
const TOP_MARGIN: i32 = 56;
const BOTTOM_MARGIN: i32 = 56;
const COLORBAR_WIDTH: i32 = 18;
const COLORBAR_STEPS: i32 = 100;

/// Sequential two-endpoint palettes for the heatmap cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Colormap {
    Blues,
    Greens,
    Oranges,
}

impl Colormap {
    fn endpoints(&self) -> ([u8; 3], [u8; 3]) {
        match self {
            Colormap::Blues => ([247, 251, 255], [8, 48, 107]),
            Colormap::Greens => ([247, 252, 245], [0, 68, 27]),
            Colormap::Oranges => ([255, 245, 235], [127, 39, 4]),
        }
    }

    /// Color at normalized intensity `t` in [0, 1]
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = t.clamp(0.0, 1.0);
        let (lo, hi) = self.endpoints();
        let lerp = |a: u8, b: u8| (f64::from(a) + t * (f64::from(b) - f64::from(a))).round() as u8;
        RGBColor(lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2]))
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for CascadeError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        CascadeError::OutputError(e.to_string())
    }
}

/// Renders the cascade as a color-mapped grid and writes it under the
/// configured output directory.
///
/// Rows are motifs in cascade order, columns are timepoints, cell intensity
/// is the signal normalized by the global maximum. Each row's `JIT_time`
/// cell gets a red outline marking the detected activation point.
///
/// # Errors
/// * Returns `CascadeError::OutputError` if the output directory cannot be
///   created or any drawing operation fails
/// * Returns `CascadeError::DataError` if the table has nothing to plot
pub fn render_heatmap(
    cascade: &SignalTable,
    timepoints: &[Timepoint],
    config: &Config,
) -> Result<PathBuf> {
    fs::create_dir_all(&config.out_dir).map_err(|e| {
        CascadeError::output(format!(
            "cannot create output directory '{}': {}",
            config.out_dir.display(),
            e
        ))
    })?;
    let out_path = config.out_dir.join(&config.out_fig);

    let n_rows = cascade.height();
    let n_cols = timepoints.len();
    if n_rows == 0 || n_cols == 0 {
        return Err(CascadeError::data("nothing to plot"));
    }

    let mut signal = Array2::<f64>::zeros((n_rows, n_cols));
    for (j, t) in timepoints.iter().enumerate() {
        let name = t.column_name();
        let column = cascade.column(name.as_str())?.f64()?;
        for (i, value) in column.into_no_null_iter().enumerate() {
            signal[[i, j]] = value;
        }
    }
    // All-zero matrices render as plain background instead of dividing by zero
    let max_signal = signal.iter().copied().fold(0.0_f64, f64::max);

    let classes: Vec<String> = cascade
        .column("Class")?
        .str()?
        .into_no_null_iter()
        .map(str::to_string)
        .collect();
    let jit_times: Vec<u32> = cascade
        .column("JIT_time")?
        .u32()?
        .into_no_null_iter()
        .collect();

    let grid_width = CELL_WIDTH * n_cols as i32;
    let grid_height = CELL_HEIGHT * n_rows as i32;
    let width = (LEFT_MARGIN + grid_width + RIGHT_MARGIN) as u32;
    let height = (TOP_MARGIN + grid_height + BOTTOM_MARGIN) as u32;

    let root = BitMapBackend::new(&out_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    for i in 0..n_rows {
        for j in 0..n_cols {
            let norm = if max_signal > 0.0 {
                signal[[i, j]] / max_signal
            } else {
                0.0
            };
            let x0 = LEFT_MARGIN + CELL_WIDTH * j as i32;
            let y0 = TOP_MARGIN + CELL_HEIGHT * i as i32;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL_WIDTH, y0 + CELL_HEIGHT)],
                config.colormap.sample(norm).filled(),
            ))?;
        }
    }

    let title_style = ("sans-serif", 20)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "Just-in-Time Cis-element Cascade",
        (width as i32 / 2, 10),
        title_style,
    ))?;

    let row_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (i, class) in classes.iter().enumerate() {
        let y = TOP_MARGIN + CELL_HEIGHT * i as i32 + CELL_HEIGHT / 2;
        root.draw(&Text::new(class.as_str(), (LEFT_MARGIN - 8, y), row_style.clone()))?;
    }

    let col_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (j, t) in timepoints.iter().enumerate() {
        let x = LEFT_MARGIN + CELL_WIDTH * j as i32 + CELL_WIDTH / 2;
        root.draw(&Text::new(
            t.axis_label(&config.time_unit),
            (x, TOP_MARGIN + grid_height + 8),
            col_style.clone(),
        ))?;
    }

    draw_colorbar(&root, config, max_signal, grid_width, grid_height)?;

    // Outline each row's activation cell
    for (i, t_min) in jit_times.iter().enumerate() {
        if let Some(j) = timepoints.iter().position(|t| t.0 == *t_min) {
            let x0 = LEFT_MARGIN + CELL_WIDTH * j as i32;
            let y0 = TOP_MARGIN + CELL_HEIGHT * i as i32;
            root.draw(&Rectangle::new(
                [(x0, y0), (x0 + CELL_WIDTH, y0 + CELL_HEIGHT)],
                RED.stroke_width(2),
            ))?;
        }
    }

    root.present()?;
    drop(root);
    Ok(out_path)
}

fn draw_colorbar<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    config: &Config,
    max_signal: f64,
    grid_width: i32,
    grid_height: i32,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let bar_x = LEFT_MARGIN + grid_width + 28;
    let bar_y = TOP_MARGIN;

    for step in 0..COLORBAR_STEPS {
        let y0 = bar_y + grid_height * step / COLORBAR_STEPS;
        let y1 = bar_y + grid_height * (step + 1) / COLORBAR_STEPS;
        let t = 1.0 - f64::from(step) / f64::from(COLORBAR_STEPS);
        root.draw(&Rectangle::new(
            [(bar_x, y0), (bar_x + COLORBAR_WIDTH, y1)],
            config.colormap.sample(t).filled(),
        ))?;
    }
    root.draw(&Rectangle::new(
        [(bar_x, bar_y), (bar_x + COLORBAR_WIDTH, bar_y + grid_height)],
        BLACK.stroke_width(1),
    ))?;

    let tick_style = ("sans-serif", 11)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw(&Text::new(
        format!("{:.2}", max_signal),
        (bar_x + COLORBAR_WIDTH + 4, bar_y),
        tick_style.clone(),
    ))?;
    root.draw(&Text::new(
        "0.00",
        (bar_x + COLORBAR_WIDTH + 4, bar_y + grid_height),
        tick_style,
    ))?;

    let caption_style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    root.draw(&Text::new(
        "-log10(P-value)",
        (bar_x + COLORBAR_WIDTH / 2, bar_y - 6),
        caption_style,
    ))?;

    Ok(())
}
