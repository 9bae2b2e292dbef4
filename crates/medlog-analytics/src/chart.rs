//! Bar-chart rendering with plotters' bitmap backend.
//!
//! Uses default bitmap fonts so rendering works in headless environments.
//! The output file is overwritten unconditionally on each run.

use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::frequency::FrequencyTable;

const CHART_WIDTH: u32 = 1200;
const CHART_HEIGHT: u32 = 800;

/// Errors that can occur during chart generation.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Nothing to chart: frequency table is empty")]
    EmptyTable,

    #[error("Failed to prepare drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

/// Render the usage bar chart (x = medication, y = count) to `path` as a
/// 1200x800 PNG, replacing any existing file.
///
/// Callers skip chart rendering entirely when there is no data; an empty
/// table here is an error rather than an empty image.
pub fn render_usage_chart(table: &FrequencyTable, path: &Path) -> Result<(), ChartError> {
    let ranked = table.ranked();
    if ranked.is_empty() {
        return Err(ChartError::EmptyTable);
    }

    let labels: Vec<&str> = ranked.iter().map(|(name, _)| name.as_str()).collect();
    let max_count = ranked.iter().map(|(_, count)| *count).max().unwrap_or(1);
    // Headroom above the tallest bar so it never touches the frame.
    let y_max = max_count + (max_count / 10).max(1);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Medication Usage", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d((0..ranked.len()).into_segmented(), 0u32..y_max)
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Medication")
        .y_desc("Count")
        .x_labels(ranked.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => labels
                .get(*index)
                .map(|label| label.to_string())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .label_style(("sans-serif", 20))
        .axis_desc_style(("sans-serif", 25))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(10)
                .data(ranked.iter().enumerate().map(|(index, (_, count))| (index, *count))),
        )
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    Ok(())
}
