//! Export, aggregation, and reporting for medication logs.
//!
//! Flattens the two-level store (entities → log entries) into rows, counts
//! usage per medication, and renders the ranked summary and bar chart.

pub mod chart;
pub mod export;
pub mod frequency;
pub mod report;

pub use chart::{render_usage_chart, ChartError};
pub use export::export_medication_rows;
pub use frequency::{FrequencyTable, UNRECORDED_LABEL};
pub use report::{render_summary, NO_DATA_MESSAGE};
