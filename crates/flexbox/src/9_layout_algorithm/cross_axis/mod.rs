//! Cross-axis sizing and alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

mod alignment;
mod baseline;
mod lines;

pub use alignment::{CrossItem, cross_offset_in_line, stretched_cross_size};
pub use baseline::{BaselineMetrics, baseline_metrics, logical_baseline};
pub use lines::{
    ItemCrossMetrics, LineCrossParams, line_cross_extent, line_cross_offsets, lines_cross_total,
    stretch_lines,
};
