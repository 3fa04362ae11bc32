//! Flexible box layout engine for abstract items.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! The host supplies items, a container configuration and a [`Measurer`]; the engine returns
//! display order, flex lines and a frame per item relative to the container's content box.

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §5 Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 Flex Layout Algorithm
#[path = "9_layout_algorithm/mod.rs"]
mod chapter9;

mod cache;
mod config;
mod error;

pub use cache::{LineCache, LineCacheKey};
pub use chapter5::{
    Divider, DividerVisibility, EdgeInsets, FlexContainer, FlexDirection, FlexWrap,
};
pub use chapter6::{
    AlignSelf, FlexItem, IntrinsicMeasurer, Margins, MeasureSpec, Measurement, Measurer,
    SizeRequest, UNBOUNDED,
};
pub use chapter7::{
    Orientation, PhysicalAxis, order_from_raw, order_key, resolve_display_order,
    resolve_display_order_checked, resolve_orientation,
};
pub use chapter8::{
    AlignContent, AlignItems, JustifyContent, Packing, SlackDistribution, distribute_slack,
};
pub use chapter9::coordinates::{physical_size, to_logical};
pub use chapter9::cross_axis::{
    BaselineMetrics, CrossItem, ItemCrossMetrics, LineCrossParams, baseline_metrics,
    cross_offset_in_line, line_cross_extent, line_cross_offsets, lines_cross_total,
    logical_baseline, stretch_lines, stretched_cross_size,
};
pub use chapter9::{
    CachedLines, FlexEngine, FlexInput, FlexLayout, FlexLine, ItemLayout, LineBreakParams,
    LineCandidate, LogicalBox, LogicalMargins, Rect, Size, break_into_lines, index_to_line,
    layout, logical_margins, map_box, resolve_flexible_lengths,
};
pub use config::{CHECK_INVARIANTS_ENV, EngineConfig};
pub use error::FlexError;
