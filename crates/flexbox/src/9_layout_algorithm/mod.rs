//! Flex Layout Algorithm
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! One pass runs: order, measure, collect lines, resolve flexible lengths, size lines, align,
//! then map logical boxes to physical rectangles.

pub mod coordinates;
pub mod cross_axis;
mod engine;
pub mod flexible_lengths;
pub mod line_breaking;

#[cfg(test)]
mod tests;

pub use coordinates::{LogicalBox, LogicalMargins, Rect, Size, logical_margins, map_box};
pub use engine::{CachedLines, FlexEngine, FlexLayout, ItemLayout, layout};
pub use flexible_lengths::{FlexInput, resolve_flexible_lengths};
pub use line_breaking::{LineBreakParams, LineCandidate, break_into_lines, index_to_line};

use core::ops::RangeInclusive;

use serde::Serialize;

/// A run of consecutive display-ordered items laid out along the main axis.
///
/// `first_index..=last_index` are display positions. Gone items count toward `item_count`
/// but contribute nothing to the sizes.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlexLine {
    pub first_index: usize,
    pub last_index: usize,
    pub item_count: usize,
    pub visible_item_count: usize,
    pub gone_item_count: usize,
    /// Outer main sizes of the visible items plus main-axis dividers.
    pub main_size: i32,
    pub cross_size: i32,
    /// Largest ascent among baseline-aligned items, margins included.
    pub max_baseline: i32,
    pub total_flex_grow: f32,
    pub total_flex_shrink: f32,
    /// Physical rectangle of the line inside the content box.
    pub bounds: Rect,
}

impl FlexLine {
    /// Display positions covered by this line.
    #[inline]
    pub const fn display_range(&self) -> RangeInclusive<usize> {
        self.first_index..=self.last_index
    }

    /// True when every item in the line is gone.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.visible_item_count == 0
    }
}
