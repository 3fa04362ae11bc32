//! Placing an item inside its line along the cross axis.

use super::baseline::BaselineMetrics;
use crate::chapter8::AlignItems;

/// Cross-axis facts about one item needed to place it in a line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct CrossItem {
    pub cross_size: i32,
    /// Margin on the logical cross-start side.
    pub margin_lead: i32,
    /// Margin on the logical cross-end side.
    pub margin_trail: i32,
    /// Present only when the item takes part in baseline alignment.
    pub baseline: Option<BaselineMetrics>,
}

/// Offset of the item's border box from the line's cross-start edge.
///
/// `Baseline` without metrics behaves as `FlexStart`. `Stretch` expects the caller to have
/// already stretched `cross_size`, and places the item like `FlexStart`.
pub fn cross_offset_in_line(
    align: AlignItems,
    line_cross: i32,
    line_max_baseline: i32,
    item: CrossItem,
) -> i32 {
    match align {
        AlignItems::FlexStart | AlignItems::Stretch => item.margin_lead,
        AlignItems::FlexEnd => line_cross
            .saturating_sub(item.cross_size)
            .saturating_sub(item.margin_trail),
        AlignItems::Center => {
            let free = line_cross
                .saturating_sub(item.cross_size)
                .saturating_sub(item.margin_lead)
                .saturating_sub(item.margin_trail);
            item.margin_lead.saturating_add(free.div_euclid(2))
        }
        AlignItems::Baseline => item.baseline.map_or(item.margin_lead, |metrics| {
            line_max_baseline
                .saturating_sub(metrics.ascent)
                .saturating_add(item.margin_lead)
        }),
    }
}

/// Cross size of a stretched item: the line's cross size minus margins, within bounds.
#[inline]
pub fn stretched_cross_size(
    line_cross: i32,
    margin_lead: i32,
    margin_trail: i32,
    min_cross: i32,
    max_cross: i32,
) -> i32 {
    line_cross
        .saturating_sub(margin_lead)
        .saturating_sub(margin_trail)
        .max(0)
        .max(min_cross)
        .min(max_cross)
}
