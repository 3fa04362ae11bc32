//! Line collection: partition display-ordered items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::FlexLine;
use crate::chapter5::{Divider, FlexWrap};

/// What the line breaker needs to know about one item, in display order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LineCandidate {
    /// Main size plus main-axis margins.
    pub outer_main: i32,
    /// Cross size plus cross-axis margins.
    pub outer_cross: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub is_gone: bool,
    pub wrap_before: bool,
}

/// Container-level inputs for line breaking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineBreakParams {
    /// Inner main size available to a line; `None` never wraps on overflow.
    pub available_main: Option<i32>,
    pub wrap: FlexWrap,
    /// Cap on the number of lines; items past the cap join the last line.
    pub max_line: Option<usize>,
    pub divider: Divider,
}

/// Break candidates into lines.
///
/// A break happens before a visible item when wrapping is enabled, the current line already
/// holds a visible item, the line cap is not reached, and either the item has `wrap_before` or
/// it would push the line past `available_main`. Gone items join the current line at zero size.
pub fn break_into_lines(params: &LineBreakParams, candidates: &[LineCandidate]) -> Vec<FlexLine> {
    let mut lines: Vec<FlexLine> = Vec::new();
    if candidates.is_empty() {
        return lines;
    }
    let line_cap = params.max_line.map_or(usize::MAX, |cap| cap.max(1));
    let divider = params.divider;
    let mut current = FlexLine::starting_at(0);
    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.is_gone {
            current.push_gone(index);
            continue;
        }
        let may_break = params.wrap.is_multi_line()
            && current.visible_item_count > 0
            && lines.len() + 1 < line_cap;
        if may_break {
            let needed = current
                .main_size
                .saturating_add(divider.middle())
                .saturating_add(candidate.outer_main)
                .saturating_add(divider.trailing());
            let overflows = params
                .available_main
                .is_some_and(|available| needed > available);
            if candidate.wrap_before || overflows {
                debug!(
                    target: "flexbox::lines",
                    "[FLEX-LINES] break before item {} (wrap_before={} needed={} available={:?})",
                    index,
                    candidate.wrap_before,
                    needed,
                    params.available_main
                );
                current.main_size = current.main_size.saturating_add(divider.trailing());
                lines.push(current);
                current = FlexLine::starting_at(index);
            }
        }
        let divider_before = divider.before(current.visible_item_count);
        current.push_visible(index, candidate, divider_before);
    }
    if current.visible_item_count > 0 {
        current.main_size = current.main_size.saturating_add(divider.trailing());
    }
    lines.push(current);
    debug!(
        target: "flexbox::lines",
        "[FLEX-LINES] {} items -> {} lines: {:?}",
        candidates.len(),
        lines.len(),
        lines
            .iter()
            .map(|line| (line.first_index, line.last_index, line.main_size))
            .collect::<Vec<_>>()
    );
    lines
}

/// Map each display position to the index of the line containing it.
pub fn index_to_line(lines: &[FlexLine], item_count: usize) -> Vec<usize> {
    let mut mapping = vec![0; item_count];
    for (line_index, line) in lines.iter().enumerate() {
        for slot in mapping
            .iter_mut()
            .take(line.last_index + 1)
            .skip(line.first_index)
        {
            *slot = line_index;
        }
    }
    mapping
}

impl FlexLine {
    fn starting_at(index: usize) -> Self {
        Self {
            first_index: index,
            last_index: index,
            ..Self::default()
        }
    }

    fn push_gone(&mut self, index: usize) {
        self.last_index = index;
        self.item_count += 1;
        self.gone_item_count += 1;
    }

    fn push_visible(&mut self, index: usize, candidate: &LineCandidate, divider_before: i32) {
        self.last_index = index;
        self.item_count += 1;
        self.visible_item_count += 1;
        self.main_size = self
            .main_size
            .saturating_add(divider_before)
            .saturating_add(candidate.outer_main);
        self.cross_size = self.cross_size.max(candidate.outer_cross);
        self.total_flex_grow += candidate.flex_grow;
        self.total_flex_shrink += candidate.flex_shrink;
    }
}
