//! Layout pass orchestration.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use log::{debug, warn};
use serde::Serialize;

use super::coordinates::{
    LogicalBox, LogicalMargins, Rect, Size, logical_margins, map_box, physical_size, to_logical,
};
use super::cross_axis::{
    CrossItem, ItemCrossMetrics, LineCrossParams, baseline_metrics, cross_offset_in_line,
    line_cross_extent, line_cross_offsets, lines_cross_total, logical_baseline, stretch_lines,
    stretched_cross_size,
};
use super::flexible_lengths::{FlexInput, resolve_flexible_lengths};
use super::line_breaking::{LineBreakParams, LineCandidate, break_into_lines, index_to_line};
use super::FlexLine;
use crate::cache::{LineCache, LineCacheKey};
use crate::chapter5::{EdgeInsets, FlexContainer};
use crate::chapter6::{FlexItem, MeasureSpec, Measurer, SizeRequest};
use crate::chapter7::{Orientation, PhysicalAxis, resolve_display_order, resolve_orientation};
use crate::chapter8::{AlignItems, Packing, distribute_slack};
use crate::{EngineConfig, FlexError};

/// Final geometry of one item.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub struct ItemLayout {
    /// Border box relative to the container's content box. Zero for gone items.
    pub frame: Rect,
    pub main_size: i32,
    pub cross_size: i32,
    /// Index of the line holding the item.
    pub line: usize,
    /// Position of the item in display order.
    pub display_index: usize,
}

/// Output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FlexLayout {
    pub lines: Vec<FlexLine>,
    /// `display_order[display_position] == storage_index`.
    pub display_order: Vec<usize>,
    /// `index_to_line[display_position] == line_index`.
    pub index_to_line: Vec<usize>,
    /// Per storage index.
    pub items: Vec<ItemLayout>,
    /// Content box size.
    pub content_size: Size,
    /// Padding box size.
    pub size: Size,
    pub padding: EdgeInsets,
    /// Inner main size the lines were resolved against.
    pub content_main: i32,
}

impl FlexLayout {
    /// Line holding the item at `storage` index.
    #[inline]
    pub fn line_of(&self, storage: usize) -> Option<usize> {
        self.items.get(storage).map(|item| item.line)
    }

    /// Frame of the item at `storage` index, relative to the content box.
    #[inline]
    pub fn frame(&self, storage: usize) -> Option<Rect> {
        self.items.get(storage).map(|item| item.frame)
    }

    /// Frame of the item at `storage` index, relative to the padding box.
    #[inline]
    pub fn frame_in_padding_box(&self, storage: usize) -> Option<Rect> {
        self.frame(storage)
            .map(|frame| frame.translate(self.padding.left, self.padding.top))
    }

    /// Verify line coverage and main-size bounds against `items`, logging each violation.
    /// Returns `true` when nothing was found.
    pub fn check_invariants(&self, items: &[FlexItem]) -> bool {
        let mut clean = true;
        let mut next = 0;
        for (line_index, line) in self.lines.iter().enumerate() {
            if line.first_index != next || line.last_index < line.first_index {
                warn!(
                    target: "flexbox::check",
                    "line {} covers {}..={} but {} was expected next",
                    line_index,
                    line.first_index,
                    line.last_index,
                    next
                );
                clean = false;
            }
            next = line.last_index + 1;
        }
        if !items.is_empty() && next != items.len() {
            warn!(
                target: "flexbox::check",
                "lines cover {} of {} items",
                next,
                items.len()
            );
            clean = false;
        }
        for (storage, (item, placed)) in items.iter().zip(&self.items).enumerate() {
            let item = item.sanitized();
            if item.is_gone {
                continue;
            }
            if placed.main_size < item.min_main_size || placed.main_size > item.max_main_size {
                warn!(
                    target: "flexbox::check",
                    "item {} main size {} outside [{}, {}]",
                    storage,
                    placed.main_size,
                    item.min_main_size,
                    item.max_main_size
                );
                clean = false;
            }
        }
        clean
    }

    /// Snapshot of the main-axis results, for a later [`FlexEngine::relayout_cross`].
    pub fn cached_lines(&self) -> CachedLines {
        CachedLines {
            display_order: self.display_order.clone(),
            lines: self.lines.clone(),
            main_sizes: self.items.iter().map(|item| item.main_size).collect(),
            content_main: self.content_main,
        }
    }
}

/// Main-axis results of a previous pass: ordering, lines and resolved main sizes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CachedLines {
    pub display_order: Vec<usize>,
    pub lines: Vec<FlexLine>,
    /// Resolved main size per storage index.
    pub main_sizes: Vec<i32>,
    /// Inner main size of the container in that pass.
    pub content_main: i32,
}

/// Per-item working state for one pass.
#[derive(Copy, Clone, Debug, Default)]
struct ItemState {
    margins: LogicalMargins,
    main: i32,
    cross: i32,
    baseline: Option<i32>,
    /// Main-axis constraint handed to the measurer on the intrinsic call.
    main_spec: MeasureSpec,
    cross_spec: MeasureSpec,
}

impl ItemState {
    const fn outer_main(&self) -> i32 {
        self.main
            .saturating_add(self.margins.main_lead)
            .saturating_add(self.margins.main_trail)
    }

    const fn outer_cross(&self) -> i32 {
        self.cross
            .saturating_add(self.margins.cross_lead)
            .saturating_add(self.margins.cross_trail)
    }
}

/// Inputs shared by every stage of a pass.
struct Pass<'pass> {
    container: &'pass FlexContainer,
    items: Vec<FlexItem>,
    orientation: Orientation,
    padding: EdgeInsets,
    main_spec: MeasureSpec,
    cross_spec: MeasureSpec,
}

/// Stateless layout engine.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FlexEngine {
    config: EngineConfig,
}

impl FlexEngine {
    #[inline]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Run a full layout pass.
    ///
    /// `width` and `height` constrain the container's padding box. Frames are returned per
    /// storage index, relative to the content box.
    ///
    /// # Errors
    /// Returns [`FlexError::InvalidConstraint`] when `width` or `height` carries a negative size.
    pub fn layout<M: Measurer>(
        &self,
        container: &FlexContainer,
        items: &[FlexItem],
        width: MeasureSpec,
        height: MeasureSpec,
        measurer: &mut M,
    ) -> Result<FlexLayout, FlexError> {
        let pass = Pass::new(container, items, width, height)?;
        let display_order = resolve_display_order(&pass.items);
        let mut states = pass.measure_intrinsic(measurer);

        let candidates: Vec<LineCandidate> = display_order
            .iter()
            .map(|&storage| pass.line_candidate(storage, &states))
            .collect();
        let params = LineBreakParams {
            available_main: pass.main_spec.size(),
            wrap: container.wrap,
            max_line: container.max_line,
            divider: container.main_divider,
        };
        let mut lines = break_into_lines(&params, &candidates);
        let content_main = pass.content_main(&lines);
        debug!(
            target: "flexbox::engine",
            "[FLEX-ENGINE] {} items, {} lines, content_main={}",
            pass.items.len(),
            lines.len(),
            content_main
        );

        for line in &mut lines {
            pass.resolve_line_main(line, &display_order, &mut states, content_main, measurer);
        }
        let layout = pass.finish(display_order, lines, &mut states, content_main, measurer);
        if self.config.check_invariants {
            layout.check_invariants(items);
        }
        Ok(layout)
    }

    /// Re-run only the cross-axis stages using main-axis results from `cached`.
    ///
    /// Each visible item is measured with its cached exact main size, and stretched items once
    /// more with an exact cross size. Falls back to a full pass when `cached` does not match
    /// `items`.
    ///
    /// # Errors
    /// Returns [`FlexError::InvalidConstraint`] when `width` or `height` carries a negative size.
    pub fn relayout_cross<M: Measurer>(
        &self,
        container: &FlexContainer,
        items: &[FlexItem],
        width: MeasureSpec,
        height: MeasureSpec,
        cached: &CachedLines,
        measurer: &mut M,
    ) -> Result<FlexLayout, FlexError> {
        if cached.main_sizes.len() != items.len() || cached.display_order.len() != items.len() {
            debug!(
                target: "flexbox::engine",
                "[FLEX-ENGINE] cached lines cover {} items, got {}; full pass",
                cached.main_sizes.len(),
                items.len()
            );
            return self.layout(container, items, width, height, measurer);
        }
        let pass = Pass::new(container, items, width, height)?;
        let mut states = vec![ItemState::default(); pass.items.len()];
        for (storage, item) in pass.items.iter().enumerate() {
            let Some(state) = states.get_mut(storage) else {
                continue;
            };
            *state = pass.initial_state(item);
            if item.is_gone {
                continue;
            }
            let main = cached.main_sizes.get(storage).copied().unwrap_or(0);
            let measured = measurer.measure(
                storage,
                item,
                MeasureSpec::Exact(main),
                state.cross_spec,
            );
            state.main = main;
            state.cross = item.clamp_cross(measured.cross);
            state.baseline = measured.baseline;
        }
        let lines = cached
            .lines
            .iter()
            .map(|line| FlexLine {
                cross_size: 0,
                max_baseline: 0,
                bounds: Rect::default(),
                ..line.clone()
            })
            .collect();
        let layout = pass.finish(
            cached.display_order.clone(),
            lines,
            &mut states,
            cached.content_main,
            measurer,
        );
        if self.config.check_invariants {
            layout.check_invariants(items);
        }
        Ok(layout)
    }

    /// Layout consulting a host-owned [`LineCache`].
    ///
    /// `version` identifies the item set and container configuration; the host bumps it
    /// whenever either changes. A hit runs [`Self::relayout_cross`], a miss runs a full pass and
    /// stores its lines.
    ///
    /// # Errors
    /// Returns [`FlexError::InvalidConstraint`] when `width` or `height` carries a negative size.
    #[allow(
        clippy::too_many_arguments,
        reason = "Cached layout takes the full pass inputs plus the cache and its key"
    )]
    pub fn layout_cached<M: Measurer>(
        &self,
        container: &FlexContainer,
        items: &[FlexItem],
        width: MeasureSpec,
        height: MeasureSpec,
        cache: &mut LineCache,
        version: u64,
        measurer: &mut M,
    ) -> Result<FlexLayout, FlexError> {
        let orientation = resolve_orientation(container.direction, container.wrap);
        let (main_constraint, _) = to_logical(orientation, width, height);
        let key = LineCacheKey {
            item_set_version: version,
            main_constraint,
        };
        if let Some(cached) = cache.get(&key) {
            debug!(target: "flexbox::cache", "[FLEX-CACHE] hit {key:?}");
            return self.relayout_cross(container, items, width, height, cached, measurer);
        }
        debug!(target: "flexbox::cache", "[FLEX-CACHE] miss {key:?}");
        let layout = self.layout(container, items, width, height, measurer)?;
        cache.store(key, layout.cached_lines());
        Ok(layout)
    }
}

/// Run a full pass with the default configuration.
///
/// # Errors
/// Returns [`FlexError::InvalidConstraint`] when `width` or `height` carries a negative size.
pub fn layout<M: Measurer>(
    container: &FlexContainer,
    items: &[FlexItem],
    width: MeasureSpec,
    height: MeasureSpec,
    measurer: &mut M,
) -> Result<FlexLayout, FlexError> {
    FlexEngine::default().layout(container, items, width, height, measurer)
}

impl<'pass> Pass<'pass> {
    fn new(
        container: &'pass FlexContainer,
        items: &[FlexItem],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Self, FlexError> {
        let width = width.validate(PhysicalAxis::Horizontal)?;
        let height = height.validate(PhysicalAxis::Vertical)?;
        let orientation = resolve_orientation(container.direction, container.wrap);
        let padding = container.padding.non_negative();
        let (main_spec, cross_spec) = to_logical(
            orientation,
            width.deflate(padding.horizontal()),
            height.deflate(padding.vertical()),
        );
        Ok(Self {
            container,
            items: items.iter().map(FlexItem::sanitized).collect(),
            orientation,
            padding,
            main_spec,
            cross_spec,
        })
    }

    fn initial_state(&self, item: &FlexItem) -> ItemState {
        let margins = logical_margins(self.orientation, item.margins);
        let main_request = match (item.flex_basis_percent, self.main_spec) {
            (Some(percent), MeasureSpec::Exact(inner)) => {
                SizeRequest::Exact((f64::from(inner) * f64::from(percent)).round() as i32)
            }
            _ => item.main_size,
        };
        ItemState {
            margins,
            main_spec: child_spec(
                main_request,
                self.main_spec,
                margins.main_lead + margins.main_trail,
            ),
            cross_spec: child_spec(
                item.cross_size,
                self.cross_spec,
                margins.cross_lead + margins.cross_trail,
            ),
            ..ItemState::default()
        }
    }

    /// First measurer call for every visible item, clamped to the item's bounds.
    fn measure_intrinsic<M: Measurer>(&self, measurer: &mut M) -> Vec<ItemState> {
        self.items
            .iter()
            .enumerate()
            .map(|(storage, item)| {
                let mut state = self.initial_state(item);
                if !item.is_gone {
                    let measured =
                        measurer.measure(storage, item, state.main_spec, state.cross_spec);
                    state.main = item.clamp_main(measured.main);
                    state.cross = item.clamp_cross(measured.cross);
                    state.baseline = measured.baseline;
                }
                state
            })
            .collect()
    }

    fn line_candidate(&self, storage: usize, states: &[ItemState]) -> LineCandidate {
        let (Some(item), Some(state)) = (self.items.get(storage), states.get(storage)) else {
            return LineCandidate::default();
        };
        LineCandidate {
            outer_main: state.outer_main(),
            outer_cross: state.outer_cross(),
            flex_grow: item.flex_grow,
            flex_shrink: item.flex_shrink,
            is_gone: item.is_gone,
            wrap_before: item.wrap_before,
        }
    }

    /// Inner main size of the container: exact, or the largest line capped by `AtMost`.
    fn content_main(&self, lines: &[FlexLine]) -> i32 {
        let largest = lines.iter().map(|line| line.main_size).max().unwrap_or(0);
        match self.main_spec {
            MeasureSpec::Exact(size) => size,
            MeasureSpec::AtMost(size) => largest.min(size),
            MeasureSpec::Unspecified => largest,
        }
    }

    /// Grow or shrink one line's visible items toward `content_main`, re-measuring items whose
    /// main size changed.
    fn resolve_line_main<M: Measurer>(
        &self,
        line: &mut FlexLine,
        display_order: &[usize],
        states: &mut [ItemState],
        content_main: i32,
        measurer: &mut M,
    ) {
        let visible = self.visible_in(line, display_order);
        let inputs: Vec<FlexInput> = visible
            .iter()
            .filter_map(|&storage| {
                let item = self.items.get(storage)?;
                let state = states.get(storage)?;
                Some(FlexInput {
                    basis: state.main,
                    min: item.min_main_size,
                    max: item.max_main_size,
                    flex_grow: item.flex_grow,
                    flex_shrink: item.flex_shrink,
                })
            })
            .collect();
        let free_space = content_main - line.main_size;
        let sizes = resolve_flexible_lengths(&inputs, free_space);
        for (&storage, &size) in visible.iter().zip(&sizes) {
            let (Some(item), Some(state)) = (self.items.get(storage), states.get_mut(storage))
            else {
                continue;
            };
            if size == state.main {
                continue;
            }
            line.main_size = line.main_size.saturating_add(size - state.main);
            if self.stretches(item, state) {
                // Measured once, after stretching, with both sizes exact.
                state.main = size;
                continue;
            }
            let measured =
                measurer.measure(storage, item, MeasureSpec::Exact(size), state.cross_spec);
            state.main = size;
            state.cross = item.clamp_cross(measured.cross);
            state.baseline = measured.baseline;
        }
        line.cross_size = visible
            .iter()
            .filter_map(|&storage| states.get(storage))
            .map(ItemState::outer_cross)
            .max()
            .unwrap_or(0);
    }

    /// Storage indices of the visible items of `line`, in display order.
    fn visible_in(&self, line: &FlexLine, display_order: &[usize]) -> Vec<usize> {
        display_order
            .get(line.display_range())
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|&storage| self.items.get(storage).is_some_and(|item| !item.is_gone))
            .collect()
    }

    /// Resolved alignment for an item, with baseline degraded when it cannot apply.
    fn alignment(&self, item: &FlexItem, state: &ItemState) -> AlignItems {
        match item.align_self.resolve(self.container.align_items) {
            AlignItems::Baseline
                if !self.orientation.main_is_horizontal() || state.baseline.is_none() =>
            {
                AlignItems::FlexStart
            }
            other => other,
        }
    }

    /// Whether the item takes its cross size from its line.
    fn stretches(&self, item: &FlexItem, state: &ItemState) -> bool {
        !matches!(item.cross_size, SizeRequest::Exact(_))
            && self.alignment(item, state) == AlignItems::Stretch
    }

    fn cross_metrics(&self, item: &FlexItem, state: &ItemState) -> ItemCrossMetrics {
        let baseline = match self.alignment(item, state) {
            AlignItems::Baseline => state.baseline.map(|baseline| {
                baseline_metrics(
                    state.cross,
                    logical_baseline(state.cross, baseline, self.orientation.cross_reversed),
                    state.margins.cross_lead,
                    state.margins.cross_trail,
                )
            }),
            _ => None,
        };
        ItemCrossMetrics {
            outer_cross: state.outer_cross(),
            baseline,
        }
    }

    /// Cross sizing, alignment and coordinate mapping shared by full and cross-only passes.
    fn finish<M: Measurer>(
        &self,
        display_order: Vec<usize>,
        mut lines: Vec<FlexLine>,
        states: &mut [ItemState],
        content_main: i32,
        measurer: &mut M,
    ) -> FlexLayout {
        let container = self.container;
        for line in &mut lines {
            let metrics: Vec<ItemCrossMetrics> = self
                .visible_in(line, &display_order)
                .into_iter()
                .filter_map(|storage| {
                    let item = self.items.get(storage)?;
                    let state = states.get(storage)?;
                    Some(self.cross_metrics(item, state))
                })
                .collect();
            let (cross_size, max_baseline) = line_cross_extent(metrics);
            line.cross_size = cross_size;
            line.max_baseline = max_baseline;
        }

        let cross_params = LineCrossParams {
            exact_inner_cross: match self.cross_spec {
                MeasureSpec::Exact(size) => Some(size),
                MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => None,
            },
            wrap: container.wrap,
            align_content: container.align_content,
            divider: container.cross_divider,
        };
        stretch_lines(&cross_params, &mut lines);
        let lines_total = lines_cross_total(&lines, container.cross_divider);
        let content_cross = match self.cross_spec {
            MeasureSpec::Exact(size) => size,
            MeasureSpec::AtMost(size) => lines_total.min(size),
            MeasureSpec::Unspecified => lines_total,
        };

        self.stretch_items(&lines, &display_order, states, measurer);

        let line_offsets = line_cross_offsets(
            container.align_content,
            container.cross_divider,
            &lines,
            content_cross,
        );
        let item_count = self.items.len();
        let lookup = index_to_line(&lines, item_count);
        let mut placed = vec![ItemLayout::default(); item_count];
        for (display_index, &storage) in display_order.iter().enumerate() {
            if let Some(slot) = placed.get_mut(storage) {
                slot.display_index = display_index;
                slot.line = lookup.get(display_index).copied().unwrap_or(0);
            }
        }

        for (line_index, line) in lines.iter_mut().enumerate() {
            let line_offset = line_offsets.get(line_index).copied().unwrap_or(0);
            let extent = (content_main, content_cross);
            self.place_line(line, line_offset, extent, &display_order, states, &mut placed);
        }

        let content_size = physical_size(self.orientation, content_main, content_cross);
        debug!(
            target: "flexbox::engine",
            "[FLEX-ENGINE] content={}x{} lines={}",
            content_size.width,
            content_size.height,
            lines.len()
        );
        FlexLayout {
            lines,
            display_order,
            index_to_line: lookup,
            items: placed,
            size: Size::new(
                content_size.width.saturating_add(self.padding.horizontal()),
                content_size.height.saturating_add(self.padding.vertical()),
            ),
            content_size,
            padding: self.padding,
            content_main,
        }
    }

    /// Position the visible items of one line and record the line's bounds.
    fn place_line(
        &self,
        line: &mut FlexLine,
        line_offset: i32,
        (content_main, content_cross): (i32, i32),
        display_order: &[usize],
        states: &[ItemState],
        placed: &mut [ItemLayout],
    ) {
        let divider = self.container.main_divider;
        let spacing = distribute_slack(
            Packing::from(self.container.justify_content),
            content_main - line.main_size,
            line.visible_item_count,
        );
        let mut cursor = spacing.leading();
        for (position, storage) in self.visible_in(line, display_order).into_iter().enumerate() {
            let (Some(item), Some(state), Some(slot)) = (
                self.items.get(storage),
                states.get(storage),
                placed.get_mut(storage),
            ) else {
                continue;
            };
            cursor = cursor
                .saturating_add(divider.before(position))
                .saturating_add(state.margins.main_lead);
            let main_offset = cursor;
            cursor = cursor
                .saturating_add(state.main)
                .saturating_add(state.margins.main_trail)
                .saturating_add(spacing.after(position));

            let cross_item = CrossItem {
                cross_size: state.cross,
                margin_lead: state.margins.cross_lead,
                margin_trail: state.margins.cross_trail,
                baseline: self.cross_metrics(item, state).baseline,
            };
            let cross_offset = line_offset.saturating_add(cross_offset_in_line(
                self.alignment(item, state),
                line.cross_size,
                line.max_baseline,
                cross_item,
            ));
            slot.main_size = state.main;
            slot.cross_size = state.cross;
            slot.frame = map_box(
                self.orientation,
                content_main,
                content_cross,
                LogicalBox {
                    main_offset,
                    cross_offset,
                    main_size: state.main,
                    cross_size: state.cross,
                },
            );
        }
        line.bounds = map_box(
            self.orientation,
            content_main,
            content_cross,
            LogicalBox {
                main_offset: 0,
                cross_offset: line_offset,
                main_size: content_main,
                cross_size: line.cross_size,
            },
        );
    }

    /// Stretch items aligned with `stretch` whose cross size is not exact, measuring each once
    /// more with both sizes exact.
    fn stretch_items<M: Measurer>(
        &self,
        lines: &[FlexLine],
        display_order: &[usize],
        states: &mut [ItemState],
        measurer: &mut M,
    ) {
        for line in lines {
            for storage in self.visible_in(line, display_order) {
                let (Some(item), Some(state)) = (self.items.get(storage), states.get_mut(storage))
                else {
                    continue;
                };
                if !self.stretches(item, state) {
                    continue;
                }
                let cross = stretched_cross_size(
                    line.cross_size,
                    state.margins.cross_lead,
                    state.margins.cross_trail,
                    item.min_cross_size,
                    item.max_cross_size,
                );
                let measured = measurer.measure(
                    storage,
                    item,
                    MeasureSpec::Exact(state.main),
                    MeasureSpec::Exact(cross),
                );
                // The line fixes the cross size; only the baseline is taken from the host.
                state.cross = cross;
                state.baseline = measured.baseline;
            }
        }
    }
}

/// Measure constraint for one axis of a child, from its size request and the container's inner constraint
/// on that axis.
fn child_spec(request: SizeRequest, parent: MeasureSpec, margins: i32) -> MeasureSpec {
    match request {
        SizeRequest::Exact(size) => MeasureSpec::Exact(size.max(0)),
        SizeRequest::Fill => parent.deflate(margins),
        SizeRequest::Content => parent
            .size()
            .map_or(MeasureSpec::Unspecified, |size| {
                MeasureSpec::AtMost((size - margins).max(0))
            }),
    }
}
