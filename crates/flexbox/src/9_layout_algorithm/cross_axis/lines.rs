//! Line cross sizes and align-content.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-cross-line>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use log::debug;

use super::baseline::BaselineMetrics;
use crate::chapter5::{Divider, FlexWrap};
use crate::chapter8::{AlignContent, Packing, distribute_slack};
use crate::chapter9::FlexLine;

/// Cross-axis contribution of one visible item to its line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ItemCrossMetrics {
    /// Cross size plus cross-axis margins.
    pub outer_cross: i32,
    /// Present only when the item takes part in baseline alignment.
    pub baseline: Option<BaselineMetrics>,
}

/// Cross size and max baseline of a line: `(cross, max_baseline)`.
///
/// The cross size is the larger of the tallest outer cross size and the tallest
/// ascent + descent pair among baseline-aligned items.
pub fn line_cross_extent<I>(metrics: I) -> (i32, i32)
where
    I: IntoIterator<Item = ItemCrossMetrics>,
{
    let mut outer = 0;
    let mut max_ascent = 0;
    let mut max_descent = 0;
    for item in metrics {
        outer = outer.max(item.outer_cross);
        if let Some(baseline) = item.baseline {
            max_ascent = max_ascent.max(baseline.ascent);
            max_descent = max_descent.max(baseline.descent);
        }
    }
    (outer.max(max_ascent.saturating_add(max_descent)), max_ascent)
}

/// Container-level inputs for sizing and placing lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LineCrossParams {
    /// Inner cross size when the container's cross dimension is exact.
    pub exact_inner_cross: Option<i32>,
    pub wrap: FlexWrap,
    pub align_content: AlignContent,
    pub divider: Divider,
}

/// Sum of line cross sizes plus the cross dividers around them.
pub fn lines_cross_total(lines: &[FlexLine], divider: Divider) -> i32 {
    lines
        .iter()
        .fold(divider.total(lines.len()), |total, line| total.saturating_add(line.cross_size))
}

/// Resize lines against an exact container cross size.
///
/// A single-line container's line takes the whole inner cross size. With
/// `align-content: stretch` positive free space is split evenly and the leftover units go to
/// the earliest lines.
pub fn stretch_lines(params: &LineCrossParams, lines: &mut [FlexLine]) {
    let Some(inner) = params.exact_inner_cross else {
        return;
    };
    if lines.is_empty() {
        return;
    }
    if !params.wrap.is_multi_line() {
        let cross = (inner - params.divider.total(lines.len())).max(0);
        for line in lines.iter_mut() {
            line.cross_size = cross;
        }
        return;
    }
    if params.align_content != AlignContent::Stretch {
        return;
    }
    let free = inner - lines_cross_total(lines, params.divider);
    if free <= 0 {
        return;
    }
    let count = lines.len() as i32;
    let share = free / count;
    let mut remainder = free % count;
    for line in lines.iter_mut() {
        line.cross_size = line.cross_size.saturating_add(share);
        if remainder > 0 {
            line.cross_size = line.cross_size.saturating_add(1);
            remainder -= 1;
        }
    }
    debug!(
        target: "flexbox::cross",
        "[ALIGN-CONTENT] stretch free={} lines={:?}",
        free,
        lines.iter().map(|line| line.cross_size).collect::<Vec<_>>()
    );
}

/// Logical cross-start offset of each line inside a content box `container_cross` deep.
pub fn line_cross_offsets(
    align_content: AlignContent,
    divider: Divider,
    lines: &[FlexLine],
    container_cross: i32,
) -> Vec<i32> {
    let slack = container_cross - lines_cross_total(lines, divider);
    let spacing = distribute_slack(Packing::from(align_content), slack, lines.len());
    let mut cursor = spacing.leading().saturating_add(divider.leading());
    let mut offsets = Vec::with_capacity(lines.len());
    for (position, line) in lines.iter().enumerate() {
        offsets.push(cursor);
        cursor = cursor
            .saturating_add(line.cross_size)
            .saturating_add(spacing.after(position));
        if position + 1 < lines.len() {
            cursor = cursor.saturating_add(divider.middle());
        }
    }
    debug!(
        target: "flexbox::cross",
        "[ALIGN-CONTENT] {:?} slack={} offsets={:?}",
        align_content,
        slack,
        offsets
    );
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter5::DividerVisibility;

    fn lines_with(crosses: &[i32]) -> Vec<FlexLine> {
        crosses
            .iter()
            .map(|&cross_size| FlexLine {
                cross_size,
                ..FlexLine::default()
            })
            .collect()
    }

    fn params(exact: Option<i32>, wrap: FlexWrap, align_content: AlignContent) -> LineCrossParams {
        LineCrossParams {
            exact_inner_cross: exact,
            wrap,
            align_content,
            divider: Divider::NONE,
        }
    }

    #[test]
    /// # Panics
    /// Panics if baseline pairs do not grow the line beyond the tallest item.
    fn extent_includes_baseline_pairs() {
        let metrics = [
            ItemCrossMetrics {
                outer_cross: 30,
                baseline: Some(BaselineMetrics {
                    ascent: 25,
                    descent: 5,
                }),
            },
            ItemCrossMetrics {
                outer_cross: 30,
                baseline: Some(BaselineMetrics {
                    ascent: 5,
                    descent: 25,
                }),
            },
            ItemCrossMetrics {
                outer_cross: 40,
                baseline: None,
            },
        ];
        assert_eq!(line_cross_extent(metrics), (50, 25));
        assert_eq!(line_cross_extent([]), (0, 0));
    }

    #[test]
    /// # Panics
    /// Panics if stretch does not hand remainders to the earliest lines.
    fn stretch_splits_free_space() {
        let mut lines = lines_with(&[0, 0, 0]);
        stretch_lines(
            &params(Some(1000), FlexWrap::Wrap, AlignContent::Stretch),
            &mut lines,
        );
        let sizes: Vec<i32> = lines.iter().map(|line| line.cross_size).collect();
        assert_eq!(sizes, vec![334, 333, 333]);
    }

    #[test]
    /// # Panics
    /// Panics if stretch applies without an exact size or with another align-content.
    fn stretch_needs_exact_and_stretch() {
        let mut lines = lines_with(&[10, 20]);
        stretch_lines(
            &params(None, FlexWrap::Wrap, AlignContent::Stretch),
            &mut lines,
        );
        stretch_lines(
            &params(Some(100), FlexWrap::Wrap, AlignContent::Center),
            &mut lines,
        );
        assert_eq!(lines_cross_total(&lines, Divider::NONE), 30);
    }

    #[test]
    /// # Panics
    /// Panics if a single-line container's line does not fill the cross size.
    fn single_line_takes_inner_cross() {
        let mut lines = lines_with(&[10]);
        let mut single = params(Some(80), FlexWrap::NoWrap, AlignContent::FlexStart);
        single.divider = Divider::new(5, DividerVisibility::ALL);
        stretch_lines(&single, &mut lines);
        assert_eq!(lines[0].cross_size, 70);
    }

    #[test]
    /// # Panics
    /// Panics if line offsets ignore packing or dividers.
    fn offsets_follow_align_content() {
        let lines = lines_with(&[10, 20]);
        assert_eq!(
            line_cross_offsets(AlignContent::FlexStart, Divider::NONE, &lines, 100),
            vec![0, 10]
        );
        assert_eq!(
            line_cross_offsets(AlignContent::FlexEnd, Divider::NONE, &lines, 100),
            vec![70, 80]
        );
        assert_eq!(
            line_cross_offsets(AlignContent::SpaceBetween, Divider::NONE, &lines, 100),
            vec![0, 80]
        );
        let divided = Divider::new(4, DividerVisibility::ALL);
        assert_eq!(
            line_cross_offsets(AlignContent::FlexStart, divided, &lines, 100),
            vec![4, 18]
        );
    }
}
