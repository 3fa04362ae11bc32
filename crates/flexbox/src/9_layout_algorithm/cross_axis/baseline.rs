//! Baseline alignment support for flex items.

/// Extent of an item above and below its baseline, cross-axis margins included.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BaselineMetrics {
    pub ascent: i32,
    pub descent: i32,
}

/// Compute ascent/descent for an item whose baseline sits `baseline` units from its
/// cross-start edge.
#[inline]
pub fn baseline_metrics(
    cross_size: i32,
    baseline: i32,
    margin_lead: i32,
    margin_trail: i32,
) -> BaselineMetrics {
    let baseline = baseline.clamp(0, cross_size.max(0));
    BaselineMetrics {
        ascent: baseline.saturating_add(margin_lead),
        descent: (cross_size - baseline).saturating_add(margin_trail),
    }
}

/// Distance from the logical cross-start edge to the baseline. When the cross axis is reversed
/// the baseline is measured from the opposite edge.
#[inline]
pub const fn logical_baseline(cross_size: i32, baseline: i32, cross_reversed: bool) -> i32 {
    if cross_reversed {
        cross_size - baseline
    } else {
        baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if margins are not folded into ascent and descent.
    fn metrics_include_margins() {
        let metrics = baseline_metrics(40, 30, 5, 2);
        assert_eq!(
            metrics,
            BaselineMetrics {
                ascent: 35,
                descent: 12
            }
        );
    }

    #[test]
    /// # Panics
    /// Panics if a reversed cross axis does not measure from the far edge.
    fn reversed_baseline_measures_from_end() {
        assert_eq!(logical_baseline(40, 30, false), 30);
        assert_eq!(logical_baseline(40, 30, true), 10);
    }
}
