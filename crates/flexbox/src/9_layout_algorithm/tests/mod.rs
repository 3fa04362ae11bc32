//! Tests for the flex layout algorithm.

use crate::*;

mod coordinate_tests;

/// Route `log` output through the test harness.
#[inline]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Items with exact main sizes and a shared exact cross size, plus a matching measurer.
#[inline]
pub fn fixed_items(mains: &[i32], cross: i32) -> (Vec<FlexItem>, IntrinsicMeasurer) {
    let items = mains
        .iter()
        .map(|&main| FlexItem::fixed(main, cross))
        .collect();
    let measurer = IntrinsicMeasurer::new(
        mains
            .iter()
            .map(|&main| Measurement::new(main, cross))
            .collect(),
    );
    (items, measurer)
}

/// Main sizes of a layout's items, by storage index.
#[inline]
pub fn main_sizes(layout: &FlexLayout) -> Vec<i32> {
    layout.items.iter().map(|item| item.main_size).collect()
}

/// `(x, y)` of every item's frame, by storage index.
#[inline]
pub fn origins(layout: &FlexLayout) -> Vec<(i32, i32)> {
    layout
        .items
        .iter()
        .map(|item| (item.frame.x, item.frame.y))
        .collect()
}

/// Measurer that records how often each item is measured and with which constraints.
pub struct CountingMeasurer {
    inner: IntrinsicMeasurer,
    per_item: Vec<usize>,
    last_specs: Vec<Option<(MeasureSpec, MeasureSpec)>>,
}

impl CountingMeasurer {
    #[inline]
    pub fn new(intrinsic: Vec<Measurement>) -> Self {
        let count = intrinsic.len();
        Self {
            inner: IntrinsicMeasurer::new(intrinsic),
            per_item: vec![0; count],
            last_specs: vec![None; count],
        }
    }

    #[inline]
    pub fn calls_for(&self, index: usize) -> usize {
        self.per_item.get(index).copied().unwrap_or(0)
    }

    /// `(main, cross)` constraints of the most recent call for `index`.
    #[inline]
    pub fn last_specs_for(&self, index: usize) -> Option<(MeasureSpec, MeasureSpec)> {
        self.last_specs.get(index).copied().flatten()
    }

    #[inline]
    pub fn total_calls(&self) -> usize {
        self.inner.calls()
    }
}

impl Measurer for CountingMeasurer {
    fn measure(
        &mut self,
        index: usize,
        item: &FlexItem,
        main: MeasureSpec,
        cross: MeasureSpec,
    ) -> Measurement {
        if let Some(count) = self.per_item.get_mut(index) {
            *count += 1;
        }
        if let Some(last) = self.last_specs.get_mut(index) {
            *last = Some((main, cross));
        }
        self.inner.measure(index, item, main, cross)
    }
}
