//! Measurement boundary between the engine and the host.

use serde::{Deserialize, Serialize};

use super::FlexItem;
use crate::{FlexError, PhysicalAxis};

/// Size constraint passed to the measurer, and to the engine for the container itself.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureSpec {
    Exact(i32),
    AtMost(i32),
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// The bound carried by `Exact`/`AtMost`.
    #[inline]
    pub const fn size(self) -> Option<i32> {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Some(size),
            Self::Unspecified => None,
        }
    }

    /// Resolve a desired size against this constraint.
    #[inline]
    pub fn resolve(self, desired: i32) -> i32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => desired.min(size),
            Self::Unspecified => desired,
        }
    }

    /// Shrink the carried size by `amount`, never below zero.
    #[inline]
    pub fn deflate(self, amount: i32) -> Self {
        match self {
            Self::Exact(size) => Self::Exact((size - amount).max(0)),
            Self::AtMost(size) => Self::AtMost((size - amount).max(0)),
            Self::Unspecified => Self::Unspecified,
        }
    }

    /// Reject negative sizes.
    ///
    /// # Errors
    /// Returns [`FlexError::InvalidConstraint`] when the carried size is negative.
    #[inline]
    pub fn validate(self, axis: PhysicalAxis) -> Result<Self, FlexError> {
        match self.size() {
            Some(value) if value < 0 => Err(FlexError::InvalidConstraint { axis, value }),
            _ => Ok(self),
        }
    }
}

/// Result of measuring one item, in main/cross terms.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurement {
    pub main: i32,
    pub cross: i32,
    /// Distance from the item's cross-start edge to its first baseline, if it has one.
    pub baseline: Option<i32>,
}

impl Measurement {
    #[inline]
    pub const fn new(main: i32, cross: i32) -> Self {
        Self {
            main,
            cross,
            baseline: None,
        }
    }

    #[inline]
    pub const fn with_baseline(self, baseline: i32) -> Self {
        Self {
            baseline: Some(baseline),
            ..self
        }
    }
}

/// Host-side measurement of a single item.
///
/// Must be deterministic for identical inputs within one pass. `index` is the item's storage
/// index in the slice handed to the engine.
pub trait Measurer {
    fn measure(
        &mut self,
        index: usize,
        item: &FlexItem,
        main: MeasureSpec,
        cross: MeasureSpec,
    ) -> Measurement;
}

impl<M: Measurer + ?Sized> Measurer for &mut M {
    #[inline]
    fn measure(
        &mut self,
        index: usize,
        item: &FlexItem,
        main: MeasureSpec,
        cross: MeasureSpec,
    ) -> Measurement {
        (**self).measure(index, item, main, cross)
    }
}

/// Measurer backed by a table of intrinsic sizes, one per storage index.
///
/// `Exact` wins, `AtMost` takes the minimum, `Unspecified` returns the intrinsic size. Items
/// past the end of the table measure as zero.
#[derive(Clone, Debug, Default)]
pub struct IntrinsicMeasurer {
    intrinsic: Vec<Measurement>,
    calls: usize,
}

impl IntrinsicMeasurer {
    #[inline]
    pub const fn new(intrinsic: Vec<Measurement>) -> Self {
        Self {
            intrinsic,
            calls: 0,
        }
    }

    /// Number of `measure` calls answered so far.
    #[inline]
    pub const fn calls(&self) -> usize {
        self.calls
    }
}

impl Measurer for IntrinsicMeasurer {
    fn measure(
        &mut self,
        index: usize,
        _item: &FlexItem,
        main: MeasureSpec,
        cross: MeasureSpec,
    ) -> Measurement {
        self.calls += 1;
        let intrinsic = self.intrinsic.get(index).copied().unwrap_or_default();
        let cross_size = cross.resolve(intrinsic.cross);
        Measurement {
            main: main.resolve(intrinsic.main),
            cross: cross_size,
            baseline: intrinsic.baseline.map(|baseline| baseline.min(cross_size)),
        }
    }
}
