//! Flex Items: per-item properties and the measurement boundary
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-items>

mod measurement;

pub use measurement::{IntrinsicMeasurer, MeasureSpec, Measurement, Measurer};

use log::trace;
use serde::{Deserialize, Serialize};

/// Upper bound used for "no maximum".
pub const UNBOUNDED: i32 = i32::MAX;

/// Requested size along one axis.
///
/// The host maps its own size sentinels onto `Fill` and `Content`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRequest {
    /// A definite size.
    Exact(i32),
    /// Fill the space the container offers on this axis.
    Fill,
    /// Size to content.
    #[default]
    Content,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignSelf {
    /// Defer to the container's `align_items`.
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

/// Item margins, expressed per axis.
///
/// `*_start` is the low-coordinate side of that axis (left for a horizontal axis, top for a
/// vertical one) regardless of direction or wrap reversal.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub main_start: i32,
    pub main_end: i32,
    pub cross_start: i32,
    pub cross_end: i32,
}

impl Margins {
    /// Same margin on all four sides.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self {
            main_start: value,
            main_end: value,
            cross_start: value,
            cross_end: value,
        }
    }

    #[inline]
    pub const fn main_total(self) -> i32 {
        self.main_start.saturating_add(self.main_end)
    }

    #[inline]
    pub const fn cross_total(self) -> i32 {
        self.cross_start.saturating_add(self.cross_end)
    }
}

/// One element to lay out.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexItem {
    /// Reordering key; ties keep storage order.
    pub order: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    /// Fraction of the container's inner main size used as the flex basis.
    pub flex_basis_percent: Option<f32>,
    pub align_self: AlignSelf,
    pub min_main_size: i32,
    pub max_main_size: i32,
    pub min_cross_size: i32,
    pub max_cross_size: i32,
    pub main_size: SizeRequest,
    pub cross_size: SizeRequest,
    pub margins: Margins,
    /// Force a line break before this item (only when wrapping is enabled).
    pub wrap_before: bool,
    /// Excluded from sizing and geometry but keeps its index.
    pub is_gone: bool,
}

impl Default for FlexItem {
    fn default() -> Self {
        Self {
            order: 1,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis_percent: None,
            align_self: AlignSelf::Auto,
            min_main_size: 0,
            max_main_size: UNBOUNDED,
            min_cross_size: 0,
            max_cross_size: UNBOUNDED,
            main_size: SizeRequest::Content,
            cross_size: SizeRequest::Content,
            margins: Margins::default(),
            wrap_before: false,
            is_gone: false,
        }
    }
}

impl FlexItem {
    /// Item with exact main and cross sizes and default flex properties.
    #[inline]
    pub fn fixed(main: i32, cross: i32) -> Self {
        Self {
            main_size: SizeRequest::Exact(main),
            cross_size: SizeRequest::Exact(cross),
            ..Self::default()
        }
    }

    /// Map the host's raw basis value (negative means unset) to `flex_basis_percent`.
    #[inline]
    pub fn flex_basis_from_raw(raw: f32) -> Option<f32> {
        (raw.is_finite() && raw >= 0.0).then_some(raw)
    }

    /// Copy with silent clamps applied: negative or NaN factors become 0, negative minimums
    /// become 0, `max < min` is raised to `min`, and an invalid basis percent is dropped.
    pub fn sanitized(&self) -> Self {
        let mut item = *self;
        item.flex_grow = non_negative_factor(item.flex_grow);
        item.flex_shrink = non_negative_factor(item.flex_shrink);
        item.flex_basis_percent = item.flex_basis_percent.and_then(Self::flex_basis_from_raw);
        item.min_main_size = item.min_main_size.max(0);
        item.min_cross_size = item.min_cross_size.max(0);
        if item.max_main_size < item.min_main_size {
            trace!(
                target: "flexbox::items",
                "max_main_size {} below min {}; raising",
                item.max_main_size,
                item.min_main_size
            );
            item.max_main_size = item.min_main_size;
        }
        if item.max_cross_size < item.min_cross_size {
            trace!(
                target: "flexbox::items",
                "max_cross_size {} below min {}; raising",
                item.max_cross_size,
                item.min_cross_size
            );
            item.max_cross_size = item.min_cross_size;
        }
        item
    }

    /// Clamp a main-axis length into `[min_main_size, max_main_size]`.
    #[inline]
    pub fn clamp_main(&self, value: i32) -> i32 {
        value.max(self.min_main_size).min(self.max_main_size)
    }

    /// Clamp a cross-axis length into `[min_cross_size, max_cross_size]`.
    #[inline]
    pub fn clamp_cross(&self, value: i32) -> i32 {
        value.max(self.min_cross_size).min(self.max_cross_size)
    }
}

fn non_negative_factor(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
