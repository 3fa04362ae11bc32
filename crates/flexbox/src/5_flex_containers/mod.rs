//! Flex Containers: container properties and enums
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

mod dividers;

pub use dividers::{Divider, DividerVisibility};

use serde::{Deserialize, Serialize};

use crate::chapter8::{AlignContent, AlignItems, JustifyContent};

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    /// True for `wrap` and `wrap-reverse`.
    #[inline]
    pub const fn is_multi_line(self) -> bool {
        !matches!(self, Self::NoWrap)
    }
}

/// Physical padding of the container, in layout units.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    /// Same inset on every edge.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Left + right.
    #[inline]
    pub const fn horizontal(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    #[inline]
    pub const fn vertical(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Negative insets are treated as zero.
    #[inline]
    pub const fn non_negative(self) -> Self {
        Self {
            left: non_negative(self.left),
            top: non_negative(self.top),
            right: non_negative(self.right),
            bottom: non_negative(self.bottom),
        }
    }
}

const fn non_negative(value: i32) -> i32 {
    if value < 0 { 0 } else { value }
}

/// Container-level configuration for one layout pass.
///
/// Defaults follow the host toolkit: row, no wrap, everything packed at flex-start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlexContainer {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    /// Maximum number of lines; items past the cap are appended to the last line.
    pub max_line: Option<usize>,
    pub padding: EdgeInsets,
    /// Divider drawn between items along the main axis.
    pub main_divider: Divider,
    /// Divider drawn between lines along the cross axis.
    pub cross_divider: Divider,
}
