//! Logical (main, cross) geometry and its mapping onto physical x/y.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//!
//! Every stage before this one works in logical space where main-start and cross-start are
//! offset zero. Direction and wrap reversal are applied only here.

use serde::{Deserialize, Serialize};

use crate::chapter6::Margins;
use crate::chapter7::Orientation;

/// Physical rectangle in layout units.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Same rectangle moved by `(dx, dy)`.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}

/// Physical size in layout units.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A box positioned from main-start and cross-start.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LogicalBox {
    pub main_offset: i32,
    pub cross_offset: i32,
    pub main_size: i32,
    pub cross_size: i32,
}

/// Margins relative to the flow: `lead` is on the main-start / cross-start side.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct LogicalMargins {
    pub main_lead: i32,
    pub main_trail: i32,
    pub cross_lead: i32,
    pub cross_trail: i32,
}

/// Translate physical-side margins into flow-relative ones.
#[inline]
pub const fn logical_margins(orientation: Orientation, margins: Margins) -> LogicalMargins {
    let (main_lead, main_trail) = if orientation.main_reversed {
        (margins.main_end, margins.main_start)
    } else {
        (margins.main_start, margins.main_end)
    };
    let (cross_lead, cross_trail) = if orientation.cross_reversed {
        (margins.cross_end, margins.cross_start)
    } else {
        (margins.cross_start, margins.cross_end)
    };
    LogicalMargins {
        main_lead,
        main_trail,
        cross_lead,
        cross_trail,
    }
}

/// Map a logical box inside a `main_extent` × `cross_extent` content box to a physical
/// rectangle relative to the same content box.
pub const fn map_box(
    orientation: Orientation,
    main_extent: i32,
    cross_extent: i32,
    logical: LogicalBox,
) -> Rect {
    let main = if orientation.main_reversed {
        main_extent
            .saturating_sub(logical.main_offset)
            .saturating_sub(logical.main_size)
    } else {
        logical.main_offset
    };
    let cross = if orientation.cross_reversed {
        cross_extent
            .saturating_sub(logical.cross_offset)
            .saturating_sub(logical.cross_size)
    } else {
        logical.cross_offset
    };
    if orientation.main_is_horizontal() {
        Rect::new(main, cross, logical.main_size, logical.cross_size)
    } else {
        Rect::new(cross, main, logical.cross_size, logical.main_size)
    }
}

/// Physical size for a main × cross pair.
#[inline]
pub const fn physical_size(orientation: Orientation, main: i32, cross: i32) -> Size {
    if orientation.main_is_horizontal() {
        Size::new(main, cross)
    } else {
        Size::new(cross, main)
    }
}

/// Split a physical `(width, height)` pair into `(main, cross)`.
#[inline]
pub fn to_logical<T: Copy>(orientation: Orientation, width: T, height: T) -> (T, T) {
    if orientation.main_is_horizontal() {
        (width, height)
    } else {
        (height, width)
    }
}
