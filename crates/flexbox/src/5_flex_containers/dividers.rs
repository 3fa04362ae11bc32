//! Divider decorations between items and between lines.
//!
//! Dividers only contribute length; drawing them is the host's job.

use serde::{Deserialize, Serialize};

/// Where a divider is shown.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerVisibility {
    /// Before the first visible item (main axis) or the first line (cross axis).
    pub beginning: bool,
    /// Between adjacent visible items or adjacent lines.
    pub middle: bool,
    /// After the last visible item or the last line.
    pub end: bool,
}

impl DividerVisibility {
    pub const ALL: Self = Self {
        beginning: true,
        middle: true,
        end: true,
    };
    pub const MIDDLE: Self = Self {
        beginning: false,
        middle: true,
        end: false,
    };
}

/// A divider of a fixed length along one axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Divider {
    pub length: i32,
    pub show: DividerVisibility,
}

impl Divider {
    pub const NONE: Self = Self {
        length: 0,
        show: DividerVisibility {
            beginning: false,
            middle: false,
            end: false,
        },
    };

    /// Divider of `length` shown at the given positions.
    #[inline]
    pub const fn new(length: i32, show: DividerVisibility) -> Self {
        Self { length, show }
    }

    const fn length_if(self, shown: bool) -> i32 {
        if shown && self.length > 0 {
            self.length
        } else {
            0
        }
    }

    /// Length before the first entry.
    #[inline]
    pub const fn leading(self) -> i32 {
        self.length_if(self.show.beginning)
    }

    /// Length between two adjacent entries.
    #[inline]
    pub const fn middle(self) -> i32 {
        self.length_if(self.show.middle)
    }

    /// Length after the last entry.
    #[inline]
    pub const fn trailing(self) -> i32 {
        self.length_if(self.show.end)
    }

    /// Length before the entry at `position` among `count` visible entries.
    #[inline]
    pub const fn before(self, position: usize) -> i32 {
        if position == 0 {
            self.leading()
        } else {
            self.middle()
        }
    }

    /// Total decoration length for `count` visible entries.
    #[inline]
    pub const fn total(self, count: usize) -> i32 {
        if count == 0 {
            return 0;
        }
        self.leading()
            .saturating_add(self.trailing())
            .saturating_add(self.middle().saturating_mul(count as i32 - 1))
    }
}
