//! Axis resolution and ordering utilities
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::FlexError;
use crate::chapter5::{FlexDirection, FlexWrap};
use crate::chapter6::FlexItem;

/// Physical axis of the container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalAxis {
    Horizontal,
    Vertical,
}

impl fmt::Display for PhysicalAxis {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => formatter.write_str("horizontal"),
            Self::Vertical => formatter.write_str("vertical"),
        }
    }
}

/// Resolved orientation of a flex container: which physical axis is main, and which axes run
/// from their high-coordinate edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Orientation {
    pub main_axis: PhysicalAxis,
    /// Main-start is the right (row) or bottom (column) edge.
    pub main_reversed: bool,
    /// Cross-start is the bottom (row) or right (column) edge.
    pub cross_reversed: bool,
}

impl Orientation {
    #[inline]
    pub const fn main_is_horizontal(self) -> bool {
        matches!(self.main_axis, PhysicalAxis::Horizontal)
    }

    #[inline]
    pub const fn cross_axis(self) -> PhysicalAxis {
        match self.main_axis {
            PhysicalAxis::Horizontal => PhysicalAxis::Vertical,
            PhysicalAxis::Vertical => PhysicalAxis::Horizontal,
        }
    }
}

/// Resolve main/cross axes and reversal from flex-direction and flex-wrap.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
pub const fn resolve_orientation(direction: FlexDirection, wrap: FlexWrap) -> Orientation {
    let cross_reversed = matches!(wrap, FlexWrap::WrapReverse);
    match direction {
        FlexDirection::Row => Orientation {
            main_axis: PhysicalAxis::Horizontal,
            main_reversed: false,
            cross_reversed,
        },
        FlexDirection::RowReverse => Orientation {
            main_axis: PhysicalAxis::Horizontal,
            main_reversed: true,
            cross_reversed,
        },
        FlexDirection::Column => Orientation {
            main_axis: PhysicalAxis::Vertical,
            main_reversed: false,
            cross_reversed,
        },
        FlexDirection::ColumnReverse => Orientation {
            main_axis: PhysicalAxis::Vertical,
            main_reversed: true,
            cross_reversed,
        },
    }
}

/// Stable ordering key: `(order, original_index)`.
type OrderKey = (i32, usize);

/// Compute a stable ordering key for a flex item.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-order>
pub const fn order_key(order: i32, original_index: usize) -> OrderKey {
    (order, original_index)
}

/// Permutation of storage indices into display order.
///
/// `result[display_position] == storage_index`. Ties keep storage order.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#order-property>
pub fn resolve_display_order(items: &[FlexItem]) -> Vec<usize> {
    sort_indices_by_order(items.iter().map(|item| item.order))
}

/// Same as [`resolve_display_order`] for raw host order values.
///
/// # Errors
/// Returns [`FlexError::InvalidOrder`] for the first value that is not finite or does not fit
/// in an `i32`.
pub fn resolve_display_order_checked(orders: &[f64]) -> Result<Vec<usize>, FlexError> {
    let checked = orders
        .iter()
        .enumerate()
        .map(|(index, &value)| order_from_raw(index, value))
        .collect::<Result<Vec<i32>, FlexError>>()?;
    Ok(sort_indices_by_order(checked))
}

/// Convert a raw host order value to the integer key used for sorting.
///
/// # Errors
/// Returns [`FlexError::InvalidOrder`] when `value` is not finite or is outside the `i32` range.
pub fn order_from_raw(index: usize, value: f64) -> Result<i32, FlexError> {
    if !value.is_finite() || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(FlexError::InvalidOrder { index, value });
    }
    Ok(value.trunc() as i32)
}

fn sort_indices_by_order(orders: impl IntoIterator<Item = i32>) -> Vec<usize> {
    let mut keyed: Vec<OrderKey> = orders
        .into_iter()
        .enumerate()
        .map(|(original_index, order)| order_key(order, original_index))
        .collect();
    keyed.sort_unstable();
    keyed.into_iter().map(|(_, index)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if orientation does not match the expected mapping per direction.
    fn orientation_per_direction() {
        let row = resolve_orientation(FlexDirection::Row, FlexWrap::NoWrap);
        assert!(row.main_is_horizontal());
        assert!(!row.main_reversed);
        assert!(!row.cross_reversed);
        let col_rev = resolve_orientation(FlexDirection::ColumnReverse, FlexWrap::WrapReverse);
        assert_eq!(col_rev.main_axis, PhysicalAxis::Vertical);
        assert_eq!(col_rev.cross_axis(), PhysicalAxis::Horizontal);
        assert!(col_rev.main_reversed);
        assert!(col_rev.cross_reversed);
        let row_rev = resolve_orientation(FlexDirection::RowReverse, FlexWrap::Wrap);
        assert!(row_rev.main_reversed);
        assert!(!row_rev.cross_reversed);
    }

    #[test]
    /// # Panics
    /// Panics if stable order sorting does not preserve input order for ties.
    fn stable_order_sorting() {
        let items: Vec<FlexItem> = [1, 0, 1, 0]
            .into_iter()
            .map(|order| FlexItem {
                order,
                ..FlexItem::default()
            })
            .collect();
        assert_eq!(resolve_display_order(&items), vec![1, 3, 0, 2]);
    }

    #[test]
    /// # Panics
    /// Panics if negative orders are not sorted ahead of positive ones.
    fn negative_orders_lead() {
        let items: Vec<FlexItem> = [2, -1, 0, 1]
            .into_iter()
            .map(|order| FlexItem {
                order,
                ..FlexItem::default()
            })
            .collect();
        assert_eq!(resolve_display_order(&items), vec![1, 2, 3, 0]);
    }

    #[test]
    /// # Panics
    /// Panics if non-finite raw orders are accepted.
    fn checked_order_rejects_non_finite() {
        assert!(matches!(
            resolve_display_order_checked(&[0.0, f64::NAN]),
            Err(FlexError::InvalidOrder { index: 1, .. })
        ));
        assert!(matches!(
            resolve_display_order_checked(&[f64::INFINITY]),
            Err(FlexError::InvalidOrder { index: 0, .. })
        ));
        assert_eq!(
            resolve_display_order_checked(&[2.0, -1.0, 0.0, 1.0]),
            Ok(vec![1, 2, 3, 0])
        );
    }
}
