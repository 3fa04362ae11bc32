//! Structural errors that abort a layout pass.
//!
//! Anything else (negative flex factors, `min > max`, baseline requests without a
//! baseline) is clamped in place and never reaches the caller.

use thiserror::Error;

use crate::PhysicalAxis;

/// Errors returned by the order resolver and the layout engine.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlexError {
    /// An `order` value supplied by the host is NaN, infinite, or outside the `i32` range.
    #[error("item {index} has an invalid order value ({value})")]
    InvalidOrder {
        /// Storage index of the offending item.
        index: usize,
        /// The raw value as supplied.
        value: f64,
    },
    /// A container constraint carried a negative size.
    #[error("negative {axis} constraint ({value})")]
    InvalidConstraint {
        /// Physical axis of the constraint.
        axis: PhysicalAxis,
        /// The rejected size.
        value: i32,
    },
}
