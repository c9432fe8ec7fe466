//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Type-level numeric constraints.
//! - [`coolant`]: Constant thermophysical properties of the supported coolants.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod coolant;
pub mod units;
