//! Ideal gas relations for Carnot cycle modeling.
//!
//! This crate provides the pieces a cycle solver is assembled from:
//!
//! - [`units`]: quantity aliases that `uom` does not define directly
//! - [`ideal_gas`]: the equation of state `p·V = m·R·T` for a fixed mass of gas
//! - [`process`]: isothermal and adiabatic relations between two states
//! - [`StrictlyPositive`]: a wrapper for values known to be greater than zero

mod strictly_positive;

pub mod ideal_gas;
pub mod process;
pub mod units;

pub use strictly_positive::StrictlyPositive;
