//! Ideal gas Carnot cycle solver.
//!
//! [`solve`] maps seven scalar [`CycleInputs`] to the four [`StatePoint`]s of a
//! Carnot cycle and the derived heat, work, efficiency, and entropy values in a
//! [`CycleResult`]. Invalid inputs, or inputs that overflow floating point,
//! produce a [`CycleError`] and never a partial result.
//!
//! The [`path`] module samples the process curves between the solved states
//! for P-V and T-S diagrams.
//!
//! # Example
//!
//! ```
//! use carnot_cycle::{CycleInputs, solve};
//! use uom::si::{energy::joule, ratio::ratio};
//!
//! let result = solve(&CycleInputs::default()).unwrap();
//!
//! assert!((result.work.get::<joule>() - 50_000.0).abs() < 1e-6);
//! assert!((result.efficiency.get::<ratio>() - 0.5).abs() < 1e-12);
//! ```

mod error;
mod inputs;
mod result;
mod solve;
mod state;

pub mod path;

pub use error::{CycleError, ErrorKind, Parameter};
pub use inputs::CycleInputs;
pub use result::{CycleResult, CycleStates, EntropyRange, Leg, Process, ProcessKind};
pub use solve::solve;
pub use state::StatePoint;
