use carnot_thermo::units::Entropy;
use uom::si::f64::{Energy, Ratio};

use crate::StatePoint;

/// The solved Carnot cycle.
///
/// Every field is finite and consistent with the inputs it was solved from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CycleResult {
    pub states: CycleStates,

    /// Heat absorbed from the hot reservoir, echoed from the inputs.
    pub heat_high: Energy,

    /// Magnitude of the heat rejected to the cold reservoir.
    pub heat_low: Energy,

    /// Net work per cycle, `Q_H − Q_L`.
    pub work: Energy,

    /// Thermal efficiency, `W / Q_H`.
    pub efficiency: Ratio,

    /// Carnot efficiency of the reservoir pair, `1 − T_L / T_H`.
    pub theoretical_efficiency: Ratio,

    pub entropy: EntropyRange,
}

/// The four state points, in cycle order.
///
/// - `s1 → s2`: isothermal expansion at `T_H`
/// - `s2 → s3`: adiabatic expansion from `T_H` to `T_L`
/// - `s3 → s4`: isothermal compression at `T_L`
/// - `s4 → s1`: adiabatic compression from `T_L` back to `T_H`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CycleStates {
    pub s1: StatePoint,
    pub s2: StatePoint,
    pub s3: StatePoint,
    pub s4: StatePoint,
}

impl CycleStates {
    /// Returns the states as an array, `[s1, s2, s3, s4]`.
    #[must_use]
    pub fn to_array(&self) -> [StatePoint; 4] {
        [self.s1, self.s2, self.s3, self.s4]
    }
}

/// Entropy values bounding the cycle on a T-S diagram.
///
/// Entropy is measured relative to states 1 and 4, so `low` is always zero and
/// `high` is the entropy gained across the hot isotherm, `Q_H / T_H`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct EntropyRange {
    pub low: Entropy,
    pub high: Entropy,
}

/// Whether a process holds temperature or heat fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    Isothermal,
    Adiabatic,
}

/// The four processes of a Carnot cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    IsothermalExpansion,
    AdiabaticExpansion,
    IsothermalCompression,
    AdiabaticCompression,
}

impl Process {
    /// All processes in cycle order, starting from state 1.
    pub const ALL: [Process; 4] = [
        Process::IsothermalExpansion,
        Process::AdiabaticExpansion,
        Process::IsothermalCompression,
        Process::AdiabaticCompression,
    ];

    #[must_use]
    pub fn kind(self) -> ProcessKind {
        match self {
            Process::IsothermalExpansion | Process::IsothermalCompression => {
                ProcessKind::Isothermal
            }
            Process::AdiabaticExpansion | Process::AdiabaticCompression => ProcessKind::Adiabatic,
        }
    }

    /// Returns a legend label such as `"1→2 isothermal expansion"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Process::IsothermalExpansion => "1→2 isothermal expansion",
            Process::AdiabaticExpansion => "2→3 adiabatic expansion",
            Process::IsothermalCompression => "3→4 isothermal compression",
            Process::AdiabaticCompression => "4→1 adiabatic compression",
        }
    }
}

/// A single process between two adjacent state points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub process: Process,
    pub start: StatePoint,
    pub end: StatePoint,
}

impl CycleResult {
    /// Returns the four legs of the cycle in order, closing back on state 1.
    #[must_use]
    pub fn legs(&self) -> [Leg; 4] {
        let states = self.states.to_array();
        std::array::from_fn(|i| Leg {
            process: Process::ALL[i],
            start: states[i],
            end: states[(i + 1) % 4],
        })
    }
}
