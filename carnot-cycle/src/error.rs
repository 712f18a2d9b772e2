use std::fmt;

use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

/// Errors returned by [`solve`](crate::solve).
///
/// Every variant is terminal: retrying with the same inputs gives the same error.
/// The `Display` message begins with the stable [`code`](CycleError::code) of
/// the rule that failed.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// An input is zero, negative, or NaN, or `gamma` is not greater than one.
    ///
    /// `value` is the offending input in SI base units.
    #[error("non-positive-parameter: `{parameter}` must be {req}, got {value}", req = .parameter.requirement())]
    NonPositiveParameter { parameter: Parameter, value: f64 },

    /// The hot reservoir is not hotter than the cold reservoir.
    #[error(
        "hot-not-greater-than-cold: T_H ({} K) must be greater than T_L ({} K)",
        .temp_high.get::<kelvin>(),
        .temp_low.get::<kelvin>()
    )]
    HotNotGreaterThanCold {
        temp_high: ThermodynamicTemperature,
        temp_low: ThermodynamicTemperature,
    },

    /// The pressure at state 1 is not a finite positive number.
    ///
    /// Usually caused by `m·R·T_H` overflowing for extreme inputs.
    #[error("invalid-initial-pressure: p1 = {} Pa is not a finite positive value", .pressure.get::<pascal>())]
    InvalidInitialPressure { pressure: Pressure },

    /// The isothermal expansion did not produce a finite volume larger than `V1`.
    ///
    /// Occurs when `Q_H` is so small relative to `m·R·T_H` that the expansion
    /// ratio rounds to one, or so large that it overflows.
    #[error(
        "invalid-expansion: v2 = {} m³ must be finite and greater than v1 = {} m³",
        .volume_2.get::<cubic_meter>(),
        .volume_1.get::<cubic_meter>()
    )]
    InvalidExpansion { volume_1: Volume, volume_2: Volume },

    /// A quantity derived after state 2 is not finite.
    ///
    /// `value` is the offending quantity in SI base units.
    #[error("non-finite-result: `{quantity}` evaluated to {value}")]
    NonFiniteResult { quantity: &'static str, value: f64 },

    /// A finite derived quantity breaks an ordering every Carnot cycle obeys.
    ///
    /// `relation` names the ordering that failed; `lhs` and `rhs` are its two
    /// sides in SI base units. Occurs when `γ` is so large that the adiabatic
    /// volume ratio rounds to one, or when the expansion ratio `v2 / v1` is so
    /// close to one that rounding dominates `ln(v3 / v4)`.
    #[error("non-physical-result: expected {relation}, got {lhs} and {rhs}")]
    NonPhysicalResult {
        relation: &'static str,
        lhs: f64,
        rhs: f64,
    },
}

/// Broad classification of a [`CycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input violates a documented precondition.
    Range,
    /// Valid inputs produced a non-finite or non-physical intermediate value.
    Numeric,
}

impl CycleError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CycleError::NonPositiveParameter { .. } | CycleError::HotNotGreaterThanCold { .. } => {
                ErrorKind::Range
            }
            CycleError::InvalidInitialPressure { .. }
            | CycleError::InvalidExpansion { .. }
            | CycleError::NonFiniteResult { .. }
            | CycleError::NonPhysicalResult { .. } => ErrorKind::Numeric,
        }
    }

    /// Returns the stable identifier of the rule that failed.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CycleError::NonPositiveParameter { .. } => "non-positive-parameter",
            CycleError::HotNotGreaterThanCold { .. } => "hot-not-greater-than-cold",
            CycleError::InvalidInitialPressure { .. } => "invalid-initial-pressure",
            CycleError::InvalidExpansion { .. } => "invalid-expansion",
            CycleError::NonFiniteResult { .. } => "non-finite-result",
            CycleError::NonPhysicalResult { .. } => "non-physical-result",
        }
    }
}

/// Names one of the [`CycleInputs`](crate::CycleInputs) fields.
///
/// Variants are listed in the order the solver validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    TempHigh,
    TempLow,
    Mass,
    GasConstant,
    Volume,
    HeatHigh,
    Gamma,
}

impl Parameter {
    /// Returns the field name, as used in config files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Parameter::TempHigh => "temp_high",
            Parameter::TempLow => "temp_low",
            Parameter::Mass => "mass",
            Parameter::GasConstant => "gas_constant",
            Parameter::Volume => "volume",
            Parameter::HeatHigh => "heat_high",
            Parameter::Gamma => "gamma",
        }
    }

    fn requirement(self) -> &'static str {
        match self {
            Parameter::Gamma => "greater than 1",
            _ => "positive",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_starts_with_code() {
        let errors = [
            CycleError::NonPositiveParameter {
                parameter: Parameter::Mass,
                value: -1.0,
            },
            CycleError::HotNotGreaterThanCold {
                temp_high: ThermodynamicTemperature::new::<kelvin>(300.0),
                temp_low: ThermodynamicTemperature::new::<kelvin>(300.0),
            },
            CycleError::InvalidInitialPressure {
                pressure: Pressure::new::<pascal>(f64::INFINITY),
            },
            CycleError::InvalidExpansion {
                volume_1: Volume::new::<cubic_meter>(1.0),
                volume_2: Volume::new::<cubic_meter>(1.0),
            },
            CycleError::NonFiniteResult {
                quantity: "heat_low",
                value: f64::INFINITY,
            },
            CycleError::NonPhysicalResult {
                relation: "v2 < v3",
                lhs: 2.0,
                rhs: 2.0,
            },
        ];

        for error in errors {
            assert!(
                error.to_string().starts_with(error.code()),
                "unexpected message: {error}"
            );
        }
    }

    #[test]
    fn message_names_the_parameter_and_requirement() {
        let mass = CycleError::NonPositiveParameter {
            parameter: Parameter::Mass,
            value: 0.0,
        };
        assert_eq!(
            mass.to_string(),
            "non-positive-parameter: `mass` must be positive, got 0"
        );

        let gamma = CycleError::NonPositiveParameter {
            parameter: Parameter::Gamma,
            value: 0.9,
        };
        assert_eq!(
            gamma.to_string(),
            "non-positive-parameter: `gamma` must be greater than 1, got 0.9"
        );
    }

    #[test]
    fn kinds() {
        let range = CycleError::NonPositiveParameter {
            parameter: Parameter::TempLow,
            value: 0.0,
        };
        assert_eq!(range.kind(), ErrorKind::Range);

        let numeric = CycleError::NonFiniteResult {
            quantity: "work",
            value: f64::NAN,
        };
        assert_eq!(numeric.kind(), ErrorKind::Numeric);

        let ordering = CycleError::NonPhysicalResult {
            relation: "heat_low < heat_high",
            lhs: 1.0,
            rhs: 0.5,
        };
        assert_eq!(ordering.kind(), ErrorKind::Numeric);
        assert_eq!(
            ordering.to_string(),
            "non-physical-result: expected heat_low < heat_high, got 1 and 0.5"
        );
    }
}
