use carnot_thermo::ideal_gas;
use carnot_thermo::units::GasConstant;
use uom::si::f64::{Pressure, ThermodynamicTemperature, Volume};

/// One of the four thermodynamic states of the working gas.
///
/// State points are always derived by the solver; each satisfies the ideal
/// gas law `p·V = m·R·T` for the cycle's gas constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StatePoint {
    pub pressure: Pressure,
    pub volume: Volume,
    pub temperature: ThermodynamicTemperature,
}

impl StatePoint {
    /// Creates the state at `temperature` and `volume`, with pressure from the ideal gas law.
    #[must_use]
    pub fn from_temperature_volume(
        gas_constant: GasConstant,
        temperature: ThermodynamicTemperature,
        volume: Volume,
    ) -> Self {
        Self {
            pressure: ideal_gas::pressure(gas_constant, temperature, volume),
            volume,
            temperature,
        }
    }
}
