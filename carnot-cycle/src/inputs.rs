use carnot_thermo::units::SpecificGasConstant;
use uom::si::{
    energy::joule,
    f64::{Energy, Mass, Ratio, ThermodynamicTemperature, Volume},
    mass::kilogram,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

/// The seven independent inputs that define a Carnot cycle.
///
/// With the `serde-derive` feature, inputs (de)serialize as a flat table of
/// numbers in SI base units: K, kg, J/kg·K, m³, J, and a plain ratio for `gamma`.
/// The camelCase keys used by earlier front ends (`tempHigh`,
/// `gasConstantSpecific`, `volume1`, ...) are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct CycleInputs {
    /// Hot reservoir temperature `T_H`.
    #[cfg_attr(feature = "serde-derive", serde(alias = "tempHigh"))]
    pub temp_high: ThermodynamicTemperature,

    /// Cold reservoir temperature `T_L`.
    #[cfg_attr(feature = "serde-derive", serde(alias = "tempLow"))]
    pub temp_low: ThermodynamicTemperature,

    /// Mass of the working gas.
    pub mass: Mass,

    /// Specific gas constant `R` of the working gas.
    #[cfg_attr(feature = "serde-derive", serde(alias = "gasConstantSpecific"))]
    pub gas_constant: SpecificGasConstant,

    /// Volume at state 1, the start of the isothermal expansion.
    #[cfg_attr(feature = "serde-derive", serde(alias = "volume1"))]
    pub volume: Volume,

    /// Heat `Q_H` absorbed from the hot reservoir during the isothermal expansion.
    #[cfg_attr(feature = "serde-derive", serde(alias = "heatHigh"))]
    pub heat_high: Energy,

    /// Heat capacity ratio `γ = cp / cv`.
    pub gamma: Ratio,
}

impl CycleInputs {
    /// Builds inputs from plain SI base unit values.
    ///
    /// Arguments are, in order: `T_H` and `T_L` in K, mass in kg, `R` in J/kg·K,
    /// `V1` in m³, `Q_H` in J, and `γ`.
    #[must_use]
    pub fn from_si(
        temp_high: f64,
        temp_low: f64,
        mass: f64,
        gas_constant: f64,
        volume: f64,
        heat_high: f64,
        gamma: f64,
    ) -> Self {
        Self {
            temp_high: ThermodynamicTemperature::new::<kelvin>(temp_high),
            temp_low: ThermodynamicTemperature::new::<kelvin>(temp_low),
            mass: Mass::new::<kilogram>(mass),
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(gas_constant),
            volume: Volume::new::<cubic_meter>(volume),
            heat_high: Energy::new::<joule>(heat_high),
            gamma: Ratio::new::<ratio>(gamma),
        }
    }
}

/// One kilogram of air cycling between 600 K and 300 K, absorbing 100 kJ.
impl Default for CycleInputs {
    fn default() -> Self {
        Self::from_si(600.0, 300.0, 1.0, 287.0, 1.0, 100_000.0, 1.4)
    }
}
