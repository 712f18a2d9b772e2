//! Ideal gas equation of state for a closed system.
//!
//! These functions implement `p·V = m·R·T`, written in terms of the
//! [`GasConstant`] `m·R` of the enclosed gas. Every state of a Carnot cycle
//! satisfies this relation, and curve sampling uses the same functions so that
//! plotted paths pass exactly through the solved states.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature, Volume},
    temperature_interval, thermodynamic_temperature,
};

use crate::units::GasConstant;

/// Computes pressure using the ideal gas equation of state.
#[must_use]
pub fn pressure(
    gas_constant: GasConstant,
    temperature: ThermodynamicTemperature,
    volume: Volume,
) -> Pressure {
    gas_constant * temperature / volume
}

/// Computes volume using the ideal gas equation of state.
#[must_use]
pub fn volume(
    gas_constant: GasConstant,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> Volume {
    gas_constant * temperature / pressure
}

/// Computes temperature using the ideal gas equation of state.
///
/// Since [`GasConstant`] is associated with a `TemperatureInterval`,
/// the result must be manually converted to an absolute temperature.
#[must_use]
pub fn temperature(
    gas_constant: GasConstant,
    pressure: Pressure,
    volume: Volume,
) -> ThermodynamicTemperature {
    let temperature = pressure * volume / gas_constant;
    ThermodynamicTemperature::new::<thermodynamic_temperature::kelvin>(
        temperature.get::<temperature_interval::kelvin>(),
    )
}

/// Recovers the gas constant `m·R` from a single known state.
#[must_use]
pub fn gas_constant(
    pressure: Pressure,
    volume: Volume,
    temperature: ThermodynamicTemperature,
) -> GasConstant {
    pressure * volume / temperature
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Mass,
        mass::kilogram,
        pressure::{kilopascal, pascal},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
        volume::cubic_meter,
    };

    use crate::units::{self, SpecificGasConstant};

    fn air(mass_kg: f64) -> GasConstant {
        units::gas_constant(
            Mass::new::<kilogram>(mass_kg),
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
        )
    }

    #[test]
    fn pressure_of_one_kilogram_of_air() {
        // p = m·R·T / V = 1 * 287 * 600 / 1 = 172,200 Pa
        let p = pressure(
            air(1.0),
            ThermodynamicTemperature::new::<kelvin>(600.0),
            Volume::new::<cubic_meter>(1.0),
        );
        assert_relative_eq!(p.get::<pascal>(), 172_200.0);
    }

    #[test]
    fn pressure_volume_roundtrip() {
        let mr = air(2.5);
        let t = ThermodynamicTemperature::new::<kelvin>(350.0);
        let v = Volume::new::<cubic_meter>(0.75);

        let p = pressure(mr, t, v);
        let v_2 = volume(mr, t, p);

        assert_relative_eq!(v_2.get::<cubic_meter>(), v.get::<cubic_meter>());
    }

    #[test]
    fn pressure_temperature_roundtrip() {
        let mr = air(0.4);
        let p = Pressure::new::<kilopascal>(250.0);
        let v = Volume::new::<cubic_meter>(0.2);

        let t = temperature(mr, p, v);
        let p_2 = pressure(mr, t, v);

        assert_relative_eq!(p_2.get::<kilopascal>(), p.get::<kilopascal>());
    }

    #[test]
    fn gas_constant_from_state() {
        let mr = air(1.5);
        let t = ThermodynamicTemperature::new::<kelvin>(410.0);
        let v = Volume::new::<cubic_meter>(3.0);
        let p = pressure(mr, t, v);

        assert_relative_eq!(gas_constant(p, v, t).value, mr.value);
    }
}
