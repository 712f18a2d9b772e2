//! Reversible process laws for a closed ideal gas system.
//!
//! A Carnot cycle alternates two kinds of process:
//!
//! - **Isothermal**: temperature is constant and heat crosses the boundary,
//!   with `Q = m·R·T·ln(V_end / V_start)`.
//! - **Adiabatic**: no heat crosses the boundary and `T·V^(γ−1)` is constant,
//!   equivalently `p·V^γ` is constant.
//!
//! Each function here applies exactly one of these laws to go from a known
//! state toward the next.

use uom::si::{
    f64::{Energy, Pressure, Ratio, ThermodynamicTemperature, Volume},
    ratio::ratio,
};

use crate::units::{GasConstant, temperature_ratio_value};

/// Returns the volume reached by an isothermal expansion that absorbs `heat`.
///
/// Solves `Q = m·R·T·ln(V_end / V_start)` for `V_end`:
/// `V_end = V_start · exp(Q / (m·R·T))`.
#[must_use]
pub fn isothermal_volume(
    v_start: Volume,
    heat: Energy,
    gas_constant: GasConstant,
    temperature: ThermodynamicTemperature,
) -> Volume {
    let exponent = (heat / (gas_constant * temperature)).get::<ratio>();
    v_start * exponent.exp()
}

/// Returns the heat absorbed along an isotherm from `v_start` to `v_end`.
///
/// The result is positive for an expansion and negative for a compression.
#[must_use]
pub fn isothermal_heat(
    gas_constant: GasConstant,
    temperature: ThermodynamicTemperature,
    v_start: Volume,
    v_end: Volume,
) -> Energy {
    gas_constant * temperature * (v_end / v_start).get::<ratio>().ln()
}

/// Returns the volume reached along an adiabat when the temperature moves
/// from `t_start` to `t_end`.
///
/// From `T·V^(γ−1) = const`: `V_end = V_start · (T_start / T_end)^(1/(γ−1))`.
#[must_use]
pub fn adiabatic_volume(
    v_start: Volume,
    t_start: ThermodynamicTemperature,
    t_end: ThermodynamicTemperature,
    gamma: Ratio,
) -> Volume {
    let exponent = 1.0 / (gamma.get::<ratio>() - 1.0);
    v_start * temperature_ratio_value(t_start, t_end).powf(exponent)
}

/// Returns the pressure at `volume` on the adiabat through `(v_start, p_start)`.
///
/// From `p·V^γ = const`: `p = p_start · (V_start / V)^γ`.
#[must_use]
pub fn adiabatic_pressure(
    p_start: Pressure,
    v_start: Volume,
    volume: Volume,
    gamma: Ratio,
) -> Pressure {
    p_start * (v_start / volume).get::<ratio>().powf(gamma.get::<ratio>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        energy::{joule, kilojoule},
        f64::Mass,
        mass::kilogram,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
        volume::cubic_meter,
    };

    use crate::{
        ideal_gas,
        units::{self, SpecificGasConstant},
    };

    fn air() -> GasConstant {
        units::gas_constant(
            Mass::new::<kilogram>(1.0),
            SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0),
        )
    }

    fn kelvin_temp(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    fn cubic_meters(value: f64) -> Volume {
        Volume::new::<cubic_meter>(value)
    }

    #[test]
    fn isothermal_volume_and_heat_are_inverse() {
        let t = kelvin_temp(600.0);
        let v_1 = cubic_meters(1.0);
        let q = Energy::new::<kilojoule>(100.0);

        let v_2 = isothermal_volume(v_1, q, air(), t);

        // Hand calculation: v2 = exp(100,000 / (287 * 600)) = exp(0.580720...) = 1.787325
        assert_relative_eq!(v_2.get::<cubic_meter>(), 1.787_325, epsilon = 1e-6);

        let q_back = isothermal_heat(air(), t, v_1, v_2);
        assert_relative_eq!(q_back.get::<joule>(), 100_000.0, max_relative = 1e-12);
    }

    #[test]
    fn isothermal_compression_rejects_heat() {
        let q = isothermal_heat(air(), kelvin_temp(300.0), cubic_meters(2.0), cubic_meters(1.0));

        // Q = 287 * 300 * ln(1/2) = -59,680.7 J
        assert!(q.get::<joule>() < 0.0);
        assert_relative_eq!(q.get::<joule>(), -86_100.0 * 2.0_f64.ln(), max_relative = 1e-12);
    }

    #[test]
    fn adiabatic_volume_for_diatomic_gas() {
        let gamma = Ratio::new::<ratio>(1.4);
        let v = adiabatic_volume(cubic_meters(1.0), kelvin_temp(600.0), kelvin_temp(300.0), gamma);

        // (600/300)^(1/0.4) = 2^2.5
        assert_relative_eq!(v.get::<cubic_meter>(), 2.0_f64.powf(2.5), epsilon = 1e-12);
    }

    #[test]
    fn adiabatic_relations_agree_with_equation_of_state() {
        let gamma = Ratio::new::<ratio>(5.0 / 3.0);
        let t_start = kelvin_temp(500.0);
        let t_end = kelvin_temp(320.0);
        let v_start = cubic_meters(0.3);

        let v_end = adiabatic_volume(v_start, t_start, t_end, gamma);
        let p_start = ideal_gas::pressure(air(), t_start, v_start);

        // Pressure from the adiabat must match the equation of state at T_end.
        let p_adiabat = adiabatic_pressure(p_start, v_start, v_end, gamma);
        let p_state = ideal_gas::pressure(air(), t_end, v_end);
        assert_relative_eq!(p_adiabat.value, p_state.value, max_relative = 1e-12);
    }
}
