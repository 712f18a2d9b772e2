use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Mass, Ratio, ThermodynamicTemperature},
        ratio::ratio,
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Gas constant of a fixed mass of gas, `m·R`, J/K in SI.
///
/// This is the factor that appears in the closed-system form of the ideal gas
/// law, `p·V = m·R·T`.
pub type GasConstant = Quantity<ISQ<P2, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Entropy, J/K in SI.
pub type Entropy = Quantity<ISQ<P2, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Returns the gas constant `m·R` for `mass` of a gas with specific gas constant `r`.
#[inline]
#[must_use]
pub fn gas_constant(mass: Mass, r: SpecificGasConstant) -> GasConstant {
    mass * r
}

/// Returns the dimensionless ratio `numerator / denominator` of two absolute temperatures.
///
/// Both values are converted to kelvin, so the ratio is meaningful regardless
/// of the units the temperatures were created with.
#[inline]
#[must_use]
pub fn temperature_ratio(
    numerator: ThermodynamicTemperature,
    denominator: ThermodynamicTemperature,
) -> Ratio {
    numerator / denominator
}

/// Returns `temperature_ratio` as a plain `f64`.
#[inline]
#[must_use]
pub fn temperature_ratio_value(
    numerator: ThermodynamicTemperature,
    denominator: ThermodynamicTemperature,
) -> f64 {
    temperature_ratio(numerator, denominator).get::<ratio>()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass::{gram, kilogram},
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    #[test]
    fn gas_constant_scales_with_mass() {
        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.0);

        let one_kg = gas_constant(Mass::new::<kilogram>(1.0), r);
        assert_relative_eq!(one_kg.value, 287.0);

        let half_kg = gas_constant(Mass::new::<gram>(500.0), r);
        assert_relative_eq!(half_kg.value, 143.5);
    }

    #[test]
    fn temperature_ratio_uses_absolute_scale() {
        let hot = ThermodynamicTemperature::new::<kelvin>(600.0);
        let cold = ThermodynamicTemperature::new::<kelvin>(300.0);
        assert_relative_eq!(temperature_ratio_value(hot, cold), 2.0);

        // 100 °C over 0 °C is 373.15 K over 273.15 K, not 100 over 0.
        let boiling = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let freezing = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        assert_relative_eq!(
            temperature_ratio_value(boiling, freezing),
            373.15 / 273.15,
            epsilon = 1e-12
        );
    }
}
