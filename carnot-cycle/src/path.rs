//! Process curves for P-V and T-S diagrams.
//!
//! Sampling uses the same equation of state and process laws as [`solve`],
//! so every sampled leg begins and ends on the solved state points:
//!
//! - isothermal legs follow `p = m·R·T / V`
//! - adiabatic legs follow `p = p_start · (V_start / V)^γ`
//!
//! On a T-S diagram each leg is a straight line, so [`ts_diagram`] returns
//! only the endpoints.
//!
//! [`solve`]: crate::solve

use carnot_thermo::{
    ideal_gas, process,
    units::{self, Entropy, GasConstant},
};
use thiserror::Error;
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature, Volume};

use crate::{CycleInputs, CycleResult, Leg, ProcessKind};

/// Gas properties that shape the process curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParameters {
    /// The gas constant `m·R` of the working gas.
    pub gas_constant: GasConstant,
    /// Heat capacity ratio `γ`.
    pub gamma: Ratio,
}

impl CurveParameters {
    #[must_use]
    pub fn new(gas_constant: GasConstant, gamma: Ratio) -> Self {
        Self {
            gas_constant,
            gamma,
        }
    }

    /// Returns the curve parameters for the gas described by `inputs`.
    #[must_use]
    pub fn from_inputs(inputs: &CycleInputs) -> Self {
        Self::new(
            units::gas_constant(inputs.mass, inputs.gas_constant),
            inputs.gamma,
        )
    }
}

/// A point on a P-V diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvPoint {
    pub volume: Volume,
    pub pressure: Pressure,
}

/// A point on a T-S diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsPoint {
    pub entropy: Entropy,
    pub temperature: ThermodynamicTemperature,
}

/// Errors that can occur when sampling a process curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A curve needs at least its two endpoints.
    #[error("at least 2 samples are required per leg, got {samples}")]
    TooFewSamples { samples: usize },
}

/// Samples `samples` points along `leg`, evenly spaced in volume.
///
/// The first and last samples correspond to the leg's start and end states.
///
/// # Errors
///
/// Returns [`SampleError::TooFewSamples`] if `samples < 2`.
pub fn sample_leg(
    leg: &Leg,
    params: &CurveParameters,
    samples: usize,
) -> Result<Vec<PvPoint>, SampleError> {
    if samples < 2 {
        return Err(SampleError::TooFewSamples { samples });
    }

    let v_start = leg.start.volume;
    let v_span = leg.end.volume - v_start;
    let steps = (samples - 1) as f64;

    let points = (0..samples)
        .map(|i| {
            let volume = v_start + v_span * (i as f64 / steps);
            let pressure = match leg.process.kind() {
                ProcessKind::Isothermal => {
                    ideal_gas::pressure(params.gas_constant, leg.start.temperature, volume)
                }
                ProcessKind::Adiabatic => {
                    process::adiabatic_pressure(leg.start.pressure, v_start, volume, params.gamma)
                }
            };
            PvPoint { volume, pressure }
        })
        .collect();

    Ok(points)
}

/// Samples all four legs of `result` for a P-V diagram, in cycle order.
///
/// # Errors
///
/// Returns [`SampleError::TooFewSamples`] if `samples < 2`.
pub fn pv_diagram(
    result: &CycleResult,
    params: &CurveParameters,
    samples: usize,
) -> Result<[Vec<PvPoint>; 4], SampleError> {
    let [a, b, c, d] = result.legs();
    Ok([
        sample_leg(&a, params, samples)?,
        sample_leg(&b, params, samples)?,
        sample_leg(&c, params, samples)?,
        sample_leg(&d, params, samples)?,
    ])
}

/// Returns the endpoints of the four legs of `result` on a T-S diagram, in cycle order.
#[must_use]
pub fn ts_diagram(result: &CycleResult) -> [[TsPoint; 2]; 4] {
    let low = result.entropy.low;
    let high = result.entropy.high;
    let t_high = result.states.s1.temperature;
    let t_low = result.states.s3.temperature;

    let point = |entropy, temperature| TsPoint {
        entropy,
        temperature,
    };

    [
        [point(low, t_high), point(high, t_high)],
        [point(high, t_high), point(high, t_low)],
        [point(high, t_low), point(low, t_low)],
        [point(low, t_low), point(low, t_high)],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::pascal, thermodynamic_temperature::kelvin, volume::cubic_meter};

    use crate::{CycleInputs, solve};

    fn solved() -> (CycleResult, CurveParameters) {
        let inputs = CycleInputs::default();
        (solve(&inputs).unwrap(), CurveParameters::from_inputs(&inputs))
    }

    #[test]
    fn sampled_legs_end_on_state_points() {
        let (result, params) = solved();

        for leg in result.legs() {
            let points = sample_leg(&leg, &params, 50).unwrap();
            assert_eq!(points.len(), 50);

            let first = points[0];
            let last = points[points.len() - 1];

            assert_relative_eq!(first.volume.value, leg.start.volume.value);
            assert_relative_eq!(
                first.pressure.value,
                leg.start.pressure.value,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                last.volume.value,
                leg.end.volume.value,
                max_relative = 1e-12
            );
            assert_relative_eq!(
                last.pressure.value,
                leg.end.pressure.value,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn volumes_are_evenly_spaced() {
        let (result, params) = solved();
        let leg = result.legs()[0];

        let points = sample_leg(&leg, &params, 5).unwrap();
        let span = leg.end.volume.get::<cubic_meter>() - leg.start.volume.get::<cubic_meter>();

        for (i, point) in points.iter().enumerate() {
            let expected = leg.start.volume.get::<cubic_meter>() + span * i as f64 / 4.0;
            assert_relative_eq!(point.volume.get::<cubic_meter>(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn isothermal_pressure_falls_with_volume() {
        let (result, params) = solved();
        let points = sample_leg(&result.legs()[0], &params, 10).unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].pressure < pair[0].pressure);
        }

        // p·V is constant along an isotherm: 287 * 600 = 172,200 J.
        for point in &points {
            let pv = point.pressure.get::<pascal>() * point.volume.get::<cubic_meter>();
            assert_relative_eq!(pv, 172_200.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn adiabatic_compression_raises_pressure() {
        let (result, params) = solved();
        let points = sample_leg(&result.legs()[3], &params, 10).unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].volume < pair[0].volume);
            assert!(pair[1].pressure > pair[0].pressure);
        }
    }

    #[test]
    fn too_few_samples_is_an_error() {
        let (result, params) = solved();
        let leg = result.legs()[1];

        assert_eq!(
            sample_leg(&leg, &params, 1),
            Err(SampleError::TooFewSamples { samples: 1 })
        );
        assert!(pv_diagram(&result, &params, 0).is_err());
    }

    #[test]
    fn pv_diagram_samples_every_leg() {
        let (result, params) = solved();
        let curves = pv_diagram(&result, &params, 51).unwrap();

        assert!(curves.iter().all(|curve| curve.len() == 51));
    }

    #[test]
    fn ts_diagram_is_a_closed_rectangle() {
        let (result, _) = solved();
        let legs = ts_diagram(&result);

        for i in 0..4 {
            assert_eq!(legs[i][1], legs[(i + 1) % 4][0]);
        }

        assert_eq!(legs[0][0].temperature.get::<kelvin>(), 600.0);
        assert_eq!(legs[2][0].temperature.get::<kelvin>(), 300.0);
        assert_eq!(legs[0][1].entropy, result.entropy.high);
        assert_eq!(legs[3][0].entropy, result.entropy.low);
    }
}
