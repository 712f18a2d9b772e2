use carnot_thermo::{
    StrictlyPositive, process,
    units::{self, Entropy, GasConstant},
};
use tracing::debug;
use uom::{
    ConstZero,
    si::{
        energy::joule,
        f64::{Ratio, Volume},
        mass::kilogram,
        pressure::pascal,
        ratio::ratio,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
        volume::cubic_meter,
    },
};

use crate::{
    CycleError, CycleInputs, CycleResult, CycleStates, EntropyRange, Parameter, StatePoint,
};

/// Solves the ideal gas Carnot cycle defined by `inputs`.
///
/// Inputs are validated in a fixed order and the first failing rule is reported:
///
/// 1. every input except `gamma` must be positive, and `gamma` must exceed one
/// 2. `temp_high` must be greater than `temp_low`
/// 3. the pressure at state 1 must be finite and positive
/// 4. the isothermal expansion must produce a finite `v2 > v1`
/// 5. every remaining derived quantity must be finite
/// 6. the derived quantities must keep the cycle's ordering:
///    `v2 < v3`, `v1 < v4`, `v4 < v3`, and `0 < heat_low < heat_high`
///
/// Rules 5 and 6 are checked as each quantity is computed.
///
/// # Precision
///
/// `efficiency` is computed from the state volumes and equals
/// `theoretical_efficiency` only up to rounding in `ln(v3 / v4)`. The absolute
/// difference stays below `1e-9` while `Q_H / (m·R·T_H)` is at least `1e-5`.
/// Below that the two drift apart, and once the expansion is within a few ulps
/// of one the result is rejected by rule 4 or 6.
///
/// Each state follows from its predecessor by one process law:
///
/// ```text
/// s1: (T_H, V1)
/// s2: isothermal expansion absorbing Q_H   v2 = v1·exp(Q_H / (m·R·T_H))
/// s3: adiabatic expansion to T_L           v3 = v2·(T_H/T_L)^(1/(γ−1))
/// s4: adiabatic compression from s1, run backward to T_L
///                                          v4 = v1·(T_H/T_L)^(1/(γ−1))
/// ```
///
/// # Errors
///
/// Returns a [`CycleError`] describing the first rule that failed.
/// No partial result is ever produced.
pub fn solve(inputs: &CycleInputs) -> Result<CycleResult, CycleError> {
    debug!(?inputs, "solving carnot cycle");

    let solved = validate(inputs).and_then(|()| solve_validated(inputs));

    if let Err(error) = &solved {
        debug!(code = error.code(), %error, "carnot cycle rejected");
    }

    solved
}

/// Checks the input preconditions, rules 1 and 2.
fn validate(inputs: &CycleInputs) -> Result<(), CycleError> {
    let positive = [
        (Parameter::TempHigh, inputs.temp_high.get::<kelvin>()),
        (Parameter::TempLow, inputs.temp_low.get::<kelvin>()),
        (Parameter::Mass, inputs.mass.get::<kilogram>()),
        (
            Parameter::GasConstant,
            inputs.gas_constant.get::<joule_per_kilogram_kelvin>(),
        ),
        (Parameter::Volume, inputs.volume.get::<cubic_meter>()),
        (Parameter::HeatHigh, inputs.heat_high.get::<joule>()),
    ];

    for (parameter, value) in positive {
        if StrictlyPositive::new(value).is_none() {
            return Err(CycleError::NonPositiveParameter { parameter, value });
        }
    }

    let gamma = inputs.gamma.get::<ratio>();
    if StrictlyPositive::new(gamma - 1.0).is_none() {
        return Err(CycleError::NonPositiveParameter {
            parameter: Parameter::Gamma,
            value: gamma,
        });
    }

    if inputs.temp_high.get::<kelvin>() <= inputs.temp_low.get::<kelvin>() {
        return Err(CycleError::HotNotGreaterThanCold {
            temp_high: inputs.temp_high,
            temp_low: inputs.temp_low,
        });
    }

    Ok(())
}

/// Computes the cycle for inputs that passed [`validate`].
fn solve_validated(inputs: &CycleInputs) -> Result<CycleResult, CycleError> {
    let &CycleInputs {
        temp_high: t_h,
        temp_low: t_l,
        mass,
        gas_constant,
        volume: v_1,
        heat_high: q_h,
        gamma,
    } = inputs;

    let m_r: GasConstant = units::gas_constant(mass, gas_constant);

    let s1 = StatePoint::from_temperature_volume(m_r, t_h, v_1);
    let p_1 = s1.pressure.get::<pascal>();
    if !p_1.is_finite() || p_1 <= 0.0 {
        return Err(CycleError::InvalidInitialPressure {
            pressure: s1.pressure,
        });
    }

    let v_2 = process::isothermal_volume(v_1, q_h, m_r, t_h);
    if !v_2.get::<cubic_meter>().is_finite() || v_2 <= v_1 {
        return Err(CycleError::InvalidExpansion {
            volume_1: v_1,
            volume_2: v_2,
        });
    }
    let s2 = StatePoint::from_temperature_volume(m_r, t_h, v_2);

    let v_3 = finite_volume("v3", process::adiabatic_volume(v_2, t_h, t_l, gamma))?;
    let s3 = StatePoint::from_temperature_volume(m_r, t_l, v_3);

    let v_4 = finite_volume("v4", process::adiabatic_volume(v_1, t_h, t_l, gamma))?;
    let s4 = StatePoint::from_temperature_volume(m_r, t_l, v_4);

    ordered("v2 < v3", v_2.get::<cubic_meter>(), v_3.get::<cubic_meter>())?;
    ordered("v1 < v4", v_1.get::<cubic_meter>(), v_4.get::<cubic_meter>())?;
    ordered("v4 < v3", v_4.get::<cubic_meter>(), v_3.get::<cubic_meter>())?;

    for (quantity, state) in [("p2", s2), ("p3", s3), ("p4", s4)] {
        finite(quantity, state.pressure.get::<pascal>())?;
    }

    // Heat rejected along 3→4 has the magnitude of the heat absorbed running it 4→3.
    let q_l = process::isothermal_heat(m_r, t_l, v_4, v_3);
    finite("heat_low", q_l.get::<joule>())?;
    ordered("0 < heat_low", 0.0, q_l.get::<joule>())?;
    ordered("heat_low < heat_high", q_l.get::<joule>(), q_h.get::<joule>())?;

    let work = q_h - q_l;
    finite("work", work.get::<joule>())?;

    let efficiency: Ratio = work / q_h;
    finite("efficiency", efficiency.get::<ratio>())?;

    let theoretical_efficiency = Ratio::new::<ratio>(1.0) - units::temperature_ratio(t_l, t_h);

    let entropy_high: Entropy = q_h / t_h;
    finite("entropy_high", entropy_high.value)?;

    Ok(CycleResult {
        states: CycleStates { s1, s2, s3, s4 },
        heat_high: q_h,
        heat_low: q_l,
        work,
        efficiency,
        theoretical_efficiency,
        entropy: EntropyRange {
            low: Entropy::ZERO,
            high: entropy_high,
        },
    })
}

fn finite(quantity: &'static str, value: f64) -> Result<(), CycleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CycleError::NonFiniteResult { quantity, value })
    }
}

fn ordered(relation: &'static str, lhs: f64, rhs: f64) -> Result<(), CycleError> {
    if lhs < rhs {
        Ok(())
    } else {
        Err(CycleError::NonPhysicalResult { relation, lhs, rhs })
    }
}

fn finite_volume(quantity: &'static str, volume: Volume) -> Result<Volume, CycleError> {
    finite(quantity, volume.get::<cubic_meter>()).map(|()| volume)
}
