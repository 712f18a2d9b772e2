//! Human-readable rendering of a solved cycle.

use std::fmt;

use carnot_cycle::{CycleInputs, CycleResult, StatePoint};
use carnot_thermo::units;
use uom::si::{
    energy::joule,
    mass::kilogram,
    pressure::{kilopascal, pascal},
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

/// Formats `value` with `precision` digits after the decimal point.
///
/// Magnitudes above `1e4` or below `1e-2` use scientific notation, and zero is
/// written as a bare `0`. Exponents use Rust's `{:e}` form without a plus
/// sign or padding, so 172,200 is `1.722e5`, not `1.722e+5`.
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude > 1e4 || magnitude < 1e-2 {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}

fn format_percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}

/// Text report of a solved cycle, optionally with the full derivation.
pub struct Report<'a> {
    inputs: &'a CycleInputs,
    result: &'a CycleResult,
    details: bool,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(inputs: &'a CycleInputs, result: &'a CycleResult) -> Self {
        Self {
            inputs,
            result,
            details: false,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    fn write_state(f: &mut fmt::Formatter<'_>, index: usize, state: &StatePoint) -> fmt::Result {
        writeln!(
            f,
            "  State {index}: P = {} kPa, V = {} m³, T = {:.2} K",
            format_value(state.pressure.get::<kilopascal>(), 3),
            format_value(state.volume.get::<cubic_meter>(), 3),
            state.temperature.get::<kelvin>(),
        )
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "State points")?;
        for (i, state) in result.states.to_array().iter().enumerate() {
            Self::write_state(f, i + 1, state)?;
        }

        writeln!(f)?;
        writeln!(f, "Heat, work, and efficiency")?;
        writeln!(f, "  Q_H  = {} J", format_value(result.heat_high.get::<joule>(), 3))?;
        writeln!(f, "  Q_L  = {} J", format_value(result.heat_low.get::<joule>(), 3))?;
        writeln!(f, "  W    = {} J", format_value(result.work.get::<joule>(), 3))?;
        writeln!(f, "  η    = {} %", format_percent(result.efficiency.get::<ratio>()))?;
        writeln!(
            f,
            "  η_th = {} %",
            format_percent(result.theoretical_efficiency.get::<ratio>())
        )?;
        writeln!(f, "  ΔS   = {} J/K", format_value(result.entropy.high.value, 3))?;

        if self.details {
            writeln!(f)?;
            writeln!(f, "Derivation")?;
            for step in derivation(self.inputs, result) {
                writeln!(f)?;
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

/// One step of the derivation: a formula, its substituted values, and the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub formula: &'static str,
    pub substitution: String,
    pub result: String,
    pub unit: &'static str,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.title)?;
        writeln!(f, "    {}", self.formula)?;
        writeln!(f, "    {}", self.substitution)?;
        writeln!(f, "    ≈ {} {}", self.result, self.unit)
    }
}

/// Returns every step from the inputs to the efficiencies, in the order they are computed.
#[must_use]
pub fn derivation(inputs: &CycleInputs, result: &CycleResult) -> Vec<Step> {
    let fv = |value: f64| format_value(value, 3);

    let mass = inputs.mass.get::<kilogram>();
    let r = inputs.gas_constant.get::<joule_per_kilogram_kelvin>();
    let m_r = units::gas_constant(inputs.mass, inputs.gas_constant).value;
    let t_h = inputs.temp_high.get::<kelvin>();
    let t_l = inputs.temp_low.get::<kelvin>();
    let q_h = inputs.heat_high.get::<joule>();
    let gamma = inputs.gamma.get::<ratio>();

    let [s1, s2, s3, s4] = result.states.to_array();
    let v = |state: &StatePoint| state.volume.get::<cubic_meter>();
    let p = |state: &StatePoint| state.pressure.get::<pascal>();

    let q_l = result.heat_low.get::<joule>();
    let work = result.work.get::<joule>();

    let step = |title: &'static str,
                formula: &'static str,
                substitution: String,
                result: String,
                unit: &'static str| Step {
        title,
        formula,
        substitution,
        result,
        unit,
    };

    vec![
        step(
            "Gas constant (m·R_s)",
            "mR_s = m · R_s",
            format!("mR_s = {} · {}", fv(mass), fv(r)),
            fv(m_r),
            "J/K",
        ),
        step(
            "State 1 pressure (P1)",
            "P1 = mR_s · T_H / V1",
            format!("P1 = ({} · {}) / {}", fv(m_r), fv(t_h), fv(v(&s1))),
            fv(p(&s1)),
            "Pa",
        ),
        step(
            "1 → 2 isothermal expansion: state 2 volume (V2)",
            "V2 = V1 · exp(Q_H / (mR_s · T_H))",
            format!(
                "V2 = {} · exp({} / ({} · {}))",
                fv(v(&s1)),
                fv(q_h),
                fv(m_r),
                fv(t_h)
            ),
            fv(v(&s2)),
            "m³",
        ),
        step(
            "1 → 2 isothermal expansion: state 2 pressure (P2)",
            "P2 = mR_s · T_H / V2",
            format!("P2 = ({} · {}) / {}", fv(m_r), fv(t_h), fv(v(&s2))),
            fv(p(&s2)),
            "Pa",
        ),
        step(
            "2 → 3 adiabatic expansion: state 3 volume (V3)",
            "V3 = V2 · (T_H / T_L)^(1/(γ-1))",
            format!(
                "V3 = {} · ({} / {})^(1/({}-1))",
                fv(v(&s2)),
                fv(t_h),
                fv(t_l),
                fv(gamma)
            ),
            fv(v(&s3)),
            "m³",
        ),
        step(
            "2 → 3 adiabatic expansion: state 3 pressure (P3)",
            "P3 = mR_s · T_L / V3",
            format!("P3 = ({} · {}) / {}", fv(m_r), fv(t_l), fv(v(&s3))),
            fv(p(&s3)),
            "Pa",
        ),
        step(
            "3 → 4 isothermal compression: state 4 volume (V4)",
            "V4 = V1 · (T_H / T_L)^(1/(γ-1))",
            format!(
                "V4 = {} · ({} / {})^(1/({}-1))",
                fv(v(&s1)),
                fv(t_h),
                fv(t_l),
                fv(gamma)
            ),
            fv(v(&s4)),
            "m³",
        ),
        step(
            "3 → 4 isothermal compression: state 4 pressure (P4)",
            "P4 = mR_s · T_L / V4",
            format!("P4 = ({} · {}) / {}", fv(m_r), fv(t_l), fv(v(&s4))),
            fv(p(&s4)),
            "Pa",
        ),
        step(
            "Entropy change (ΔS)",
            "ΔS = Q_H / T_H",
            format!("ΔS = {} / {}", fv(q_h), fv(t_h)),
            fv(result.entropy.high.value),
            "J/K",
        ),
        step(
            "Heat rejected (Q_L)",
            "Q_L = mR_s · T_L · ln(V3 / V4)",
            format!(
                "Q_L = {} · {} · ln({} / {})",
                fv(m_r),
                fv(t_l),
                fv(v(&s3)),
                fv(v(&s4))
            ),
            fv(q_l),
            "J",
        ),
        step(
            "Net work (W)",
            "W = Q_H - Q_L",
            format!("W = {} - {}", fv(q_h), fv(q_l)),
            fv(work),
            "J",
        ),
        step(
            "Thermal efficiency (η)",
            "η = W / Q_H",
            format!("η = {} / {}", fv(work), fv(q_h)),
            format_percent(result.efficiency.get::<ratio>()),
            "%",
        ),
        step(
            "Carnot efficiency (η_th)",
            "η_th = 1 - T_L / T_H",
            format!("η_th = 1 - {} / {}", fv(t_l), fv(t_h)),
            format_percent(result.theoretical_efficiency.get::<ratio>()),
            "%",
        ),
    ]
}
