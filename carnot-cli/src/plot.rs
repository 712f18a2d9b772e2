use anyhow::{Result, anyhow};
use carnot_cycle::{
    CycleInputs, CycleResult, Process,
    path::{self, CurveParameters},
};
use carnot_plot::{Diagram, DiagramApp};
use uom::si::{pressure::kilopascal, thermodynamic_temperature::kelvin, volume::cubic_meter};

/// Builds the P-V and T-S diagrams for a solved cycle.
pub fn diagrams(
    inputs: &CycleInputs,
    result: &CycleResult,
    samples: usize,
) -> Result<DiagramApp> {
    let params = CurveParameters::from_inputs(inputs);
    let curves = path::pv_diagram(result, &params, samples)?;

    let mut pv = Diagram::new("P-V diagram", "V [m³]", "P [kPa]");
    for (process, curve) in Process::ALL.into_iter().zip(curves) {
        let points: Vec<[f64; 2]> = curve
            .iter()
            .map(|point| {
                [
                    point.volume.get::<cubic_meter>(),
                    point.pressure.get::<kilopascal>(),
                ]
            })
            .collect();
        pv = pv.add_series(process.label(), &points);
    }

    let mut ts = Diagram::new("T-S diagram", "ΔS [J/K]", "T [K]");
    for (process, leg) in Process::ALL.into_iter().zip(path::ts_diagram(result)) {
        let points = leg.map(|point| [point.entropy.value, point.temperature.get::<kelvin>()]);
        ts = ts.add_series(process.label(), &points);
    }

    Ok(DiagramApp::new().add_diagram(pv).add_diagram(ts))
}

/// Opens the diagram window and blocks until it is closed.
pub fn show(inputs: &CycleInputs, result: &CycleResult, samples: usize) -> Result<()> {
    diagrams(inputs, result, samples)?
        .run("Carnot cycle")
        .map_err(|err| anyhow!("Failed to open diagram window: {err}"))
}
