use std::path::PathBuf;

use anyhow::Result;
use carnot_cycle::CycleInputs;
use carnot_thermo::units::SpecificGasConstant;
use clap::{Parser, ValueEnum};
use uom::si::{
    energy::kilojoule,
    f64::{Energy, Mass, Ratio, ThermodynamicTemperature, Volume},
    mass::kilogram,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
    volume::cubic_meter,
};

use crate::config;

/// Ideal gas Carnot cycle calculator
///
/// Solves the four state points of a Carnot cycle and reports heat, work,
/// efficiency, and entropy. Inputs start from one kilogram of air cycling
/// between 600 K and 300 K, are replaced by `--config` if given, and then
/// by any individual flag.
#[derive(Parser, Debug)]
#[command(name = "carnot", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// Config file with all seven inputs in SI base units (.toml, .json, .yaml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hot reservoir temperature T_H [K]
    #[arg(long, value_name = "K")]
    pub temp_high: Option<f64>,

    /// Cold reservoir temperature T_L [K]
    #[arg(long, value_name = "K")]
    pub temp_low: Option<f64>,

    /// Mass of the working gas [kg]
    #[arg(long, value_name = "KG")]
    pub mass: Option<f64>,

    /// Specific gas constant R_s [J/kg·K]
    #[arg(long, value_name = "J/KG/K")]
    pub gas_constant: Option<f64>,

    /// Volume at state 1 [m³]
    #[arg(long, value_name = "M3")]
    pub volume: Option<f64>,

    /// Heat absorbed from the hot reservoir Q_H [kJ]
    #[arg(long = "heat-high-kj", value_name = "KJ")]
    pub heat_high_kj: Option<f64>,

    /// Heat capacity ratio γ
    #[arg(long, value_name = "G")]
    pub gamma: Option<f64>,

    /// Show each step of the derivation
    #[arg(long)]
    pub details: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Open the P-V and T-S diagram window
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,

    /// Points sampled along each leg of the P-V diagram
    #[cfg(feature = "plot")]
    #[arg(long, default_value_t = 51, value_name = "N")]
    pub samples: usize,

    /// Log solver activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Resolves the cycle inputs from defaults, the config file, and flags.
    pub fn inputs(&self) -> Result<CycleInputs> {
        let mut inputs = match &self.config {
            Some(path) => config::load_inputs(path)?,
            None => CycleInputs::default(),
        };

        self.apply_overrides(&mut inputs);
        Ok(inputs)
    }

    fn apply_overrides(&self, inputs: &mut CycleInputs) {
        if let Some(value) = self.temp_high {
            inputs.temp_high = ThermodynamicTemperature::new::<kelvin>(value);
        }
        if let Some(value) = self.temp_low {
            inputs.temp_low = ThermodynamicTemperature::new::<kelvin>(value);
        }
        if let Some(value) = self.mass {
            inputs.mass = Mass::new::<kilogram>(value);
        }
        if let Some(value) = self.gas_constant {
            inputs.gas_constant = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(value);
        }
        if let Some(value) = self.volume {
            inputs.volume = Volume::new::<cubic_meter>(value);
        }
        if let Some(value) = self.heat_high_kj {
            inputs.heat_high = Energy::new::<kilojoule>(value);
        }
        if let Some(value) = self.gamma {
            inputs.gamma = Ratio::new::<ratio>(value);
        }
    }
}
