//! `carnot`: solve an ideal gas Carnot cycle from the command line.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use carnot_cycle::{CycleInputs, CycleResult};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
#[cfg(feature = "plot")]
mod plot;
mod report;

use cli::{Cli, Format};
use report::Report;

/// JSON output: the resolved inputs and the solved cycle.
#[derive(Serialize)]
struct Output<'a> {
    inputs: &'a CycleInputs,
    result: &'a CycleResult,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn write_output(
    out: &mut impl Write,
    format: Format,
    details: bool,
    inputs: &CycleInputs,
    result: &CycleResult,
) -> Result<()> {
    match format {
        Format::Text => {
            let report = Report::new(inputs, result).with_details(details);
            write!(out, "{report}")?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &Output { inputs, result })?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let inputs = cli.inputs()?;
    let result = carnot_cycle::solve(&inputs)?;
    info!(work = ?result.work, efficiency = ?result.efficiency, "solved carnot cycle");

    let mut stdout = io::stdout().lock();
    write_output(&mut stdout, cli.format, cli.details, &inputs, &result)?;
    drop(stdout);

    #[cfg(feature = "plot")]
    if cli.plot {
        plot::show(&inputs, &result, cli.samples)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
