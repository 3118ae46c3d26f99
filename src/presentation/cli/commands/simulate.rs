use crate::application::services::simulator::SimulatorService;
use crate::domain::simulation::SimulationRun;
use crate::presentation::cli::formatters::series_fmt::print_series;
use crate::presentation::cli::formatters::summary_fmt::{print_section_header, print_summary};

/// Runs one simulation and prints the series with its summary.
///
/// # Errors
///
/// Returns an error if the configured parameters are rejected or JSON
/// serialization fails.
pub fn run_simulate(simulator: &SimulatorService, json: bool) -> anyhow::Result<()> {
    let run = simulator.run()?;

    if json {
        print_run_json(&run)?;
    } else {
        print_run_human(simulator, &run);
    }

    Ok(())
}

fn print_run_json(run: &SimulationRun) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(run)?;
    println!("{output}");
    Ok(())
}

fn print_run_human(simulator: &SimulatorService, run: &SimulationRun) {
    let config = simulator.config();
    print_section_header(&format!(
        "💧 Ocorrências das últimas {}h (modo {})",
        run.series.len(),
        config.mode
    ));
    print_series(&run.series);
    println!();
    print_summary(&run.summary);
}
