use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::domain::entities::{MachineProfile, REPAIR_STEPS, Summary};
use crate::domain::simulation::SimulationRun;
use crate::presentation::cli::formatters::summary_fmt::{print_section_header, print_summary};

#[derive(Serialize)]
struct ReportOutput<'a> {
    generated_at: DateTime<Utc>,
    window_hours: usize,
    machine: &'a MachineProfile,
    summary: &'a Summary,
    repair_steps: &'static [&'static str],
}

/// Renders the maintenance report for the monitored machine.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_report(run: &SimulationRun, machine: &MachineProfile, json: bool) -> anyhow::Result<()> {
    if json {
        print_report_json(run, machine)?;
    } else {
        print_report_human(run, machine);
    }

    Ok(())
}

fn print_report_json(run: &SimulationRun, machine: &MachineProfile) -> anyhow::Result<()> {
    let output = ReportOutput {
        generated_at: Utc::now(),
        window_hours: run.series.len(),
        machine,
        summary: &run.summary,
        repair_steps: &REPAIR_STEPS,
    };
    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}

fn print_report_human(run: &SimulationRun, machine: &MachineProfile) {
    print_section_header(&format!(
        "🔧 Relatório de manutenção — máquina {}",
        machine.machine_id
    ));

    println!("{}", "Máquina".bold().underline());
    println!("  {}: {}", "Empresa".bold(), machine.company);
    println!("  {}: {}", "Defeito".bold(), machine.defect);
    println!(
        "  {}: {} ({})",
        "Última manutenção".bold(),
        machine.last_maintenance_date,
        machine.last_maintenance_desc
    );
    println!("  {}: {}", "Chamado".bold(), machine.ticket);
    let authorized = if machine.authorized {
        "sim".green().bold()
    } else {
        "não".red().bold()
    };
    println!("  {}: {}", "Reparo autorizado".bold(), authorized);
    println!();

    println!(
        "{}",
        format!("Resumo das últimas {}h", run.series.len())
            .bold()
            .underline()
    );
    print_summary(&run.summary);
    println!();

    println!("{}", "Etapas do reparo".bold().underline());
    for step in &REPAIR_STEPS {
        println!("  {step}");
    }
    println!();

    if !machine.parts.is_empty() {
        println!("{}", "Peças reservadas".bold().underline());
        for part in &machine.parts {
            println!("  {} × {}", part.quantity.to_string().bold(), part.name);
        }
        println!();
    }

    if !machine.technicians.is_empty() {
        println!(
            "{}: {}",
            "Técnicos habilitados".bold(),
            machine.technicians.join(", ")
        );
        println!();
    }
}
