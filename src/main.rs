use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use seep::application::config::{AppConfig, SimulationConfig};
use seep::application::services::simulator::SimulatorService;
use seep::domain::entities::MachineProfile;
use seep::domain::value_objects::SeriesMode;
use seep::infrastructure::assistant::create_assistant;
use seep::infrastructure::speech::create_speech_synthesizer;
use seep::presentation::cli::app::{Cli, Commands};
use seep::presentation::cli::commands::ask::run_ask;
use seep::presentation::cli::commands::config::run_config;
use seep::presentation::cli::commands::report::run_report;
use seep::presentation::cli::commands::simulate::run_simulate;
use seep::presentation::tui::app::run_tui;

fn print_banner() {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", "  SEEP — Monitor de Vazamentos".bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_mode(mode: &str) -> anyhow::Result<SeriesMode> {
    match mode.to_lowercase().as_str() {
        "demo" => Ok(SeriesMode::Demo),
        "parametric" | "parametrico" | "paramétrico" => Ok(SeriesMode::Parametric),
        other => {
            anyhow::bail!("Modo desconhecido: '{other}'. Modos válidos: demo, parametric")
        }
    }
}

fn apply_simulation_overrides(
    config: &mut SimulationConfig,
    mode: Option<&str>,
    window: Option<u32>,
    intensity: Option<f64>,
    burstiness: Option<f64>,
    noise: Option<f64>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    if let Some(mode) = mode {
        config.mode = parse_mode(mode)?;
    }
    if let Some(window) = window {
        config.window_hours = window;
    }
    if let Some(intensity) = intensity {
        config.intensity = intensity;
    }
    if let Some(burstiness) = burstiness {
        config.burstiness = burstiness;
    }
    if let Some(noise) = noise {
        config.noise = noise;
    }
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    Ok(())
}

fn launch_dashboard(config: &mut AppConfig, seed: Option<u64>) -> anyhow::Result<()> {
    if let Some(seed) = seed {
        config.simulation.seed = Some(seed);
    }
    let simulator = SimulatorService::new(config.simulation.clone());
    let machine = MachineProfile::from(&config.machine);
    let assistant = create_assistant(&config.assistant);
    run_tui(
        &simulator,
        &*assistant,
        machine,
        config.dashboard.tick_ms,
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let mut config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: main.rs is the only place that knows concrete types
    match cli.command {
        Some(Commands::Simulate {
            mode,
            window,
            intensity,
            burstiness,
            noise,
            seed,
            json,
        }) => {
            apply_simulation_overrides(
                &mut config.simulation,
                mode.as_deref(),
                window,
                intensity,
                burstiness,
                noise,
                seed,
            )?;
            let simulator = SimulatorService::new(config.simulation.clone());
            if !json {
                print_banner();
            }
            run_simulate(&simulator, json)?;
        }
        Some(Commands::Report { json }) => {
            let simulator = SimulatorService::new(config.simulation.clone());
            let run = simulator.run()?;
            let machine = MachineProfile::from(&config.machine);
            run_report(&run, &machine, json)?;
        }
        Some(Commands::Ask {
            question,
            speak,
            out,
        }) => {
            let simulator = SimulatorService::new(config.simulation.clone());
            let run = simulator.run()?;
            let machine = MachineProfile::from(&config.machine);
            let assistant = create_assistant(&config.assistant);
            let synthesizer = create_speech_synthesizer(&config.speech);
            run_ask(
                &*assistant,
                &*synthesizer,
                &run,
                &machine,
                &question,
                speak,
                out.as_deref(),
            )
            .await?;
        }
        Some(Commands::Watch { seed }) => launch_dashboard(&mut config, seed)?,
        Some(Commands::Config { show: _, path, init }) => {
            run_config(&config, path, init)?;
        }
        None => launch_dashboard(&mut config, None)?,
    }

    Ok(())
}
