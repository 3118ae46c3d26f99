use std::path::Path;

use anyhow::Context as _;
use colored::Colorize;

use crate::application::config::AppConfig;
use crate::presentation::cli::formatters::summary_fmt::print_section_header;

/// Shows, locates or initializes the configuration file.
///
/// Without flags the resolved configuration is printed as TOML, which is
/// also what `--show` does.
///
/// # Errors
///
/// Returns an error if the config location cannot be determined, the file
/// cannot be written, or serialization fails.
pub fn run_config(config: &AppConfig, path: bool, init: bool) -> anyhow::Result<()> {
    if path {
        println!("{}", AppConfig::config_path()?.display());
        return Ok(());
    }

    if init {
        let target = AppConfig::config_path()?;
        return init_at(&target);
    }

    print_resolved(config)
}

fn init_at(target: &Path) -> anyhow::Result<()> {
    if target.exists() {
        println!(
            "{} {}",
            "Configuração já existe em".yellow(),
            target.display()
        );
        return Ok(());
    }

    AppConfig::default().save_to(target)?;
    println!("{} {}", "Configuração criada em".green(), target.display());
    Ok(())
}

fn print_resolved(config: &AppConfig) -> anyhow::Result<()> {
    let rendered =
        toml::to_string_pretty(config).context("Falha ao serializar a configuração")?;
    print_section_header("⚙ Configuração");
    print!("{rendered}");
    Ok(())
}
