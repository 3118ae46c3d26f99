use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// seep — industrial leak monitoring demo
///
/// Simulates an hourly leak occurrence feed, summarizes it, and answers
/// maintenance questions through a configurable assistant.
#[derive(Parser, Debug)]
#[command(name = "seep")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Gerar uma série de ocorrências e mostrar o resumo
    #[command(alias = "s")]
    Simulate {
        /// Modo de geração (demo, parametric)
        #[arg(short, long)]
        mode: Option<String>,

        /// Janela monitorada em horas (1 a 168)
        #[arg(short, long)]
        window: Option<u32>,

        /// Média de ocorrências por hora
        #[arg(short, long)]
        intensity: Option<f64>,

        /// Concentração dos picos, de 0 a 1
        #[arg(short, long)]
        burstiness: Option<f64>,

        /// Ruído da linha de base, de 0 a 1
        #[arg(short, long)]
        noise: Option<f64>,

        /// Semente fixa para uma série reprodutível
        #[arg(long)]
        seed: Option<u64>,

        /// Saída em formato JSON
        #[arg(long)]
        json: bool,
    },

    /// Gerar o relatório de manutenção da máquina
    #[command(alias = "r")]
    Report {
        /// Saída em formato JSON
        #[arg(long)]
        json: bool,
    },

    /// Perguntar algo à assistente de manutenção
    #[command(alias = "a")]
    Ask {
        /// Pergunta para a assistente
        question: String,

        /// Sintetizar a resposta em áudio MP3
        #[arg(short, long)]
        speak: bool,

        /// Arquivo de saída do áudio (padrão: resposta.mp3)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Abrir o painel interativo
    #[command(alias = "w")]
    Watch {
        /// Semente fixa para uma série reprodutível
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage configuration
    #[command(alias = "c")]
    Config {
        /// Show resolved configuration
        #[arg(long)]
        show: bool,

        /// Print the config file location
        #[arg(long)]
        path: bool,

        /// Create the default config file
        #[arg(long)]
        init: bool,
    },
}
