mod commands;
mod config;
mod script;

use clap::{Parser, Subcommand};
use config::CliConfig;
use resistance_core::{presets, ResistanceError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "resistance")]
#[command(about = "Role dealer for The Resistance")]
#[command(version)]
struct Cli {
    /// Settings file with the player map and game modes
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal roles to the players at the table
    Deal(commands::DealArgs),

    /// List configured and standard game modes
    Modes {
        /// Only show modes for this many players
        #[arg(short, long)]
        players: Option<usize>,
    },

    /// List configured players
    Players,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout carries command output such as `deal --json`
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "resistance={},resistance_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli_config = CliConfig::new(cli.config);

    if let Err(e) = run(cli.command, &cli_config).await {
        match e.downcast_ref::<ResistanceError>() {
            Some(ResistanceError::InvalidNumberOfPlayers { players, expected }) => {
                eprintln!(
                    "Error: {} players entered, but the game mode deals {} roles",
                    players, expected
                );
                eprintln!(
                    "Use 'resistance modes --players {}' to see matching modes",
                    players
                );
            }
            Some(ResistanceError::WildcardPoolEmpty) => {
                eprintln!("Error: the game mode needs wildcards but its WildcardPool is empty");
                eprintln!(
                    "Add roles to WildcardPool in {}",
                    cli_config.settings_path().display()
                );
            }
            Some(ResistanceError::GameModeNotFound { name }) => {
                eprintln!("Error: Game mode '{}' not found", name);
                eprintln!("Use 'resistance modes' to see available game modes");
            }
            Some(ResistanceError::UnsupportedPlayerCount(count)) => {
                eprintln!("Error: No game mode for {} players", count);
                eprintln!(
                    "Standard games need {} to {} players; add a game mode to {} for other table sizes",
                    presets::MIN_PLAYERS,
                    presets::MAX_PLAYERS,
                    cli_config.settings_path().display()
                );
            }
            Some(ResistanceError::NoPlayers) => {
                eprintln!("Error: No players entered");
                eprintln!("Use 'resistance players' to see the configured initials");
            }
            _ => {
                eprintln!("Error: {:#}", e);
            }
        }
        std::process::exit(1);
    }
}

async fn run(command: Commands, cli_config: &CliConfig) -> anyhow::Result<()> {
    let settings = cli_config.load_settings().await?;

    match command {
        Commands::Deal(args) => commands::handle_deal_command(args, &settings).await,
        Commands::Modes { players } => commands::handle_modes_command(&settings, players),
        Commands::Players => commands::handle_players_command(&settings),
    }
}
