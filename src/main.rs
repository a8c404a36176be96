//! Command-line front end for the Elo Room rating store
//!
//! Loads configuration, replays roster files through a `RatingStore` and
//! prints win chances or final standings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use elo_room::config::{validate_config, AppConfig};
use elo_room::{RatingStore, Roster};
use std::path::PathBuf;
use tracing::{error, info};

/// Elo Room - Elo ratings for pairwise match outcomes
#[derive(Parser)]
#[command(
    name = "elo-room",
    version,
    about = "Track Elo ratings and replay match results",
    long_about = "Elo Room keeps integer Elo ratings for named participants, estimates \
                 win chances with the logistic expected-score formula and applies rating \
                 updates after each decided match."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// K-factor override
    #[arg(short, long, value_name = "K", help = "Override the K-factor")]
    k_factor: Option<i64>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the chance of each participant beating the other
    Chance {
        #[arg(short, long, value_name = "FILE")]
        roster: PathBuf,
        player_a: String,
        player_b: String,
    },
    /// Replay every match in a roster and print final standings
    Replay {
        #[arg(short, long, value_name = "FILE")]
        roster: PathBuf,
        /// Print standings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and exit
    Check,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file/environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }

    validate_config(&config)?;
    Ok(config)
}

fn run_chance(store: &mut RatingStore, roster: &Roster, a: &str, b: &str) -> Result<()> {
    roster.register_all(store)?;

    println!("{} vs {}", a, b);
    println!("  {}: {:.2}%", a, store.win_percentage(a, b)?);
    println!("  {}: {:.2}%", b, store.win_percentage(b, a)?);
    Ok(())
}

fn run_replay(store: &mut RatingStore, roster: &Roster, json: bool) -> Result<()> {
    let outcomes = roster.apply(store)?;
    let standings = store.standings();

    if json {
        let rows: Vec<_> = standings
            .iter()
            .map(|(name, rating)| serde_json::json!({ "name": name, "rating": rating }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for outcome in &outcomes {
        println!("{}", outcome);
    }
    println!("Standings after {} matches:", outcomes.len());
    for (place, (name, rating)) in standings.iter().enumerate() {
        println!("  {:>3}. {:<24} {}", place + 1, name, rating);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "{} starting with K-factor {}, default rating {}",
        config.service.name, config.rating.k_factor, config.rating.default_rating
    );

    let mut store = RatingStore::from_config(&config.rating)?;

    let result = match &args.command {
        Command::Check => {
            info!("Configuration validation successful");
            Ok(())
        }
        Command::Chance {
            roster,
            player_a,
            player_b,
        } => Roster::from_file(roster)
            .and_then(|roster| run_chance(&mut store, &roster, player_a, player_b)),
        Command::Replay { roster, json } => {
            Roster::from_file(roster).and_then(|roster| run_replay(&mut store, &roster, *json))
        }
    };

    if let Err(e) = &result {
        error!("{:#}", e);
    }
    result
}
