use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rps_bot::PolicyKind;

use rps_cli::config::RefereeConfig;
use rps_cli::logging::init_logging;
use rps_cli::session::Session;
use rps_cli::simulate::SimulationRunner;
use rps_core::game::serialization::GameTranscript;

/// Referee for Rock-Paper-Scissors with a one-time bomb.
#[derive(Debug, Parser)]
#[command(
    name = "rps-referee",
    author,
    version,
    about = "Best-of-three Rock-Paper-Scissors-Plus against an automated opponent"
)]
struct Cli {
    /// Path to an optional YAML configuration file.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Override the tracing level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Override the RNG seed for the opponent (and the simulation master seed).
    #[arg(long, value_name = "SEED", global = true)]
    seed: Option<u64>,

    /// Override the opponent policy (catch_up, uniform).
    #[arg(long, value_name = "POLICY", global = true)]
    opponent: Option<PolicyKind>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one interactive game on stdin/stdout (the default).
    Play {
        /// Write the final game transcript as JSON.
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },
    /// Play many automated games and report totals.
    Simulate {
        /// Override the number of games to play.
        #[arg(long, value_name = "GAMES")]
        games: Option<usize>,

        /// Override the own-side policy (unrestricted, uniform, catch_up).
        #[arg(long, value_name = "POLICY")]
        own_policy: Option<PolicyKind>,

        /// Stream one JSON row per game to this file.
        #[arg(long, value_name = "FILE")]
        jsonl: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => RefereeConfig::from_path(path)?,
        None => RefereeConfig::default(),
    };

    if let Some(level) = cli.log_level {
        config.logging.tracing_level = level;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(opponent) = cli.opponent {
        config.opponent = opponent;
    }

    let command = cli.command.unwrap_or(Command::Play { transcript: None });
    if let Command::Simulate {
        games,
        own_policy,
        jsonl,
    } = &command
    {
        if let Some(games) = games {
            config.simulation.games = *games;
        }
        if let Some(own_policy) = own_policy {
            config.simulation.own_policy = *own_policy;
        }
        if let Some(jsonl) = jsonl {
            config.simulation.jsonl = Some(jsonl.display().to_string());
        }
    }

    config.validate()?;
    let _logging_guard = init_logging(&config.logging)?;

    match command {
        Command::Play { transcript } => play(&config, transcript),
        Command::Simulate { .. } => simulate(&config),
    }
}

fn play(config: &RefereeConfig, transcript: Option<PathBuf>) -> anyhow::Result<()> {
    let opponent = config.opponent.build(config.seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Session::new(stdin.lock(), stdout.lock(), opponent);
    let state = session.run()?;

    if let Some(path) = transcript {
        let json = GameTranscript::to_json(&state).context("serializing transcript")?;
        fs::write(&path, json)
            .with_context(|| format!("writing transcript to {}", path.display()))?;
        println!("Transcript: {}", path.display());
    }

    Ok(())
}

fn simulate(config: &RefereeConfig) -> anyhow::Result<()> {
    let games = config.simulation.games;
    println!(
        "Simulating {games} game{} ({} vs {})",
        if games == 1 { "" } else { "s" },
        config.simulation.own_policy,
        config.opponent
    );

    let summary = SimulationRunner::new(config).run()?;
    println!(
        "Simulation complete: {} games → user {} | bot {} | draws {}",
        summary.games, summary.own_wins, summary.opponent_wins, summary.draws
    );
    println!(
        "Rounds resolved: {} | forfeited: {}",
        summary.rounds_resolved, summary.forfeits
    );
    if let Some(path) = summary.jsonl_path.as_ref() {
        println!("Game rows: {}", path.display());
    }

    Ok(())
}
