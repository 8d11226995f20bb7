//! # TechSupport Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `techsupport` binary.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start an interactive session (the default command)
//! techsupport
//!
//! # One-shot reply with debug logging
//! techsupport -vv ask my computer crashes
//!
//! # Use a specific configuration file
//! techsupport --config ~/support.toml vocab --check
//! ```
//!
use clap::{Parser, Subcommand};
use techsupport::core::config;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "techsupport",
    about = "DodgySoft technical support responder",
    long_about = "Answers technical support questions from a fixed vocabulary of keywords.\n\
                  Runs an interactive session by default; see the subcommands for one-shot use.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of the discovered user/project files.
    #[arg(short, long, global = true, env = "TECHSUPPORT_CONFIG")]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive support session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print a single reply for the given words.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the recognized vocabulary.
    #[command(alias = "v")]
    Vocab(commands::vocab::VocabArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = config::load_config(cli.config.as_deref()).and_then(|cfg| {
        match cli
            .command
            .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()))
        {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
            Commands::Vocab(args) => commands::vocab::handle_vocab(args, &cfg),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
