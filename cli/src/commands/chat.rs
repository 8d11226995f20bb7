//! # TechSupport Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `techsupport chat`, the interactive support session. It builds
//! a `Responder` from the configured vocabulary, wires it to stdin/stdout
//! through a `SupportSystem` and runs until the user types the exit word or
//! closes the input stream.
//!
//! ## Examples
//!
//! ```bash
//! techsupport chat
//! techsupport chat --seed 42   # reproducible default replies
//! ```
//!
use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use techsupport::core::config::Config;
use techsupport::core::error::Result;
use techsupport::responder::Responder;
use techsupport::session::{SessionSettings, SupportSystem};
use tracing::info;

/// Arguments for `techsupport chat`.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Seed for the default-response picker. Without it replies vary per run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds the responder (seeded if requested) and runs a session on the
/// process's standard streams.
///
/// ## Returns
///
/// * `Result<()>`: `Err` if the configured vocabulary is unusable or the
///   terminal cannot be read or written.
pub fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let vocabulary = config.build_vocabulary();
    let settings = config.session_settings();

    let replies = match args.seed {
        Some(seed) => run_session(
            Responder::with_rng(vocabulary, StdRng::seed_from_u64(seed))?,
            settings,
        ),
        None => run_session(Responder::with_vocabulary(vocabulary)?, settings),
    }
    .context("Support session failed")?;

    info!("Chat finished after {} replies", replies);
    Ok(())
}

fn run_session<R: Rng>(responder: Responder<R>, settings: SessionSettings) -> Result<usize> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    SupportSystem::new(responder, settings).start(stdin.lock(), &mut stdout)
}
