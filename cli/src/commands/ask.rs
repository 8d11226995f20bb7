//! # TechSupport Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! Implements `techsupport ask <WORDS>...`: normalizes the given words the
//! same way interactive input is normalized and prints a single reply.
//!
//! ```bash
//! techsupport ask my linux box crashes
//! techsupport ask --seed 7 something unusual
//! ```
//!
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use techsupport::core::config::Config;
use techsupport::core::error::Result;
use techsupport::input::WordSet;
use techsupport::responder::Responder;
use tracing::{debug, info};

/// Arguments for `techsupport ask`.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Words describing the problem.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Seed for the default-response picker.
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let words = WordSet::parse(&args.words.join(" "));
    debug!(?words, "Normalized question");

    let vocabulary = config.build_vocabulary();
    let reply = match args.seed {
        Some(seed) => {
            Responder::with_rng(vocabulary, StdRng::seed_from_u64(seed))?.generate_response(&words)
        }
        None => Responder::with_vocabulary(vocabulary)?.generate_response(&words),
    };

    println!("{}", reply);
    Ok(())
}
