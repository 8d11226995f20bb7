//! # TechSupport Vocabulary Command
//!
//! File: cli/src/commands/vocab.rs
//!
//! ## Overview
//!
//! Implements `techsupport vocab`, which prints the effective vocabulary
//! (built-in plus configured entries): every recognized word with its
//! canonical key, the number of default responses, and any synonyms whose
//! canonical key has no response.
//!
//! With `--check` the command fails when such dangling synonyms exist,
//! which makes it usable as a lint step for custom vocabulary files.
//!
//! ## Examples
//!
//! ```bash
//! techsupport vocab
//! techsupport --config support.toml vocab --check
//! ```
//!
//! Example output:
//!
//! ```text
//! Recognized words (24):
//!
//!   afternoon    -> afternoon
//!   bluej        -> bluej
//!   ...
//!
//! Default responses: 12
//! ```
//!
use clap::Parser;
use techsupport::core::config::Config;
use techsupport::core::error::{Result, SupportError};
use techsupport::responder::Vocabulary;
use tracing::{info, warn};

/// Arguments for `techsupport vocab`.
#[derive(Parser, Debug)]
pub struct VocabArgs {
    /// Exit with an error if any synonym points at a canonical key without a response.
    #[arg(long)]
    pub check: bool,
}

pub fn handle_vocab(args: VocabArgs, config: &Config) -> Result<()> {
    info!("Handling vocab command with args: {:?}", args);
    let vocabulary = config.build_vocabulary();
    vocabulary.validate()?;

    print!("{}", render_vocabulary(&vocabulary));

    let dangling = vocabulary.dangling_synonyms();
    if !dangling.is_empty() {
        for (word, key) in &dangling {
            warn!("Synonym '{}' maps to '{}', which has no response.", word, key);
        }
        if args.check {
            return Err(SupportError::Vocabulary(format!(
                "{} synonym(s) map to canonical keys without a response",
                dangling.len()
            ))
            .into());
        }
    }
    Ok(())
}

/// Formats the vocabulary listing as printed by the command.
fn render_vocabulary(vocabulary: &Vocabulary) -> String {
    let recognized = vocabulary.recognized_words();
    let dangling = vocabulary.dangling_synonyms();
    let width = recognized
        .iter()
        .chain(dangling.iter())
        .map(|(word, _)| word.len())
        .max()
        .unwrap_or(0);

    let mut out = format!("Recognized words ({}):\n\n", recognized.len());
    for (word, key) in &recognized {
        out.push_str(&format!("  {:<width$} -> {}\n", word, key, width = width));
    }
    if !dangling.is_empty() {
        out.push_str(&format!("\nUnmatched synonyms ({}):\n\n", dangling.len()));
        for (word, key) in &dangling {
            out.push_str(&format!(
                "  {:<width$} -> {} (no response)\n",
                word,
                key,
                width = width
            ));
        }
    }
    out.push_str(&format!(
        "\nDefault responses: {}\n",
        vocabulary.defaults().len()
    ));
    out
}
