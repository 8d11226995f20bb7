//! # TechSupport Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The subcommands of the `techsupport` binary. Each module defines a clap
//! argument struct and a `handle_*` function taking those arguments plus the
//! loaded `Config`.
//!
//! - `chat`: interactive support session on the terminal (the default)
//! - `ask`: one-shot reply for words given on the command line
//! - `vocab`: lists the recognized vocabulary and checks it for dangling synonyms
//!

/// Interactive session on stdin/stdout.
pub mod chat;
/// One-shot reply.
pub mod ask;
/// Vocabulary listing and validation.
pub mod vocab;
