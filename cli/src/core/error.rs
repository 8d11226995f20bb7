//! # TechSupport Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used at the edges of the TechSupport
//! application. The responder itself has no failure path: every query yields
//! either a matched or a default response. Errors only arise while loading
//! configuration, building a vocabulary, or talking to the terminal.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `SupportError`: a `thiserror` enum for the specific failure kinds
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can attach context
//!
//! ## Examples
//!
//! ```rust,ignore
//! use anyhow::Context;
//! use techsupport::core::error::{Result, SupportError};
//!
//! fn check(defaults: &[String]) -> Result<()> {
//!     if defaults.is_empty() {
//!         return Err(SupportError::Vocabulary("no default responses".into()).into());
//!     }
//!     Ok(())
//! }
//!
//! let text = std::fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the TechSupport application.
#[derive(Error, Debug)]
pub enum SupportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file '{}' not found.", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Terminal I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
