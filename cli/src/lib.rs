//! # TechSupport Library
//!
//! File: cli/src/lib.rs
//!
//! A rule-based technical support responder. Input words are normalized
//! through a synonym table and matched against canned replies; when nothing
//! matches, a random default reply is given, never the same one twice in a
//! row.
//!
//! - `responder`: the `Responder` and its `Vocabulary`
//! - `input`: line reading and word normalization (`InputReader`, `WordSet`)
//! - `session`: the interactive loop (`SupportSystem`)
//! - `core`: configuration and error types
//!
//! The `techsupport` binary (`main.rs`) wraps these in a small CLI.

pub mod core;
pub mod input;
pub mod responder;
pub mod session;
