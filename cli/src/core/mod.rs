//! # TechSupport Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the library and the `techsupport` binary:
//! - `config`: configuration loading, merging and validation
//! - `error`: the `SupportError` type and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use techsupport::core::config; // For loading configuration
//! use techsupport::core::error::{Result, SupportError}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
