//! # TechSupport Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the optional configuration that
//! customizes the support session and extends (or replaces) the built-in
//! vocabulary.
//!
//! ## Architecture
//!
//! Configuration sources, in order of precedence:
//! 1. An explicit file passed with `--config` (or `TECHSUPPORT_CONFIG`);
//!    when given, discovery of the other files is skipped
//! 2. Project-specific `.techsupport.toml` in the current directory or an
//!    ancestor (the search stops at a directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Built-in defaults
//!
//! Session texts from a higher-precedence file replace those below it.
//! Vocabulary tables are merged key by key and default responses are
//! concatenated.
//!
//! ## Examples
//!
//! ```toml
//! [session]
//! goodbye = "Thanks for calling."
//! exit_word = "quit"
//!
//! [vocabulary]
//! default_responses = ["Have you tried turning it off and on again?"]
//!
//! [vocabulary.synonyms]
//! printer = "printer"
//! printing = "printer"
//!
//! [vocabulary.responses]
//! printer = "Printers are beyond our help, I'm afraid."
//! ```
//!
use crate::core::error::{Result, SupportError};
use crate::responder::Vocabulary;
use crate::session::SessionSettings;
use anyhow::Context;
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Overrides for the session texts. Unset fields keep the built-in text.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub welcome: Option<String>,
    pub goodbye: Option<String>,
    /// Word that ends an interactive session.
    pub exit_word: Option<String>,
    pub prompt: Option<String>,
}

/// Additions to (or a replacement for) the built-in vocabulary.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Start from empty tables instead of the built-in vocabulary.
    #[serde(default)]
    pub replace_builtin: bool,
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    #[serde(default)]
    pub responses: HashMap<String, String>,
    #[serde(default)]
    pub default_responses: Vec<String>,
}

impl Config {
    /// Builds the vocabulary described by this configuration.
    pub fn build_vocabulary(&self) -> Vocabulary {
        let vocab_cfg = &self.vocabulary;
        let mut vocabulary = if vocab_cfg.replace_builtin {
            Vocabulary::empty()
        } else {
            Vocabulary::builtin()
        };
        // Input is lowercased before lookup, so configured words must be too.
        for (word, canonical) in &vocab_cfg.synonyms {
            vocabulary.add_synonym(word.trim().to_lowercase(), canonical.as_str());
        }
        for (canonical, text) in &vocab_cfg.responses {
            vocabulary.add_response(canonical.as_str(), text.as_str());
        }
        for text in &vocab_cfg.default_responses {
            vocabulary.add_default(text.as_str());
        }
        vocabulary
    }

    /// Session settings with configured overrides applied. The exit word is
    /// lowercased to match normalized input.
    pub fn session_settings(&self) -> SessionSettings {
        let defaults = SessionSettings::default();
        let session = &self.session;
        SessionSettings {
            welcome: session.welcome.clone().unwrap_or(defaults.welcome),
            goodbye: session.goodbye.clone().unwrap_or(defaults.goodbye),
            exit_word: session
                .exit_word
                .as_deref()
                .map(|word| word.trim().to_lowercase())
                .unwrap_or(defaults.exit_word),
            prompt: session.prompt.clone().unwrap_or(defaults.prompt),
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".techsupport.toml";
const USER_CONFIG_FILENAME: &str = "config.toml";

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read (after `~` expansion) and it
/// must exist. Otherwise the user and project files are discovered and
/// merged; missing files are not an error.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = match explicit {
        Some(raw_path) => {
            let path = expand_path(raw_path);
            if !path.is_file() {
                return Err(SupportError::ConfigNotFound { path }.into());
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(&path)?
        }
        None => {
            let user_config = load_user_config()?;
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let project_config = load_project_config(&current_dir)?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "DodgySoft", "techsupport") {
        let config_path = proj_dirs.config_dir().join(USER_CONFIG_FILENAME);
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in {} or its ancestors.",
            PROJECT_CONFIG_FILENAME,
            start.display()
        );
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Layers `project` over `user`.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };

    let session = SessionConfig {
        welcome: project.session.welcome.or(user.session.welcome),
        goodbye: project.session.goodbye.or(user.session.goodbye),
        exit_word: project.session.exit_word.or(user.session.exit_word),
        prompt: project.session.prompt.or(user.session.prompt),
    };

    let mut vocabulary = user.vocabulary;
    vocabulary.replace_builtin |= project.vocabulary.replace_builtin;
    vocabulary.synonyms.extend(project.vocabulary.synonyms);
    vocabulary.responses.extend(project.vocabulary.responses);
    vocabulary
        .default_responses
        .extend(project.vocabulary.default_responses);

    Config {
        session,
        vocabulary,
    }
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating configuration...");
    if let Some(exit_word) = &config.session.exit_word {
        let trimmed = exit_word.trim();
        if trimmed.is_empty() {
            return Err(SupportError::Config("session.exit_word must not be empty".to_string()).into());
        }
        if trimmed.split_whitespace().count() != 1 {
            return Err(SupportError::Config(format!(
                "session.exit_word must be a single word, got '{}'",
                exit_word
            ))
            .into());
        }
    }
    for word in config.vocabulary.synonyms.keys() {
        if word.trim().split_whitespace().count() != 1 {
            return Err(SupportError::Config(format!(
                "vocabulary.synonyms key '{}' must be a single word",
                word
            ))
            .into());
        }
    }
    if config.vocabulary.replace_builtin && config.vocabulary.default_responses.is_empty() {
        return Err(SupportError::Config(
            "vocabulary.replace_builtin requires at least one entry in vocabulary.default_responses"
                .to_string(),
        )
        .into());
    }
    debug!("Configuration validation successful.");
    Ok(())
}
