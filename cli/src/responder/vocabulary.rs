//! # Responder Vocabulary
//!
//! File: cli/src/responder/vocabulary.rs
//!
//! ## Overview
//!
//! A `Vocabulary` bundles the three lookup tables the responder works from:
//! - **synonyms**: surface word → canonical key
//! - **responses**: canonical key → reply text
//! - **defaults**: fallback replies used when nothing is recognized
//!
//! Lookups are two-stage: a word is first normalized through the synonym
//! table, then the canonical key is looked up in the response table. A word
//! whose canonical key has no reply is treated as unrecognized. Such entries
//! are reported by `dangling_synonyms()` so configuration mistakes show up as
//! warnings instead of silently swallowing words.
//!
use super::builtin;
use crate::core::error::{Result, SupportError};
use std::collections::HashMap;

/// The synonym, response and default-response tables used by a `Responder`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    synonyms: HashMap<String, String>,
    responses: HashMap<String, String>,
    defaults: Vec<String>,
}

impl Vocabulary {
    /// The vocabulary shipped with the application.
    pub fn builtin() -> Self {
        Self {
            synonyms: builtin::SYNONYMS
                .iter()
                .map(|(word, key)| (word.to_string(), key.to_string()))
                .collect(),
            responses: builtin::RESPONSES
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
            defaults: builtin::DEFAULT_RESPONSES
                .iter()
                .map(|text| text.to_string())
                .collect(),
        }
    }

    /// A vocabulary with no entries. Not usable by a `Responder` until at
    /// least one default response is added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers `word` as a surface form of `canonical`, replacing any
    /// previous mapping for `word`.
    pub fn add_synonym(&mut self, word: impl Into<String>, canonical: impl Into<String>) {
        self.synonyms.insert(word.into(), canonical.into());
    }

    /// Sets the reply for a canonical key, replacing any previous reply.
    pub fn add_response(&mut self, canonical: impl Into<String>, text: impl Into<String>) {
        self.responses.insert(canonical.into(), text.into());
    }

    /// Appends a fallback reply.
    pub fn add_default(&mut self, text: impl Into<String>) {
        self.defaults.push(text.into());
    }

    /// Merges `other` into `self`. Entries from `other` win on key
    /// collisions; default responses are appended.
    pub fn extend(&mut self, other: Vocabulary) {
        self.synonyms.extend(other.synonyms);
        self.responses.extend(other.responses);
        self.defaults.extend(other.defaults);
    }

    /// Canonical key for `word`, if the word is known.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        self.synonyms.get(word).map(String::as_str)
    }

    /// Reply registered for a canonical key.
    pub fn response(&self, canonical: &str) -> Option<&str> {
        self.responses.get(canonical).map(String::as_str)
    }

    /// Full two-stage lookup: word → canonical key → reply.
    pub fn resolve(&self, word: &str) -> Option<&str> {
        self.canonical(word).and_then(|key| self.response(key))
    }

    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    /// Words that resolve to a reply, paired with their canonical key and
    /// sorted by word.
    pub fn recognized_words(&self) -> Vec<(&str, &str)> {
        let mut words: Vec<(&str, &str)> = self
            .synonyms
            .iter()
            .filter(|(_, key)| self.responses.contains_key(key.as_str()))
            .map(|(word, key)| (word.as_str(), key.as_str()))
            .collect();
        words.sort_unstable();
        words
    }

    /// Synonyms whose canonical key has no reply, sorted by word. These words
    /// fall through to the default responses.
    pub fn dangling_synonyms(&self) -> Vec<(&str, &str)> {
        let mut dangling: Vec<(&str, &str)> = self
            .synonyms
            .iter()
            .filter(|(_, key)| !self.responses.contains_key(key.as_str()))
            .map(|(word, key)| (word.as_str(), key.as_str()))
            .collect();
        dangling.sort_unstable();
        dangling
    }

    /// Checks that the vocabulary can back a `Responder`: at least one
    /// default reply, and no empty words, keys or reply texts.
    ///
    /// Dangling synonyms are not an error here; see `dangling_synonyms()`.
    pub fn validate(&self) -> Result<()> {
        if self.defaults.is_empty() {
            return Err(SupportError::Vocabulary(
                "at least one default response is required".to_string(),
            )
            .into());
        }
        if self.defaults.iter().any(|text| text.is_empty()) {
            return Err(
                SupportError::Vocabulary("default responses must not be empty".to_string()).into(),
            );
        }
        for (word, key) in &self.synonyms {
            if word.is_empty() || key.is_empty() {
                return Err(SupportError::Vocabulary(format!(
                    "synonym entries must not be empty (word: '{}', canonical: '{}')",
                    word, key
                ))
                .into());
            }
        }
        for (key, text) in &self.responses {
            if key.is_empty() {
                return Err(
                    SupportError::Vocabulary("response keys must not be empty".to_string()).into(),
                );
            }
            if text.is_empty() {
                return Err(SupportError::Vocabulary(format!(
                    "response for '{}' must not be empty",
                    key
                ))
                .into());
            }
        }
        Ok(())
    }
}
