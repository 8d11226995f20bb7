//! # Input Reader
//!
//! File: cli/src/input.rs
//!
//! ## Overview
//!
//! Turns a line of user text into the set of words the responder works on.
//! A line is trimmed, lowercased and split on whitespace; repeated words are
//! dropped, keeping the first occurrence. The resulting `WordSet` iterates in
//! order of first appearance, which is what makes "first recognized word
//! wins" deterministic.
//!
use crate::core::error::{Result, SupportError};
use std::io::BufRead;
use tracing::trace;

/// Ordered set of distinct words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: Vec<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw line of user input: trim, lowercase, split on
    /// whitespace, drop duplicates.
    pub fn parse(line: &str) -> Self {
        line.trim().to_lowercase().split_whitespace().collect()
    }

    /// Adds `word` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.contains(&word) {
            return false;
        }
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = WordSet::new();
        for word in iter {
            set.insert(word);
        }
        set
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Reads lines of user input and splits them into `WordSet`s.
///
/// Lines are decoded lossily: invalid UTF-8 becomes U+FFFD instead of
/// ending the session.
pub struct InputReader<B> {
    source: B,
    line: Vec<u8>,
}

impl<B: BufRead> InputReader<B> {
    pub fn new(source: B) -> Self {
        Self {
            source,
            line: Vec::new(),
        }
    }

    /// Reads one line and returns its words, or `None` at end of input.
    pub fn get_input(&mut self) -> Result<Option<WordSet>> {
        self.line.clear();
        let read = self
            .source
            .read_until(b'\n', &mut self.line)
            .map_err(SupportError::from)?;
        if read == 0 {
            trace!("End of input reached");
            return Ok(None);
        }
        let words = WordSet::parse(&String::from_utf8_lossy(&self.line));
        trace!(?words, "Read input line");
        Ok(Some(words))
    }
}
