//! # TechSupport Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! The `Responder` maps a set of input words to a single reply. Each word is
//! normalized through the synonym table; the first word whose canonical key
//! has a registered reply wins. When nothing matches, a random default reply
//! is returned, never the same one twice in a row.
//!
//! ## Architecture
//!
//! - `vocabulary`: the synonym, response and default tables (`Vocabulary`)
//! - `picker`: non-repeating random selection over the default list
//! - `builtin`: the data behind `Vocabulary::builtin()`
//!
//! The only mutable state is the index of the last default reply, held by
//! the picker and reset only when a new `Responder` is built. Queries take
//! `&mut self`, so a single instance cannot be used from two threads at once
//! without an external lock.
//!
//! ## Examples
//!
//! ```rust
//! use techsupport::responder::Responder;
//!
//! let mut responder = Responder::new();
//! let reply = responder.generate_response(["my", "computer", "crashes"]);
//! assert!(reply.starts_with("Well, it never crashes on our system"));
//!
//! // Nothing recognized: one of the default replies.
//! let fallback = responder.generate_response(["foo", "bar"]);
//! assert!(!fallback.is_empty());
//! ```
//!
mod builtin;
mod picker;
pub mod vocabulary;

pub use vocabulary::Vocabulary;

use crate::core::error::Result;
use picker::DefaultPicker;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, warn};

/// Generates replies from input words using a `Vocabulary`.
///
/// The random source is a type parameter so callers can supply a seeded RNG
/// for reproducible default replies. `Responder::new()` uses the thread-local
/// RNG.
#[derive(Debug)]
pub struct Responder<R = ThreadRng> {
    vocabulary: Vocabulary,
    picker: DefaultPicker,
    rng: R,
}

impl Responder<ThreadRng> {
    /// Builds a responder over the built-in vocabulary.
    pub fn new() -> Self {
        let vocabulary = Vocabulary::builtin();
        report_dangling(&vocabulary);
        debug!(
            synonyms = vocabulary.synonym_count(),
            responses = vocabulary.response_count(),
            defaults = vocabulary.defaults().len(),
            "Built responder from built-in vocabulary"
        );
        Self {
            vocabulary,
            picker: DefaultPicker::default(),
            rng: rand::thread_rng(),
        }
    }

    /// Builds a responder over a custom vocabulary.
    ///
    /// Fails if the vocabulary has no default responses or contains empty
    /// entries (see `Vocabulary::validate`).
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Result<Self> {
        Self::with_rng(vocabulary, rand::thread_rng())
    }
}

/// Warns about each synonym whose canonical key has no reply and returns
/// how many there are.
fn report_dangling(vocabulary: &Vocabulary) -> usize {
    let dangling = vocabulary.dangling_synonyms();
    for (word, key) in &dangling {
        warn!(
            "Synonym '{}' maps to '{}', which has no response; the word will be treated as unrecognized.",
            word, key
        );
    }
    dangling.len()
}

impl Default for Responder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Responder<R> {
    /// Builds a responder over a custom vocabulary and random source.
    ///
    /// Synonyms pointing at a canonical key without a reply are logged as
    /// warnings; those words behave as unrecognized.
    pub fn with_rng(vocabulary: Vocabulary, rng: R) -> Result<Self> {
        vocabulary.validate()?;
        report_dangling(&vocabulary);
        debug!(
            synonyms = vocabulary.synonym_count(),
            responses = vocabulary.response_count(),
            defaults = vocabulary.defaults().len(),
            "Built responder"
        );
        Ok(Self {
            vocabulary,
            picker: DefaultPicker::default(),
            rng,
        })
    }

    /// Returns the reply for the first recognized word, in iteration order,
    /// or a default reply if no word is recognized.
    ///
    /// `WordSet` iterates in order of first appearance, so with several
    /// recognized words the earliest one in the input line wins.
    pub fn generate_response<I, S>(&mut self, words: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if let Some(reply) = self.vocabulary.resolve(word) {
                debug!(word, canonical = ?self.vocabulary.canonical(word), "Matched input word");
                return reply.to_string();
            }
        }
        self.pick_default_response()
    }

    fn pick_default_response(&mut self) -> String {
        let defaults = self.vocabulary.defaults();
        let index = self.picker.pick(defaults.len(), &mut self.rng);
        debug!(?index, "No input word recognized, using default response");
        // Construction guarantees a non-empty default list.
        index
            .and_then(|i| defaults.get(i))
            .cloned()
            .unwrap_or_default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Index of the last default reply handed out, `None` before the first
    /// fallback.
    pub fn last_default_index(&self) -> Option<usize> {
        self.picker.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn seeded(vocabulary: Vocabulary) -> Responder<StdRng> {
        Responder::with_rng(vocabulary, StdRng::seed_from_u64(99)).unwrap()
    }

    #[test]
    fn test_recognized_word_wins() {
        let mut responder = Responder::new();
        let reply = responder.generate_response(["crashes"]);
        assert!(reply.starts_with("Well, it never crashes on our system."));
        assert_eq!(responder.last_default_index(), None);
    }

    #[test]
    fn test_synonym_resolves_like_canonical() {
        let mut responder = Responder::new();
        let via_synonym = responder.generate_response(["hey"]);
        let direct = responder.generate_response(["hello"]);
        assert_eq!(via_synonym, direct);
        assert_eq!(direct, "Hi I am great what about yourself");
    }

    #[test]
    fn test_first_recognized_word_in_order_wins() {
        let mut responder = Responder::new();
        let reply = responder.generate_response(["well", "linux", "crashes"]);
        assert!(reply.starts_with("We take Linux support very seriously."));
        let reply = responder.generate_response(["well", "crashes", "linux"]);
        assert!(reply.starts_with("Well, it never crashes"));
    }

    #[test]
    fn test_accepts_hash_sets() {
        let mut responder = Responder::new();
        let words: HashSet<String> = ["memory".to_string()].into_iter().collect();
        assert!(responder
            .generate_response(&words)
            .contains("specified memory requirements are 1.5 giga byte"));
    }

    #[test]
    fn test_unrecognized_falls_back_to_default() {
        let mut responder = seeded(Vocabulary::builtin());
        let reply = responder.generate_response(["foo", "bar"]);
        assert!(!reply.is_empty());
        assert!(responder.vocabulary().defaults().contains(&reply));
        assert!(responder.last_default_index().is_some());
    }

    #[test]
    fn test_empty_input_falls_back_to_default() {
        let mut responder = seeded(Vocabulary::builtin());
        let reply = responder.generate_response(Vec::<String>::new());
        assert!(responder.vocabulary().defaults().contains(&reply));
    }

    #[test]
    fn test_defaults_never_repeat_back_to_back() {
        let mut responder = seeded(Vocabulary::builtin());
        let mut previous = responder.generate_response(["foo"]);
        for _ in 0..500 {
            let next = responder.generate_response(["foo"]);
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn test_matches_do_not_touch_default_state() {
        let mut responder = seeded(Vocabulary::builtin());
        responder.generate_response(["foo"]);
        let before = responder.last_default_index();
        responder.generate_response(["bug"]);
        assert_eq!(responder.last_default_index(), before);
    }

    #[test]
    fn test_single_default_repeats_without_looping() {
        let mut vocab = Vocabulary::empty();
        vocab.add_default("Only this.");
        let mut responder = seeded(vocab);
        for _ in 0..50 {
            assert_eq!(responder.generate_response(["anything"]), "Only this.");
        }
    }

    #[test]
    fn test_dangling_synonym_falls_through() {
        let mut vocab = Vocabulary::empty();
        vocab.add_synonym("printer", "printing");
        vocab.add_default("Tell me more.");
        let mut responder = seeded(vocab);
        assert_eq!(responder.generate_response(["printer"]), "Tell me more.");
    }

    #[test]
    fn test_dangling_synonyms_are_reported() {
        assert_eq!(report_dangling(&Vocabulary::builtin()), 0);

        let mut vocab = Vocabulary::builtin();
        vocab.add_synonym("printing", "printer");
        assert_eq!(report_dangling(&vocab), 1);
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        let result = Responder::with_vocabulary(Vocabulary::empty());
        assert!(result.is_err());
    }
}
