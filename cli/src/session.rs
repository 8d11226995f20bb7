//! # Support Session
//!
//! File: cli/src/session.rs
//!
//! ## Overview
//!
//! `SupportSystem` runs an interactive support conversation: it prints a
//! welcome banner, then repeatedly reads a line, hands its words to the
//! `Responder` and prints the reply. The session ends when the input
//! contains the exit word (`bye` by default) or the input stream closes, at
//! which point a goodbye line is printed.
//!
//! The loop is generic over `BufRead`/`Write` so it can drive a terminal or
//! in-memory buffers in tests.
//!
use crate::core::error::{Result, SupportError};
use crate::input::InputReader;
use crate::responder::Responder;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const DEFAULT_WELCOME: &str = "Welcome to the DodgySoft Technical Support System.\n\
                                   \n\
                                   Please tell us about your problem.\n\
                                   We will assist you with any problem you might have.\n\
                                   Please type 'bye' to exit our system.";
pub const DEFAULT_GOODBYE: &str = "Nice talking to you. Bye...";
pub const DEFAULT_EXIT_WORD: &str = "bye";
pub const DEFAULT_PROMPT: &str = "> ";

/// Texts and keywords that shape a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub welcome: String,
    pub goodbye: String,
    /// Lowercase word that ends the session when it appears in the input.
    pub exit_word: String,
    pub prompt: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.to_string(),
            goodbye: DEFAULT_GOODBYE.to_string(),
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// An interactive support conversation backed by a `Responder`.
pub struct SupportSystem<R = ThreadRng> {
    responder: Responder<R>,
    settings: SessionSettings,
}

impl<R: Rng> SupportSystem<R> {
    pub fn new(responder: Responder<R>, mut settings: SessionSettings) -> Self {
        // Input words are lowercased, so the exit word must be too.
        settings.exit_word = settings.exit_word.trim().to_lowercase();
        Self {
            responder,
            settings,
        }
    }

    /// Runs the conversation until the exit word or end of input.
    ///
    /// Returns the number of replies given.
    pub fn start<B: BufRead, W: Write>(&mut self, input: B, output: &mut W) -> Result<usize> {
        info!("Starting support session");
        let mut reader = InputReader::new(input);
        writeln!(output, "{}", self.settings.welcome).map_err(SupportError::from)?;

        let mut replies = 0;
        loop {
            write!(output, "{}", self.settings.prompt).map_err(SupportError::from)?;
            output.flush().map_err(SupportError::from)?;

            let Some(words) = reader.get_input()? else {
                // Keep the goodbye on its own line after an unterminated prompt.
                writeln!(output).map_err(SupportError::from)?;
                debug!("Input closed, ending session");
                break;
            };
            if words.contains(&self.settings.exit_word) {
                debug!("Exit word received, ending session");
                break;
            }

            let reply = self.responder.generate_response(&words);
            writeln!(output, "{}", reply).map_err(SupportError::from)?;
            replies += 1;
        }

        writeln!(output, "{}", self.settings.goodbye).map_err(SupportError::from)?;
        info!(replies, "Support session finished");
        Ok(replies)
    }

    pub fn responder(&self) -> &Responder<R> {
        &self.responder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::Vocabulary;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn system() -> SupportSystem<StdRng> {
        let responder =
            Responder::with_rng(Vocabulary::builtin(), StdRng::seed_from_u64(5)).unwrap();
        SupportSystem::new(responder, SessionSettings::default())
    }

    fn run(input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let replies = system().start(Cursor::new(input), &mut out).unwrap();
        (replies, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_answers_until_bye() {
        let (replies, out) = run("My computer crashes\nit is too slow\nok bye now\nlinux\n");
        assert_eq!(replies, 2);
        assert!(out.starts_with(DEFAULT_WELCOME));
        assert!(out.contains("Well, it never crashes on our system."));
        assert!(out.contains("I think this has to do with your hardware."));
        assert!(!out.contains("We take Linux support very seriously."));
        assert!(out.trim_end().ends_with(DEFAULT_GOODBYE));
    }

    #[test]
    fn test_exit_word_is_case_insensitive_input() {
        let (replies, out) = run("BYE\n");
        assert_eq!(replies, 0);
        assert!(out.contains(DEFAULT_GOODBYE));
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let (replies, out) = run("hello\n");
        assert_eq!(replies, 1);
        assert!(out.contains("Hi I am great what about yourself"));
        assert!(out.trim_end().ends_with(DEFAULT_GOODBYE));
    }

    #[test]
    fn test_blank_line_gets_default_reply() {
        let mut system = system();
        let mut out = Vec::new();
        system.start(Cursor::new("\nbye\n"), &mut out).unwrap();
        assert!(system.responder().last_default_index().is_some());
    }

    #[test]
    fn test_custom_settings_are_used() {
        let responder =
            Responder::with_rng(Vocabulary::builtin(), StdRng::seed_from_u64(5)).unwrap();
        let settings = SessionSettings {
            welcome: "Support desk.".into(),
            goodbye: "Later.".into(),
            exit_word: "quit".into(),
            prompt: "? ".into(),
        };
        let mut out = Vec::new();
        let replies = SupportSystem::new(responder, settings)
            .start(Cursor::new("bye\nquit\n"), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(replies, 1);
        assert!(out.starts_with("Support desk.\n? "));
        assert!(out.ends_with("Later.\n"));
    }

    #[test]
    fn test_mixed_case_exit_word_still_ends_session() {
        let responder =
            Responder::with_rng(Vocabulary::builtin(), StdRng::seed_from_u64(5)).unwrap();
        let settings = SessionSettings {
            exit_word: " Bye ".into(),
            ..SessionSettings::default()
        };
        let mut out = Vec::new();
        let replies = SupportSystem::new(responder, settings)
            .start(Cursor::new("bye
linux
"), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(replies, 0);
        assert!(!out.contains("We take Linux support very seriously."));
        assert!(out.ends_with("Nice talking to you. Bye...\n"));
    }
}
