//! Non-repeating random selection of default responses.
//!
//! File: cli/src/responder/picker.rs

use rand::Rng;

/// Remembers the last index handed out so the same default response is
/// never chosen twice in a row.
#[derive(Debug, Clone, Default)]
pub(crate) struct DefaultPicker {
    last: Option<usize>,
}

impl DefaultPicker {
    /// Draws an index in `0..len`, redrawing while it equals the previous
    /// pick. With a single candidate the distinctness check is skipped.
    ///
    /// Returns `None` only when `len` is zero.
    pub(crate) fn pick<R: Rng>(&mut self, len: usize, rng: &mut R) -> Option<usize> {
        let index = match len {
            0 => return None,
            1 => 0,
            _ => loop {
                let candidate = rng.gen_range(0..len);
                if self.last != Some(candidate) {
                    break candidate;
                }
            },
        };
        self.last = Some(index);
        Some(index)
    }

    pub(crate) fn last(&self) -> Option<usize> {
        self.last
    }
}
