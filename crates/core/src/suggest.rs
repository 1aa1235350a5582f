use itertools::Itertools;

use crate::edits::{deletions, insertions, substitutions, transpositions};
use crate::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestMode {
    /// Every lexicon hit, in generation order. A candidate reachable
    /// through several edits appears once per hit.
    #[default]
    All,
    /// Keep the first occurrence of each candidate only.
    Unique,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Suggester {
    mode: SuggestMode,
}

impl Suggester {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_mode(mode: SuggestMode) -> Self {
        Self { mode }
    }

    /// Collect every known word one edit away from `word`, in generation
    /// order: transpositions, then insertions, then deletions, then
    /// substitutions.
    ///
    /// Returns an empty list when `word` is already known - correct words
    /// never get suggestions, and neither do case variants of a lexicon
    /// entry.
    pub fn suggest(&self, lexicon: &Lexicon, word: &str) -> Vec<String> {
        if lexicon.contains(word) {
            return Vec::new();
        }

        let candidates = transpositions(word)
            .into_iter()
            .chain(insertions(word))
            .chain(deletions(word))
            .chain(substitutions(word))
            .filter(|candidate| lexicon.contains(candidate));

        match self.mode {
            SuggestMode::All => candidates.collect(),
            SuggestMode::Unique => candidates.unique().collect(),
        }
    }
}
