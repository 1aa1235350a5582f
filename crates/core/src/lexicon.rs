use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// The set of known words. Built once, read-only afterwards.
///
/// Lookups ignore case in both directions: entries are folded when
/// inserted, queries are folded in `contains`.
#[derive(Debug)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open '{}' for reading", path.display()))?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
            .with_context(|| format!("When reading lexicon from '{}'", path.display()))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            for word in line.split_ascii_whitespace() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = entries
            .into_iter()
            .map(|entry| entry.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
