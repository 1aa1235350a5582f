use std::io::BufRead;

use anyhow::Result;

use crate::tokens::normalize;
use crate::{Lexicon, Position, Suggester, Token, TokenProcessor};

pub struct SpellingError {
    source: String,
    token: String,
    word: String,
    pos: Position,
    suggestions: Vec<String>,
}

impl SpellingError {
    pub fn new(
        source: &str,
        token: String,
        word: String,
        pos: Position,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            source: source.to_string(),
            token,
            word,
            pos,
            suggestions,
        }
    }

    /// Name of the input the token came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The raw token, as found in the input.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The normalized word that was looked up.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

pub trait Checker {
    fn lexicon(&self) -> &Lexicon;

    fn suggester(&self) -> &Suggester;

    // Were all the words known?
    fn success(&self) -> Result<()>;

    fn handle_error(&mut self, error: &SpellingError) -> Result<()>;

    fn process<R: BufRead>(&mut self, reader: R, source: &str) -> Result<()> {
        let token_processor = TokenProcessor::new(reader, source);
        for token in token_processor {
            let token = token?;
            self.handle_token(source, token)?;
        }
        Ok(())
    }

    fn handle_token(&mut self, source: &str, token: Token) -> Result<()> {
        let word = normalize(&token.text);
        if word.is_empty() {
            return Ok(());
        }
        if self.lexicon().contains(&word) {
            return Ok(());
        }
        let suggestions = self.suggester().suggest(self.lexicon(), &word);
        let error = SpellingError::new(source, token.text, word, token.pos, suggestions);
        self.handle_error(&error)
    }
}

#[cfg(test)]
mod tests;
