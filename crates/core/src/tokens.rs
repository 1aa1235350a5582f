use std::collections::VecDeque;
use std::io::{BufRead, Lines};

use anyhow::{anyhow, Result};
use regex::Regex;
use serde::Serialize;

lazy_static! {
    // Everything outside this class is stripped before lookup
    static ref NON_WORD_RE: Regex =
        Regex::new("[^a-zA-Z0-9]").expect("syntax error in static regex");
}

/// Strip every non-alphanumeric character and fold the rest to lowercase.
///
/// The result may be empty - such tokens are never checked.
pub fn normalize(token: &str) -> String {
    NON_WORD_RE.replace_all(token, "").to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Position,
}

/// Splits a text stream into whitespace-delimited tokens, keeping track
/// of 1-based line and column numbers.
///
/// Columns assume exactly one delimiter between tokens: a run of several
/// delimiters does not advance the column any further.
pub struct TokenProcessor<R: BufRead> {
    lines: Lines<R>,
    source: String,
    line_number: usize,
    pending: VecDeque<Token>,
}

impl<R: BufRead> TokenProcessor<R> {
    pub fn new(reader: R, source: &str) -> Self {
        Self {
            lines: reader.lines(),
            source: source.to_string(),
            line_number: 0,
            pending: VecDeque::new(),
        }
    }

    fn tokenize_line(&mut self, line: &str) {
        let mut column = 1;
        for raw in line.split_ascii_whitespace() {
            self.pending.push_back(Token {
                text: raw.to_string(),
                pos: Position {
                    line: self.line_number,
                    column,
                },
            });
            column += raw.chars().count() + 1;
        }
    }
}

impl<R: BufRead> Iterator for TokenProcessor<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(Ok(token));
            }
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(anyhow!(
                        "When reading line from '{}': {}",
                        self.source,
                        e
                    )))
                }
            };
            self.line_number += 1;
            self.tokenize_line(&line);
        }
    }
}
