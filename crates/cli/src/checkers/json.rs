use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::Serialize;

use spellsweep_core::{Checker, Lexicon, SpellingError, Suggester};

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Range {
    line: usize,
    start_column: usize,
    end_column: usize,
}

#[derive(Debug, Serialize)]
struct Error {
    word: String,
    range: Range,
    suggestions: Vec<String>,
}

/// Collects errors per source and prints them as one JSON document at the
/// end of the run.
pub struct JsonChecker {
    lexicon: Lexicon,
    suggester: Suggester,
    errors: BTreeMap<String, Vec<Error>>,
}

impl JsonChecker {
    pub fn new(lexicon: Lexicon, suggester: Suggester) -> Self {
        Self {
            lexicon,
            suggester,
            errors: BTreeMap::new(),
        }
    }
}

impl Checker for JsonChecker {
    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn suggester(&self) -> &Suggester {
        &self.suggester
    }

    fn handle_error(&mut self, error: &SpellingError) -> Result<()> {
        let pos = error.pos();
        let start_column = pos.column;
        let end_column = start_column + error.token().chars().count() - 1;
        let range = Range {
            line: pos.line,
            start_column,
            end_column,
        };
        let error_entry = Error {
            word: error.token().to_string(),
            range,
            suggestions: error.suggestions().to_vec(),
        };
        let entry = self.errors.entry(error.source().to_string());
        entry.or_default().push(error_entry);
        Ok(())
    }

    fn success(&self) -> Result<()> {
        let json = serde_json::to_string(&self.errors).expect("errors should be serializable");
        println!("{json}");
        if self.errors.is_empty() {
            Ok(())
        } else {
            bail!("Found some errors")
        }
    }
}
