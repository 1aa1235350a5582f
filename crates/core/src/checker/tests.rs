use std::io::{BufReader, Cursor};

use anyhow::bail;

use super::*;

struct CollectingChecker {
    lexicon: Lexicon,
    suggester: Suggester,
    errors: Vec<(String, Position, Vec<String>)>,
}

impl CollectingChecker {
    fn new(known: &[&str]) -> Self {
        Self {
            lexicon: Lexicon::from_words(known),
            suggester: Suggester::new(),
            errors: Vec::new(),
        }
    }
}

impl Checker for CollectingChecker {
    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn suggester(&self) -> &Suggester {
        &self.suggester
    }

    fn success(&self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            bail!("Found {} spelling errors", self.errors.len())
        }
    }

    fn handle_error(&mut self, error: &SpellingError) -> Result<()> {
        self.errors.push((
            error.token().to_string(),
            error.pos(),
            error.suggestions().to_vec(),
        ));
        Ok(())
    }
}

fn check(contents: &str, known: &[&str]) -> CollectingChecker {
    let mut checker = CollectingChecker::new(known);
    let file = Cursor::new(contents.as_bytes());
    let reader = BufReader::new(file);
    checker.process(reader, "input.txt").unwrap();
    checker
}

#[test]
fn test_correct_words_are_silent() {
    let checker = check("The quick fox\n", &["the", "quick", "fox"]);

    assert!(checker.errors.is_empty());
    assert!(checker.success().is_ok());
}

#[test]
fn test_unknown_word_is_reported_with_position_and_suggestions() {
    let checker = check("The qick fox\n", &["the", "quick", "fox"]);

    assert_eq!(checker.errors.len(), 1);
    let (token, pos, suggestions) = &checker.errors[0];
    assert_eq!(token, "qick");
    assert_eq!(pos, &Position { line: 1, column: 5 });
    assert!(suggestions.contains(&"quick".to_string()));
    assert!(checker.success().is_err());
}

#[test]
fn test_the_raw_token_is_reported_not_the_word() {
    let checker = check("qick,\n", &["quick"]);

    assert_eq!(checker.errors[0].0, "qick,");
}

#[test]
fn test_punctuation_only_tokens_are_skipped() {
    let checker = check("hello -- world\n", &["hello", "world"]);

    assert!(checker.errors.is_empty());
}

#[test]
fn test_case_variants_are_not_flagged() {
    let checker = check("Hello HELLO hello\n", &["hello"]);

    assert!(checker.errors.is_empty());
}

#[test]
fn test_unknown_word_without_neighbors_is_still_reported() {
    let checker = check("xyzzy\n", &["hello"]);

    assert_eq!(checker.errors.len(), 1);
    let (_, _, suggestions) = &checker.errors[0];
    assert!(suggestions.is_empty());
}

#[test]
fn test_empty_input_produces_no_reports() {
    let checker = check("", &["hello"]);

    assert!(checker.errors.is_empty());
    assert!(checker.success().is_ok());
}

#[test]
fn test_errors_come_in_input_order() {
    let checker = check("qick fxo\nteh\n", &["the", "quick", "fox"]);

    let tokens: Vec<_> = checker
        .errors
        .iter()
        .map(|(token, _, _)| token.as_str())
        .collect();
    assert_eq!(tokens, vec!["qick", "fxo", "teh"]);
}
