use std::io::Write;

use anyhow::{bail, Result};

use spellsweep_core::{Checker, Lexicon, SpellingError, Suggester};

use crate::info_2;

/// Writes one report block per misspelling to the sink, in input order.
pub struct TextChecker<W: Write> {
    lexicon: Lexicon,
    suggester: Suggester,
    sink: W,
    num_errors: usize,
}

impl<W: Write> TextChecker<W> {
    pub fn new(lexicon: Lexicon, suggester: Suggester, sink: W) -> Self {
        Self {
            lexicon,
            suggester,
            sink,
            num_errors: 0,
        }
    }
}

impl<W: Write> Checker for TextChecker<W> {
    fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn suggester(&self) -> &Suggester {
        &self.suggester
    }

    fn handle_error(&mut self, error: &SpellingError) -> Result<()> {
        self.num_errors += 1;
        let pos = error.pos();
        writeln!(
            self.sink,
            "{}:{}:{}: unknown word: {}",
            error.source(),
            pos.line,
            pos.column,
            error.token()
        )?;
        for suggestion in error.suggestions() {
            writeln!(self.sink, "  {suggestion}")?;
        }
        writeln!(self.sink)?;
        Ok(())
    }

    fn success(&self) -> Result<()> {
        match self.num_errors {
            0 => {
                info_2!("Success! No spelling errors found");
                Ok(())
            }
            1 => bail!("Found just one tiny spelling error"),
            n => bail!("Found {n} spelling errors"),
        }
    }
}
