#[macro_use]
extern crate lazy_static;

pub mod checker;
pub mod edits;
pub mod lexicon;
pub mod suggest;
pub mod tokens;

pub use checker::{Checker, SpellingError};
pub use lexicon::Lexicon;
pub use suggest::{SuggestMode, Suggester};
pub use tokens::{normalize, Position, Token, TokenProcessor};
