mod json;
mod text;

pub use json::JsonChecker;
pub use text::TextChecker;
